use serde::Serialize;

use crate::{
    config::{ACE_HIGH_LIMIT, BLACKJACK},
    deck::{Card, Rank},
};

/// Points for `card` given the hand total before it.
///
/// An ace is 11 unless the running total already exceeds 10, then 1. Earlier
/// aces are never revalued, so `A A K` scores 22.
pub fn card_value(card: &Card, total_so_far: u16) -> u16 {
    match card.rank {
        Rank::Ace => {
            if total_so_far > ACE_HIGH_LIMIT {
                1
            } else {
                11
            }
        }
        Rank::Two => 2,
        Rank::Three => 3,
        Rank::Four => 4,
        Rank::Five => 5,
        Rank::Six => 6,
        Rank::Seven => 7,
        Rank::Eight => 8,
        Rank::Nine => 9,
        Rank::Ten | Rank::Jack | Rank::Queen | Rank::King => 10,
    }
}

pub fn hand_value(cards: &[Card]) -> u16 {
    cards
        .iter()
        .fold(0, |total, card| total + card_value(card, total))
}

pub fn is_blackjack(value: u16) -> bool {
    value == BLACKJACK
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum Participant {
    Player,
    Dealer,
}

/// Cards held by one participant. Only ever grows.
#[derive(Clone, Debug, Serialize)]
pub struct Hand {
    pub owner: Participant,
    cards: Vec<Card>,
}

impl Hand {
    pub fn new(owner: Participant) -> Self {
        Hand {
            owner,
            cards: Vec::new(),
        }
    }

    pub fn push(&mut self, card: Card) {
        self.cards.push(card);
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn value(&self) -> u16 {
        hand_value(&self.cards)
    }

    pub fn contains(&self, card: &Card) -> bool {
        self.cards.contains(card)
    }

    /// Two-card 21.
    pub fn is_natural(&self) -> bool {
        self.cards.len() == 2 && is_blackjack(self.value())
    }

    pub fn describe(&self) -> String {
        self.cards
            .iter()
            .map(Card::to_string)
            .collect::<Vec<_>>()
            .join(", ")
    }
}
