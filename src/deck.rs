use std::{collections::HashSet, fmt, str::FromStr};

use rand::{rngs::SmallRng, seq::SliceRandom, Rng, SeedableRng};
use serde::Serialize;

use crate::{config::DECK_SIZE, error::GameError};

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Rank {
    Ace,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
}

impl Rank {
    pub const ALL: [Rank; 13] = [
        Rank::Ace,
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
    ];

    pub fn symbol(&self) -> &'static str {
        match self {
            Rank::Ace => "A",
            Rank::Two => "2",
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
        }
    }

    pub fn from_symbol(symbol: &str) -> Option<Rank> {
        let upper = symbol.to_ascii_uppercase();
        Rank::ALL.into_iter().find(|rank| rank.symbol() == upper)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Suit {
    Hearts,
    Diamonds,
    Clubs,
    Spades,
}

impl Suit {
    pub const ALL: [Suit; 4] = [Suit::Hearts, Suit::Diamonds, Suit::Clubs, Suit::Spades];

    pub fn symbol(&self) -> char {
        match self {
            Suit::Hearts => '♥',
            Suit::Diamonds => '♦',
            Suit::Clubs => '♣',
            Suit::Spades => '♠',
        }
    }

    fn from_char(c: char) -> Option<Suit> {
        match c {
            '♥' | 'H' | 'h' => Some(Suit::Hearts),
            '♦' | 'D' | 'd' => Some(Suit::Diamonds),
            '♣' | 'C' | 'c' => Some(Suit::Clubs),
            '♠' | 'S' | 's' => Some(Suit::Spades),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Card {
    pub rank: Rank,
    pub suit: Suit,
}

impl Card {
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Card { rank, suit }
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank.symbol(), self.suit.symbol())
    }
}

/// Parses `A♠`, `10♦` or the letter form `AS`, `10D`.
impl FromStr for Card {
    type Err = String;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let text = text.trim();
        let suit_char = text.chars().last().ok_or("empty card")?;
        let suit = Suit::from_char(suit_char).ok_or_else(|| format!("unknown suit in {text:?}"))?;
        let rank_text = &text[..text.len() - suit_char.len_utf8()];
        let rank = Rank::from_symbol(rank_text).ok_or_else(|| format!("unknown rank in {text:?}"))?;
        Ok(Card::new(rank, suit))
    }
}

/// The 52 distinct cards, suit by suit, ace first.
pub fn new_deck() -> Vec<Card> {
    let mut cards = Vec::with_capacity(DECK_SIZE);
    for suit in Suit::ALL {
        for rank in Rank::ALL {
            cards.push(Card::new(rank, suit));
        }
    }
    cards
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum DrawOrder {
    /// Any remaining card, uniformly.
    Random,
    /// Always the front of the sequence.
    Top,
}

pub struct Deck {
    cards: Vec<Card>,
    order: DrawOrder,
    rng: SmallRng,
}

impl Deck {
    /// Full shuffled deck. `None` seeds from entropy.
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_entropy(),
        };
        let mut deck = Deck {
            cards: new_deck(),
            order: DrawOrder::Random,
            rng,
        };
        deck.shuffle();
        deck
    }

    pub fn seeded(seed: u64) -> Self {
        Deck::new(Some(seed))
    }

    /// Deck that deals `cards` front to back. Every card must be distinct.
    pub fn stacked(cards: Vec<Card>) -> Result<Self, GameError> {
        let mut seen = HashSet::with_capacity(cards.len());
        for card in &cards {
            if !seen.insert(*card) {
                return Err(GameError::DuplicateCard(*card));
            }
        }
        Ok(Deck {
            cards,
            order: DrawOrder::Top,
            rng: SmallRng::seed_from_u64(0),
        })
    }

    pub fn shuffle(&mut self) {
        self.cards.shuffle(&mut self.rng);
    }

    /// Removes one card from the deck and hands it over.
    pub fn draw(&mut self) -> Result<Card, GameError> {
        if self.cards.is_empty() {
            return Err(GameError::EmptyDeck);
        }
        let index = match self.order {
            DrawOrder::Random => self.rng.gen_range(0..self.cards.len()),
            DrawOrder::Top => 0,
        };
        // Cards are unique, so removing this index drops exactly the drawn card.
        let card = self.cards.remove(index);
        debug_assert!(!self.cards.contains(&card));
        Ok(card)
    }

    pub fn remaining_cards(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn contains(&self, card: &Card) -> bool {
        self.cards.contains(card)
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }
}
