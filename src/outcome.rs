use std::fmt;

use serde::Serialize;

use crate::{config::BLACKJACK, hand::Hand, strategy::TurnState};

#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    PlayerWins,
    DealerWins,
    Tie,
}

/// Why the round ended the way it did.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Reason {
    BothBlackjack,
    NaturalBlackjack,
    PlayerBust,
    DealerBust,
    HigherHand,
    EqualHands,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize)]
pub struct Resolution {
    pub outcome: Outcome,
    pub reason: Reason,
}

impl Resolution {
    fn new(outcome: Outcome, reason: Reason) -> Self {
        Resolution { outcome, reason }
    }
}

/// Checks the two-card deal. `None` means the turns have to be played.
pub fn resolve_naturals(player: &Hand, dealer: &Hand) -> Option<Resolution> {
    match (player.is_natural(), dealer.is_natural()) {
        (true, true) => Some(Resolution::new(Outcome::Tie, Reason::BothBlackjack)),
        (true, false) => Some(Resolution::new(Outcome::PlayerWins, Reason::NaturalBlackjack)),
        _ => None,
    }
}

/// `dealer_state` is `None` when the dealer never played.
pub fn resolve(
    dealer_state: Option<TurnState>,
    dealer_value: u16,
    player_state: TurnState,
    player_value: u16,
) -> Resolution {
    if player_state == TurnState::Bust || player_value > BLACKJACK {
        return Resolution::new(Outcome::DealerWins, Reason::PlayerBust);
    }
    if dealer_state == Some(TurnState::Bust) || dealer_value > BLACKJACK {
        return Resolution::new(Outcome::PlayerWins, Reason::DealerBust);
    }
    if player_value > dealer_value {
        Resolution::new(Outcome::PlayerWins, Reason::HigherHand)
    } else if dealer_value > player_value {
        Resolution::new(Outcome::DealerWins, Reason::HigherHand)
    } else {
        Resolution::new(Outcome::Tie, Reason::EqualHands)
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Outcome::PlayerWins => "You win!",
            Outcome::DealerWins => "The dealer wins.",
            Outcome::Tie => "It's a draw.",
        };
        f.write_str(text)
    }
}

impl Resolution {
    pub fn message(&self, player_name: &str, player_value: u16, dealer_value: u16) -> String {
        match self.reason {
            Reason::BothBlackjack => {
                format!("You and the dealer both have blackjack, {player_name}. {}", self.outcome)
            }
            Reason::NaturalBlackjack => {
                format!("Blackjack! {} Congratulations, {player_name}.", self.outcome)
            }
            Reason::PlayerBust => format!("You went bust with {player_value}. {}", self.outcome),
            Reason::DealerBust => {
                format!("The dealer went bust with {dealer_value}. {}", self.outcome)
            }
            Reason::HigherHand | Reason::EqualHands => format!(
                "You have {player_value}, the dealer has {dealer_value}. {}",
                self.outcome
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hand::Participant;

    fn hand(owner: Participant, cards: &[&str]) -> Hand {
        let mut hand = Hand::new(owner);
        for card in cards {
            hand.push(card.parse().unwrap());
        }
        hand
    }

    #[test]
    fn naturals() {
        let player_bj = hand(Participant::Player, &["A♠", "K♥"]);
        let dealer_bj = hand(Participant::Dealer, &["Q♦", "A♣"]);
        let dealer_18 = hand(Participant::Dealer, &["9♦", "9♣"]);
        let player_18 = hand(Participant::Player, &["10♠", "8♣"]);
        assert_eq!(
            resolve_naturals(&player_bj, &dealer_bj),
            Some(Resolution::new(Outcome::Tie, Reason::BothBlackjack))
        );
        assert_eq!(
            resolve_naturals(&player_bj, &dealer_18),
            Some(Resolution::new(Outcome::PlayerWins, Reason::NaturalBlackjack))
        );
        assert_eq!(resolve_naturals(&player_18, &dealer_bj), None);
        assert_eq!(resolve_naturals(&player_18, &dealer_18), None);
    }

    #[test]
    fn three_card_21_is_not_a_natural() {
        let player = hand(Participant::Player, &["7♠", "7♥", "7♦"]);
        let dealer = hand(Participant::Dealer, &["5♠", "6♥", "K♠", "Q♥"]);
        assert_eq!(player.value(), 21);
        assert_eq!(resolve_naturals(&player, &dealer), None);
    }

    #[test]
    fn over_21_never_wins_on_value() {
        let resolution = resolve(Some(TurnState::StickFinal), 16, TurnState::Done, 31);
        assert_eq!(resolution.outcome, Outcome::DealerWins);
        assert_eq!(resolution.reason, Reason::PlayerBust);
    }

    #[test]
    fn player_bust_loses_even_if_dealer_busts() {
        let resolution = resolve(None, 15, TurnState::Bust, 23);
        assert_eq!(resolution.outcome, Outcome::DealerWins);
        assert_eq!(resolution.reason, Reason::PlayerBust);
    }

    #[test]
    fn dealer_bust_pays_player() {
        let resolution = resolve(Some(TurnState::Bust), 25, TurnState::Done, 12);
        assert_eq!(resolution.outcome, Outcome::PlayerWins);
        assert_eq!(resolution.reason, Reason::DealerBust);
    }

    #[test]
    fn compares_values() {
        assert_eq!(
            resolve(Some(TurnState::StickFinal), 19, TurnState::Done, 18).outcome,
            Outcome::DealerWins
        );
        assert_eq!(
            resolve(Some(TurnState::StickFinal), 17, TurnState::Blackjack, 21).outcome,
            Outcome::PlayerWins
        );
        let tie = resolve(Some(TurnState::StickFinal), 20, TurnState::Done, 20);
        assert_eq!(tie.outcome, Outcome::Tie);
        assert_eq!(tie.reason, Reason::EqualHands);
    }

    #[test]
    fn messages_name_the_result() {
        let both = Resolution::new(Outcome::Tie, Reason::BothBlackjack);
        assert!(both.message("Ada", 21, 21).contains("both have blackjack"));
        let bust = Resolution::new(Outcome::DealerWins, Reason::PlayerBust);
        assert_eq!(bust.message("Ada", 23, 15), "You went bust with 23. The dealer wins.");
    }
}
