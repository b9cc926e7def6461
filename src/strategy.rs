use serde::Serialize;

use crate::{
    config::{BLACKJACK, DEALER_STANDS_ON},
    error::GameError,
};

/// The player's answer at a decision point.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Decision {
    Hit,
    Stick,
}

impl Decision {
    pub const OPTIONS: [&'static str; 2] = ["hit", "stick"];

    pub fn from_code(code: &str) -> Result<Decision, GameError> {
        match code {
            "hit" => Ok(Decision::Hit),
            "stick" => Ok(Decision::Stick),
            other => Err(GameError::InvalidChoice {
                choice: other.to_string(),
                options: Decision::OPTIONS.iter().map(|o| o.to_string()).collect(),
            }),
        }
    }

    pub fn as_code(&self) -> &'static str {
        match self {
            Decision::Hit => "hit",
            Decision::Stick => "stick",
        }
    }
}

/// Where a participant's turn stands.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TurnState {
    AwaitingDecision,
    /// Player stuck.
    Done,
    /// Player hit up to exactly 21.
    Blackjack,
    Bust,
    /// Dealer stopped at or above the threshold without busting.
    StickFinal,
}

impl TurnState {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, TurnState::AwaitingDecision)
    }

    /// State of the player's hand after a hit brought it to `value`.
    pub fn after_hit(value: u16) -> TurnState {
        if value == BLACKJACK {
            TurnState::Blackjack
        } else if value > BLACKJACK {
            TurnState::Bust
        } else {
            TurnState::AwaitingDecision
        }
    }
}

/// Fixed dealer policy: draw below the threshold, stand at or above it.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct DealerStrategy {
    stands_on: u16,
}

impl Default for DealerStrategy {
    fn default() -> Self {
        DealerStrategy {
            stands_on: DEALER_STANDS_ON,
        }
    }
}

impl DealerStrategy {
    pub fn should_draw(&self, value: u16) -> bool {
        value < self.stands_on
    }

    pub fn final_state(&self, value: u16) -> TurnState {
        if value > BLACKJACK {
            TurnState::Bust
        } else {
            TurnState::StickFinal
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decision_codes() {
        assert_eq!(Decision::from_code("hit").unwrap(), Decision::Hit);
        assert_eq!(Decision::from_code("stick").unwrap(), Decision::Stick);
        assert_eq!(Decision::Stick.as_code(), "stick");
        match Decision::from_code("Hit") {
            Err(GameError::InvalidChoice { choice, options }) => {
                assert_eq!(choice, "Hit");
                assert_eq!(options, vec!["hit", "stick"]);
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn hit_transitions() {
        assert_eq!(TurnState::after_hit(20), TurnState::AwaitingDecision);
        assert_eq!(TurnState::after_hit(21), TurnState::Blackjack);
        assert_eq!(TurnState::after_hit(23), TurnState::Bust);
        assert!(!TurnState::AwaitingDecision.is_terminal());
        assert!(TurnState::Done.is_terminal());
    }

    #[test]
    fn dealer_threshold() {
        let dealer = DealerStrategy::default();
        assert!(dealer.should_draw(15));
        assert!(!dealer.should_draw(16));
        assert!(!dealer.should_draw(20));
        assert_eq!(dealer.final_state(21), TurnState::StickFinal);
        assert_eq!(dealer.final_state(22), TurnState::Bust);
    }
}
