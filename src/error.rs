use std::{fmt, io};

use crate::deck::Card;

#[derive(Debug)]
pub enum GameError {
    /// A draw was attempted on a deck with no cards left.
    EmptyDeck,
    /// The table answered with something outside the offered options.
    InvalidChoice { choice: String, options: Vec<String> },
    /// A stacked deck listed the same card twice.
    DuplicateCard(Card),
    /// The round's hands already hold cards.
    AlreadyDealt,
    Input(io::Error),
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::EmptyDeck => write!(f, "cannot draw from an empty deck"),
            GameError::InvalidChoice { choice, options } => write!(
                f,
                "invalid choice {choice:?}, expected one of [{}]",
                options.join(", ")
            ),
            GameError::DuplicateCard(card) => write!(f, "card {card} appears more than once"),
            GameError::AlreadyDealt => write!(f, "the round has already been dealt"),
            GameError::Input(err) => write!(f, "failed to read input: {err}"),
        }
    }
}

impl std::error::Error for GameError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GameError::Input(err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for GameError {
    fn from(err: io::Error) -> Self {
        GameError::Input(err)
    }
}
