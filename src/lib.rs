pub mod config;
pub mod deck;
pub mod error;
pub mod game;
pub mod hand;
pub mod outcome;
pub mod strategy;
pub mod table;

pub use deck::{new_deck, Card, Deck, Rank, Suit};
pub use error::GameError;
pub use game::{play_round, play_session, RoundContext, RoundReport, Step};
pub use hand::{card_value, hand_value, is_blackjack, Hand, Participant};
pub use outcome::{resolve, resolve_naturals, Outcome, Reason, Resolution};
pub use strategy::{DealerStrategy, Decision, TurnState};
pub use table::{Table, TerminalTable};
