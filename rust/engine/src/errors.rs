use thiserror::Error;

use crate::phase::Phase;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum GameError {
    #[error("Deck exhausted: no cards left to deal")]
    DeckExhausted,
    #[error("Action '{action}' is not accepted during {phase}")]
    InvalidAction { phase: Phase, action: String },
    #[error("Insufficient chips: required {required}, available {available}")]
    InsufficientChips { required: u32, available: u32 },
    #[error("Round already in progress ({phase})")]
    RoundInProgress { phase: Phase },
    #[error("Invalid table rules: {0}")]
    InvalidRules(String),
}
