use thiserror::Error;

use crate::cards::Card;

/// Failures of the hand evaluator.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum HandError {
    #[error("at least five cards are required to form a hand, got {0}")]
    TooFewCards(usize),
    #[error("at most seven cards can be evaluated, got {0}")]
    TooManyCards(usize),
    #[error("card {0} appears more than once")]
    DuplicateCard(Card),
}

/// Failures parsing the two-character card form (e.g. `"Td"`).
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseCardError {
    #[error("invalid card text {0:?}: expected rank and suit characters")]
    InvalidLength(String),
    #[error("invalid rank character {0:?}")]
    InvalidRank(char),
    #[error("invalid suit character {0:?}")]
    InvalidSuit(char),
}

/// Failures surfaced by [`crate::table::Table::apply_action`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GameError {
    #[error("showdown evaluation failed: {0}")]
    Showdown(#[from] HandError),
}
