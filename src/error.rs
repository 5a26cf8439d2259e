//! Error types for move validation and human input.
//!
//! The search itself never fails; these errors come from placing marks on
//! behalf of a player and from reading moves off a terminal.

use thiserror::Error;

/// Errors raised outside the search core.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("invalid move: ({row},{col}) is occupied or off the board")]
    InvalidMove { row: usize, col: usize },

    #[error("invalid input '{input}' (expected row,col with values 0-2)")]
    InvalidInput { input: String },

    #[error("invalid board: {reason}")]
    InvalidBoard { reason: String },

    #[error("game is already over")]
    GameOver,

    #[error("input closed before a move was entered")]
    InputClosed,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience alias for results carrying the crate's [`Error`].
pub type Result<T> = std::result::Result<T, Error>;
