//! Errors used throughout the chess engine.
//!
//! Only construction and parsing boundaries produce errors: building a square
//! from raw coordinates, reading square names and FEN strings, and decoding
//! configuration values. Move rejection, "no move available" and game-over
//! states are ordinary return values and never surface here.

/// Unified error type for the chess engine.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ChessError {
    /// Row or column outside `0..=7`.
    #[error("square ({row}, {col}) is off the board")]
    SquareOutOfRange { row: i32, col: i32 },

    /// A square name such as `e4` could not be parsed.
    #[error("invalid algebraic square: {0}")]
    InvalidAlgebraic(String),

    /// A FEN-style position string was malformed.
    #[error("invalid FEN: {0}")]
    InvalidFen(String),

    /// Difficulty name other than easy/normal/hard.
    #[error("unknown difficulty: {0}")]
    UnknownDifficulty(String),

    /// Engine option name or value that the engine does not understand.
    #[error("unknown engine option: {0}")]
    UnknownOption(String),
}

pub type ChessResult<T> = Result<T, ChessError>;
