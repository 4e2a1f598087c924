//! Error types for dice notation.

use thiserror::Error;

/// Convenience result type for dice operations.
pub type DiceResult<T> = Result<T, DiceError>;

/// Errors that can occur when parsing dice notation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DiceError {
    /// The text is not of the form `NdS`, `NdS+B`, or `NdS-B`.
    #[error("invalid dice notation: \"{0}\"")]
    InvalidNotation(String),

    /// A die needs at least one side.
    #[error("a die needs at least one side: \"{0}\"")]
    ZeroSides(String),

    /// At least one die must be thrown.
    #[error("at least one die must be thrown: \"{0}\"")]
    ZeroCount(String),
}
