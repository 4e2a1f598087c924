//! Error types for terminal interaction.

use thiserror::Error;

/// Errors surfaced by prompt loops.
///
/// Invalid input never lands here: the loops recover from it locally by
/// printing a message and asking again. Only a dead stream ends a prompt
/// early.
#[derive(Debug, Error)]
pub enum PromptError {
    /// The input stream reached end-of-file before a valid answer arrived.
    #[error("input closed before an answer was given")]
    Closed,

    /// Reading or writing the terminal failed.
    #[error("terminal I/O failed: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience alias for prompt results.
pub type PromptResult<T> = Result<T, PromptError>;
