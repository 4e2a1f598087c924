//! Error types for persistence helpers.

use thiserror::Error;

/// Errors produced by the persistence helpers.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Filesystem access failed.
    #[error("file access failed: {0}")]
    Io(#[from] std::io::Error),

    /// A value could not be read or written as JSON.
    #[error("invalid JSON data: {0}")]
    Json(#[from] serde_json::Error),

    /// SQLite rejected the connection or statement.
    #[error("SQLite operation failed: {0}")]
    Sqlite(#[from] rusqlite::Error),
}

/// Convenience alias for persistence results.
pub type StoreResult<T> = Result<T, StoreError>;
