//! Local storage error types.

use thiserror::Error;

/// Failure of the local favorites table.
#[derive(Debug, Error)]
#[allow(missing_docs)]
pub enum StorageError {
    #[error("failed to open favorites database: {message}")]
    Open { message: String },

    #[error("favorites query failed: {message}")]
    Query { message: String },

    #[error("favorites write failed: {message}")]
    Write { message: String },
}

impl StorageError {
    /// Creates an open/setup error.
    #[must_use]
    pub fn open(message: impl Into<String>) -> Self {
        Self::Open {
            message: message.into(),
        }
    }

    /// Creates a read error.
    #[must_use]
    pub fn query(message: impl Into<String>) -> Self {
        Self::Query {
            message: message.into(),
        }
    }

    /// Creates a write error.
    #[must_use]
    pub fn write(message: impl Into<String>) -> Self {
        Self::Write {
            message: message.into(),
        }
    }
}
