//! Network error types.

use thiserror::Error;

/// Failure of a remote API call.
#[derive(Debug, Error)]
#[allow(missing_docs)]
pub enum NetworkError {
    #[error("network error: {message}")]
    Transport { message: String },

    #[error("unexpected response status {status}: {message}")]
    Status { status: u16, message: String },

    #[error("malformed response body: {message}")]
    Malformed { message: String },
}

impl NetworkError {
    /// Creates a transport-level error.
    #[must_use]
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport {
            message: message.into(),
        }
    }

    /// Creates a non-2xx status error.
    #[must_use]
    pub fn status(status: u16, message: impl Into<String>) -> Self {
        Self::Status {
            status,
            message: message.into(),
        }
    }

    /// Creates a malformed-body error.
    #[must_use]
    pub fn malformed(message: impl Into<String>) -> Self {
        Self::Malformed {
            message: message.into(),
        }
    }

    /// Returns whether the error came from the transport rather than the API.
    #[must_use]
    pub const fn is_transport(&self) -> bool {
        matches!(self, Self::Transport { .. })
    }
}
