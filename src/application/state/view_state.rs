//! Per-screen view state.

/// What a screen currently shows.
///
/// Created as `Loading` at holder construction and mutated only by the
/// owning holder in response to completed asynchronous work.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewState<T> {
    /// Work in flight, nothing to show yet.
    Loading,
    /// Finished with no content.
    Empty,
    /// Finished with content.
    Success(T),
    /// Finished with a human-readable failure message.
    Error(String),
}

impl<T> ViewState<T> {
    /// Whether the state is still `Loading`.
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    /// The success payload, if any.
    #[must_use]
    pub const fn success(&self) -> Option<&T> {
        match self {
            Self::Success(payload) => Some(payload),
            _ => None,
        }
    }

    /// The error message, if any.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Error(message) => Some(message),
            _ => None,
        }
    }
}

/// Renders an error for display, falling back to a generic string when the
/// error carries no message.
pub(crate) fn error_message(err: &dyn std::fmt::Display) -> String {
    let message = err.to_string();
    if message.is_empty() {
        "Unknown error".to_string()
    } else {
        message
    }
}
