//! Notification port definition.

/// Port for transient, non-blocking user notifications.
pub trait NotificationPort: Send + Sync {
    /// Sends a notification. Fire-and-forget; failures are logged, not
    /// surfaced.
    fn send(&self, title: &str, body: &str);
}

#[cfg(test)]
pub mod mock {
    use parking_lot::Mutex;

    use super::*;

    /// Mock notifier recording every message.
    #[derive(Default)]
    pub struct RecordingNotifier {
        messages: Mutex<Vec<(String, String)>>,
    }

    impl RecordingNotifier {
        /// Creates an empty recorder.
        #[must_use]
        pub fn new() -> Self {
            Self::default()
        }

        /// Messages sent so far, as (title, body) pairs.
        pub fn messages(&self) -> Vec<(String, String)> {
            self.messages.lock().clone()
        }
    }

    impl NotificationPort for RecordingNotifier {
        fn send(&self, title: &str, body: &str) {
            self.messages.lock().push((title.to_string(), body.to_string()));
        }
    }
}
