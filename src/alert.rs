//! User-facing failure notifications.
//!
//! Every component surfaces unrecoverable failures through an [`AlertSink`]
//! instead of panicking or killing the process. The sink turns a failure into
//! a `(title, header, detail)` notification; what happens to it after that is
//! the consumer's business (the CLI logs it, a GUI would pop a dialog).

use std::sync::Mutex;

/// A user-facing failure notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub title: String,
    pub header: String,
    pub detail: String,
}

impl Notification {
    pub fn new(
        title: impl Into<String>,
        header: impl Into<String>,
        detail: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            header: header.into(),
            detail: detail.into(),
        }
    }

    /// Generic error notification, matching the `Error`/`Error` title and
    /// header used for every failure alert.
    pub fn error(detail: impl Into<String>) -> Self {
        Self::new("Error", "Error", detail)
    }
}

/// Sink for failure notifications.
///
/// Implementations must be cheap to call from the pipeline worker; none of
/// them may abort the host process.
pub trait AlertSink: Send + Sync {
    fn alert(&self, notification: Notification);
}

/// Sink that renders notifications as `tracing` error events.
#[derive(Debug, Default)]
pub struct TracingSink;

impl AlertSink for TracingSink {
    fn alert(&self, notification: Notification) {
        tracing::error!(
            title = %notification.title,
            header = %notification.header,
            "{}",
            notification.detail
        );
    }
}

/// Sink that records notifications in memory, for tests and for consumers
/// that want to render them after the fact.
#[derive(Debug, Default)]
pub struct CollectingSink {
    notifications: Mutex<Vec<Notification>>,
}

impl CollectingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn take(&self) -> Vec<Notification> {
        std::mem::take(&mut self.notifications.lock().expect("sink lock poisoned"))
    }

    pub fn snapshot(&self) -> Vec<Notification> {
        self.notifications.lock().expect("sink lock poisoned").clone()
    }
}

impl AlertSink for CollectingSink {
    fn alert(&self, notification: Notification) {
        self.notifications
            .lock()
            .expect("sink lock poisoned")
            .push(notification);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_notification_shape() {
        let n = Notification::error("something broke");
        assert_eq!(n.title, "Error");
        assert_eq!(n.header, "Error");
        assert_eq!(n.detail, "something broke");
    }

    #[test]
    fn test_collecting_sink_records_in_order() {
        let sink = CollectingSink::new();
        sink.alert(Notification::error("first"));
        sink.alert(Notification::error("second"));

        let collected = sink.take();
        assert_eq!(collected.len(), 2);
        assert_eq!(collected[0].detail, "first");
        assert_eq!(collected[1].detail, "second");

        // take() drains
        assert!(sink.take().is_empty());
    }

    #[test]
    fn test_tracing_sink_does_not_panic() {
        TracingSink.alert(Notification::error("logged, not fatal"));
    }
}
