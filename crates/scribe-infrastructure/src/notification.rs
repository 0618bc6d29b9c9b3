//! Notification sinks.
//!
//! `TracingNotificationSink` writes toasts to the log; `ChannelNotificationSink`
//! forwards them to a UI over an unbounded tokio channel.

use scribe_core::notification::{NotificationSink, Toast};
use tokio::sync::mpsc;

/// Logs every toast: destructive ones at `warn`, the rest at `info`.
#[derive(Debug, Clone, Default)]
pub struct TracingNotificationSink;

impl NotificationSink for TracingNotificationSink {
    fn notify(&self, toast: Toast) {
        if toast.is_destructive() {
            tracing::warn!(title = %toast.title, "{}", toast.description);
        } else {
            tracing::info!(title = %toast.title, "{}", toast.description);
        }
    }
}

/// Forwards toasts to whoever holds the receiving end.
pub struct ChannelNotificationSink {
    sender: mpsc::UnboundedSender<Toast>,
}

impl ChannelNotificationSink {
    /// Create a new sink with the given channel sender
    pub fn new(sender: mpsc::UnboundedSender<Toast>) -> Self {
        Self { sender }
    }

    /// Create a sink together with its receiver.
    pub fn channel() -> (Self, mpsc::UnboundedReceiver<Toast>) {
        let (sender, receiver) = mpsc::unbounded_channel();
        (Self::new(sender), receiver)
    }
}

impl NotificationSink for ChannelNotificationSink {
    fn notify(&self, toast: Toast) {
        // Non-blocking send - if the receiver is dropped, we just skip
        let _ = self.sender.send(toast);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_channel_sink_forwards_in_order() {
        let (sink, mut rx) = ChannelNotificationSink::channel();

        sink.notify(Toast::success("User information updated successfully"));
        sink.notify(Toast::error("Profile service unavailable"));

        assert_eq!(
            rx.try_recv().unwrap().description,
            "User information updated successfully"
        );
        assert!(rx.try_recv().unwrap().is_destructive());
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn test_channel_sink_survives_dropped_receiver() {
        let (sink, rx) = ChannelNotificationSink::channel();
        drop(rx);
        sink.notify(Toast::success("ignored"));
    }
}
