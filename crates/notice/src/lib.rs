// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]

//! Transient user notices.
//!
//! Notices are fire-and-forget signals: the sender never waits for delivery
//! and never branches on whether anyone received them. Ordering relative to
//! later state changes is not guaranteed.

use serde::{Deserialize, Serialize};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::sync::broadcast;
use tracing::debug;

/// Maximum number of notices buffered for slow subscribers.
const NOTICE_BUFFER_SIZE: usize = 100;

/// Display time for ordinary notices, in milliseconds.
pub const DEFAULT_DURATION_MS: u64 = 3000;

/// Display time for the in-progress save notice, in milliseconds.
pub const SAVING_DURATION_MS: u64 = 1500;

/// How a notice should be presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    /// Neutral progress information.
    Info,
    /// A completed operation.
    Success,
    /// A failed operation.
    Error,
}

impl Severity {
    /// Converts this severity to its string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Success => "success",
            Self::Error => "error",
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A transient message for the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    /// The text to show.
    pub message: String,
    /// How to present it.
    pub severity: Severity,
    /// How long to show it, in milliseconds.
    pub duration_ms: u64,
}

impl Notice {
    /// Creates a new `Notice`.
    ///
    /// # Arguments
    ///
    /// * `message` - The text to show
    /// * `severity` - How to present it
    /// * `duration_ms` - How long to show it
    #[must_use]
    pub fn new(message: impl Into<String>, severity: Severity, duration_ms: u64) -> Self {
        Self {
            message: message.into(),
            severity,
            duration_ms,
        }
    }

    /// Creates an info notice with the default duration.
    #[must_use]
    pub fn info(message: impl Into<String>) -> Self {
        Self::new(message, Severity::Info, DEFAULT_DURATION_MS)
    }

    /// Creates a success notice with the default duration.
    #[must_use]
    pub fn success(message: impl Into<String>) -> Self {
        Self::new(message, Severity::Success, DEFAULT_DURATION_MS)
    }

    /// Creates an error notice with the default duration.
    #[must_use]
    pub fn error(message: impl Into<String>) -> Self {
        Self::new(message, Severity::Error, DEFAULT_DURATION_MS)
    }

    /// Returns the display time.
    #[must_use]
    pub const fn duration(&self) -> Duration {
        Duration::from_millis(self.duration_ms)
    }
}

impl std::fmt::Display for Notice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.severity, self.message)
    }
}

/// Delivers notices to whatever presents them.
pub trait Notifier {
    /// Emits a notice. Never blocks and never fails.
    fn notify(&self, notice: Notice);
}

impl<T: Notifier + ?Sized> Notifier for &T {
    fn notify(&self, notice: Notice) {
        (**self).notify(notice);
    }
}

impl<T: Notifier + ?Sized> Notifier for Arc<T> {
    fn notify(&self, notice: Notice) {
        (**self).notify(notice);
    }
}

/// Broadcaster for notices.
///
/// This is a lightweight wrapper around `tokio::sync::broadcast` so that any
/// number of presenters can subscribe. Clones share the same channel.
#[derive(Debug, Clone)]
pub struct NoticeBroadcaster {
    tx: broadcast::Sender<Notice>,
}

impl NoticeBroadcaster {
    /// Creates a new broadcaster with no subscribers.
    #[must_use]
    pub fn new() -> Self {
        let (tx, _rx) = broadcast::channel(NOTICE_BUFFER_SIZE);
        Self { tx }
    }

    /// Subscribes to the notice stream.
    ///
    /// Notices sent before subscription are not received.
    #[must_use]
    pub fn subscribe(&self) -> broadcast::Receiver<Notice> {
        self.tx.subscribe()
    }

    /// Returns the number of live subscribers.
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.tx.receiver_count()
    }
}

impl Default for NoticeBroadcaster {
    fn default() -> Self {
        Self::new()
    }
}

impl Notifier for NoticeBroadcaster {
    fn notify(&self, notice: Notice) {
        match self.tx.send(notice) {
            Ok(count) => {
                debug!(receivers = count, "Broadcast notice");
            }
            Err(broadcast::error::SendError(notice)) => {
                debug!(?notice, "No receivers for notice");
            }
        }
    }
}

/// Notifier that keeps every notice in memory.
///
/// Clones share the same log.
#[derive(Debug, Clone, Default)]
pub struct NoticeLog {
    notices: Arc<Mutex<Vec<Notice>>>,
}

impl NoticeLog {
    /// Creates an empty log.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of every notice received so far.
    #[must_use]
    pub fn notices(&self) -> Vec<Notice> {
        self.notices
            .lock()
            .map(|notices| notices.clone())
            .unwrap_or_default()
    }

    /// Returns the most recent notice.
    #[must_use]
    pub fn last(&self) -> Option<Notice> {
        self.notices
            .lock()
            .ok()
            .and_then(|notices| notices.last().cloned())
    }

    /// Returns the number of notices received.
    #[must_use]
    pub fn len(&self) -> usize {
        self.notices.lock().map(|notices| notices.len()).unwrap_or(0)
    }

    /// Returns whether no notice has been received.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Notifier for NoticeLog {
    fn notify(&self, notice: Notice) {
        if let Ok(mut notices) = self.notices.lock() {
            notices.push(notice);
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_notice_constructors() {
        let notice: Notice = Notice::error("Please fix the errors");
        assert_eq!(notice.severity, Severity::Error);
        assert_eq!(notice.duration_ms, DEFAULT_DURATION_MS);
        assert_eq!(notice.duration(), Duration::from_secs(3));

        let notice: Notice = Notice::new("Saving...", Severity::Info, SAVING_DURATION_MS);
        assert_eq!(notice.duration(), Duration::from_millis(1500));
    }

    #[test]
    fn test_notice_display() {
        let notice: Notice = Notice::success("Saved");
        assert_eq!(format!("{notice}"), "[success] Saved");
    }

    #[test]
    fn test_broadcast_no_receivers() {
        let broadcaster: NoticeBroadcaster = NoticeBroadcaster::new();
        assert_eq!(broadcaster.subscriber_count(), 0);
        // Should not panic when no receivers
        broadcaster.notify(Notice::info("nobody listens"));
    }

    #[test]
    fn test_broadcast_with_receiver() {
        let broadcaster: NoticeBroadcaster = NoticeBroadcaster::new();
        let mut rx = broadcaster.subscribe();

        broadcaster.notify(Notice::success("Saved"));

        let received: Notice = rx.try_recv().unwrap();
        assert_eq!(received.message, "Saved");
        assert_eq!(received.severity, Severity::Success);
    }

    #[test]
    fn test_clones_share_channel() {
        let broadcaster: NoticeBroadcaster = NoticeBroadcaster::new();
        let mut rx1 = broadcaster.subscribe();
        let mut rx2 = broadcaster.subscribe();

        let clone: NoticeBroadcaster = broadcaster.clone();
        clone.notify(Notice::info("hello"));

        assert!(matches!(rx1.try_recv(), Ok(Notice { .. })));
        assert!(matches!(rx2.try_recv(), Ok(Notice { .. })));
    }

    #[test]
    fn test_notifier_through_reference_and_arc() {
        fn emit<N: Notifier>(notifier: N, message: &str) {
            notifier.notify(Notice::info(message));
        }

        let log: NoticeLog = NoticeLog::new();
        let shared: Arc<NoticeLog> = Arc::new(log.clone());

        emit(&log, "one");
        emit(shared, "two");

        assert_eq!(log.len(), 2);
        assert_eq!(log.last().unwrap().message, "two");
    }

    #[test]
    fn test_notice_log_starts_empty() {
        let log: NoticeLog = NoticeLog::new();
        assert!(log.is_empty());
        assert!(log.last().is_none());
        assert!(log.notices().is_empty());
    }

    #[test]
    fn test_notice_serialization() {
        let notice: Notice = Notice::error("Error saving the record");
        let json: String = serde_json::to_string(&notice).expect("Failed to serialize");
        let deserialized: Notice = serde_json::from_str(&json).expect("Failed to deserialize");

        assert_eq!(deserialized, notice);
        assert!(json.contains("\"severity\":\"error\""));
    }
}
