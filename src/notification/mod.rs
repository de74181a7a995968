//! Transient user-facing notifications.
//!
//! The [`NotificationQueue`] is a sink any component may push into. Every notification gets a
//! monotonic id and removes itself after a severity-dependent duration unless it is dismissed
//! earlier. Consumers observe the queue passively through a watch channel; insertion order is
//! display order and duplicates are never coalesced.

mod config;

pub use config::NotificationConfig;

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Weak};
use std::time::Duration;

use dioxus_logger::tracing;
use tokio::sync::watch;

/// Severity of a notification, selects its default display duration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Success,
    Error,
}

/// A single queued notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub id: u64,
    pub message: String,
    pub severity: Severity,
}

/// Queue of visible notifications.
///
/// Cheap to clone; all clones share the same queue. Pushing requires a tokio runtime, which
/// drives the per-notification expiry timers.
#[derive(Clone)]
pub struct NotificationQueue {
    inner: Arc<NotificationQueueRef>,
}

struct NotificationQueueRef {
    config: NotificationConfig,
    next_id: AtomicU64,
    entries: watch::Sender<Vec<Notification>>,
}

impl NotificationQueue {
    pub fn new(config: NotificationConfig) -> Self {
        let (entries, _) = watch::channel(Vec::new());

        Self {
            inner: Arc::new(NotificationQueueRef {
                config,
                next_id: AtomicU64::new(0),
                entries,
            }),
        }
    }

    /// Appends a notification and schedules its removal.
    ///
    /// Each notification has its own timer; dismissing or expiring one never affects another.
    /// The timer holds only a weak reference to the queue, so it does not keep a dropped queue
    /// alive.
    ///
    /// # Arguments
    /// - `message` - Text to display
    /// - `severity` - Severity, selects the default display duration
    /// - `duration` - Display duration overriding the severity default
    ///
    /// # Returns
    /// - `u64` - Id of the new notification, usable with [`NotificationQueue::dismiss`]
    pub fn push(
        &self,
        message: impl Into<String>,
        severity: Severity,
        duration: Option<Duration>,
    ) -> u64 {
        let id = self.inner.next_id.fetch_add(1, Ordering::Relaxed);
        let duration = duration.unwrap_or_else(|| self.inner.config.duration_for(severity));
        let message = message.into();

        tracing::debug!(id, ?severity, "Notification: {}", message);

        self.inner.entries.send_modify(|entries| {
            entries.push(Notification {
                id,
                message,
                severity,
            })
        });

        let queue: Weak<NotificationQueueRef> = Arc::downgrade(&self.inner);
        tokio::spawn(async move {
            tokio::time::sleep(duration).await;

            if let Some(inner) = queue.upgrade() {
                NotificationQueue { inner }.dismiss(id);
            }
        });

        id
    }

    pub fn info(&self, message: impl Into<String>) -> u64 {
        self.push(message, Severity::Info, None)
    }

    pub fn success(&self, message: impl Into<String>) -> u64 {
        self.push(message, Severity::Success, None)
    }

    pub fn error(&self, message: impl Into<String>) -> u64 {
        self.push(message, Severity::Error, None)
    }

    /// Removes a notification immediately. Unknown or already expired ids are ignored.
    pub fn dismiss(&self, id: u64) {
        self.inner.entries.send_if_modified(|entries| {
            let before = entries.len();
            entries.retain(|notification| notification.id != id);
            entries.len() != before
        });
    }

    /// Currently visible notifications in display order.
    pub fn snapshot(&self) -> Vec<Notification> {
        self.inner.entries.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<Vec<Notification>> {
        self.inner.entries.subscribe()
    }
}

impl Default for NotificationQueue {
    fn default() -> Self {
        Self::new(NotificationConfig::default())
    }
}
