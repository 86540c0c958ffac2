//! Commit notifications
//!
//! Every commit completion produces one transient notification (the toast of
//! the original dashboard). Publish failures are logged and never fail the
//! commit itself.

use chrono::{DateTime, Utc};
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

/// Notification severity, matching the dashboard's toast variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Severity {
    Success,
    Destructive,
}

/// One transient user-visible notification
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub severity: Severity,
    pub timestamp: DateTime<Utc>,
}

impl Notification {
    pub fn success(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self::new(title, description, Severity::Success)
    }

    pub fn destructive(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self::new(title, description, Severity::Destructive)
    }

    fn new(title: impl Into<String>, description: impl Into<String>, severity: Severity) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            description: description.into(),
            severity,
            timestamp: Utc::now(),
        }
    }
}

/// Error type for notification delivery
#[derive(Debug, thiserror::Error)]
pub enum NotifyError {
    #[error("Notification channel unavailable: {0}")]
    ChannelUnavailable(String),
}

/// Sink for commit notifications
///
/// Implementations deliver to whatever alerting surface hosts the editor.
#[async_trait::async_trait]
pub trait Notifier: Send + Sync {
    async fn notify(&self, notification: Notification) -> Result<(), NotifyError>;
}

/// No-op notifier for headless use or when toasts are disabled
pub struct NoOpNotifier;

#[async_trait::async_trait]
impl Notifier for NoOpNotifier {
    async fn notify(&self, _notification: Notification) -> Result<(), NotifyError> {
        Ok(())
    }
}

/// In-memory notifier that records everything it is given
///
/// Used by tests to assert on commit outcomes.
#[derive(Clone, Default)]
pub struct MemoryNotifier {
    delivered: Arc<RwLock<Vec<Notification>>>,
}

impl MemoryNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// All notifications delivered so far, in delivery order
    pub fn delivered(&self) -> Vec<Notification> {
        self.delivered.read().clone()
    }

    pub fn count(&self) -> usize {
        self.delivered.read().len()
    }

    pub fn clear(&self) {
        self.delivered.write().clear();
    }
}

#[async_trait::async_trait]
impl Notifier for MemoryNotifier {
    async fn notify(&self, notification: Notification) -> Result<(), NotifyError> {
        self.delivered.write().push(notification);
        Ok(())
    }
}
