//! Configuration editor - working state and simulated commit
//!
//! One [`ConfigEditor`] backs one open configuration form. It holds a working
//! snapshot seeded from the store (merged over defaults), applies pure patches
//! to it, and commits asynchronously with a fixed simulated latency. Exactly
//! one commit may be in flight per editor; cancelling the editor aborts an
//! in-flight commit and suppresses its outcome notification.

use crate::contract::model::{AppConfig, AppId};
use crate::contract::ConfigError;
use crate::domain::notifications::{Notification, Notifier};
use crate::domain::patch::ConfigPatch;
use crate::domain::repository::ConfigStore;
use chrono::{DateTime, Utc};
use parking_lot::RwLock;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio_util::sync::CancellationToken;

/// Receipt for a snapshot that reached the store
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommitReceipt {
    pub app_id: AppId,
    pub committed_at: DateTime<Utc>,
}

/// How a commit attempt ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommitOutcome {
    /// The snapshot was written to the store and a success toast was sent
    Saved(CommitReceipt),
    /// The editor was cancelled before the store write; no toast was sent
    Cancelled,
}

struct EditorState {
    /// Working copy the form renders from
    snapshot: AppConfig,
    /// Last committed value; dirtiness is measured against this
    baseline: AppConfig,
}

/// Stateful editor for one application's configuration
pub struct ConfigEditor {
    app_id: AppId,
    state: RwLock<EditorState>,
    store: Arc<dyn ConfigStore>,
    notifier: Arc<dyn Notifier>,
    latency: Duration,
    pending: AtomicBool,
    cancel: CancellationToken,
}

/// Clears the pending flag on every commit exit path
struct PendingGuard<'a>(&'a AtomicBool);

impl Drop for PendingGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

impl ConfigEditor {
    pub fn new(
        config: AppConfig,
        store: Arc<dyn ConfigStore>,
        notifier: Arc<dyn Notifier>,
        latency: Duration,
    ) -> Self {
        let app_id = config.app_id;
        Self {
            app_id,
            state: RwLock::new(EditorState {
                snapshot: config.clone(),
                baseline: config,
            }),
            store,
            notifier,
            latency,
            pending: AtomicBool::new(false),
            cancel: CancellationToken::new(),
        }
    }

    pub fn app_id(&self) -> AppId {
        self.app_id
    }

    /// Current working snapshot
    pub fn config(&self) -> AppConfig {
        self.state.read().snapshot.clone()
    }

    /// Last committed snapshot
    pub fn baseline(&self) -> AppConfig {
        self.state.read().baseline.clone()
    }

    /// Whether the working snapshot differs from the last committed one
    pub fn is_dirty(&self) -> bool {
        let state = self.state.read();
        state.snapshot != state.baseline
    }

    /// Whether a commit is currently in flight
    pub fn is_pending(&self) -> bool {
        self.pending.load(Ordering::Acquire)
    }

    /// Apply one patch to the working snapshot, returning the updated copy
    ///
    /// On error the working snapshot is unchanged.
    pub fn apply(&self, patch: &ConfigPatch) -> Result<AppConfig, ConfigError> {
        let mut state = self.state.write();
        let next = state.snapshot.apply(patch)?;
        state.snapshot = next.clone();
        Ok(next)
    }

    /// Commit the working snapshot
    ///
    /// Sleeps the configured simulated latency, then writes through the store.
    /// Success advances the baseline and emits a success notification; a store
    /// error emits a destructive notification and leaves editor state
    /// untouched so the user may retry. A second commit while one is pending
    /// fails fast with [`ConfigError::CommitInFlight`].
    pub async fn commit(&self) -> Result<CommitOutcome, ConfigError> {
        if self.pending.swap(true, Ordering::AcqRel) {
            return Err(ConfigError::CommitInFlight);
        }
        let _guard = PendingGuard(&self.pending);

        let snapshot = self.config();

        tokio::select! {
            _ = self.cancel.cancelled() => {
                tracing::debug!(app_id = self.app_id, "commit cancelled before save");
                return Ok(CommitOutcome::Cancelled);
            }
            _ = tokio::time::sleep(self.latency) => {}
        }

        match self.store.save(&snapshot).await {
            Ok(()) => {
                self.state.write().baseline = snapshot;
                tracing::info!(app_id = self.app_id, "configuration committed");
                self.publish(Notification::success(
                    "Success",
                    "Configuration updated successfully",
                ))
                .await;
                Ok(CommitOutcome::Saved(CommitReceipt {
                    app_id: self.app_id,
                    committed_at: Utc::now(),
                }))
            }
            Err(e) => {
                tracing::warn!(app_id = self.app_id, error = %e, "configuration commit failed");
                self.publish(Notification::destructive(
                    "Error",
                    "Failed to update configuration",
                ))
                .await;
                Err(ConfigError::CommitFailed {
                    reason: e.to_string(),
                })
            }
        }
    }

    /// Cancel the editor, aborting any in-flight commit
    ///
    /// Dropping the editor has the same effect.
    pub fn cancel(&self) {
        self.cancel.cancel();
    }

    async fn publish(&self, notification: Notification) {
        // Notification delivery must never fail the commit
        if let Err(e) = self.notifier.notify(notification).await {
            tracing::warn!(app_id = self.app_id, error = %e, "failed to deliver notification");
        }
    }
}

impl Drop for ConfigEditor {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}
