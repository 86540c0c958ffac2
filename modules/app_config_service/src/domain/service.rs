//! Domain service - orchestration over store and notifier

use crate::config::Config;
use crate::contract::model::{AppConfig, AppId, AppSummary};
use crate::contract::ConfigError;
use crate::domain::editor::ConfigEditor;
use crate::domain::notifications::Notifier;
use crate::domain::repository::ConfigStore;
use std::sync::Arc;

/// Domain service for reference-application configuration
pub struct Service {
    store: Arc<dyn ConfigStore>,
    notifier: Arc<dyn Notifier>,
    config: Config,
}

impl Service {
    /// Create a new service instance
    pub fn new(store: Arc<dyn ConfigStore>, notifier: Arc<dyn Notifier>, config: Config) -> Self {
        Self {
            store,
            notifier,
            config,
        }
    }

    /// List every reference application known to the dashboard
    pub async fn list_apps(&self) -> Result<Vec<AppSummary>, ConfigError> {
        self.store
            .list_apps()
            .await
            .map_err(|_| ConfigError::Internal)
    }

    /// Get one application's dashboard card data
    pub async fn get_app(&self, app_id: AppId) -> Result<AppSummary, ConfigError> {
        self.store
            .find_app(app_id)
            .await
            .map_err(|_| ConfigError::Internal)?
            .ok_or(ConfigError::AppNotFound { app_id })
    }

    /// Resolve the stored snapshot for an application against defaults
    ///
    /// An app with no stored snapshot gets an all-defaults configuration;
    /// partial snapshots keep their stored domains and default the rest.
    pub async fn get_config(&self, app_id: AppId) -> Result<AppConfig, ConfigError> {
        // Unknown apps are an error even though missing snapshots are not
        self.get_app(app_id).await?;

        let snapshot = self
            .store
            .load(app_id)
            .await
            .map_err(|_| ConfigError::Internal)?
            .unwrap_or_default();

        Ok(AppConfig::from_snapshot(app_id, snapshot))
    }

    /// Open a configuration editor seeded with the resolved snapshot
    pub async fn open_editor(&self, app_id: AppId) -> Result<ConfigEditor, ConfigError> {
        let config = self.get_config(app_id).await?;
        tracing::debug!(app_id, "opening configuration editor");
        Ok(ConfigEditor::new(
            config,
            self.store.clone(),
            self.notifier.clone(),
            self.config.commit_latency(),
        ))
    }

    /// Persist a full snapshot directly, bypassing the editor
    ///
    /// Used by the native client for programmatic writes; interactive saves go
    /// through [`ConfigEditor::commit`].
    pub async fn save_config(&self, config: AppConfig) -> Result<(), ConfigError> {
        self.get_app(config.app_id).await?;

        // Advisory only; the write still goes through
        if config.branding.description.chars().count() > self.config.max_description_len {
            tracing::warn!(
                app_id = config.app_id,
                limit = self.config.max_description_len,
                "branding description exceeds advisory length limit"
            );
        }

        self.store.save(&config).await.map_err(|e| {
            tracing::warn!(app_id = config.app_id, error = %e, "direct save failed");
            ConfigError::CommitFailed {
                reason: e.to_string(),
            }
        })
    }
}
