//! Repository trait for configuration storage
//!
//! Defines the interface the editor commits through. The in-scope
//! implementation is the in-memory store in `infra/storage/memory.rs`; a real
//! remote store would slot in behind the same trait.

use crate::contract::model::{AppConfig, AppId, AppSummary, ConfigSnapshot};
use anyhow::Result;
use async_trait::async_trait;

/// Storage collaborator keyed by application identifier
#[async_trait]
pub trait ConfigStore: Send + Sync {
    /// List every known application
    async fn list_apps(&self) -> Result<Vec<AppSummary>>;

    /// Find one application's summary
    async fn find_app(&self, app_id: AppId) -> Result<Option<AppSummary>>;

    /// Load the stored snapshot for an application
    ///
    /// The snapshot may be partial; resolution against defaults happens in the
    /// domain layer, not here.
    async fn load(&self, app_id: AppId) -> Result<Option<ConfigSnapshot>>;

    /// Persist a full configuration snapshot
    async fn save(&self, config: &AppConfig) -> Result<()>;
}
