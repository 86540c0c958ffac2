//! Native client trait for in-process consumers
//!
//! This trait defines the API other modules use to read and write reference
//! application configuration. NO HTTP - direct function calls.

use super::{
    error::ConfigError,
    model::{AppConfig, AppId, AppSummary},
};
use async_trait::async_trait;

/// App config service API for in-process communication
#[async_trait]
pub trait AppConfigApi: Send + Sync {
    /// List every reference application known to the dashboard
    async fn list_apps(&self) -> Result<Vec<AppSummary>, ConfigError>;

    /// Get one application's dashboard card data
    async fn get_app(&self, app_id: AppId) -> Result<AppSummary, ConfigError>;

    /// Get the resolved configuration for an application
    ///
    /// Missing domains in the stored snapshot are filled with defaults.
    async fn get_config(&self, app_id: AppId) -> Result<AppConfig, ConfigError>;

    /// Persist a full configuration snapshot for an application
    async fn save_config(&self, config: AppConfig) -> Result<(), ConfigError>;
}
