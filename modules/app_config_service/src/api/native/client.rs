//! Native client implementation - wraps the domain service for in-process calls

use crate::contract::model::{AppConfig, AppId, AppSummary};
use crate::contract::{AppConfigApi, ConfigError};
use crate::domain::Service;
use async_trait::async_trait;
use std::sync::Arc;

/// Native client that directly calls the domain service
///
/// Used for in-process communication without any transport overhead.
#[derive(Clone)]
pub struct NativeClient {
    service: Arc<Service>,
}

impl NativeClient {
    /// Create a new native client
    pub fn new(service: Arc<Service>) -> Self {
        Self { service }
    }
}

#[async_trait]
impl AppConfigApi for NativeClient {
    async fn list_apps(&self) -> Result<Vec<AppSummary>, ConfigError> {
        self.service.list_apps().await
    }

    async fn get_app(&self, app_id: AppId) -> Result<AppSummary, ConfigError> {
        self.service.get_app(app_id).await
    }

    async fn get_config(&self, app_id: AppId) -> Result<AppConfig, ConfigError> {
        self.service.get_config(app_id).await
    }

    async fn save_config(&self, config: AppConfig) -> Result<(), ConfigError> {
        self.service.save_config(config).await
    }
}
