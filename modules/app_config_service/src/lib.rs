//! App Config Service Module
//!
//! Headless configuration editor for Experience Center reference applications
//! (EV-charging apps and the like). Holds per-app configuration snapshots,
//! applies copy-on-write patches from the dashboard forms, and commits them
//! asynchronously with a simulated latency and a toast-style notification.

// Public exports
pub mod contract;
pub use contract::{
    AppConfig, AppConfigApi, AppId, AppSummary, ConfigError, ConfigSnapshot,
};

// Internal modules (hidden from public API)
#[doc(hidden)]
pub mod api;
#[doc(hidden)]
pub mod config;
#[doc(hidden)]
pub mod domain;
#[doc(hidden)]
pub mod infra;

use domain::notifications::Notifier;
use std::sync::Arc;

/// Wire a service over an in-memory store
///
/// Seeds the sample reference applications unless the module configuration
/// says otherwise. The returned service backs both editors and the native
/// client.
pub fn build_service(config: config::Config, notifier: Arc<dyn Notifier>) -> Arc<domain::Service> {
    let store: Arc<dyn domain::ConfigStore> = if config.seed_sample_apps {
        Arc::new(infra::storage::InMemoryConfigStore::seeded())
    } else {
        Arc::new(infra::storage::InMemoryConfigStore::new())
    };
    tracing::info!(
        seeded = config.seed_sample_apps,
        latency_ms = config.commit_latency_ms,
        "app config service initialized"
    );
    Arc::new(domain::Service::new(store, notifier, config))
}

/// Native client over a freshly wired in-memory service
pub fn build_client(config: config::Config, notifier: Arc<dyn Notifier>) -> api::native::NativeClient {
    api::native::NativeClient::new(build_service(config, notifier))
}
