//! In-memory configuration store
//!
//! Stand-in for the remote configuration store the dashboard would talk to.
//! The seeded variant carries the sample reference applications and the
//! partial snapshot the dashboard synthesizes for each of them.

use crate::contract::model::{
    AppConfig, AppId, AppSummary, AppearanceConfig, BrandingConfig, ConfigSnapshot, PaymentOptions,
    PLACEHOLDER_LOGO,
};
use crate::domain::repository::ConfigStore;
use anyhow::Result;
use async_trait::async_trait;
use parking_lot::RwLock;
use std::collections::HashMap;

const SAMPLE_LOGO: &str = "https://experience-dev.becknprotocol.io/assets/open-spark.svg";
const SAMPLE_URL: &str = "https://opensparkv2-dev.becknprotocol.io/";

/// In-memory [`ConfigStore`] implementation
#[derive(Default)]
pub struct InMemoryConfigStore {
    apps: RwLock<Vec<AppSummary>>,
    snapshots: RwLock<HashMap<AppId, ConfigSnapshot>>,
}

impl InMemoryConfigStore {
    /// Empty store with no applications
    pub fn new() -> Self {
        Self::default()
    }

    /// Store seeded with the sample reference applications
    pub fn seeded() -> Self {
        let store = Self::new();
        for app in sample_apps() {
            let id = app.id;
            let snapshot = sample_snapshot(&app);
            store.apps.write().push(app);
            store.snapshots.write().insert(id, snapshot);
        }
        store
    }

    /// Register an application with no stored snapshot
    pub fn add_app(&self, app: AppSummary) {
        self.apps.write().push(app);
    }

    /// Replace the stored snapshot for an application
    pub fn put_snapshot(&self, app_id: AppId, snapshot: ConfigSnapshot) {
        self.snapshots.write().insert(app_id, snapshot);
    }
}

#[async_trait]
impl ConfigStore for InMemoryConfigStore {
    async fn list_apps(&self) -> Result<Vec<AppSummary>> {
        Ok(self.apps.read().clone())
    }

    async fn find_app(&self, app_id: AppId) -> Result<Option<AppSummary>> {
        Ok(self.apps.read().iter().find(|a| a.id == app_id).cloned())
    }

    async fn load(&self, app_id: AppId) -> Result<Option<ConfigSnapshot>> {
        Ok(self.snapshots.read().get(&app_id).cloned())
    }

    async fn save(&self, config: &AppConfig) -> Result<()> {
        let snapshot = ConfigSnapshot {
            branding: Some(config.branding.clone()),
            appearance: Some(config.appearance.clone()),
            payment_options: Some(config.payment_options.clone()),
            product_display: Some(config.product_display.clone()),
            cart_config: Some(config.cart_config.clone()),
            shipping: Some(config.shipping.clone()),
            search: Some(config.search.clone()),
            order_management: Some(config.order_management.clone()),
        };
        self.snapshots.write().insert(config.app_id, snapshot);
        Ok(())
    }
}

/// The four sample applications from the dashboard listing
pub fn sample_apps() -> Vec<AppSummary> {
    vec![
        AppSummary {
            id: 1,
            name: "Spark App".to_string(),
            description: "Electric vehicle charging application".to_string(),
            logo: SAMPLE_LOGO.to_string(),
            last_modified: "2 days ago".to_string(),
            url: SAMPLE_URL.to_string(),
        },
        AppSummary {
            id: 2,
            name: "EB Charging".to_string(),
            description: "Energy management platform".to_string(),
            logo: SAMPLE_LOGO.to_string(),
            last_modified: "5 days ago".to_string(),
            url: SAMPLE_URL.to_string(),
        },
        AppSummary {
            id: 3,
            name: "EB Charging".to_string(),
            description: "Energy management platform".to_string(),
            logo: SAMPLE_LOGO.to_string(),
            last_modified: "5 days ago".to_string(),
            url: SAMPLE_URL.to_string(),
        },
        AppSummary {
            id: 4,
            name: "EB Charging".to_string(),
            description: "Energy management platform".to_string(),
            logo: SAMPLE_LOGO.to_string(),
            last_modified: "5 days ago".to_string(),
            url: SAMPLE_URL.to_string(),
        },
    ]
}

/// The partial snapshot the configure screen synthesizes per app: branding,
/// appearance, and payment options only. The remaining domains resolve to
/// defaults when an editor opens.
fn sample_snapshot(app: &AppSummary) -> ConfigSnapshot {
    ConfigSnapshot {
        branding: Some(BrandingConfig {
            name: app.name.clone(),
            description: app.description.clone(),
            logo: PLACEHOLDER_LOGO.to_string(),
        }),
        appearance: Some(AppearanceConfig {
            primary_color: "#6366f1".to_string(),
            secondary_color: "#8b5cf6".to_string(),
        }),
        payment_options: Some(PaymentOptions {
            credit_card: true,
            paypal: true,
            apple_pay: false,
            google_pay: false,
            bank_transfer: true,
        }),
        ..ConfigSnapshot::default()
    }
}
