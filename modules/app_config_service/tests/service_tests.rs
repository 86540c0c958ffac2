//! Service and native client tests - catalog, snapshot resolution, saves

use app_config_service::config::Config;
use app_config_service::contract::model::{
    AppConfig, ConfigSnapshot, SearchConfig,
};
use app_config_service::contract::{AppConfigApi, ConfigError};
use app_config_service::domain::{MemoryNotifier, NoOpNotifier, Service};
use app_config_service::infra::storage::InMemoryConfigStore;
use std::sync::Arc;

mod common;
use common::seeded_service;

#[tokio::test]
async fn seeded_catalog_lists_the_sample_apps() {
    let (service, _notifier) = seeded_service();

    let apps = service.list_apps().await.unwrap();
    assert_eq!(apps.len(), 4);
    assert_eq!(apps[0].id, 1);
    assert_eq!(apps[0].name, "Spark App");
    assert_eq!(apps[0].description, "Electric vehicle charging application");
    assert_eq!(apps[1].name, "EB Charging");
}

#[tokio::test]
async fn unknown_app_is_an_error() {
    let (service, _notifier) = seeded_service();

    let err = service.get_config(99).await.unwrap_err();
    assert_eq!(err, ConfigError::AppNotFound { app_id: 99 });
}

#[tokio::test]
async fn stored_domains_win_and_missing_domains_default() {
    let (service, _notifier) = seeded_service();

    let config = service.get_config(1).await.unwrap();

    // The seeded snapshot carries branding, appearance, and payments
    assert_eq!(config.branding.name, "Spark App");
    assert_eq!(config.appearance.primary_color, "#6366f1");
    assert!(config.payment_options.credit_card);
    assert!(!config.payment_options.apple_pay);

    // Everything else resolves to documented defaults
    assert_eq!(config.shipping.base_delivery_charge, 40.0);
    assert_eq!(config.shipping.address_fields.len(), 7);
    assert_eq!(config.search.min_search_length, 2);
    assert_eq!(config.order_management.items_per_page, 10);
    assert_eq!(config.order_management.order_statuses.len(), 6);
    assert!(config.cart_config.enabled);
}

#[tokio::test]
async fn app_without_snapshot_gets_all_defaults() {
    let store = Arc::new(InMemoryConfigStore::seeded());
    store.add_app(app_config_service::contract::AppSummary {
        id: 5,
        name: "Test App".to_string(),
        description: "No stored snapshot".to_string(),
        logo: String::new(),
        last_modified: "just now".to_string(),
        url: String::new(),
    });
    let service = Service::new(store, Arc::new(NoOpNotifier), Config::default());

    let config = service.get_config(5).await.unwrap();
    assert_eq!(config, AppConfig::from_snapshot(5, ConfigSnapshot::default()));
}

#[tokio::test]
async fn partial_snapshot_only_overrides_its_domain() {
    let store = Arc::new(InMemoryConfigStore::seeded());
    store.put_snapshot(
        2,
        ConfigSnapshot {
            search: Some(SearchConfig {
                min_search_length: 4,
                ..AppConfig::from_snapshot(2, ConfigSnapshot::default()).search
            }),
            ..ConfigSnapshot::default()
        },
    );
    let service = Service::new(store, Arc::new(NoOpNotifier), Config::default());

    let config = service.get_config(2).await.unwrap();
    assert_eq!(config.search.min_search_length, 4);
    // Domains absent from the snapshot still default
    assert_eq!(config.order_management.items_per_page, 10);
    assert_eq!(config.branding.logo, app_config_service::contract::model::PLACEHOLDER_LOGO);
}

#[tokio::test]
async fn direct_save_round_trips_through_the_store() {
    let (service, _notifier) = seeded_service();

    let mut config = service.get_config(3).await.unwrap();
    config.search.min_search_length = 3;
    service.save_config(config.clone()).await.unwrap();

    let reloaded = service.get_config(3).await.unwrap();
    assert_eq!(reloaded, config);
}

#[tokio::test]
async fn over_limit_description_is_advisory_and_still_saves() {
    let (service, _notifier) = seeded_service();

    let mut config = service.get_config(4).await.unwrap();
    config.branding.description = "e".repeat(600);
    service.save_config(config.clone()).await.unwrap();

    let reloaded = service.get_config(4).await.unwrap();
    assert_eq!(reloaded.branding.description.chars().count(), 600);
}

#[tokio::test]
async fn direct_save_rejects_unknown_app() {
    let (service, _notifier) = seeded_service();

    let config = AppConfig::from_snapshot(42, ConfigSnapshot::default());
    let err = service.save_config(config).await.unwrap_err();
    assert_eq!(err, ConfigError::AppNotFound { app_id: 42 });
}

#[tokio::test]
async fn native_client_delegates_to_the_service() {
    let notifier = MemoryNotifier::new();
    let client = app_config_service::build_client(Config::default(), Arc::new(notifier));

    let apps = client.list_apps().await.unwrap();
    assert_eq!(apps.len(), 4);

    let app = client.get_app(1).await.unwrap();
    assert_eq!(app.name, "Spark App");

    let mut config = client.get_config(1).await.unwrap();
    config.cart_config.enabled = false;
    client.save_config(config.clone()).await.unwrap();
    assert_eq!(client.get_config(1).await.unwrap(), config);

    assert_eq!(
        client.get_app(9).await.unwrap_err(),
        ConfigError::AppNotFound { app_id: 9 }
    );
}

#[tokio::test]
async fn unseeded_service_has_empty_catalog() {
    let client = app_config_service::build_client(
        Config {
            seed_sample_apps: false,
            ..Config::default()
        },
        Arc::new(NoOpNotifier),
    );

    assert!(client.list_apps().await.unwrap().is_empty());
}

#[test]
fn snapshot_serializes_with_dashboard_field_names() {
    let config = AppConfig::from_snapshot(1, ConfigSnapshot::default());
    let value = serde_json::to_value(&config).unwrap();

    assert!(value.get("paymentOptions").is_some());
    assert_eq!(value["orderManagement"]["itemsPerPage"], 10);
    assert_eq!(value["shipping"]["addressFields"][3]["key"], "pincode");
    assert_eq!(value["productDisplay"]["layout"], "grid");
    assert_eq!(value["search"]["filterOptions"][0]["type"], "price");

    // Partial snapshots omit absent domains entirely
    let partial = serde_json::to_value(ConfigSnapshot::default()).unwrap();
    assert_eq!(partial, serde_json::json!({}));
}
