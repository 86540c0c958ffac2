//! Common test utilities: store doubles and snapshot diffing
#![allow(dead_code)]

use anyhow::Result;
use app_config_service::config::Config;
use app_config_service::contract::model::{AppConfig, AppId, AppSummary, ConfigSnapshot};
use app_config_service::domain::{ConfigStore, MemoryNotifier, Service};
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use app_config_service::infra::storage::InMemoryConfigStore;

/// Service over a seeded in-memory store, with fast commits and a recording
/// notifier the test can inspect.
pub fn seeded_service() -> (Arc<Service>, MemoryNotifier) {
    seeded_service_with_latency(10)
}

pub fn seeded_service_with_latency(latency_ms: u64) -> (Arc<Service>, MemoryNotifier) {
    let notifier = MemoryNotifier::new();
    let config = Config {
        commit_latency_ms: latency_ms,
        ..Config::default()
    };
    let store = Arc::new(InMemoryConfigStore::seeded());
    let service = Arc::new(Service::new(store, Arc::new(notifier.clone()), config));
    (service, notifier)
}

/// Store whose saves always fail, for exercising the commit failure path
pub struct FailingStore {
    inner: InMemoryConfigStore,
}

impl FailingStore {
    pub fn new() -> Self {
        Self {
            inner: InMemoryConfigStore::seeded(),
        }
    }
}

#[async_trait]
impl ConfigStore for FailingStore {
    async fn list_apps(&self) -> Result<Vec<AppSummary>> {
        self.inner.list_apps().await
    }

    async fn find_app(&self, app_id: AppId) -> Result<Option<AppSummary>> {
        self.inner.find_app(app_id).await
    }

    async fn load(&self, app_id: AppId) -> Result<Option<ConfigSnapshot>> {
        self.inner.load(app_id).await
    }

    async fn save(&self, _config: &AppConfig) -> Result<()> {
        anyhow::bail!("remote store unavailable")
    }
}

/// Store that fails the first N saves and succeeds afterwards
pub struct FlakyStore {
    inner: InMemoryConfigStore,
    failures_left: AtomicUsize,
}

impl FlakyStore {
    pub fn failing_once() -> Self {
        Self {
            inner: InMemoryConfigStore::seeded(),
            failures_left: AtomicUsize::new(1),
        }
    }
}

#[async_trait]
impl ConfigStore for FlakyStore {
    async fn list_apps(&self) -> Result<Vec<AppSummary>> {
        self.inner.list_apps().await
    }

    async fn find_app(&self, app_id: AppId) -> Result<Option<AppSummary>> {
        self.inner.find_app(app_id).await
    }

    async fn load(&self, app_id: AppId) -> Result<Option<ConfigSnapshot>> {
        self.inner.load(app_id).await
    }

    async fn save(&self, config: &AppConfig) -> Result<()> {
        let left = self.failures_left.load(Ordering::Acquire);
        if left > 0 {
            self.failures_left.store(left - 1, Ordering::Release);
            anyhow::bail!("transient store failure");
        }
        self.inner.save(config).await
    }
}

/// Store whose saves block until released, for pinning a commit in flight
pub struct GatedStore {
    inner: InMemoryConfigStore,
    gate: Arc<tokio::sync::Notify>,
    save_count: AtomicUsize,
}

impl GatedStore {
    pub fn new() -> (Arc<Self>, Arc<tokio::sync::Notify>) {
        let gate = Arc::new(tokio::sync::Notify::new());
        let store = Arc::new(Self {
            inner: InMemoryConfigStore::seeded(),
            gate: gate.clone(),
            save_count: AtomicUsize::new(0),
        });
        (store, gate)
    }

    /// How many saves have started
    pub fn save_count(&self) -> usize {
        self.save_count.load(Ordering::Acquire)
    }
}

#[async_trait]
impl ConfigStore for GatedStore {
    async fn list_apps(&self) -> Result<Vec<AppSummary>> {
        self.inner.list_apps().await
    }

    async fn find_app(&self, app_id: AppId) -> Result<Option<AppSummary>> {
        self.inner.find_app(app_id).await
    }

    async fn load(&self, app_id: AppId) -> Result<Option<ConfigSnapshot>> {
        self.inner.load(app_id).await
    }

    async fn save(&self, config: &AppConfig) -> Result<()> {
        self.save_count.fetch_add(1, Ordering::AcqRel);
        self.gate.notified().await;
        self.inner.save(config).await
    }
}

/// Flatten a config into dotted JSON leaf paths for exact-diff assertions
pub fn leaf_paths(config: &AppConfig) -> BTreeMap<String, serde_json::Value> {
    let mut leaves = BTreeMap::new();
    let value = serde_json::to_value(config).expect("config serializes");
    flatten("", &value, &mut leaves);
    leaves
}

/// Paths whose values differ between two configs
pub fn changed_paths(before: &AppConfig, after: &AppConfig) -> Vec<String> {
    let old = leaf_paths(before);
    let new = leaf_paths(after);
    old.iter()
        .filter(|(path, value)| new.get(*path) != Some(value))
        .map(|(path, _)| path.clone())
        .chain(
            new.iter()
                .filter(|(path, _)| !old.contains_key(*path))
                .map(|(path, _)| path.clone()),
        )
        .collect()
}

fn flatten(prefix: &str, value: &serde_json::Value, out: &mut BTreeMap<String, serde_json::Value>) {
    match value {
        serde_json::Value::Object(map) => {
            for (key, child) in map {
                let path = if prefix.is_empty() {
                    key.clone()
                } else {
                    format!("{}.{}", prefix, key)
                };
                flatten(&path, child, out);
            }
        }
        serde_json::Value::Array(items) => {
            for (index, child) in items.iter().enumerate() {
                flatten(&format!("{}[{}]", prefix, index), child, out);
            }
        }
        _ => {
            out.insert(prefix.to_string(), value.clone());
        }
    }
}
