//! Configuration for the app config service module

use serde::Deserialize;
use std::time::Duration;

/// App config service configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Simulated commit latency in milliseconds
    #[serde(default = "default_commit_latency_ms")]
    pub commit_latency_ms: u64,

    /// Seed the in-memory store with the sample reference applications
    #[serde(default = "default_true")]
    pub seed_sample_apps: bool,

    /// Advisory length limit for the branding description
    ///
    /// Longer descriptions are logged on save, not rejected; enforcement
    /// belongs to whatever store eventually sits behind the repository trait.
    #[serde(default = "default_max_description_len")]
    pub max_description_len: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            commit_latency_ms: default_commit_latency_ms(),
            seed_sample_apps: true,
            max_description_len: default_max_description_len(),
        }
    }
}

impl Config {
    /// Parse a YAML configuration document
    pub fn from_yaml(yaml: &str) -> anyhow::Result<Self> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    pub fn commit_latency(&self) -> Duration {
        Duration::from_millis(self.commit_latency_ms)
    }
}

fn default_commit_latency_ms() -> u64 {
    // Matches the dashboard's simulated save delay
    1000
}

fn default_true() -> bool {
    true
}

fn default_max_description_len() -> usize {
    500
}
