use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::storage::FileStore;

/// Root configuration container.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub greeting: GreetingConfig,
    #[serde(default)]
    pub lookup: LookupConfig,
}

/// Where persisted values live.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Storage file path. Defaults to `<data_dir>/pokeinfo/storage.json`.
    #[serde(default)]
    pub path: Option<PathBuf>,
}

impl StorageConfig {
    pub fn resolved_path(&self) -> PathBuf {
        self.path.clone().unwrap_or_else(FileStore::default_path)
    }
}

/// Greeting form settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GreetingConfig {
    /// Storage slot holding the name.
    #[serde(default = "default_greeting_key")]
    pub key: String,
    /// Name used when nothing is stored yet.
    #[serde(default)]
    pub default_name: String,
}

/// Remote pokemon lookup settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LookupConfig {
    /// GraphQL endpoint.
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    /// Total request timeout in seconds (default: 10).
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u32,
    /// Connection timeout in seconds (default: 5).
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_seconds: u32,
    /// Artificial delay before each request, in milliseconds (default: 0).
    #[serde(default)]
    pub delay_ms: u64,
}

impl LookupConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(u64::from(self.timeout_seconds))
    }

    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(u64::from(self.connect_timeout_seconds))
    }

    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }
}

fn default_greeting_key() -> String {
    "name".to_string()
}

fn default_endpoint() -> String {
    "https://graphql-pokemon2.vercel.app/".to_string()
}

fn default_timeout() -> u32 {
    10
}

fn default_connect_timeout() -> u32 {
    5
}

impl Default for GreetingConfig {
    fn default() -> Self {
        Self {
            key: default_greeting_key(),
            default_name: String::new(),
        }
    }
}

impl Default for LookupConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            timeout_seconds: default_timeout(),
            connect_timeout_seconds: default_connect_timeout(),
            delay_ms: 0,
        }
    }
}
