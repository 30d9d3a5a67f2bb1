//! Configuration schema definitions

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration schema
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ConfigSchema {
    #[serde(default)]
    pub store: StoreConfig,

    #[serde(default)]
    pub search: SearchConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Record store configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Path to the JSON record store
    #[serde(default = "default_store_path")]
    pub path: PathBuf,

    /// Start from an empty store when the file does not exist yet
    #[serde(default)]
    pub create_if_missing: bool,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            path: default_store_path(),
            create_if_missing: false,
        }
    }
}

fn default_store_path() -> PathBuf {
    PathBuf::from("food_orders.json")
}

/// Fuzzy search configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Edit distance tolerance used when the caller does not pass one
    #[serde(default = "default_max_distance")]
    pub default_max_distance: i64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            default_max_distance: default_max_distance(),
        }
    }
}

fn default_max_distance() -> i64 {
    1
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (overridden by `RUST_LOG`)
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Emit JSON lines instead of compact text
    #[serde(default)]
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}

fn default_log_level() -> String {
    "warn".to_string()
}
