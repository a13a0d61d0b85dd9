//! Configuration resolution for Coldstore.
//!
//! Implements hierarchical config resolution:
//! 1. Built-in defaults
//! 2. Global config (`<config dir>/coldstore/settings.json`)
//! 3. Explicit config file (e.g. `--config` on the CLI)
//! 4. Environment variables
//! 5. CLI arguments (highest priority, applied by the caller)
//!
//! Files may be partial. Layers are merged key by key, so a file that only
//! sets `api.base_url` leaves every other value from the layer below intact.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use crate::error::{Error, Result};

/// Production API endpoint used when nothing else is configured.
pub const DEFAULT_BASE_URL: &str = "https://coldstoragehub.onrender.com/API";

/// Complete Coldstore configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct Config {
    pub api: ApiConfig,
    pub retry: RetryConfig,
    pub log: LogConfig,
}

/// Remote API connection settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ApiConfig {
    /// Base URL every endpoint path is appended to.
    pub base_url: String,
    /// Per-request timeout. `None` waits indefinitely.
    pub timeout_secs: Option<u64>,
    /// Extra static headers attached to every request.
    pub headers: HashMap<String, String>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: None,
            headers: HashMap::new(),
        }
    }
}

/// Retry settings. A single attempt means failures surface immediately.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct RetryConfig {
    pub max_attempts: u32,
    pub initial_delay_ms: u64,
    pub max_delay_ms: u64,
    pub multiplier: f64,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_attempts: 1,
            initial_delay_ms: 500,
            max_delay_ms: 10_000,
            multiplier: 2.0,
        }
    }
}

/// Logging output settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct LogConfig {
    pub level: String,
    pub json: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: false,
        }
    }
}

/// Load configuration with hierarchical resolution.
pub fn load_config(explicit_file: Option<&Path>) -> Result<Config> {
    let mut merged = serde_json::to_value(Config::default())?;

    if let Some(global_path) = global_config_path() {
        if global_path.exists() {
            merge_values(&mut merged, load_config_file(&global_path)?);
        }
    }

    if let Some(path) = explicit_file {
        if !path.exists() {
            return Err(Error::Config(format!(
                "Config file {} does not exist",
                path.display()
            )));
        }
        merge_values(&mut merged, load_config_file(path)?);
    }

    let mut config: Config = serde_json::from_value(merged)
        .map_err(|e| Error::Config(format!("Invalid configuration: {e}")))?;

    apply_env_overrides(&mut config, |key| std::env::var(key).ok());

    Ok(config)
}

/// Get the global config file path.
pub fn global_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("coldstore").join("settings.json"))
}

fn load_config_file(path: &Path) -> Result<Value> {
    debug!(path = %path.display(), "Loading config file");
    let content = std::fs::read_to_string(path).map_err(|e| {
        Error::Config(format!("Failed to read config file {}: {}", path.display(), e))
    })?;
    serde_json::from_str(&content).map_err(|e| {
        Error::Config(format!("Failed to parse config file {}: {}", path.display(), e))
    })
}

/// Deep-merge `overlay` into `base`. Objects merge per key, everything else
/// is replaced.
fn merge_values(base: &mut Value, overlay: Value) {
    match (base, overlay) {
        (Value::Object(base_map), Value::Object(overlay_map)) => {
            for (key, value) in overlay_map {
                match base_map.get_mut(&key) {
                    Some(existing) => merge_values(existing, value),
                    None => {
                        base_map.insert(key, value);
                    }
                }
            }
        }
        (slot, value) => *slot = value,
    }
}

fn apply_env_overrides(config: &mut Config, lookup: impl Fn(&str) -> Option<String>) {
    if let Some(val) = lookup("COLDSTORE_API_URL") {
        config.api.base_url = val;
    }
    if let Some(val) = lookup("COLDSTORE_TIMEOUT_SECS") {
        if let Ok(n) = val.parse() {
            config.api.timeout_secs = Some(n);
        }
    }
    if let Some(val) = lookup("COLDSTORE_MAX_ATTEMPTS") {
        if let Ok(n) = val.parse() {
            config.retry.max_attempts = n;
        }
    }
    if let Some(val) = lookup("COLDSTORE_LOG_LEVEL") {
        config.log.level = val;
    }
    if let Some(val) = lookup("COLDSTORE_LOG_JSON") {
        config.log.json = matches!(val.as_str(), "1" | "true" | "yes");
    }
}
