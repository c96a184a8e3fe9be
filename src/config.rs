//! Watchdog configuration.
//!
//! An immutable snapshot per load. The host-side loader owns refreshing it;
//! the watchdog core only ever reads the snapshot it was constructed with.
//! Validation (delay non-negative, non-empty map identifier) is the
//! loader's concern and is not repeated here.

use std::fs;
use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Idle watchdog configuration.
///
/// Field names in the JSON file are PascalCase (`Delay`, `DefaultMap`, ...),
/// and every field falls back to its default when absent, so a sparse or
/// empty document is accepted.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct Config {
    /// Seconds an empty session must stay empty before a map change is
    /// requested.
    pub delay: f32,
    /// Map to change to. A `ws:` prefix denotes a workshop-hosted map ID.
    pub default_map: String,
    /// Force a map change to `default_map` when the host first boots.
    pub change_initial: bool,
    /// Whether the host boots into a workshop collection. Affects how many
    /// internal reloads the engine performs at startup.
    pub workshop_collection: bool,
    /// Emit per-event debug traces.
    pub debug: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            delay: 3600.0,
            default_map: "de_dust2".to_string(),
            change_initial: false,
            workshop_collection: false,
            debug: false,
        }
    }
}

impl Config {
    /// Load a config snapshot from a JSON file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }

    /// Configured idle delay as a [`Duration`].
    pub fn idle_delay(&self) -> Duration {
        Duration::from_secs_f32(self.delay)
    }
}

/// Configuration load errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Config file could not be read.
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    /// Config file is not valid JSON.
    #[error("failed to parse config file: {0}")]
    Parse(#[from] serde_json::Error),
}
