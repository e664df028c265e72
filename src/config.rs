//! Bridge configuration
//!
//! Mirrors the host-side settings file: where the calibration file
//! lives and how often the update loop should re-read it. Loaded from
//! JSON so the host can tweak the cadence without recompiling; any
//! failure falls back to defaults with a warning, the same policy the
//! calibration load itself follows.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Host-facing bridge settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BridgeConfig {
    /// Path the store loads calibration values from
    pub calibration_path: String,
    /// Reload cadence in host ticks; 0 means load once at startup
    pub reload_every_n_ticks: u64,
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self {
            calibration_path: "assets/calibration.json".to_string(),
            reload_every_n_ticks: 0,
        }
    }
}

impl BridgeConfig {
    /// Load configuration from a JSON file
    ///
    /// # Arguments
    /// * `path` - Path to JSON config file
    ///
    /// Returns defaults if the file cannot be read or parsed.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Self {
        match fs::read_to_string(&path) {
            Ok(contents) => match serde_json::from_str(&contents) {
                Ok(config) => {
                    log::info!("[Config] Loaded bridge configuration from {:?}", path.as_ref());
                    config
                }
                Err(err) => {
                    log::warn!(
                        "[Config] Failed to parse JSON from {:?}: {}. Using defaults.",
                        path.as_ref(),
                        err
                    );
                    Self::default()
                }
            },
            Err(err) => {
                log::warn!(
                    "[Config] Failed to read config file {:?}: {}. Using defaults.",
                    path.as_ref(),
                    err
                );
                Self::default()
            }
        }
    }
}
