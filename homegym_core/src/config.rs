//! Configuration file support for HomeGym.
//!
//! Configuration is loaded from `$XDG_CONFIG_HOME/homegym/config.toml`. It
//! carries the user's standing answers: which equipment the home gym has,
//! optional questionnaire defaults, and an optional fixed seed for
//! reproducible plans.

use crate::types::{Equipment, Intensity};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Application configuration
#[derive(Clone, Debug, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub equipment: EquipmentConfig,

    #[serde(default)]
    pub defaults: DefaultsConfig,

    #[serde(default)]
    pub engine: EngineConfig,
}

/// Standing equipment availability
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct EquipmentConfig {
    #[serde(default)]
    pub dumbbells: bool,
    #[serde(default)]
    pub bands: bool,
    #[serde(default)]
    pub bench: bool,
    #[serde(default)]
    pub pullup_bar: bool,
    #[serde(default = "default_bodyweight")]
    pub bodyweight: bool,
}

impl Default for EquipmentConfig {
    fn default() -> Self {
        Self {
            dumbbells: false,
            bands: false,
            bench: false,
            pullup_bar: false,
            bodyweight: default_bodyweight(),
        }
    }
}

impl EquipmentConfig {
    /// Convert to the engine's equipment input
    pub fn to_equipment(&self) -> Equipment {
        Equipment {
            dumbbells: self.dumbbells,
            bands: self.bands,
            bench: self.bench,
            pullup_bar: self.pullup_bar,
            bodyweight: self.bodyweight,
        }
    }
}

/// Standing questionnaire defaults used when flags are not given
#[derive(Clone, Debug, Serialize, Deserialize, Default)]
pub struct DefaultsConfig {
    pub training_days: Option<u8>,
    pub available_time: Option<u32>,
    pub intensity: Option<Intensity>,
}

/// Engine tuning
#[derive(Clone, Debug, Serialize, Deserialize, Default)]
pub struct EngineConfig {
    /// Fixed shuffle seed. Unset draws from entropy per run.
    pub seed: Option<u64>,
}

// Bodyweight is always on hand.
fn default_bodyweight() -> bool {
    true
}

impl Config {
    /// Load configuration from the standard config path
    pub fn load() -> Result<Self> {
        let config_path = Self::default_config_path();
        if config_path.exists() {
            Self::load_from(&config_path)
        } else {
            tracing::info!(
                "No config file found at {:?}, using defaults",
                config_path
            );
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific path
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        tracing::info!("Loaded config from {:?}", path);
        Ok(config)
    }

    /// Get the default config file path
    pub fn default_config_path() -> PathBuf {
        let base = dirs::config_dir().unwrap_or_else(|| {
            let home = std::env::var("HOME").unwrap_or_else(|_| ".".into());
            PathBuf::from(home).join(".config")
        });
        base.join("homegym").join("config.toml")
    }

    /// Save the current configuration to a specific path
    pub fn save_to(&self, path: &Path) -> Result<()> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(path, contents)?;
        tracing::info!("Saved config to {:?}", path);
        Ok(())
    }
}
