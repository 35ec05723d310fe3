//! Configuration file support.
//!
//! An optional TOML file supplies defaults for the port, brightness and
//! speed. Command line flags take precedence over it.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use t9_led_hw::Level;

/// Main configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// LED configuration
    #[serde(default)]
    pub led: LedConfig,
}

/// LED device configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LedConfig {
    /// Serial port path
    #[serde(default = "default_port")]
    pub port: String,

    /// Brightness (1-5)
    #[serde(default = "default_level")]
    pub brightness: u8,

    /// Speed (1-5)
    #[serde(default = "default_level")]
    pub speed: u8,
}

impl Default for LedConfig {
    fn default() -> Self {
        Self {
            port: default_port(),
            brightness: default_level(),
            speed: default_level(),
        }
    }
}

impl LedConfig {
    /// Returns the configured brightness, validated.
    pub fn brightness(&self) -> Result<Level> {
        Level::try_from(self.brightness).context("Invalid brightness in configuration")
    }

    /// Returns the configured speed, validated.
    pub fn speed(&self) -> Result<Level> {
        Level::try_from(self.speed).context("Invalid speed in configuration")
    }
}

fn default_port() -> String {
    t9_led_hw::default_port().to_string()
}

fn default_level() -> u8 {
    Level::default().get()
}

impl Config {
    /// Loads configuration from a TOML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content =
            std::fs::read_to_string(path.as_ref()).context("Failed to read configuration file")?;
        let config: Config = toml::from_str(&content).context("Failed to parse configuration")?;
        Ok(config)
    }
}
