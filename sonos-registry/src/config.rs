//! Configuration for the speaker registry
//!
//! The alias tables and discovery timings consumed at construction. Keys the
//! registry does not know about (such as the HTTP layer's `host` and `port`)
//! are ignored so a single daemon config file can carry both.
//!
//! ```yaml
//! speakers:
//!   lr: Living Room
//!   kitchen: Kitchen
//! playlists:
//!   altwave: Alt Wave
//! discovery_timeout: 5
//! sweep_interval: 30
//! ```

use std::collections::BTreeMap;
use std::path::Path;
use std::time::Duration;

use serde::Deserialize;
use thiserror::Error;

/// Configuration loading and validation errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("Invalid config: {0}")]
    Invalid(String),
}

/// Configuration for [`SpeakerRegistry`](crate::SpeakerRegistry)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RegistryConfig {
    /// Speaker alias -> device name
    pub speakers: BTreeMap<String, String>,

    /// Playlist alias -> favorite title
    pub playlists: BTreeMap<String, String>,

    /// Upper bound for a single discovery sweep
    /// Default: 5 seconds
    #[serde(deserialize_with = "de_secs")]
    pub discovery_timeout: Duration,

    /// Delay between background discovery sweeps
    /// Default: 30 seconds
    #[serde(deserialize_with = "de_secs")]
    pub sweep_interval: Duration,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            speakers: BTreeMap::new(),
            playlists: BTreeMap::new(),
            discovery_timeout: Duration::from_secs(5),
            sweep_interval: Duration::from_secs(30),
        }
    }
}

impl RegistryConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse and validate a YAML document
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        // An empty document deserializes to unit, not to a mapping
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a YAML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    pub fn with_speaker_alias(mut self, alias: impl Into<String>, name: impl Into<String>) -> Self {
        self.speakers.insert(alias.into(), name.into());
        self
    }

    pub fn with_playlist_alias(
        mut self,
        alias: impl Into<String>,
        title: impl Into<String>,
    ) -> Self {
        self.playlists.insert(alias.into(), title.into());
        self
    }

    pub fn with_discovery_timeout(mut self, timeout: Duration) -> Self {
        self.discovery_timeout = timeout;
        self
    }

    pub fn with_sweep_interval(mut self, interval: Duration) -> Self {
        self.sweep_interval = interval;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        check_table("speakers", &self.speakers)?;
        check_table("playlists", &self.playlists)?;

        if self.discovery_timeout.is_zero() {
            return Err(ConfigError::Invalid(
                "discovery_timeout must be greater than zero".to_string(),
            ));
        }
        if self.sweep_interval.is_zero() {
            return Err(ConfigError::Invalid(
                "sweep_interval must be greater than zero".to_string(),
            ));
        }

        Ok(())
    }
}

fn check_table(table: &str, entries: &BTreeMap<String, String>) -> Result<(), ConfigError> {
    for (alias, target) in entries {
        if alias.trim().is_empty() {
            return Err(ConfigError::Invalid(format!("{table}: empty alias")));
        }
        if target.trim().is_empty() {
            return Err(ConfigError::Invalid(format!(
                "{table}: alias '{alias}' has an empty target"
            )));
        }
    }
    Ok(())
}

fn de_secs<'de, D>(deserializer: D) -> Result<Duration, D::Error>
where
    D: serde::Deserializer<'de>,
{
    u64::deserialize(deserializer).map(Duration::from_secs)
}
