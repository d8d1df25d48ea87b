//! Engine configuration from environment variables and optional TOML files.

use std::env;
use std::fs;
use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::GeographicLocation;

/// Default collaborator fetch deadline. Geocoding and pass lookups normally
/// answer well within this; past it the engine scores with defaults.
const DEFAULT_FETCH_TIMEOUT_MS: u64 = 800;

/// Manual-mode fallback coordinates (Madrid).
const DEFAULT_LATITUDE: f64 = 40.4168;
const DEFAULT_LONGITUDE: f64 = -3.7038;

/// Placeholder name shown when geocoding cannot resolve the location.
const DEFAULT_PLACE_NAME: &str = "your location";

/// Errors raised while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Runtime configuration for the evaluation engine.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Deadline for each collaborator fetch before falling back to defaults
    pub fetch_timeout: Duration,
    /// Coordinates used when the caller supplies none (manual mode)
    pub default_location: GeographicLocation,
    /// Place name used when geocoding fails or times out
    pub fallback_place_name: String,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            fetch_timeout: Duration::from_millis(DEFAULT_FETCH_TIMEOUT_MS),
            default_location: GeographicLocation::new(DEFAULT_LATITUDE, DEFAULT_LONGITUDE),
            fallback_place_name: DEFAULT_PLACE_NAME.to_string(),
        }
    }
}

impl EngineConfig {
    /// Build a configuration from environment variables, falling back to the
    /// defaults for anything unset or unparsable.
    ///
    /// # Environment Variables
    /// - `FETCH_TIMEOUT_MS` (optional, default: 800): collaborator fetch deadline
    /// - `DEFAULT_LAT` (optional, default: 40.4168): manual-mode latitude
    /// - `DEFAULT_LON` (optional, default: -3.7038): manual-mode longitude
    /// - `FALLBACK_PLACE_NAME` (optional): geocoding-failure display name
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let fetch_timeout = env::var("FETCH_TIMEOUT_MS")
            .ok()
            .and_then(|s| s.parse().ok())
            .map(Duration::from_millis)
            .unwrap_or(defaults.fetch_timeout);

        let latitude = env::var("DEFAULT_LAT")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(defaults.default_location.latitude);
        let longitude = env::var("DEFAULT_LON")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(defaults.default_location.longitude);

        let fallback_place_name =
            env::var("FALLBACK_PLACE_NAME").unwrap_or(defaults.fallback_place_name);

        Self {
            fetch_timeout,
            default_location: GeographicLocation::new(latitude, longitude),
            fallback_place_name,
        }
    }

    /// Load a configuration from a TOML file. Missing fields take the built-in
    /// defaults.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path)?;
        let settings: EngineSettings = toml::from_str(&contents)?;
        Ok(settings.into())
    }
}

/// TOML representation of [`EngineConfig`], with serde defaults so partial
/// files are accepted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineSettings {
    #[serde(default = "default_fetch_timeout_ms")]
    pub fetch_timeout_ms: u64,
    #[serde(default = "default_latitude")]
    pub default_latitude: f64,
    #[serde(default = "default_longitude")]
    pub default_longitude: f64,
    #[serde(default = "default_place_name")]
    pub fallback_place_name: String,
}

fn default_fetch_timeout_ms() -> u64 {
    DEFAULT_FETCH_TIMEOUT_MS
}

fn default_latitude() -> f64 {
    DEFAULT_LATITUDE
}

fn default_longitude() -> f64 {
    DEFAULT_LONGITUDE
}

fn default_place_name() -> String {
    DEFAULT_PLACE_NAME.to_string()
}

impl From<EngineSettings> for EngineConfig {
    fn from(settings: EngineSettings) -> Self {
        Self {
            fetch_timeout: Duration::from_millis(settings.fetch_timeout_ms),
            default_location: GeographicLocation::new(
                settings.default_latitude,
                settings.default_longitude,
            ),
            fallback_place_name: settings.fallback_place_name,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = EngineConfig::default();
        assert_eq!(config.fetch_timeout, Duration::from_millis(800));
        assert_eq!(config.default_location.latitude, 40.4168);
        assert_eq!(config.default_location.longitude, -3.7038);
        assert_eq!(config.fallback_place_name, "your location");
    }

    #[test]
    fn test_settings_parse_partial_toml() {
        let settings: EngineSettings = toml::from_str("fetch_timeout_ms = 250").unwrap();
        let config: EngineConfig = settings.into();
        assert_eq!(config.fetch_timeout, Duration::from_millis(250));
        assert_eq!(config.default_location.latitude, 40.4168);
    }

    #[test]
    fn test_settings_parse_full_toml() {
        let toml_str = r#"
            fetch_timeout_ms = 1500
            default_latitude = 28.7624
            default_longitude = -17.8892
            fallback_place_name = "La Palma"
        "#;
        let settings: EngineSettings = toml::from_str(toml_str).unwrap();
        let config: EngineConfig = settings.into();
        assert_eq!(config.fetch_timeout, Duration::from_millis(1500));
        assert_eq!(config.default_location.latitude, 28.7624);
        assert_eq!(config.fallback_place_name, "La Palma");
    }
}
