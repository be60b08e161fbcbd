//! # Configuration Management
//!
//! This module handles loading and parsing configuration from the
//! plant-tracker.toml file. It provides a centralized way to configure the
//! database connection, the account scope, display refresh and the defaults
//! used when adding plants.

use crate::frequency::DEFAULT_FREQUENCY;
use crate::{AccountScope, DEFAULT_IMAGE_URL};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::{info, warn};

/// Default configuration file name, looked up in the working directory.
pub const CONFIG_FILE: &str = "plant-tracker.toml";

/// Environment variable that overrides `database.uri`.
pub const MONGO_URI_ENV: &str = "PLANT_TRACKER_MONGO_URI";

/// Application configuration loaded from plant-tracker.toml
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub database: DatabaseConfig,
    #[serde(default)]
    pub account: AccountConfig,
    #[serde(default)]
    pub display: DisplayConfig,
    #[serde(default)]
    pub defaults: DefaultsConfig,
}

/// MongoDB connection settings
#[derive(Debug, Deserialize, Serialize)]
#[serde(default)]
pub struct DatabaseConfig {
    pub uri: String,
    pub name: String,
    pub collection: String,
}

/// Which account's plants to work with.
///
/// Stands in for an authenticated user until an auth layer exists.
#[derive(Debug, Deserialize, Serialize)]
#[serde(default)]
pub struct AccountConfig {
    pub scope: String,
}

/// Terminal display settings
#[derive(Debug, Deserialize, Serialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Seconds between re-renders in watch mode
    pub refresh_seconds: u64,
    /// Preview the theme at this hour instead of the real one (0-23)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub simulated_hour: Option<u32>,
}

/// Values used when the add command leaves a field out
#[derive(Debug, Deserialize, Serialize)]
#[serde(default)]
pub struct DefaultsConfig {
    pub image_url: String,
    pub water_frequency: String,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        DatabaseConfig {
            uri: "mongodb://localhost:27017".to_string(),
            name: "plant_tracker".to_string(),
            collection: "plants".to_string(),
        }
    }
}

impl Default for AccountConfig {
    fn default() -> Self {
        AccountConfig {
            scope: "1".to_string(),
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        DisplayConfig {
            refresh_seconds: 60,
            simulated_hour: None,
        }
    }
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        DefaultsConfig {
            image_url: DEFAULT_IMAGE_URL.to_string(),
            water_frequency: DEFAULT_FREQUENCY.to_string(),
        }
    }
}

impl Config {
    /// Load configuration from specified path
    /// Falls back to default configuration if file doesn't exist or is invalid
    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref();
        let mut config = match fs::read_to_string(path) {
            Ok(contents) => match toml::from_str::<Config>(&contents) {
                Ok(config) => {
                    info!(path = %path.display(), scope = %config.account.scope, "loaded configuration");
                    config
                }
                Err(e) => {
                    warn!(path = %path.display(), "invalid config file format: {e}");
                    warn!("using default configuration");
                    Self::default()
                }
            },
            Err(_) => {
                info!(path = %path.display(), "no config file found, using default configuration");
                Self::default()
            }
        };

        if let Ok(uri) = std::env::var(MONGO_URI_ENV) {
            config.database.uri = uri;
        }
        config.sanitize();
        config
    }

    /// Write the configuration as TOML to the specified path
    pub fn save_to_path<P: AsRef<Path>>(&self, path: P) -> Result<(), Box<dyn std::error::Error>> {
        let contents = toml::to_string_pretty(self)?;
        fs::write(&path, contents)?;
        info!(path = %path.as_ref().display(), "configuration saved");
        Ok(())
    }

    pub fn scope(&self) -> AccountScope {
        AccountScope::new(self.account.scope.clone())
    }

    fn sanitize(&mut self) {
        if let Some(hour) = self.display.simulated_hour {
            if hour > 23 {
                warn!("ignoring display.simulated_hour = {hour}, expected 0-23");
                self.display.simulated_hour = None;
            }
        }
        if self.display.refresh_seconds == 0 {
            warn!("display.refresh_seconds must be positive, using 60");
            self.display.refresh_seconds = 60;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.database.name, "plant_tracker");
        assert_eq!(config.database.collection, "plants");
        assert_eq!(config.account.scope, "1");
        assert_eq!(config.display.refresh_seconds, 60);
        assert_eq!(config.display.simulated_hour, None);
        assert_eq!(config.defaults.water_frequency, "Every 7 days");
    }

    #[test]
    fn test_config_roundtrip() {
        let mut config = Config::default();
        config.display.simulated_hour = Some(21);
        let toml_str = toml::to_string(&config).unwrap();
        let parsed: Config = toml::from_str(&toml_str).unwrap();
        assert_eq!(config.database.uri, parsed.database.uri);
        assert_eq!(parsed.display.simulated_hour, Some(21));
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let parsed: Config = toml::from_str("[account]\nscope = \"alice\"\n").unwrap();
        assert_eq!(parsed.scope(), AccountScope::new("alice"));
        assert_eq!(parsed.database.collection, "plants");
        assert_eq!(parsed.display.refresh_seconds, 60);
    }

    #[test]
    fn test_load_nonexistent_file() {
        let config = Config::load_from_path("/nonexistent/path");
        // Should fallback to default
        assert_eq!(config.account.scope, "1");
    }

    #[test]
    fn test_out_of_range_simulated_hour_is_dropped() {
        let file = NamedTempFile::new().unwrap();
        fs::write(file.path(), "[display]\nsimulated_hour = 30\nrefresh_seconds = 0\n").unwrap();

        let config = Config::load_from_path(file.path());
        assert_eq!(config.display.simulated_hour, None);
        assert_eq!(config.display.refresh_seconds, 60);
    }

    #[test]
    fn test_env_overrides_database_uri() {
        std::env::set_var(MONGO_URI_ENV, "mongodb://db.internal:27017");
        let config = Config::load_from_path("/nonexistent/path");
        std::env::remove_var(MONGO_URI_ENV);

        assert_eq!(config.database.uri, "mongodb://db.internal:27017");
        assert_eq!(config.database.name, "plant_tracker");
    }

    #[test]
    fn test_save_and_reload() {
        let file = NamedTempFile::new().unwrap();
        let mut config = Config::default();
        config.account.scope = "garden".to_string();
        config.save_to_path(file.path()).unwrap();

        let loaded = Config::load_from_path(file.path());
        assert_eq!(loaded.account.scope, "garden");
    }
}
