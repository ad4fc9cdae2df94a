//! Configuration management for the RouteCast application
//!
//! Handles loading configuration from files and environment variables,
//! and provides validation for all configuration settings.

use crate::RouteCastError;
use anyhow::{Context, Result};
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration structure for the RouteCast application
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RouteCastConfig {
    /// Weather provider configuration
    #[serde(default)]
    pub weather: WeatherConfig,
    /// Web server configuration
    #[serde(default)]
    pub server: ServerConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Weather provider settings.
///
/// The credential is injected into the fetcher from here; nothing in the
/// pipeline reads it as ambient state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherConfig {
    /// OpenWeatherMap API key
    #[serde(default)]
    pub api_key: String,
    /// Base URL for the provider's data API
    #[serde(default = "default_weather_base_url")]
    pub base_url: String,
    /// Unit system sent with every forecast request
    #[serde(default = "default_weather_units")]
    pub units: String,
    /// Presentation language sent with every forecast request
    #[serde(default = "default_weather_language")]
    pub language: String,
}

/// Web server settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Listening port
    #[serde(default = "default_server_port")]
    pub port: u16,
    /// Directory holding the static frontend
    #[serde(default = "default_frontend_dir")]
    pub frontend_dir: String,
}

/// Logging settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (error, warn, info, debug, trace)
    #[serde(default = "default_log_level")]
    pub level: String,
}

// Default value functions
fn default_weather_base_url() -> String {
    "https://api.openweathermap.org/data/2.5".to_string()
}

fn default_weather_units() -> String {
    "metric".to_string()
}

fn default_weather_language() -> String {
    "en".to_string()
}

fn default_server_port() -> u16 {
    8080
}

fn default_frontend_dir() -> String {
    "frontend".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: default_weather_base_url(),
            units: default_weather_units(),
            language: default_weather_language(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: default_server_port(),
            frontend_dir: default_frontend_dir(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl RouteCastConfig {
    /// Load configuration from file and environment variables
    pub fn load() -> Result<Self> {
        Self::load_from_path(None)
    }

    /// Load configuration from specified path
    pub fn load_from_path(config_path: Option<PathBuf>) -> Result<Self> {
        let mut builder = Config::builder();

        let config_file = config_path.unwrap_or_else(|| {
            Self::get_config_path().unwrap_or_else(|| PathBuf::from("config.toml"))
        });

        if config_file.exists() {
            builder = builder.add_source(
                File::from(config_file)
                    .required(false)
                    .format(config::FileFormat::Toml),
            );
        }

        // Environment overrides, e.g. ROUTECAST_WEATHER__API_KEY
        builder = builder.add_source(
            Environment::with_prefix("ROUTECAST")
                .separator("__")
                .try_parsing(true),
        );

        let settings = builder
            .build()
            .with_context(|| "Failed to build configuration")?;

        let mut config: RouteCastConfig = settings
            .try_deserialize()
            .with_context(|| "Failed to deserialize configuration")?;

        config.apply_defaults();
        config.validate()?;

        Ok(config)
    }

    /// Get the default configuration file path
    #[must_use]
    pub fn get_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("routecast").join("config.toml"))
    }

    /// Apply default values to fields emptied by overrides
    pub fn apply_defaults(&mut self) {
        if self.weather.base_url.is_empty() {
            self.weather.base_url = default_weather_base_url();
        }
        if self.weather.units.is_empty() {
            self.weather.units = default_weather_units();
        }
        if self.weather.language.is_empty() {
            self.weather.language = default_weather_language();
        }
        if self.server.frontend_dir.is_empty() {
            self.server.frontend_dir = default_frontend_dir();
        }
        if self.logging.level.is_empty() {
            self.logging.level = default_log_level();
        }
    }

    /// Validate all configuration settings
    pub fn validate(&self) -> Result<()> {
        self.validate_api_key()?;
        self.validate_string_values()?;
        Ok(())
    }

    /// Validate the provider credential
    pub fn validate_api_key(&self) -> Result<()> {
        if self.weather.api_key.is_empty() {
            return Err(RouteCastError::config(
                "Weather API key is required. Set ROUTECAST_WEATHER__API_KEY or add it to config.toml.",
            )
            .into());
        }

        if self.weather.api_key.len() < 8 {
            return Err(RouteCastError::config(
                "Weather API key appears to be invalid (too short). Please check your API key.",
            )
            .into());
        }

        if self.weather.api_key.len() > 100 {
            return Err(RouteCastError::config(
                "Weather API key appears to be invalid (too long). Please check your API key.",
            )
            .into());
        }

        Ok(())
    }

    /// Validate string configuration values
    fn validate_string_values(&self) -> Result<()> {
        let valid_log_levels = ["error", "warn", "info", "debug", "trace"];
        if !valid_log_levels.contains(&self.logging.level.as_str()) {
            return Err(RouteCastError::config(format!(
                "Invalid log level '{}'. Must be one of: {}",
                self.logging.level,
                valid_log_levels.join(", ")
            ))
            .into());
        }

        let valid_units = ["metric", "imperial", "standard"];
        if !valid_units.contains(&self.weather.units.as_str()) {
            return Err(RouteCastError::config(format!(
                "Invalid unit system '{}'. Must be one of: {}",
                self.weather.units,
                valid_units.join(", ")
            ))
            .into());
        }

        if !self.weather.base_url.starts_with("http://")
            && !self.weather.base_url.starts_with("https://")
        {
            return Err(RouteCastError::config(
                "Weather API base URL must be a valid HTTP or HTTPS URL",
            )
            .into());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_with_key() -> RouteCastConfig {
        let mut config = RouteCastConfig::default();
        config.weather.api_key = "valid_api_key_123".to_string();
        config
    }

    #[test]
    fn test_default_config() {
        let config = RouteCastConfig::default();
        assert_eq!(
            config.weather.base_url,
            "https://api.openweathermap.org/data/2.5"
        );
        assert_eq!(config.weather.units, "metric");
        assert_eq!(config.weather.language, "en");
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.logging.level, "info");
        assert!(config.weather.api_key.is_empty());
    }

    #[test]
    fn test_config_validation_missing_api_key() {
        let config = RouteCastConfig::default();
        let result = config.validate();
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("API key"));
    }

    #[test]
    fn test_config_validation_valid_api_key() {
        let config = config_with_key();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_validation_invalid_log_level() {
        let mut config = config_with_key();
        config.logging.level = "invalid".to_string();
        let result = config.validate();
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("Invalid log level"));
    }

    #[test]
    fn test_config_validation_invalid_units() {
        let mut config = config_with_key();
        config.weather.units = "kelvin".to_string();
        let result = config.validate();
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("unit system"));
    }

    #[test]
    fn test_config_validation_invalid_base_url() {
        let mut config = config_with_key();
        config.weather.base_url = "ftp://example.org".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_apply_defaults_restores_emptied_fields() {
        let mut config = config_with_key();
        config.weather.units = String::new();
        config.logging.level = String::new();
        config.apply_defaults();
        assert_eq!(config.weather.units, "metric");
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_config_path_generation() {
        let path = RouteCastConfig::get_config_path();
        assert!(path.is_some());
        let path = path.unwrap();
        assert!(path.to_string_lossy().contains("routecast"));
        assert!(path.to_string_lossy().contains("config.toml"));
    }
}
