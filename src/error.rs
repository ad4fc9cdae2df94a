//! Error types and handling for the RouteCast application

use thiserror::Error;

/// Main error type for the RouteCast application
#[derive(Error, Debug)]
pub enum RouteCastError {
    /// Configuration-related errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Forecast retrieval failures; every provider-side cause collapses here
    #[error("Forecast fetch failed for '{city}': {message}")]
    Fetch { city: String, message: String },

    /// Input validation errors
    #[error("Invalid input: {message}")]
    Validation { message: String },
}

impl RouteCastError {
    /// Create a new configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a new fetch error for a city
    pub fn fetch<C: Into<String>, S: Into<String>>(city: C, message: S) -> Self {
        Self::Fetch {
            city: city.into(),
            message: message.into(),
        }
    }

    /// Create a new validation error
    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let config_err = RouteCastError::config("missing API key");
        assert!(matches!(config_err, RouteCastError::Config { .. }));

        let fetch_err = RouteCastError::fetch("Paris", "connection failed");
        assert!(matches!(fetch_err, RouteCastError::Fetch { .. }));

        let validation_err = RouteCastError::validation("bad day horizon");
        assert!(matches!(validation_err, RouteCastError::Validation { .. }));
    }

    #[test]
    fn test_fetch_error_names_the_city() {
        let err = RouteCastError::fetch("Berlin", "provider answered 404");
        let message = err.to_string();
        assert!(message.contains("Berlin"));
        assert!(message.contains("404"));
    }
}
