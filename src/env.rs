//! Environment variable configuration for nuvalidate.
//!
//! This module provides a structured way to access environment variables
//! using the `envy` crate with serde deserialization.

use serde::Deserialize;

use crate::nu::client::DEFAULT_SERVICE_URL;

/// Environment configuration for the application.
///
/// All fields are optional.
#[derive(Debug, Deserialize, Clone, Default)]
pub struct EnvConfig {
    /// Base URL of the checker service to talk to.
    ///
    /// Set via: `NU_SERVICE_URL=https://validator.example/`
    pub nu_service_url: Option<String>,

    /// Enable debug mode for error output.
    ///
    /// When enabled, errors are additionally printed with Debug
    /// formatting on stderr.
    ///
    /// Set via: `DEV_DEBUG=1` or `DEV_DEBUG=true`
    #[serde(default)]
    pub dev_debug: bool,
}

impl EnvConfig {
    /// Load configuration from environment variables.
    ///
    /// If parsing fails or variables are not set, returns the default
    /// config.
    pub fn load() -> Self {
        envy::from_env::<EnvConfig>().unwrap_or_default()
    }

    /// The service endpoint to use: the environment override if set, the
    /// hosted validator.nu instance otherwise.
    pub fn service_url(&self) -> &str {
        self.nu_service_url.as_deref().unwrap_or(DEFAULT_SERVICE_URL)
    }

    /// Check if debug mode is enabled.
    pub fn is_debug_mode(&self) -> bool {
        self.dev_debug
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = EnvConfig::default();
        assert!(!config.is_debug_mode());
        assert_eq!(config.service_url(), DEFAULT_SERVICE_URL);
    }

    #[test]
    fn test_service_url_override() {
        let config = EnvConfig {
            nu_service_url: Some("https://validator.example/".to_string()),
            dev_debug: false,
        };
        assert_eq!(config.service_url(), "https://validator.example/");
    }
}
