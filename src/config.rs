//! Configuration management for Pagewait

use crate::{Error, Result};
use serde::Deserialize;
use std::env;

/// Environment configuration for page objects.
///
/// Loaded once by the test-setup code and passed to each page object's
/// constructor; immutable after load. Corresponds to the `application.url`
/// style property file of classic page-object suites.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Base URL the page objects navigate to
    pub application_url: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            application_url: "about:blank".to_string(),
        }
    }
}

impl Config {
    /// Create a configuration with the given base URL
    pub fn with_url<S: Into<String>>(url: S) -> Self {
        Self {
            application_url: url.into(),
        }
    }

    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        let mut config = Config::default();

        if let Ok(url) = env::var("PAGEWAIT_APPLICATION_URL") {
            if url.is_empty() {
                return Err(Error::configuration("Empty PAGEWAIT_APPLICATION_URL"));
            }
            config.application_url = url;
        }

        Ok(config)
    }

    /// Load configuration from a TOML file
    pub fn from_file(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| Error::configuration(format!("Failed to read config file: {}", e)))?;

        let config: Config = toml::from_str(&content)
            .map_err(|e| Error::configuration(format!("Failed to parse config: {}", e)))?;

        Ok(config)
    }
}
