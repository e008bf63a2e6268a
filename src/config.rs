//! Runtime configuration.
//!
//! One environment variable supplies the backend base URL; everything else
//! has fixed defaults matching the original deployment.

use std::time::Duration;

/// Environment variable naming the backend base URL.
pub const API_URL_ENV: &str = "SQLFLOW_API_URL";

/// Development default, matching the original backend's port.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:5000";

/// Runtime configuration for the shell.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the SQL-Flow backend
    pub api_base_url: String,
    /// Upper bound on a single health probe
    pub probe_timeout: Duration,
    /// Interval between periodic health probes
    pub poll_interval: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            probe_timeout: Duration::from_secs(3),
            poll_interval: Duration::from_secs(30),
        }
    }
}

impl Config {
    /// Build the configuration from the environment.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(url) = std::env::var(API_URL_ENV) {
            let url = url.trim();
            if !url.is_empty() {
                config.api_base_url = url.trim_end_matches('/').to_string();
            }
        }
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_default_when_env_unset() {
        std::env::remove_var(API_URL_ENV);
        let config = Config::from_env();
        assert_eq!(config.api_base_url, DEFAULT_API_BASE_URL);
        assert_eq!(config.probe_timeout, Duration::from_secs(3));
        assert_eq!(config.poll_interval, Duration::from_secs(30));
    }

    #[test]
    #[serial]
    fn test_env_overrides_base_url() {
        std::env::set_var(API_URL_ENV, "https://sqlflow.example.com/");
        let config = Config::from_env();
        assert_eq!(config.api_base_url, "https://sqlflow.example.com");
        std::env::remove_var(API_URL_ENV);
    }

    #[test]
    #[serial]
    fn test_blank_env_value_ignored() {
        std::env::set_var(API_URL_ENV, "   ");
        let config = Config::from_env();
        assert_eq!(config.api_base_url, DEFAULT_API_BASE_URL);
        std::env::remove_var(API_URL_ENV);
    }
}
