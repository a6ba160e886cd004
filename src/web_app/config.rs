// web_app/config.rs - Server configuration from the environment
//
// Values come from the process environment, optionally seeded from a .env
// file. Leptos' own options (site address, pkg dir) stay in Cargo.toml
// metadata and are read by leptos_config in main.rs.

use std::env;
use std::time::Duration;
use thiserror::Error;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:5000/api";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{name} must be a positive whole number of seconds, got '{value}'")]
    InvalidTimeout { name: &'static str, value: String },

    #[error("{name} must be an absolute http(s) URL, got '{value}'")]
    InvalidUrl { name: &'static str, value: String },
}

/// Settings for talking to the backend API
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SiteConfig {
    /// Base URL every backend path is appended to, e.g. `http://host/api`
    pub api_base_url: String,
    /// Transport-level timeout for each backend request
    pub request_timeout: Duration,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            request_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl SiteConfig {
    /// Load from `.env` and the environment
    ///
    /// Reads API_BASE_URL and API_TIMEOUT_SECS; unset variables fall back
    /// to the defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from any key lookup (the environment, a map in tests, ...)
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = SiteConfig::default();

        if let Some(url) = lookup("API_BASE_URL").filter(|v| !v.trim().is_empty()) {
            let url = url.trim().trim_end_matches('/').to_string();
            if !(url.starts_with("http://") || url.starts_with("https://")) {
                return Err(ConfigError::InvalidUrl {
                    name: "API_BASE_URL",
                    value: url,
                });
            }
            config.api_base_url = url;
        }

        if let Some(raw) = lookup("API_TIMEOUT_SECS").filter(|v| !v.trim().is_empty()) {
            let secs = raw
                .trim()
                .parse::<u64>()
                .ok()
                .filter(|secs| *secs > 0)
                .ok_or_else(|| ConfigError::InvalidTimeout {
                    name: "API_TIMEOUT_SECS",
                    value: raw.clone(),
                })?;
            config.request_timeout = Duration::from_secs(secs);
        }

        Ok(config)
    }
}
