//! Gateway configuration loaded from environment variables.

use std::env;
use std::path::PathBuf;

use crate::error::Error;
use crate::transport::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS};

/// Configuration for the gateway and its memory store.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the remote API
    pub base_url: String,
    /// Optional bearer token; `None` means anonymous read-only access
    pub token: Option<String>,
    /// Request timeout in seconds
    pub timeout_secs: u64,
    /// Path of the memory store file
    pub memory_file: PathBuf,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// * `GITHUB_API_BASE_URL` — default `https://api.github.com`
    /// * `GITHUB_TOKEN` — optional; an empty value counts as absent
    /// * `GATEWAY_TIMEOUT_SECS` — default 30
    /// * `GATEWAY_MEMORY_FILE` — default `memory.json`
    ///
    /// # Errors
    ///
    /// Returns [`Error::Configuration`] when a numeric variable does not
    /// parse.
    pub fn from_env() -> Result<Self, Error> {
        let base_url =
            env::var("GITHUB_API_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());

        let token = env::var("GITHUB_TOKEN").ok().filter(|t| !t.is_empty());

        let timeout_secs = env::var("GATEWAY_TIMEOUT_SECS")
            .unwrap_or_else(|_| DEFAULT_TIMEOUT_SECS.to_string())
            .parse()
            .map_err(|_| Error::Configuration("invalid GATEWAY_TIMEOUT_SECS".to_string()))?;

        let memory_file = env::var("GATEWAY_MEMORY_FILE")
            .map_or_else(|_| PathBuf::from("memory.json"), PathBuf::from);

        Ok(Self {
            base_url,
            token,
            timeout_secs,
            memory_file,
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            token: None,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            memory_file: PathBuf::from("memory.json"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_anonymous() {
        let config = Config::default();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert!(config.token.is_none());
        assert_eq!(config.timeout_secs, 30);
        assert_eq!(config.memory_file, PathBuf::from("memory.json"));
    }
}
