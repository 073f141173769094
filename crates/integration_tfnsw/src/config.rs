//! Departure-monitor client configuration

use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

/// Configuration for the Transport for NSW trip planner API
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TfnswConfig {
    /// Base URL of the trip planner API (without trailing slash)
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// API key sent as `Authorization: apikey <key>` (sensitive)
    #[serde(default, skip_serializing)]
    pub api_key: Option<SecretString>,

    /// Total request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Maximum number of stops returned by a stop search
    #[serde(default = "default_search_max_results")]
    pub search_max_results: usize,
}

fn default_base_url() -> String {
    "https://api.transport.nsw.gov.au/v1/tp".to_string()
}

const fn default_timeout_secs() -> u64 {
    10
}

const fn default_search_max_results() -> usize {
    20
}

impl Default for TfnswConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            api_key: None,
            timeout_secs: default_timeout_secs(),
            search_max_results: default_search_max_results(),
        }
    }
}

impl TfnswConfig {
    /// Create a configuration suitable for testing against a mock server
    #[must_use]
    pub fn for_testing(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: Some(SecretString::from("test-key")),
            timeout_secs: 5,
            ..Default::default()
        }
    }

    /// The API key, if one is configured and not blank
    #[must_use]
    pub fn api_key(&self) -> Option<&str> {
        self.api_key
            .as_ref()
            .map(ExposeSecret::expose_secret)
            .filter(|key| !key.trim().is_empty())
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn validate(&self) -> Result<(), String> {
        if self.api_key().is_none() {
            return Err("api_key must be set".to_string());
        }

        if self.base_url.is_empty() {
            return Err("base_url must not be empty".to_string());
        }

        if self.timeout_secs == 0 {
            return Err("timeout_secs must be greater than 0".to_string());
        }

        if self.search_max_results == 0 {
            return Err("search_max_results must be greater than 0".to_string());
        }

        Ok(())
    }
}
