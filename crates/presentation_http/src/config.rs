//! Application configuration
//!
//! Built once at startup from defaults, an optional `config.{toml,yaml,json}`
//! file and the environment, then handed to the components that need it.

use std::collections::HashMap;

use integration_tfnsw::TfnswConfig;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Environment variable holding the provider API key
pub const API_KEY_ENV: &str = "TFNSW_API_KEY";

/// Prefix for environment overrides, e.g. `DEPARTURE_BOARD__SERVER__PORT`
pub const ENV_PREFIX: &str = "DEPARTURE_BOARD";

/// Prefixed form of the API key variable, used when `TFNSW_API_KEY` is unset
pub const PREFIXED_API_KEY_ENV: &str = "DEPARTURE_BOARD__TFNSW__API_KEY";

/// Errors raised while building the configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A source could not be read or deserialized
    #[error("Failed to load configuration: {0}")]
    Load(#[from] config::ConfigError),

    /// No non-blank API key in the environment
    #[error("API key not found: set {API_KEY_ENV}")]
    MissingApiKey,

    /// A value is out of range
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// Upstream provider configuration
    #[serde(default)]
    pub tfnsw: TfnswConfig,
}

/// HTTP server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Host to bind to
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to listen on
    #[serde(default = "default_port")]
    pub port: u16,

    /// Allowed CORS origins (empty = allow any)
    #[serde(default)]
    pub allowed_origins: Vec<String>,

    /// Seconds to wait for in-flight requests on shutdown
    #[serde(default)]
    pub shutdown_timeout_secs: Option<u64>,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

const fn default_port() -> u16 {
    5001
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            allowed_origins: Vec::new(),
            shutdown_timeout_secs: None,
        }
    }
}

impl ServerConfig {
    /// `host:port` socket address string
    #[must_use]
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl AppConfig {
    /// Load configuration from the process environment
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(std::env::vars().collect())
    }

    /// Load configuration using `vars` in place of the process environment
    pub fn load_from(mut vars: HashMap<String, String>) -> Result<Self, ConfigError> {
        // Keys are opaque strings, so they bypass `try_parsing`.
        let prefixed_key = vars.remove(PREFIXED_API_KEY_ENV);
        let api_key = vars.get(API_KEY_ENV).cloned().or(prefixed_key);

        let builder = config::Config::builder()
            .set_default("server.host", default_host())?
            .set_default("server.port", i64::from(default_port()))?
            .add_source(config::File::with_name("config").required(false))
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .separator("__")
                    .list_separator(",")
                    .with_list_parse_key("server.allowed_origins")
                    .try_parsing(true)
                    .source(Some(vars)),
            )
            .set_override_option("tfnsw.api_key", api_key)?;

        let config: Self = builder.build()?.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.tfnsw.api_key().is_none() {
            return Err(ConfigError::MissingApiKey);
        }

        self.tfnsw.validate().map_err(ConfigError::Invalid)
    }
}
