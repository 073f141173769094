//! Departure board HTTP presentation layer
//!
//! Serves the JSON API consumed by the departure board front end and owns
//! process configuration.

pub mod config;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod shutdown;
pub mod state;

pub use config::{AppConfig, ConfigError, ServerConfig};
pub use error::ApiError;
pub use middleware::RequestIdLayer;
pub use routes::create_router;
pub use state::AppState;
