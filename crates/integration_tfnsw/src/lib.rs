//! Transport for NSW departure-monitor integration
//!
//! Wraps the provider's `departure_mon` endpoint of the
//! [trip planner API](https://opendata.transport.nsw.gov.au). This is the only
//! network boundary of the departure board backend.
//!
//! # Architecture
//!
//! [`DepartureClient`] defines the interface used by the HTTP layer and is
//! implemented by [`HttpDepartureClient`]. Payloads are returned as raw JSON;
//! [`unique_stops`] derives the distinct stops a payload references.
//!
//! # Example
//!
//! ```rust,ignore
//! use integration_tfnsw::{DepartureClient, DepartureRequest, HttpDepartureClient, TfnswConfig};
//!
//! let client = HttpDepartureClient::new(&config)?;
//! let payload = client
//!     .departure_monitor(&DepartureRequest::for_stop("200060"))
//!     .await?;
//! ```

mod client;
mod config;
mod error;
mod models;

pub use client::{DepartureClient, HttpDepartureClient, departure_params, to_sydney};
pub use config::TfnswConfig;
pub use error::TfnswError;
pub use models::{DepartureRequest, StopFilter, StopSummary, WILDCARD, unique_stops};
