//! Departure-monitor client over the TfNSW trip planner API
//!
//! Every call is stamped with the current date and time in Sydney, which is
//! what the provider uses to resolve its "departures from now" window.

use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use chrono_tz::{Australia::Sydney, Tz};
use reqwest::{Client, header::AUTHORIZATION};
use secrecy::{ExposeSecret, SecretString};
use tracing::{debug, instrument, warn};

use crate::config::TfnswConfig;
use crate::error::TfnswError;
use crate::models::DepartureRequest;

/// Trait for departure-monitor clients
#[async_trait]
pub trait DepartureClient: Send + Sync {
    /// Run a departure-monitor query and return the provider payload untouched
    async fn departure_monitor(
        &self,
        request: &DepartureRequest,
    ) -> Result<serde_json::Value, TfnswError>;
}

/// `reqwest`-backed departure-monitor client
#[derive(Debug)]
pub struct HttpDepartureClient {
    client: Client,
    config: TfnswConfig,
    authorization: SecretString,
}

impl HttpDepartureClient {
    /// Create a new client
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or the HTTP client
    /// cannot be initialized.
    pub fn new(config: &TfnswConfig) -> Result<Self, TfnswError> {
        config.validate().map_err(TfnswError::ConfigurationError)?;

        let api_key = config
            .api_key()
            .ok_or_else(|| TfnswError::ConfigurationError("api_key must be set".to_string()))?;

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(concat!("departure-board/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| TfnswError::ConnectionFailed(e.to_string()))?;

        Ok(Self {
            client,
            config: config.clone(),
            authorization: SecretString::from(format!("apikey {api_key}")),
        })
    }
}

#[async_trait]
impl DepartureClient for HttpDepartureClient {
    #[instrument(skip(self, request), fields(type_dm = request.type_dm(), name_dm = request.name_dm()))]
    async fn departure_monitor(
        &self,
        request: &DepartureRequest,
    ) -> Result<serde_json::Value, TfnswError> {
        let url = format!("{}/departure_mon", self.config.base_url);
        let params = departure_params(request, &to_sydney(Utc::now()));

        debug!(?url, "Querying departure monitor");

        let response = self
            .client
            .get(&url)
            .header(AUTHORIZATION, self.authorization.expose_secret())
            .query(&params)
            .send()
            .await
            .map_err(|e| TfnswError::from_transport(&e, self.config.timeout_secs))?;

        let status = response.status();
        if !status.is_success() {
            warn!(%status, "Departure monitor returned an error status");
            return Err(TfnswError::RequestFailed {
                status: status.as_u16(),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| TfnswError::from_transport(&e, self.config.timeout_secs))?;

        serde_json::from_str(&body).map_err(|e| TfnswError::ParseError(e.to_string()))
    }
}

/// Convert an instant to Sydney local time
#[must_use]
pub fn to_sydney(instant: DateTime<Utc>) -> DateTime<Tz> {
    instant.with_timezone(&Sydney)
}

/// Build the departure-monitor query string for `request` at local time `at`
#[must_use]
pub fn departure_params(
    request: &DepartureRequest,
    at: &DateTime<Tz>,
) -> Vec<(&'static str, String)> {
    vec![
        ("outputFormat", "rapidJSON".to_string()),
        ("coordOutputFormat", "EPSG:4326".to_string()),
        ("mode", "direct".to_string()),
        ("type_dm", request.type_dm().to_string()),
        ("name_dm", request.name_dm().to_string()),
        ("depArrMacro", "dep".to_string()),
        ("itdDate", at.format("%Y%m%d").to_string()),
        ("itdTime", at.format("%H%M").to_string()),
        ("TfNSWTR", "true".to_string()),
    ]
}
