//! Departure board handler

use axum::{Json, extract::State};
use integration_tfnsw::DepartureRequest;
use serde::Deserialize;
use tracing::{instrument, warn};

use crate::{error::ApiError, middleware::LenientQuery, state::AppState};

/// Query parameters for `GET /api/departures`
#[derive(Debug, Default, Deserialize)]
pub struct DeparturesQuery {
    pub stop_id: Option<String>,
}

impl DeparturesQuery {
    /// The requested stop id, if present and not blank
    fn stop_id(&self) -> Option<&str> {
        self.stop_id
            .as_deref()
            .map(str::trim)
            .filter(|id| !id.is_empty())
    }
}

/// Upcoming departures for a stop
///
/// GET /api/departures?stop_id=<id>
///
/// Returns the provider payload unmodified.
#[instrument(skip(state))]
pub async fn get_departures(
    State(state): State<AppState>,
    LenientQuery(query): LenientQuery<DeparturesQuery>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let stop_id = query
        .stop_id()
        .ok_or_else(|| ApiError::BadRequest("stop_id is required".to_string()))?;

    let payload = state
        .client
        .departure_monitor(&DepartureRequest::for_stop(stop_id))
        .await
        .map_err(|e| {
            warn!(error = %e, "Failed to fetch departures");
            ApiError::from(e)
        })?;

    Ok(Json(payload))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stop_id_missing() {
        assert!(DeparturesQuery::default().stop_id().is_none());
    }

    #[test]
    fn stop_id_blank() {
        let query = DeparturesQuery {
            stop_id: Some("  ".to_string()),
        };
        assert!(query.stop_id().is_none());
    }

    #[test]
    fn stop_id_trimmed() {
        let query = DeparturesQuery {
            stop_id: Some(" 200060 ".to_string()),
        };
        assert_eq!(query.stop_id(), Some("200060"));
    }
}
