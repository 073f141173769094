//! Stop search handler

use axum::{Json, extract::State};
use integration_tfnsw::{DepartureRequest, StopSummary, unique_stops};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

use crate::{error::ApiError, middleware::LenientQuery, state::AppState};

/// Query parameters for `GET /api/stops`
#[derive(Debug, Default, Deserialize)]
pub struct StopsQuery {
    pub q: Option<String>,
}

/// Response for a stop search
#[derive(Debug, Serialize, Deserialize)]
pub struct StopsResponse {
    pub stops: Vec<StopSummary>,
}

/// Search stops by name
///
/// GET /api/stops?q=<text>
///
/// Runs a departure-monitor query filtered by name and returns the distinct
/// stops its departures leave from, in order of first appearance.
#[instrument(skip(state))]
pub async fn search_stops(
    State(state): State<AppState>,
    LenientQuery(query): LenientQuery<StopsQuery>,
) -> Result<Json<StopsResponse>, ApiError> {
    let request = DepartureRequest::for_name(query.q.as_deref().unwrap_or_default());

    let payload = state
        .client
        .departure_monitor(&request)
        .await
        .map_err(|e| {
            warn!(error = %e, "Failed to search stops");
            ApiError::from(e)
        })?;

    let stops = unique_stops(&payload, state.search_max_results);
    debug!(count = stops.len(), "Stops found");

    Ok(Json(StopsResponse { stops }))
}
