//! Route definitions

use axum::{Router, routing::get};

use crate::{handlers, middleware::RequestIdLayer, state::AppState};

/// Create the main router with all routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/api/health", get(handlers::health::health_check))
        .route("/api/departures", get(handlers::departures::get_departures))
        .route("/api/stops", get(handlers::stops::search_stops))
        .layer(RequestIdLayer::new())
        .with_state(state)
}
