//! Application state shared across handlers

use std::{fmt, sync::Arc};

use integration_tfnsw::DepartureClient;

/// Shared application state
///
/// Immutable after startup; cloned into every request.
#[derive(Clone)]
pub struct AppState {
    /// Upstream departure-monitor client
    pub client: Arc<dyn DepartureClient>,
    /// Maximum number of stops a search returns
    pub search_max_results: usize,
}

impl AppState {
    /// Create state around a departure client
    pub fn new(client: Arc<dyn DepartureClient>, search_max_results: usize) -> Self {
        Self {
            client,
            search_max_results,
        }
    }
}

impl fmt::Debug for AppState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppState")
            .field("client", &"<DepartureClient>")
            .field("search_max_results", &self.search_max_results)
            .finish()
    }
}
