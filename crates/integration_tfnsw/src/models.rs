//! Departure-monitor request and response models

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// Name filter used when a stop search has no query text
pub const WILDCARD: &str = "*";

/// How the departure monitor should interpret `name_dm`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StopFilter {
    /// Exact provider stop identifier (`type_dm=stop`)
    StopId(String),
    /// Free-text stop name (`type_dm=any`)
    StopName(String),
}

/// One departure-monitor query
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DepartureRequest {
    pub filter: StopFilter,
}

impl DepartureRequest {
    /// Departures for a known stop identifier
    #[must_use]
    pub fn for_stop(stop_id: impl Into<String>) -> Self {
        Self {
            filter: StopFilter::StopId(stop_id.into()),
        }
    }

    /// Departures for stops matching a name; blank text becomes the wildcard
    #[must_use]
    pub fn for_name(query: &str) -> Self {
        let query = query.trim();
        let name = if query.is_empty() { WILDCARD } else { query };
        Self {
            filter: StopFilter::StopName(name.to_string()),
        }
    }

    /// Value of the `type_dm` parameter
    #[must_use]
    pub const fn type_dm(&self) -> &'static str {
        match self.filter {
            StopFilter::StopId(_) => "stop",
            StopFilter::StopName(_) => "any",
        }
    }

    /// Value of the `name_dm` parameter
    #[must_use]
    pub fn name_dm(&self) -> &str {
        match &self.filter {
            StopFilter::StopId(value) | StopFilter::StopName(value) => value,
        }
    }
}

/// A stop derived from a departure response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StopSummary {
    pub id: String,
    pub name: String,
}

/// Extract the distinct stops referenced by a departure-monitor payload
///
/// Stops come from `stopEvents[].location`. The first occurrence of an id
/// wins and output order follows first appearance. Events without a
/// location id are skipped and a missing or non-string name becomes empty.
/// At most `limit` stops are returned.
#[must_use]
pub fn unique_stops(payload: &serde_json::Value, limit: usize) -> Vec<StopSummary> {
    let events = payload
        .get("stopEvents")
        .and_then(serde_json::Value::as_array)
        .map_or(&[][..], Vec::as_slice);

    let mut seen = HashSet::new();
    let mut stops = Vec::new();

    let locations = events.iter().filter_map(|event| {
        RawStopEvent::deserialize(event)
            .ok()
            .and_then(|event| event.location)
    });

    for location in locations {
        if stops.len() >= limit {
            break;
        }

        let Some(id) = location.id.filter(|id| !id.is_empty()) else {
            continue;
        };

        if seen.insert(id.clone()) {
            stops.push(StopSummary {
                id,
                name: location
                    .name
                    .as_ref()
                    .and_then(serde_json::Value::as_str)
                    .unwrap_or_default()
                    .to_string(),
            });
        }
    }

    stops
}

// --- Raw API response types for deserialization ---

#[derive(Debug, Deserialize)]
struct RawStopEvent {
    #[serde(default)]
    location: Option<RawLocation>,
}

#[derive(Debug, Deserialize)]
struct RawLocation {
    #[serde(default)]
    id: Option<String>,
    #[serde(default)]
    name: Option<serde_json::Value>,
}
