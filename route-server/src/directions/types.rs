//! Directions API response DTOs.
//!
//! These types map directly to the Google Directions web-service JSON.
//! Only the fields the service reads are modelled; everything else is ignored.

use serde::{Deserialize, Serialize};

/// Top-level Directions response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DirectionsResponse {
    /// `OK`, `ZERO_RESULTS`, `NOT_FOUND`, `OVER_QUERY_LIMIT`, `REQUEST_DENIED`, ...
    pub status: String,

    /// Present when status is not `OK`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,

    #[serde(default)]
    pub routes: Vec<Route>,
}

/// One candidate route. The first is the recommended one.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Route {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,

    #[serde(default)]
    pub legs: Vec<Leg>,
}

/// A leg between two waypoints. Without waypoints a route has exactly one.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Leg {
    pub distance: TextValue,
    pub duration: TextValue,

    /// Traffic-aware duration (driving with a departure time only).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_in_traffic: Option<TextValue>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_address: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_address: Option<String>,
}

/// A measured quantity: display text plus raw value (metres or seconds).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TextValue {
    #[serde(default)]
    pub text: String,
    pub value: u64,
}
