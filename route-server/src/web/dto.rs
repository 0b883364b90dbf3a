//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::domain::{
    CarbonImpact, CostRange, Icon, Location, RouteResponse, TransportMode, TransportOption,
};
use crate::engine::SortCriterion;

/// Body of a route comparison request.
#[derive(Debug, Deserialize)]
pub struct CompareRoutesRequest {
    pub origin: Location,
    pub destination: Location,
}

/// Query string of a route comparison request.
#[derive(Debug, Default, Deserialize)]
pub struct CompareRoutesQuery {
    /// `time`, `cost` or `environmental` (defaults to `time`)
    pub sort: Option<String>,
}

/// A transport option with display strings.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransportOptionResult {
    pub mode: TransportMode,
    pub name: String,
    pub description: String,
    pub icon: Icon,

    /// Duration in minutes
    pub duration: u32,

    pub cost: CostRange,
    pub carbon_impact: CarbonImpact,

    /// e.g. "45m", "1h 5m"
    pub duration_text: String,

    /// e.g. "Free", "₹85-105"
    pub cost_text: String,

    /// e.g. "Low Impact"
    pub carbon_label: &'static str,
}

impl TransportOptionResult {
    /// Create from a domain option.
    pub fn from_option(option: &TransportOption, currency: &str) -> Self {
        Self {
            mode: option.mode(),
            name: option.name().to_string(),
            description: option.description().to_string(),
            icon: option.icon(),
            duration: option.duration(),
            cost: option.cost(),
            carbon_impact: option.carbon_impact(),
            duration_text: format_duration(option.duration()),
            cost_text: format_cost(option.cost(), currency),
            carbon_label: option.carbon_impact().label(),
        }
    }
}

/// Response for a route comparison.
#[derive(Debug, Serialize)]
pub struct CompareRoutesResponse {
    /// Options in the requested order
    pub routes: Vec<TransportOptionResult>,

    /// Shared leg distance in km
    pub distance: f64,

    /// Epoch milliseconds
    pub timestamp: i64,

    /// The ordering applied
    pub sort: SortCriterion,
}

impl CompareRoutesResponse {
    /// Build from an engine response whose routes are already sorted.
    pub fn from_response(response: &RouteResponse, sort: SortCriterion, currency: &str) -> Self {
        Self {
            routes: response
                .routes
                .iter()
                .map(|o| TransportOptionResult::from_option(o, currency))
                .collect(),
            distance: response.distance,
            timestamp: response.timestamp,
            sort,
        }
    }
}

/// Error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Format minutes as "45m", "2h" or "1h 5m".
pub fn format_duration(minutes: u32) -> String {
    if minutes < 60 {
        return format!("{minutes}m");
    }
    let hours = minutes / 60;
    let mins = minutes % 60;
    if mins > 0 {
        format!("{hours}h {mins}m")
    } else {
        format!("{hours}h")
    }
}

/// Format a cost range as "Free", "₹85" or "₹85-105".
pub fn format_cost(cost: CostRange, currency: &str) -> String {
    if cost.is_free() {
        "Free".to_string()
    } else if cost.min() == cost.max() {
        format!("{currency}{}", cost.min())
    } else {
        format!("{currency}{}-{}", cost.min(), cost.max())
    }
}
