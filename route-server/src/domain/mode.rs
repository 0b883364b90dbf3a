//! Travel and transport mode types.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A base query mode sent to the directions backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TravelMode {
    Driving,
    Transit,
    Walking,
}

impl TravelMode {
    /// The fixed query order. Earlier modes take priority for the
    /// shared distance figure.
    pub const SEQUENCE: [TravelMode; 3] =
        [TravelMode::Driving, TravelMode::Transit, TravelMode::Walking];

    /// Lowercase name used in directions API query strings.
    pub fn as_query_param(&self) -> &'static str {
        match self {
            TravelMode::Driving => "driving",
            TravelMode::Transit => "transit",
            TravelMode::Walking => "walking",
        }
    }
}

impl fmt::Display for TravelMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            TravelMode::Driving => "DRIVING",
            TravelMode::Transit => "TRANSIT",
            TravelMode::Walking => "WALKING",
        })
    }
}

/// The user-facing kind of a transport option.
///
/// Rideshare and auto-rickshaw are derived from a driving query;
/// `Public` comes from a transit query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransportMode {
    Driving,
    Rideshare,
    Public,
    Walking,
    Auto,
}

/// Symbolic icon identifier, resolved by the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Icon {
    Car,
    Bus,
    PersonStanding,
}
