//! Directions gateway.
//!
//! The route engine only needs one fact per travel mode: how far and how long
//! the primary route is. This module defines that contract and provides a
//! live Google Directions client plus a fixture-backed mock.
//!
//! Any failure (network, `ZERO_RESULTS`, malformed body) is reported as a
//! [`DirectionsError`]; callers do not distinguish between them.

mod client;
mod convert;
mod error;
mod mock;
mod types;

use crate::domain::TravelMode;

pub use client::{DirectionsClient, DirectionsConfig};
pub use convert::leg_summary;
pub use error::DirectionsError;
pub use mock::{Fixture, MockDirectionsClient};
pub use types::{DirectionsResponse, Leg, Route, TextValue};

/// Distance and duration of the primary route's first leg.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LegSummary {
    pub distance_meters: u64,
    pub duration_seconds: u64,
}

impl LegSummary {
    /// Distance in kilometres.
    pub fn distance_km(&self) -> f64 {
        self.distance_meters as f64 / 1000.0
    }

    /// Duration in whole minutes, rounded up.
    pub fn duration_minutes(&self) -> u32 {
        u32::try_from(self.duration_seconds.div_ceil(60)).unwrap_or(u32::MAX)
    }
}

/// Source of per-mode route facts.
///
/// Passed to the engine explicitly so tests can substitute a fake.
pub trait DirectionsGateway: Send + Sync {
    /// Look up the primary route between two addresses for one mode.
    fn get_directions(
        &self,
        origin: &str,
        destination: &str,
        mode: TravelMode,
    ) -> impl Future<Output = Result<LegSummary, DirectionsError>> + Send;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leg_summary_conversions() {
        let leg = LegSummary {
            distance_meters: 10_000,
            duration_seconds: 1200,
        };
        assert_eq!(leg.distance_km(), 10.0);
        assert_eq!(leg.duration_minutes(), 20);
    }

    #[test]
    fn duration_rounds_up() {
        let leg = LegSummary {
            distance_meters: 0,
            duration_seconds: 1201,
        };
        assert_eq!(leg.duration_minutes(), 21);

        let leg = LegSummary {
            distance_meters: 0,
            duration_seconds: 0,
        };
        assert_eq!(leg.duration_minutes(), 0);
    }
}
