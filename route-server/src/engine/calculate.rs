//! Route calculation.
//!
//! Queries the directions gateway once per base travel mode and expands each
//! successful answer into user-facing transport options.

use chrono::Utc;
use futures::future::join_all;
use tracing::{debug, warn};

use crate::directions::{DirectionsError, DirectionsGateway, LegSummary};
use crate::domain::{
    CarbonImpact, CostRange, DomainError, RouteRequest, RouteResponse, TransportMode,
    TransportOption, TravelMode,
};

use super::config::EngineConfig;
use super::cost::{auto_rickshaw_cost, driving_cost, public_transit_cost, rideshare_cost};

/// Error from route calculation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EngineError {
    /// Blank origin or destination
    #[error(transparent)]
    InvalidRequest(#[from] DomainError),

    /// Every travel mode failed
    #[error("No routes found between the specified locations")]
    NoRoutesFound,
}

/// Outcome of one directions query.
type ModeOutcome = (TravelMode, Result<LegSummary, DirectionsError>);

/// The route calculation engine.
///
/// Holds no per-request state; one engine can serve any number of
/// concurrent calculations.
#[derive(Debug)]
pub struct RouteEngine<G> {
    gateway: G,
    config: EngineConfig,
}

impl<G: DirectionsGateway> RouteEngine<G> {
    /// Create an engine over the given gateway.
    pub fn new(gateway: G, config: EngineConfig) -> Self {
        Self { gateway, config }
    }

    #[cfg(test)]
    pub(crate) fn gateway(&self) -> &G {
        &self.gateway
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Compare every transport option between the request's endpoints.
    ///
    /// Each travel mode is queried independently; a failed mode is logged
    /// and skipped. The shared `distance` comes from the first mode in
    /// [`TravelMode::SEQUENCE`] that succeeded, regardless of which call
    /// finished first.
    ///
    /// Fails with [`EngineError::NoRoutesFound`] when no option could be built.
    pub async fn calculate_routes(
        &self,
        request: &RouteRequest,
    ) -> Result<RouteResponse, EngineError> {
        request.validate()?;

        let outcomes = self.query_modes(request).await;

        let mut routes = Vec::new();
        let mut total_distance: Option<f64> = None;

        for (mode, outcome) in outcomes {
            let leg = match outcome {
                Ok(leg) => leg,
                Err(e) => {
                    warn!(%mode, error = %e, "directions unavailable, skipping mode");
                    continue;
                }
            };

            debug!(
                %mode,
                meters = leg.distance_meters,
                seconds = leg.duration_seconds,
                "directions resolved"
            );

            total_distance.get_or_insert(leg.distance_km());
            routes.extend(self.expand(mode, &leg));
        }

        if routes.is_empty() {
            return Err(EngineError::NoRoutesFound);
        }

        Ok(RouteResponse {
            routes,
            distance: round_one_decimal(total_distance.unwrap_or_default()),
            timestamp: Utc::now().timestamp_millis(),
        })
    }

    /// Run one query per mode. Results are returned in sequence order.
    async fn query_modes(&self, request: &RouteRequest) -> Vec<ModeOutcome> {
        if self.config.concurrent_queries {
            return join_all(
                TravelMode::SEQUENCE.map(|mode| self.query_mode(request, mode)),
            )
            .await;
        }

        let mut outcomes = Vec::with_capacity(TravelMode::SEQUENCE.len());
        for mode in TravelMode::SEQUENCE {
            outcomes.push(self.query_mode(request, mode).await);
        }
        outcomes
    }

    async fn query_mode(&self, request: &RouteRequest, mode: TravelMode) -> ModeOutcome {
        let result = self
            .gateway
            .get_directions(&request.origin.address, &request.destination.address, mode)
            .await;
        (mode, result)
    }

    /// Turn one resolved travel mode into its transport options.
    ///
    /// Driving yields a personal car, a rideshare and, for short trips, an
    /// auto-rickshaw. Transit and walking yield one option each.
    pub fn expand(&self, mode: TravelMode, leg: &LegSummary) -> Vec<TransportOption> {
        let rates = &self.config.rates;
        let km = leg.distance_km();
        let minutes = leg.duration_minutes();

        match mode {
            TravelMode::Driving => {
                let mut options = vec![
                    TransportOption::new(
                        TransportMode::Driving,
                        minutes,
                        driving_cost(km, rates),
                        CarbonImpact::High,
                    ),
                    TransportOption::new(
                        TransportMode::Rideshare,
                        scaled_minutes(minutes, self.config.rideshare_pickup_factor),
                        rideshare_cost(km, rates),
                        CarbonImpact::Medium,
                    ),
                ];

                if km <= self.config.auto_rickshaw_max_km {
                    options.push(TransportOption::new(
                        TransportMode::Auto,
                        scaled_minutes(minutes, self.config.auto_rickshaw_time_factor),
                        auto_rickshaw_cost(km, rates),
                        CarbonImpact::Medium,
                    ));
                }

                options
            }
            TravelMode::Transit => vec![TransportOption::new(
                TransportMode::Public,
                minutes,
                public_transit_cost(km, rates),
                CarbonImpact::Low,
            )],
            TravelMode::Walking => vec![TransportOption::new(
                TransportMode::Walking,
                minutes,
                CostRange::FREE,
                CarbonImpact::Low,
            )],
        }
    }
}

/// `ceil(minutes * factor)`.
///
/// The product is snapped to 1e-6 first so that binary float error
/// (20 × 1.1 = 22.000000000000004) does not add a minute.
fn scaled_minutes(minutes: u32, factor: f64) -> u32 {
    let scaled = f64::from(minutes) * factor;
    if !scaled.is_finite() || scaled <= 0.0 {
        return 0;
    }
    let snapped = (scaled * 1e6).round() / 1e6;
    snapped.ceil().min(f64::from(u32::MAX)) as u32
}

fn round_one_decimal(km: f64) -> f64 {
    (km * 10.0).round() / 10.0
}
