//! Transport options and route responses.

use serde::{Deserialize, Serialize};

use super::error::DomainError;
use super::mode::{Icon, TransportMode};

/// A non-negative cost range in whole currency units.
///
/// `min <= max` is guaranteed by construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct CostRange {
    min: u32,
    max: u32,
}

impl CostRange {
    /// A free option.
    pub const FREE: CostRange = CostRange { min: 0, max: 0 };

    /// Create a cost range, rejecting `min > max`.
    pub fn new(min: u32, max: u32) -> Result<Self, DomainError> {
        if min > max {
            return Err(DomainError::InvalidCostRange { min, max });
        }
        Ok(Self { min, max })
    }

    pub fn min(&self) -> u32 {
        self.min
    }

    pub fn max(&self) -> u32 {
        self.max
    }

    /// Arithmetic mean of the bounds.
    pub fn midpoint(&self) -> f64 {
        (f64::from(self.min) + f64::from(self.max)) / 2.0
    }

    pub fn is_free(&self) -> bool {
        self.min == 0 && self.max == 0
    }
}

/// Coarse environmental classification.
///
/// Ordered `Low < Medium < High`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CarbonImpact {
    Low,
    Medium,
    High,
}

impl CarbonImpact {
    /// Position in the total order (0, 1, 2).
    pub fn rank(&self) -> u8 {
        match self {
            CarbonImpact::Low => 0,
            CarbonImpact::Medium => 1,
            CarbonImpact::High => 2,
        }
    }

    /// Human-readable badge text.
    pub fn label(&self) -> &'static str {
        match self {
            CarbonImpact::Low => "Low Impact",
            CarbonImpact::Medium => "Medium Impact",
            CarbonImpact::High => "High Impact",
        }
    }
}

/// One comparable way of making the trip.
///
/// Fields are private; options are immutable once built.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransportOption {
    mode: TransportMode,
    name: String,
    description: String,
    icon: Icon,
    duration: u32,
    cost: CostRange,
    carbon_impact: CarbonImpact,
}

impl TransportOption {
    /// Build an option for `mode` using its catalogue name, description and icon.
    pub fn new(
        mode: TransportMode,
        duration_mins: u32,
        cost: CostRange,
        carbon_impact: CarbonImpact,
    ) -> Self {
        let (name, description, icon) = catalogue(mode);
        Self {
            mode,
            name: name.to_string(),
            description: description.to_string(),
            icon,
            duration: duration_mins,
            cost,
            carbon_impact,
        }
    }

    pub fn mode(&self) -> TransportMode {
        self.mode
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn icon(&self) -> Icon {
        self.icon
    }

    /// Door-to-door duration in minutes.
    pub fn duration(&self) -> u32 {
        self.duration
    }

    pub fn cost(&self) -> CostRange {
        self.cost
    }

    pub fn carbon_impact(&self) -> CarbonImpact {
        self.carbon_impact
    }
}

/// Display text for each transport mode.
fn catalogue(mode: TransportMode) -> (&'static str, &'static str, Icon) {
    match mode {
        TransportMode::Driving => ("Personal Car", "Drive your own vehicle", Icon::Car),
        TransportMode::Rideshare => ("Rideshare (Uber/Ola)", "Book a cab through app", Icon::Car),
        TransportMode::Auto => ("Auto Rickshaw", "Three-wheeler taxi", Icon::Car),
        TransportMode::Public => ("Public Transit", "Bus, metro, or train", Icon::Bus),
        TransportMode::Walking => ("Walking", "On foot", Icon::PersonStanding),
    }
}

/// The result of one route calculation.
///
/// Always holds at least one option when produced by the engine.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RouteResponse {
    pub routes: Vec<TransportOption>,

    /// Leg distance in km (one decimal) from the highest-priority mode
    /// that resolved. Shared by all options.
    pub distance: f64,

    /// Epoch milliseconds when the response was produced.
    pub timestamp: i64,
}
