//! Engine configuration and fare tables.

use serde::Deserialize;

/// A ride-hailing provider's fare formula.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ProviderRate {
    /// Display name of the provider.
    pub name: String,

    /// Flag-fall fare.
    pub base_fare: f64,

    /// Fare per km.
    pub per_km: f64,
}

impl ProviderRate {
    pub fn new(name: impl Into<String>, base_fare: f64, per_km: f64) -> Self {
        Self {
            name: name.into(),
            base_fare,
            per_km,
        }
    }

    /// Quoted fare for a trip of `distance_km`.
    pub fn quote(&self, distance_km: f64) -> f64 {
        self.base_fare + distance_km * self.per_km
    }
}

/// Named rate constants used by the cost models.
///
/// All amounts are in the same currency unit. The default table holds
/// approximate Indian rupee prices.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct RateTable {
    /// Fuel cost per km for a private petrol car.
    pub petrol_per_km: f64,

    /// Tolls and parking allowance per km (upper end of car cost).
    pub tolls_parking_per_km: f64,

    /// Auto-rickshaw flag-fall fare.
    pub auto_rickshaw_base: f64,

    /// Auto-rickshaw fare per km.
    pub auto_rickshaw_per_km: f64,

    /// Night-charge / negotiation markup on the auto-rickshaw fare.
    pub auto_rickshaw_markup: f64,

    /// City bus fare per km.
    pub bus_per_km: f64,

    /// Minimum bus ticket.
    pub bus_min_fare: f64,

    /// Metro fare per km.
    pub metro_per_km: f64,

    /// Minimum metro ticket.
    pub metro_min_fare: f64,

    /// The two ride-hailing providers whose quotes bound rideshare cost.
    pub rideshare: [ProviderRate; 2],

    /// Peak-demand multiplier applied to the higher rideshare quote.
    pub surge_multiplier: f64,
}

impl Default for RateTable {
    fn default() -> Self {
        Self {
            petrol_per_km: 8.5,
            tolls_parking_per_km: 2.0,
            auto_rickshaw_base: 25.0,
            auto_rickshaw_per_km: 12.0,
            auto_rickshaw_markup: 1.2,
            bus_per_km: 1.5,
            bus_min_fare: 10.0,
            metro_per_km: 2.5,
            metro_min_fare: 15.0,
            rideshare: [
                ProviderRate::new("Uber", 50.0, 15.0),
                ProviderRate::new("Ola", 45.0, 14.0),
            ],
            surge_multiplier: 1.5,
        }
    }
}

impl RateTable {
    /// Load a rate table from JSON. Missing fields take the default values.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

/// Configuration for the route engine.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Fare constants.
    pub rates: RateTable,

    /// Auto-rickshaws are only offered up to this distance (inclusive).
    pub auto_rickshaw_max_km: f64,

    /// Rideshare duration multiplier for waiting on a pickup.
    pub rideshare_pickup_factor: f64,

    /// Auto-rickshaw duration multiplier.
    pub auto_rickshaw_time_factor: f64,

    /// Issue the directions queries concurrently instead of one after another.
    pub concurrent_queries: bool,

    /// Currency symbol for formatted costs.
    pub currency_symbol: String,
}

impl EngineConfig {
    /// Create a configuration with the given rate table and default factors.
    pub fn with_rates(rates: RateTable) -> Self {
        Self {
            rates,
            ..Self::default()
        }
    }

    /// Enable or disable concurrent directions queries.
    pub fn with_concurrent_queries(mut self, concurrent: bool) -> Self {
        self.concurrent_queries = concurrent;
        self
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            rates: RateTable::default(),
            auto_rickshaw_max_km: 15.0,
            rideshare_pickup_factor: 1.1,
            auto_rickshaw_time_factor: 1.2,
            concurrent_queries: false,
            currency_symbol: "₹".to_string(),
        }
    }
}
