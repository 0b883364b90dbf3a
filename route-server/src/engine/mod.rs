//! Route cost and comparison engine.
//!
//! Turns raw per-mode distance/duration facts into a comparable set of
//! transport options with cost ranges and carbon classifications, and
//! orders them by a user-chosen criterion.

mod calculate;
mod config;
mod cost;
mod sort;

pub use calculate::{EngineError, RouteEngine};
pub use config::{EngineConfig, ProviderRate, RateTable};
pub use cost::{auto_rickshaw_cost, driving_cost, public_transit_cost, rideshare_cost};
pub use sort::{InvalidSortCriterion, SortCriterion, sort_options};
