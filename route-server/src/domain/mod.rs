//! Domain types for the route comparison service.
//!
//! All types enforce their invariants at construction time, so code that
//! receives them can trust their validity.

mod error;
mod location;
mod mode;
mod option;

pub use error::DomainError;
pub use location::{Location, RouteRequest};
pub use mode::{Icon, TransportMode, TravelMode};
pub use option::{CarbonImpact, CostRange, RouteResponse, TransportOption};
