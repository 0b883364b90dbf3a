//! Domain error types.
//!
//! These errors represent validation failures in the domain layer.
//! They are distinct from upstream API/IO errors.

/// Domain-level errors for validation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomainError {
    /// Origin or destination address is missing or blank
    #[error("{0}")]
    InvalidRequest(&'static str),

    /// Cost range with min above max
    #[error("invalid cost range: min {min} exceeds max {max}")]
    InvalidCostRange { min: u32, max: u32 },
}
