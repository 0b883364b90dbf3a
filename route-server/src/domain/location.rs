//! Locations and route requests.

use serde::{Deserialize, Serialize};

use super::error::DomainError;

const MISSING_ENDPOINT: &str = "Both origin and destination are required";

/// A user-supplied place.
///
/// Only the address is used for routing. Coordinates are optional enrichment
/// (e.g. from browser geolocation) and are carried through untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub address: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lat: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lng: Option<f64>,
}

impl Location {
    /// Create a location from an address alone.
    pub fn new(address: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            lat: None,
            lng: None,
        }
    }

    /// True if the address is empty after trimming.
    pub fn is_blank(&self) -> bool {
        self.address.trim().is_empty()
    }
}

/// An origin/destination pair submitted by the user.
///
/// Addresses are trimmed and guaranteed non-empty when built through
/// [`RouteRequest::new`].
///
/// # Examples
///
/// ```
/// use route_server::domain::{Location, RouteRequest};
///
/// let req = RouteRequest::new(Location::new("  Connaught Place "), Location::new("India Gate"))
///     .unwrap();
/// assert_eq!(req.origin.address, "Connaught Place");
///
/// assert!(RouteRequest::new(Location::new(" "), Location::new("India Gate")).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteRequest {
    pub origin: Location,
    pub destination: Location,
}

impl RouteRequest {
    /// Build a validated request, trimming both addresses.
    pub fn new(mut origin: Location, mut destination: Location) -> Result<Self, DomainError> {
        origin.address = origin.address.trim().to_string();
        destination.address = destination.address.trim().to_string();

        let request = Self {
            origin,
            destination,
        };
        request.validate()?;
        Ok(request)
    }

    /// Check that both addresses are non-blank.
    ///
    /// Requests that arrive by deserialization bypass [`RouteRequest::new`],
    /// so consumers call this before doing any work.
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.origin.is_blank() || self.destination.is_blank() {
            return Err(DomainError::InvalidRequest(MISSING_ENDPOINT));
        }
        Ok(())
    }
}
