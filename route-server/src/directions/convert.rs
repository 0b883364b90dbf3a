//! Conversion from Directions DTOs to leg summaries.

use super::LegSummary;
use super::error::DirectionsError;
use super::types::DirectionsResponse;

/// Extract the first route's first leg.
///
/// Non-`OK` statuses are mapped to errors; an `OK` response without a
/// route or leg is [`DirectionsError::NoUsableLeg`].
pub fn leg_summary(response: &DirectionsResponse) -> Result<LegSummary, DirectionsError> {
    match response.status.as_str() {
        "OK" => {}
        "ZERO_RESULTS" | "NOT_FOUND" => return Err(DirectionsError::NoResults),
        "OVER_QUERY_LIMIT" | "OVER_DAILY_LIMIT" => return Err(DirectionsError::RateLimited),
        "REQUEST_DENIED" => return Err(DirectionsError::Unauthorized),
        other => {
            return Err(DirectionsError::Api {
                status: 200,
                message: response
                    .error_message
                    .clone()
                    .unwrap_or_else(|| other.to_string()),
            });
        }
    }

    let leg = response
        .routes
        .first()
        .and_then(|route| route.legs.first())
        .ok_or(DirectionsError::NoUsableLeg)?;

    Ok(LegSummary {
        distance_meters: leg.distance.value,
        duration_seconds: leg.duration.value,
    })
}
