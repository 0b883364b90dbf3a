//! Directions gateway error types.

/// Errors from a directions backend.
///
/// The route engine treats every variant the same way: the mode is skipped.
#[derive(Debug, thiserror::Error)]
pub enum DirectionsError {
    /// HTTP request failed (network error, timeout, etc.)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON deserialization failed
    #[error("JSON parse error: {message}{}", body_suffix(.body))]
    Json {
        message: String,
        body: Option<String>,
    },

    /// API returned an error status code or a non-OK status field
    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    /// No route exists for this mode (`ZERO_RESULTS`, `NOT_FOUND`)
    #[error("no results for this travel mode")]
    NoResults,

    /// Response had no first route or no first leg
    #[error("response contained no usable leg")]
    NoUsableLeg,

    /// Rate limited by the API
    #[error("rate limited by directions API")]
    RateLimited,

    /// Invalid API key or request denied
    #[error("unauthorized (invalid API key)")]
    Unauthorized,

    /// Mock fixture data could not be loaded
    #[error("fixture error: {0}")]
    Fixture(String),
}

fn body_suffix(body: &Option<String>) -> String {
    body.as_ref()
        .map(|b| format!(" (body: {b})"))
        .unwrap_or_default()
}
