//! Directions HTTP client.
//!
//! Queries the Google Directions web service for a single origin/destination
//! pair and travel mode, returning the primary leg's distance and duration.

use std::sync::Arc;

use tokio::sync::Semaphore;
use tracing::debug;

use crate::domain::TravelMode;

use super::convert::leg_summary;
use super::error::DirectionsError;
use super::types::DirectionsResponse;
use super::{DirectionsGateway, LegSummary};

/// Default base URL for the Directions API.
const DEFAULT_BASE_URL: &str = "https://maps.googleapis.com";

/// Default maximum concurrent requests.
const DEFAULT_MAX_CONCURRENT: usize = 5;

/// Configuration for the directions client.
#[derive(Debug, Clone)]
pub struct DirectionsConfig {
    /// API key sent as the `key` query parameter
    pub api_key: String,
    /// Base URL for the API (defaults to production Google Maps)
    pub base_url: String,
    /// Region bias (ccTLD code)
    pub region: String,
    /// Language for textual fields
    pub language: String,
    /// Maximum concurrent requests
    pub max_concurrent: usize,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl DirectionsConfig {
    /// Create a new config with the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            region: "IN".to_string(),
            language: "en".to_string(),
            max_concurrent: DEFAULT_MAX_CONCURRENT,
            timeout_secs: 30,
        }
    }

    /// Set a custom base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the region bias and response language.
    pub fn with_locale(mut self, region: impl Into<String>, language: impl Into<String>) -> Self {
        self.region = region.into();
        self.language = language.into();
        self
    }

    /// Set maximum concurrent requests.
    pub fn with_max_concurrent(mut self, n: usize) -> Self {
        self.max_concurrent = n;
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

/// Google Directions API client.
///
/// Uses a semaphore to limit concurrent requests against the shared
/// rate-limited backend.
#[derive(Debug, Clone)]
pub struct DirectionsClient {
    http: reqwest::Client,
    config: Arc<DirectionsConfig>,
    semaphore: Arc<Semaphore>,
}

impl DirectionsClient {
    /// Create a new client with the given configuration.
    pub fn new(config: DirectionsConfig) -> Result<Self, DirectionsError> {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            semaphore: Arc::new(Semaphore::new(config.max_concurrent)),
            config: Arc::new(config),
        })
    }

    /// Query parameters for one directions request.
    fn query_params<'a>(
        &'a self,
        origin: &'a str,
        destination: &'a str,
        mode: TravelMode,
    ) -> Vec<(&'static str, &'a str)> {
        let mut params = vec![
            ("origin", origin),
            ("destination", destination),
            ("mode", mode.as_query_param()),
            ("region", self.config.region.as_str()),
            ("language", self.config.language.as_str()),
            ("departure_time", "now"),
            ("key", self.config.api_key.as_str()),
        ];
        if mode == TravelMode::Driving {
            params.push(("traffic_model", "best_guess"));
        }
        params
    }

    /// Fetch the raw Directions response.
    pub async fn get_directions_raw(
        &self,
        origin: &str,
        destination: &str,
        mode: TravelMode,
    ) -> Result<DirectionsResponse, DirectionsError> {
        let _permit = self
            .semaphore
            .acquire()
            .await
            .map_err(|_| DirectionsError::Api {
                status: 0,
                message: "Semaphore closed".to_string(),
            })?;

        let url = format!("{}/maps/api/directions/json", self.config.base_url);

        debug!(%mode, origin, destination, "requesting directions");

        let response = self
            .http
            .get(&url)
            .query(&self.query_params(origin, destination, mode))
            .send()
            .await?;

        let status = response.status();

        if status == reqwest::StatusCode::UNAUTHORIZED || status == reqwest::StatusCode::FORBIDDEN
        {
            return Err(DirectionsError::Unauthorized);
        }

        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(DirectionsError::RateLimited);
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(DirectionsError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = response.text().await?;

        serde_json::from_str(&body).map_err(|e| DirectionsError::Json {
            message: e.to_string(),
            body: Some(body.chars().take(500).collect()),
        })
    }
}

impl DirectionsGateway for DirectionsClient {
    async fn get_directions(
        &self,
        origin: &str,
        destination: &str,
        mode: TravelMode,
    ) -> Result<LegSummary, DirectionsError> {
        let response = self.get_directions_raw(origin, destination, mode).await?;
        leg_summary(&response)
    }
}
