//! Mock directions client for running without API access.
//!
//! Loads canned Directions responses from JSON fixture files and serves them
//! as if they were live API responses.

use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use serde::Deserialize;

use crate::domain::TravelMode;

use super::convert::leg_summary;
use super::error::DirectionsError;
use super::types::DirectionsResponse;
use super::{DirectionsGateway, LegSummary};

/// One fixture file: an origin/destination pair and a response per mode.
///
/// Modes absent from `modes` behave like `ZERO_RESULTS`.
#[derive(Debug, Clone, Deserialize)]
pub struct Fixture {
    pub origin: String,
    pub destination: String,
    pub modes: HashMap<TravelMode, DirectionsResponse>,
}

/// Lookup key: normalised (origin, destination).
type PairKey = (String, String);

fn pair_key(origin: &str, destination: &str) -> PairKey {
    (
        origin.trim().to_lowercase(),
        destination.trim().to_lowercase(),
    )
}

/// Mock directions client that serves data from JSON files.
#[derive(Debug, Clone)]
pub struct MockDirectionsClient {
    fixtures: Arc<HashMap<PairKey, HashMap<TravelMode, DirectionsResponse>>>,
}

impl MockDirectionsClient {
    /// Create a mock client by loading every `*.json` file in a directory.
    pub fn new(data_dir: impl AsRef<Path>) -> Result<Self, DirectionsError> {
        let fixtures = load_dir(data_dir.as_ref())?;
        Ok(Self::from_fixtures(fixtures))
    }

    /// Create a mock client from in-memory fixtures.
    pub fn from_fixtures(fixtures: impl IntoIterator<Item = Fixture>) -> Self {
        let map = fixtures
            .into_iter()
            .map(|f| (pair_key(&f.origin, &f.destination), f.modes))
            .collect();

        Self {
            fixtures: Arc::new(map),
        }
    }

    /// Number of origin/destination pairs loaded.
    pub fn pair_count(&self) -> usize {
        self.fixtures.len()
    }
}

fn load_dir(data_dir: &Path) -> Result<Vec<Fixture>, DirectionsError> {
    let entries = std::fs::read_dir(data_dir).map_err(|e| {
        DirectionsError::Fixture(format!("failed to read mock data directory: {e}"))
    })?;

    let mut fixtures = Vec::new();

    for entry in entries {
        let entry = entry.map_err(|e| {
            DirectionsError::Fixture(format!("failed to read directory entry: {e}"))
        })?;

        let path = entry.path();
        if !path.is_file() || path.extension().and_then(|s| s.to_str()) != Some("json") {
            continue;
        }

        let json = std::fs::read_to_string(&path)
            .map_err(|e| DirectionsError::Fixture(format!("failed to read {path:?}: {e}")))?;

        let fixture: Fixture = serde_json::from_str(&json)
            .map_err(|e| DirectionsError::Fixture(format!("failed to parse {path:?}: {e}")))?;

        fixtures.push(fixture);
    }

    if fixtures.is_empty() {
        return Err(DirectionsError::Fixture(format!(
            "no fixture files found in {data_dir:?}"
        )));
    }

    Ok(fixtures)
}

impl DirectionsGateway for MockDirectionsClient {
    async fn get_directions(
        &self,
        origin: &str,
        destination: &str,
        mode: TravelMode,
    ) -> Result<LegSummary, DirectionsError> {
        let response = self
            .fixtures
            .get(&pair_key(origin, destination))
            .and_then(|modes| modes.get(&mode))
            .ok_or(DirectionsError::NoResults)?;

        leg_summary(response)
    }
}
