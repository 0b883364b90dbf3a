//! Process settings read from the environment.

use std::net::SocketAddr;
use std::path::PathBuf;

/// Default listen address.
const DEFAULT_ADDR: &str = "127.0.0.1:3000";

/// Error reading settings.
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("invalid ROUTE_SERVER_ADDR {value:?}: {source}")]
    InvalidAddr {
        value: String,
        source: std::net::AddrParseError,
    },
}

/// Server settings.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    /// Google Maps API key (`GOOGLE_MAPS_API_KEY`)
    pub api_key: Option<String>,

    /// Serve canned directions from this directory (`ROUTE_MOCK_DIR`)
    pub mock_dir: Option<PathBuf>,

    /// JSON rate table overriding the defaults (`ROUTE_RATES_FILE`)
    pub rates_file: Option<PathBuf>,

    /// Listen address (`ROUTE_SERVER_ADDR`)
    pub addr: SocketAddr,

    /// Query travel modes concurrently (`ROUTE_CONCURRENT_QUERIES`)
    pub concurrent_queries: bool,
}

impl Settings {
    /// Read settings from the process environment.
    pub fn from_env() -> Result<Self, SettingsError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read settings through an arbitrary lookup (for tests).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, SettingsError> {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let addr_str = non_empty("ROUTE_SERVER_ADDR").unwrap_or_else(|| DEFAULT_ADDR.to_string());
        let addr: SocketAddr = addr_str
            .parse()
            .map_err(|source| SettingsError::InvalidAddr {
                value: addr_str.clone(),
                source,
            })?;

        let concurrent_queries = non_empty("ROUTE_CONCURRENT_QUERIES")
            .is_some_and(|v| matches!(v.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes"));

        Ok(Self {
            api_key: non_empty("GOOGLE_MAPS_API_KEY"),
            mock_dir: non_empty("ROUTE_MOCK_DIR").map(PathBuf::from),
            rates_file: non_empty("ROUTE_RATES_FILE").map(PathBuf::from),
            addr,
            concurrent_queries,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn settings(vars: &[(&str, &str)]) -> Result<Settings, SettingsError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Settings::from_lookup(|k| vars.get(k).cloned())
    }

    #[test]
    fn defaults() {
        let s = settings(&[]).unwrap();
        assert_eq!(s.api_key, None);
        assert_eq!(s.mock_dir, None);
        assert_eq!(s.addr, DEFAULT_ADDR.parse().unwrap());
        assert!(!s.concurrent_queries);
    }

    #[test]
    fn reads_values() {
        let s = settings(&[
            ("GOOGLE_MAPS_API_KEY", "abc"),
            ("ROUTE_MOCK_DIR", "data/mock_directions"),
            ("ROUTE_SERVER_ADDR", "0.0.0.0:8080"),
            ("ROUTE_CONCURRENT_QUERIES", "TRUE"),
        ])
        .unwrap();
        assert_eq!(s.api_key.as_deref(), Some("abc"));
        assert_eq!(s.mock_dir, Some(PathBuf::from("data/mock_directions")));
        assert_eq!(s.addr.port(), 8080);
        assert!(s.concurrent_queries);
    }

    #[test]
    fn blank_values_are_unset() {
        let s = settings(&[("GOOGLE_MAPS_API_KEY", "  ")]).unwrap();
        assert_eq!(s.api_key, None);
    }

    #[test]
    fn bad_addr_is_an_error() {
        let err = settings(&[("ROUTE_SERVER_ADDR", "localhost")]).unwrap_err();
        assert!(err.to_string().contains("ROUTE_SERVER_ADDR"));
    }
}
