//! Application state for the web layer.

use std::sync::Arc;

use crate::engine::RouteEngine;

/// Shared application state.
///
/// Generic over the directions gateway so the same router serves the live
/// client or the fixture mock.
pub struct AppState<G> {
    /// Route calculation engine
    pub engine: Arc<RouteEngine<G>>,
}

impl<G> AppState<G> {
    /// Create a new app state.
    pub fn new(engine: RouteEngine<G>) -> Self {
        Self {
            engine: Arc::new(engine),
        }
    }
}

impl<G> Clone for AppState<G> {
    fn clone(&self) -> Self {
        Self {
            engine: Arc::clone(&self.engine),
        }
    }
}
