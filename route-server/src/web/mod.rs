//! Web layer for the route comparison service.
//!
//! Provides a JSON endpoint that compares transport options between two
//! addresses.

mod dto;
mod routes;
mod state;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::AppState;
