//! Route comparison server.
//!
//! A web service that answers: "What are my options for getting from here to
//! there, and which is fastest, cheapest or greenest?"

pub mod cache;
pub mod directions;
pub mod domain;
pub mod engine;
pub mod settings;
pub mod web;
