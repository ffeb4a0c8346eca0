//! REST API for ShelfMatch.

pub mod rest;

pub use rest::{ApiConfig, RestApi, DEFAULT_MAX_BUDGET};
