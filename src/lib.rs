//! Cafe Directory - A small HTTP service listing cafes by city
//!
//! Serves `GET /cafe` over an immutable city → cafe table, with optional
//! case-insensitive search and count limit.

pub mod api;
pub mod catalog;
pub mod config;
pub mod error;
pub mod models;

pub use api::{create_router, list_cafes, AppState};
pub use catalog::CafeDataset;
pub use config::Config;
pub use error::CafeError;
