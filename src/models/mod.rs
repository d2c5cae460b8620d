//! Request and Response models for the cafe directory
//!
//! `query` covers the incoming query string, `listing` the outgoing body.

pub mod listing;
pub mod query;

// Re-export commonly used types
pub use listing::CafeListing;
pub use query::{parse_count, CafeParams, CafeQuery};
