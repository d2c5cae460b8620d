//! API Module
//!
//! HTTP handler and routing for the cafe directory.
//!
//! # Endpoints
//! - `GET /cafe?city=<city>[&count=<n>][&search=<text>]` - List cafes in a city

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
