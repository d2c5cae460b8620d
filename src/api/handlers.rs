//! API Handlers
//!
//! The `GET /cafe` handler and the request pipeline behind it.

use std::sync::Arc;

use axum::extract::{Query, State};
use tracing::debug;

use crate::catalog::{apply_limit, filter_by_search, CafeDataset};
use crate::error::Result;
use crate::models::{CafeListing, CafeParams};

/// Application state shared across all handlers.
///
/// The dataset is read-only after construction, so no lock is needed.
#[derive(Clone)]
pub struct AppState {
    /// Shared cafe table
    pub dataset: Arc<CafeDataset>,
}

impl AppState {
    /// Creates a new AppState serving the given dataset.
    pub fn new(dataset: CafeDataset) -> Self {
        Self {
            dataset: Arc::new(dataset),
        }
    }
}

/// Runs the listing pipeline: validate, look up, filter, limit.
pub fn list_cafes(dataset: &CafeDataset, params: CafeParams) -> Result<CafeListing> {
    let query = params.validate(dataset)?;
    let matches = filter_by_search(query.cafes, &query.search);
    Ok(CafeListing::new(apply_limit(matches, query.count)))
}

/// Handler for GET /cafe
///
/// Responds with the comma-joined cafe names, or a 400 with the error text.
/// The query is taken as ordered pairs so a repeated key never fails
/// extraction; the first value of each key is used.
pub async fn cafe_handler(
    State(state): State<AppState>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Result<CafeListing> {
    let params = CafeParams::from_pairs(pairs);
    let city = params.city.clone();
    let listing = list_cafes(&state.dataset, params)?;

    debug!(city = ?city, returned = listing.len(), "served cafe list");
    Ok(listing)
}
