//! Catalog Module
//!
//! The immutable city → cafe table and the pure selection steps applied to it.

mod dataset;
mod selection;


// Re-export public types
pub use dataset::CafeDataset;
pub use selection::{apply_limit, filter_by_search, fold_case, matches_search};
