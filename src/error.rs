//! Error types for the cafe directory
//!
//! Both variants are client-input errors and render as a bare plain-text
//! message with status 400.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;
use tracing::debug;

// == Cafe Error Enum ==
/// Validation failures raised while answering a cafe listing request.
///
/// The `Display` text is the exact response body.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CafeError {
    /// `city` is missing or not present in the dataset
    #[error("unknown city")]
    UnknownCity,

    /// `count` is not a non-negative decimal integer
    #[error("incorrect count")]
    InvalidCount,
}

impl CafeError {
    /// HTTP status this error maps to.
    pub fn status_code(&self) -> StatusCode {
        match self {
            CafeError::UnknownCity | CafeError::InvalidCount => StatusCode::BAD_REQUEST,
        }
    }
}

// == IntoResponse Implementation ==
impl IntoResponse for CafeError {
    fn into_response(self) -> Response {
        debug!(error = %self, "rejecting cafe request");
        (self.status_code(), self.to_string()).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the cafe directory.
pub type Result<T> = std::result::Result<T, CafeError>;
