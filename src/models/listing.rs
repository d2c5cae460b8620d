//! Listing response for the cafe directory
//!
//! The success body is the cafe names joined by `,` with no spaces.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

/// Ordered cafe names selected for one request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CafeListing {
    names: Vec<String>,
}

impl CafeListing {
    /// Creates a listing from names already in display order.
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            names: names.into_iter().map(Into::into).collect(),
        }
    }

    /// Selected names in display order.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Number of selected names.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Returns true if nothing was selected.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Wire form: names joined by `,`; empty listing gives an empty string.
    pub fn to_body(&self) -> String {
        self.names.join(",")
    }
}

impl IntoResponse for CafeListing {
    fn into_response(self) -> Response {
        (StatusCode::OK, self.to_body()).into_response()
    }
}
