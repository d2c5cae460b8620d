//! Query DTOs for the cafe directory
//!
//! Raw query string parameters and their validated form.

use crate::catalog::CafeDataset;
use crate::error::{CafeError, Result};

/// Raw query parameters of `GET /cafe`, exactly as received.
///
/// # Fields
/// - `city`: City key to list cafes for
/// - `count`: Optional maximum number of cafes, still unparsed
/// - `search`: Optional case-insensitive name substring
///
/// When a key repeats, its first value wins and later ones are ignored.
#[derive(Debug, Clone, Default)]
pub struct CafeParams {
    pub city: Option<String>,
    pub count: Option<String>,
    pub search: Option<String>,
}

impl CafeParams {
    /// Shorthand for a request naming only a city.
    pub fn city(city: impl Into<String>) -> Self {
        Self {
            city: Some(city.into()),
            ..Self::default()
        }
    }

    /// Builds params from decoded query pairs; unknown keys are ignored.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut params = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_ref() {
                "city" => &mut params.city,
                "count" => &mut params.count,
                "search" => &mut params.search,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value.into());
            }
        }
        params
    }

    /// Sets the raw `count` value.
    pub fn with_count(mut self, count: impl Into<String>) -> Self {
        self.count = Some(count.into());
        self
    }

    /// Sets the raw `search` value.
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    /// Validates the parameters against `dataset`, resolving the city's cafes.
    ///
    /// The city is checked before the count.
    pub fn validate(self, dataset: &CafeDataset) -> Result<CafeQuery<'_>> {
        let (city, cafes) = self
            .city
            .and_then(|city| dataset.cafes(&city).map(|cafes| (city, cafes)))
            .ok_or(CafeError::UnknownCity)?;

        let count = self.count.as_deref().map(parse_count).transpose()?;

        Ok(CafeQuery {
            city,
            cafes,
            count,
            search: self.search.unwrap_or_default(),
        })
    }
}

/// A validated listing request, borrowing the city's cafes from the dataset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CafeQuery<'a> {
    /// Known city key
    pub city: String,
    /// Cafes of `city` in display order
    pub cafes: &'a [String],
    /// Maximum number of cafes; `None` is unlimited
    pub count: Option<usize>,
    /// Name filter; empty matches everything
    pub search: String,
}

/// Parses a count as strict non-negative decimal digits.
///
/// Signs, whitespace, the empty string and values overflowing `usize` are
/// rejected.
pub fn parse_count(raw: &str) -> Result<usize> {
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return Err(CafeError::InvalidCount);
    }
    raw.parse().map_err(|_| CafeError::InvalidCount)
}
