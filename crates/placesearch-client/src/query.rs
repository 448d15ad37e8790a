//! Validated inputs for the two pipelines.

use thiserror::Error;

/// Filter value meaning "do not restrict".
pub const ALL_FILTER: &str = "all";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum QueryError {
    #[error("search input must not be empty")]
    EmptyInput,

    #[error("place id must not be empty")]
    EmptyPlaceId,
}

/// Free-text autocomplete query with optional place-type and region filters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PredictionQuery {
    input: String,
    place_type: Option<String>,
    region: Option<String>,
}

impl PredictionQuery {
    /// # Errors
    ///
    /// Returns [`QueryError::EmptyInput`] if `input` is blank.
    pub fn new(input: impl Into<String>) -> Result<Self, QueryError> {
        let input = input.into();
        if input.trim().is_empty() {
            return Err(QueryError::EmptyInput);
        }
        Ok(Self {
            input,
            place_type: None,
            region: None,
        })
    }

    /// Restricts results to a place type such as `"geocode"` or
    /// `"(cities)"`. The value `"all"` clears the filter.
    #[must_use]
    pub fn with_type_filter(mut self, place_type: &str) -> Self {
        self.place_type = filter_value(place_type);
        self
    }

    /// Restricts results to a component such as `"country:de"`. The value
    /// `"all"` clears the filter.
    #[must_use]
    pub fn with_region_filter(mut self, region: &str) -> Self {
        self.region = filter_value(region);
        self
    }

    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }

    #[must_use]
    pub fn place_type(&self) -> Option<&str> {
        self.place_type.as_deref()
    }

    #[must_use]
    pub fn region(&self) -> Option<&str> {
        self.region.as_deref()
    }
}

/// Lookup of a single place by its identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailQuery {
    place_id: String,
}

impl DetailQuery {
    /// # Errors
    ///
    /// Returns [`QueryError::EmptyPlaceId`] if `place_id` is blank.
    pub fn new(place_id: impl Into<String>) -> Result<Self, QueryError> {
        let place_id = place_id.into();
        if place_id.trim().is_empty() {
            return Err(QueryError::EmptyPlaceId);
        }
        Ok(Self { place_id })
    }

    #[must_use]
    pub fn place_id(&self) -> &str {
        &self.place_id
    }
}

fn filter_value(raw: &str) -> Option<String> {
    (raw != ALL_FILTER).then(|| raw.to_string())
}
