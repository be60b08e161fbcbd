//! Errors surfaced by the plant store and input validation.
//!
//! The taxonomy is shallow: validation failures carry a human-readable
//! message, persistence failures carry the driver error unchanged. Nothing
//! here is retried automatically. A missing or non-positive watering
//! frequency is not an error at all; the decay model reads it as 0%.

use crate::PlantId;
use chrono::NaiveDate;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PlantError {
    /// Rejected user input, e.g. an empty plant type
    #[error("{0}")]
    Validation(String),

    /// No plant with this id in the caller's account
    #[error("plant {id} not found")]
    NotFound { id: PlantId },

    /// Watering dates may not lie after the current day
    #[error("watering date {date} is after today ({today})")]
    FutureWateringDate { date: NaiveDate, today: NaiveDate },

    /// Dates are exchanged as `YYYY-MM-DD`
    #[error("invalid date '{0}', expected YYYY-MM-DD")]
    InvalidDate(String),

    /// Id not understood by the backing store
    #[error("invalid plant id '{0}'")]
    InvalidId(String),

    /// Network or database failure, propagated unchanged
    #[error("database error: {0}")]
    Database(#[from] mongodb::error::Error),
}

impl PlantError {
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            PlantError::Validation(_)
                | PlantError::FutureWateringDate { .. }
                | PlantError::InvalidDate(_)
                | PlantError::InvalidId(_)
        )
    }
}

/// Parse an ISO calendar date (`YYYY-MM-DD`).
pub fn parse_iso_date(input: &str) -> Result<NaiveDate, PlantError> {
    NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d")
        .map_err(|_| PlantError::InvalidDate(input.to_string()))
}
