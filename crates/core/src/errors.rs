//! Core error types for the growth assessment engine.
//!
//! Every failure is returned as a typed error. Reference-data problems are
//! raised while the dataset is loaded; once a dataset is in use, lookups can
//! only fail with an out-of-range condition.

use chrono::NaiveDate;
use thiserror::Error;

use crate::reference::{KeyKind, OutOfRangeError, ReferenceDataError};

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the growth engine.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Input validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("{0}")]
    OutOfRange(#[from] OutOfRangeError),

    #[error("Reference data error: {0}")]
    ReferenceData(#[from] ReferenceDataError),

    #[error("Failed to load configuration: {0}")]
    ConfigIO(String),

    #[error("Invalid configuration value: {0}")]
    InvalidConfigValue(String),

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

impl Error {
    /// Message suitable for showing to a caregiver.
    ///
    /// Out-of-range failures explain the chart's supported range instead of
    /// exposing the raw computation error.
    pub fn caregiver_message(&self) -> String {
        match self {
            Error::OutOfRange(err) => {
                let (unit, what) = match err.kind {
                    KeyKind::AgeMonths => ("months", "ages"),
                    KeyKind::HeightCm => ("cm", "lengths"),
                };
                format!(
                    "The {} chart covers {} from {} to {} {}. This measurement ({:.1} {}) is outside that range, so it cannot be assessed on this chart.",
                    err.indicator.label().to_lowercase(),
                    what,
                    trim_number(err.min),
                    trim_number(err.max),
                    unit,
                    err.value,
                    unit
                )
            }
            Error::Validation(err) => format!("Please check the measurement: {}", err),
            _ => "Growth assessment is temporarily unavailable.".to_string(),
        }
    }
}

fn trim_number(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{:.0}", value)
    } else {
        format!("{:.1}", value)
    }
}

/// Validation errors for measurement input.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("'{field}' must be greater than zero (got {value})")]
    NonPositiveValue { field: String, value: f64 },

    #[error("'{0}' must be a finite number")]
    NonFiniteValue(String),

    #[error("Observation date {observation_date} is before birth date {birth_date}")]
    ObservationBeforeBirth {
        birth_date: NaiveDate,
        observation_date: NaiveDate,
    },

    #[error("Observation date {observation_date} is in the future (today is {today})")]
    FutureObservation {
        observation_date: NaiveDate,
        today: NaiveDate,
    },

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
