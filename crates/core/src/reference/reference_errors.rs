use thiserror::Error;

use super::reference_model::{Indicator, KeyKind};
use crate::measurements::Sex;

/// Problems detected while building a reference dataset.
///
/// These are raised at load time only. A dataset that loads successfully
/// never produces them during analysis.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ReferenceDataError {
    #[error("Failed to read reference data: {0}")]
    Io(String),

    #[error("Malformed reference row at line {line}: {reason}")]
    MalformedRow { line: u64, reason: String },

    #[error("Invalid LMS parameters for {indicator}/{sex} at index {index}")]
    InvalidParameters {
        indicator: Indicator,
        sex: Sex,
        index: f64,
    },

    #[error("Index {index} for {indicator}/{sex} is not strictly increasing")]
    UnorderedIndex {
        indicator: Indicator,
        sex: Sex,
        index: f64,
    },

    #[error("Series {indicator}/{sex} needs at least two rows, found {rows}")]
    InsufficientRows {
        indicator: Indicator,
        sex: Sex,
        rows: usize,
    },

    #[error("Reference dataset has no series for {indicator}/{sex}")]
    MissingSeries { indicator: Indicator, sex: Sex },

    #[error("Reference dataset version must not be empty")]
    MissingVersion,
}

/// A lookup fell outside the tabulated range of a series.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("{indicator} reference for {sex} covers {min}-{max} {}, got {value}", .kind.unit())]
pub struct OutOfRangeError {
    pub indicator: Indicator,
    pub sex: Sex,
    pub kind: KeyKind,
    pub value: f64,
    pub min: f64,
    pub max: f64,
}
