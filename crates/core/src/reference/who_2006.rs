//! Bundled WHO Child Growth Standards (2006) reference tables.

use super::reference_errors::ReferenceDataError;
use super::reference_loader::parse_reference_csv;
use super::reference_store::ReferenceData;
use crate::constants::WHO_2006_DATASET_VERSION;

const WHO_2006_CSV: &str = include_str!("../../data/who_2006.csv");

impl ReferenceData {
    /// Builds the bundled WHO 2006 dataset.
    ///
    /// Age-indexed series cover 0-60 months; weight-for-height covers
    /// 45-120 cm of length or height.
    pub fn who_2006() -> Result<Self, ReferenceDataError> {
        parse_reference_csv(WHO_2006_CSV.as_bytes(), WHO_2006_DATASET_VERSION)
    }
}
