//! KidTrack Core - growth assessment engine.
//!
//! Converts child measurements into WHO z-scores, percentiles and
//! nutritional statuses against a versioned reference dataset, and compares
//! consecutive measurements. The crate is storage-agnostic: records come in
//! as values and analyses go out as values.

pub mod age;
pub mod analysis;
pub mod classification;
pub mod config;
pub mod constants;
pub mod errors;
pub mod measurements;
pub mod reference;
pub mod trend;
pub mod utils;
pub mod zscore;

pub use analysis::{GrowthAnalysis, GrowthAnalyzer, GrowthService, GrowthServiceTrait};
pub use measurements::{Measurement, Sex};
pub use reference::{Indicator, ReferenceData};

// Re-export error types
pub use errors::Error;
pub use errors::Result;
