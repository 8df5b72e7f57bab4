//! Classification module - maps SD scores to indicator-specific statuses.
//!
//! Cut points and wording come from a `ClassificationTable` keyed by
//! indicator. The default table carries the WHO vocabulary:
//!
//! | band             | interval           |
//! |------------------|--------------------|
//! | severe deficit   | z < -3             |
//! | moderate deficit | -3 <= z < -2       |
//! | normal           | -2 <= z <= +2      |
//! | elevated         | +2 < z <= +3       |
//! | severe elevation | z > +3             |

mod classification_model;
mod classifier;

#[cfg(test)]
mod classification_tests;

pub use classification_model::{
    Band, BandThresholds, ClassificationTable, GrowthStatus, IndicatorRules, StatusRule,
};
pub use classifier::classify;
