//! Z-score module - LMS transform, tail restatement and percentiles.

mod lms;
mod normal;

pub use lms::{score, score_restated, value_at_z};
pub use normal::{percentile, standard_normal_cdf};
