//! Config module - engine settings for age, tails, classification and trends.

mod config_model;


pub use crate::age::AgeConvention;
pub use config_model::{GrowthConfig, TailPolicy, TrendConfig};
