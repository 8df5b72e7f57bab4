//! Trend module - direction of change between the two latest analyses.

mod trend_calculator;
mod trend_model;


pub use trend_calculator::calculate_trend;
pub use trend_model::{Direction, GrowthTrend, StatusDirection};
