//! Standard normal distribution helpers.

use statrs::distribution::{ContinuousCDF, Normal};

use crate::errors::{Error, Result};

fn standard_normal() -> Result<Normal> {
    Normal::new(0.0, 1.0)
        .map_err(|e| Error::Unexpected(format!("Standard normal distribution: {}", e)))
}

/// P(Z <= z) for a standard normal variable.
pub fn standard_normal_cdf(z: f64) -> Result<f64> {
    Ok(standard_normal()?.cdf(z))
}

/// Percentile (0-100) corresponding to an SD score.
pub fn percentile(z: f64) -> Result<f64> {
    Ok((standard_normal_cdf(z)? * 100.0).clamp(0.0, 100.0))
}
