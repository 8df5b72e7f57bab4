use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::age::AgeConvention;
use crate::classification::ClassificationTable;
use crate::errors::{Error, Result};
use crate::reference::Indicator;

/// How scores beyond +/-3 SD are reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TailPolicy {
    /// WHO restricted application: tail-adjusted indicators are restated
    /// linearly past +/-3 SD.
    #[default]
    WhoRestricted,
    /// Raw LMS transform for every indicator.
    None,
}

/// Tolerances used when comparing the two latest measurements.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TrendConfig {
    /// Minimum weight change in kg counted as a change (default: 0)
    pub weight_tolerance_kg: f64,
    /// Minimum height change in cm counted as a change (default: 0)
    pub height_tolerance_cm: f64,
    /// Minimum head circumference change in cm (default: 0)
    pub head_circumference_tolerance_cm: f64,
    /// Minimum move of |weight-for-height z| counted as improving or declining (default: 0.1)
    pub weight_for_height_z_tolerance: f64,
}

impl Default for TrendConfig {
    fn default() -> Self {
        Self {
            weight_tolerance_kg: 0.0,
            height_tolerance_cm: 0.0,
            head_circumference_tolerance_cm: 0.0,
            weight_for_height_z_tolerance: 0.1,
        }
    }
}

/// Settings for the growth engine.
///
/// Missing fields take their defaults when deserialized, so a JSON file only
/// needs the settings it changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GrowthConfig {
    pub age_convention: AgeConvention,
    pub tail_policy: TailPolicy,
    /// Indicators restated past +/-3 SD under `WhoRestricted`
    pub tail_adjusted_indicators: Vec<Indicator>,
    pub classification: ClassificationTable,
    pub trend: TrendConfig,
}

impl Default for GrowthConfig {
    fn default() -> Self {
        Self {
            age_convention: AgeConvention::default(),
            tail_policy: TailPolicy::default(),
            tail_adjusted_indicators: vec![Indicator::WeightForAge, Indicator::WeightForHeight],
            classification: ClassificationTable::default(),
            trend: TrendConfig::default(),
        }
    }
}

impl GrowthConfig {
    pub fn validate(&self) -> Result<()> {
        self.classification.validate()?;

        let tolerances = [
            ("weightToleranceKg", self.trend.weight_tolerance_kg),
            ("heightToleranceCm", self.trend.height_tolerance_cm),
            (
                "headCircumferenceToleranceCm",
                self.trend.head_circumference_tolerance_cm,
            ),
            (
                "weightForHeightZTolerance",
                self.trend.weight_for_height_z_tolerance,
            ),
        ];
        for (name, value) in tolerances {
            if !value.is_finite() || value < 0.0 {
                return Err(Error::InvalidConfigValue(format!(
                    "trend.{} must be a non-negative number, got {}",
                    name, value
                )));
            }
        }
        Ok(())
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: GrowthConfig = serde_json::from_str(json)
            .map_err(|e| Error::InvalidConfigValue(format!("Invalid growth config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .map_err(|e| Error::ConfigIO(format!("{}: {}", path.display(), e)))?;
        let config = Self::from_json_str(&raw)?;
        log::info!("Loaded growth config from {}", path.display());
        Ok(config)
    }

    pub fn is_tail_adjusted(&self, indicator: Indicator) -> bool {
        self.tail_policy == TailPolicy::WhoRestricted
            && self.tail_adjusted_indicators.contains(&indicator)
    }
}
