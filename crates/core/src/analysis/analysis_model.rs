use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::age::ChildAge;
use crate::classification::GrowthStatus;
use crate::measurements::Sex;
use crate::reference::{Coverage, Indicator, LmsParameters, ReferenceKey};

/// Score and status for one indicator of one measurement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IndicatorResult {
    pub indicator: Indicator,
    /// Measured value (kg for weight indicators, cm otherwise)
    pub value: f64,
    /// Age in months or height in cm used for the reference lookup
    pub index: ReferenceKey,
    pub lms: LmsParameters,
    pub z_score: f64,
    pub percentile: f64,
    pub status: GrowthStatus,
}

/// Composite assessment of a single measurement.
///
/// Indicators appear in a fixed order: weight-for-age, height-for-age,
/// weight-for-height, then head-circumference-for-age when it was recorded
/// and covered by the reference.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GrowthAnalysis {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub measurement_id: Option<String>,
    pub observation_date: NaiveDate,
    pub sex: Sex,
    pub age: ChildAge,
    pub weight_kg: f64,
    pub height_cm: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub head_circumference_cm: Option<f64>,
    pub reference_version: String,
    pub indicators: Vec<IndicatorResult>,
    /// Indicators whose status raises an alert
    pub alerts: Vec<Indicator>,
}

impl GrowthAnalysis {
    pub fn get(&self, indicator: Indicator) -> Option<&IndicatorResult> {
        self.indicators.iter().find(|r| r.indicator == indicator)
    }

    pub fn requires_attention(&self) -> bool {
        !self.alerts.is_empty()
    }
}

/// Dataset version and per-series coverage of the active reference.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReferenceSummary {
    pub version: String,
    pub row_count: usize,
    pub series: Vec<Coverage>,
}
