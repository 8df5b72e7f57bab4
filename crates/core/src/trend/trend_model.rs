use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Direction of a raw measurement between two observations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Increasing,
    Decreasing,
    #[default]
    Stable,
}

/// Direction of a status score relative to the median.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusDirection {
    Improving,
    Declining,
    #[default]
    Stable,
}

/// Comparison of the two chronologically latest analyses.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GrowthTrend {
    pub weight: Direction,
    pub height: Direction,
    pub head_circumference: Direction,
    pub weight_for_height: StatusDirection,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub previous_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latest_date: Option<NaiveDate>,
}
