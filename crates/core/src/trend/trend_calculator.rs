use super::trend_model::{Direction, GrowthTrend, StatusDirection};
use crate::analysis::GrowthAnalysis;
use crate::config::TrendConfig;
use crate::reference::Indicator;

/// Compares the latest analysis with the one before it.
///
/// History is ordered by observation date; analyses sharing a date keep
/// their input order, so the later one in the input counts as latest.
/// Fewer than two analyses yield an all-stable trend with no dates.
pub fn calculate_trend(history: &[GrowthAnalysis], config: &TrendConfig) -> GrowthTrend {
    let mut ordered: Vec<&GrowthAnalysis> = history.iter().collect();
    ordered.sort_by_key(|a| a.observation_date);

    let (previous, latest) = match ordered.as_slice() {
        [.., previous, latest] => (*previous, *latest),
        _ => return GrowthTrend::default(),
    };

    let head_circumference = match (previous.head_circumference_cm, latest.head_circumference_cm) {
        (Some(before), Some(after)) => {
            direction(after - before, config.head_circumference_tolerance_cm)
        }
        _ => Direction::Stable,
    };

    let weight_for_height = match (
        previous.get(Indicator::WeightForHeight),
        latest.get(Indicator::WeightForHeight),
    ) {
        (Some(before), Some(after)) => status_direction(
            before.z_score,
            after.z_score,
            config.weight_for_height_z_tolerance,
        ),
        _ => StatusDirection::Stable,
    };

    GrowthTrend {
        weight: direction(latest.weight_kg - previous.weight_kg, config.weight_tolerance_kg),
        height: direction(latest.height_cm - previous.height_cm, config.height_tolerance_cm),
        head_circumference,
        weight_for_height,
        previous_date: Some(previous.observation_date),
        latest_date: Some(latest.observation_date),
    }
}

fn direction(delta: f64, tolerance: f64) -> Direction {
    if delta > tolerance {
        Direction::Increasing
    } else if delta < -tolerance {
        Direction::Decreasing
    } else {
        Direction::Stable
    }
}

/// Improving means the score moved toward the median.
fn status_direction(before: f64, after: f64, tolerance: f64) -> StatusDirection {
    let toward_median = before.abs() - after.abs();
    if toward_median > tolerance {
        StatusDirection::Improving
    } else if toward_median < -tolerance {
        StatusDirection::Declining
    } else {
        StatusDirection::Stable
    }
}
