use chrono::NaiveDate;
use std::sync::Arc;

use super::analysis_model::{GrowthAnalysis, ReferenceSummary};
use crate::config::GrowthConfig;
use crate::errors::Result;
use crate::measurements::{Measurement, Sex};
use crate::reference::{Indicator, ReferenceCurves, ReferenceData};
use crate::trend::GrowthTrend;

/// Trait defining the contract for growth assessment operations.
pub trait GrowthServiceTrait: Send + Sync {
    fn config(&self) -> &GrowthConfig;

    /// Current reference snapshot. Callers holding it are unaffected by reloads.
    fn reference_snapshot(&self) -> Result<Arc<ReferenceData>>;

    /// Replaces the reference dataset as a whole.
    fn reload_reference(&self, reference: ReferenceData) -> Result<()>;

    fn analyze(&self, measurement: &Measurement) -> Result<GrowthAnalysis>;

    fn analyze_as_of(&self, measurement: &Measurement, today: NaiveDate) -> Result<GrowthAnalysis>;

    /// Analyzes every measurement against one snapshot; the first failure
    /// aborts the batch.
    fn analyze_batch(&self, measurements: &[Measurement]) -> Result<Vec<GrowthAnalysis>>;

    fn trend(&self, history: &[GrowthAnalysis]) -> GrowthTrend;

    /// Analyzes the measurements, then compares the two latest.
    fn trend_for_measurements(&self, measurements: &[Measurement]) -> Result<GrowthTrend>;

    fn reference_curves(&self, indicator: Indicator, sex: Sex) -> Result<ReferenceCurves>;

    fn reference_summary(&self) -> Result<ReferenceSummary>;
}
