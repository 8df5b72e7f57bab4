use chrono::NaiveDate;
use std::sync::{Arc, RwLock};

use super::analysis_model::{GrowthAnalysis, ReferenceSummary};
use super::analyzer::GrowthAnalyzer;
use super::growth_traits::GrowthServiceTrait;
use crate::config::GrowthConfig;
use crate::errors::{Error, Result};
use crate::measurements::{Measurement, Sex};
use crate::reference::{Indicator, ReferenceCurves, ReferenceData};
use crate::trend::{calculate_trend, GrowthTrend};
use crate::utils::time_utils::today_utc;

/// Growth assessment service holding the active reference snapshot.
///
/// The dataset sits behind `Arc<RwLock<Arc<_>>>`: each call clones the inner
/// `Arc` under a short read lock and works on that snapshot, so a reload
/// never changes data under an analysis already in progress.
pub struct GrowthService {
    reference: Arc<RwLock<Arc<ReferenceData>>>,
    config: Arc<GrowthConfig>,
}

impl GrowthService {
    pub fn new(reference: ReferenceData, config: GrowthConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            reference: Arc::new(RwLock::new(Arc::new(reference))),
            config: Arc::new(config),
        })
    }

    /// Service over the bundled WHO 2006 tables.
    pub fn with_who_2006(config: GrowthConfig) -> Result<Self> {
        Self::new(ReferenceData::who_2006()?, config)
    }

    fn analyze_all(
        &self,
        reference: &ReferenceData,
        measurements: &[Measurement],
        today: NaiveDate,
    ) -> Result<Vec<GrowthAnalysis>> {
        let analyzer = GrowthAnalyzer::new(reference, &self.config);
        measurements
            .iter()
            .map(|m| analyzer.analyze_as_of(m, today))
            .collect()
    }
}

impl GrowthServiceTrait for GrowthService {
    fn config(&self) -> &GrowthConfig {
        &self.config
    }

    fn reference_snapshot(&self) -> Result<Arc<ReferenceData>> {
        let guard = self
            .reference
            .read()
            .map_err(|e| Error::Unexpected(format!("Reference lock poisoned: {}", e)))?;
        Ok(Arc::clone(&*guard))
    }

    fn reload_reference(&self, reference: ReferenceData) -> Result<()> {
        let version = reference.version().to_string();
        let mut guard = self
            .reference
            .write()
            .map_err(|e| Error::Unexpected(format!("Reference lock poisoned: {}", e)))?;
        let previous = std::mem::replace(&mut *guard, Arc::new(reference));
        log::info!(
            "Reference dataset reloaded: '{}' -> '{}'",
            previous.version(),
            version
        );
        Ok(())
    }

    fn analyze(&self, measurement: &Measurement) -> Result<GrowthAnalysis> {
        self.analyze_as_of(measurement, today_utc())
    }

    fn analyze_as_of(&self, measurement: &Measurement, today: NaiveDate) -> Result<GrowthAnalysis> {
        let reference = self.reference_snapshot()?;
        GrowthAnalyzer::new(&reference, &self.config).analyze_as_of(measurement, today)
    }

    fn analyze_batch(&self, measurements: &[Measurement]) -> Result<Vec<GrowthAnalysis>> {
        let reference = self.reference_snapshot()?;
        self.analyze_all(&reference, measurements, today_utc())
    }

    fn trend(&self, history: &[GrowthAnalysis]) -> GrowthTrend {
        calculate_trend(history, &self.config.trend)
    }

    fn trend_for_measurements(&self, measurements: &[Measurement]) -> Result<GrowthTrend> {
        let history = self.analyze_batch(measurements)?;
        Ok(self.trend(&history))
    }

    fn reference_curves(&self, indicator: Indicator, sex: Sex) -> Result<ReferenceCurves> {
        self.reference_snapshot()?.curves(indicator, sex)
    }

    fn reference_summary(&self) -> Result<ReferenceSummary> {
        let reference = self.reference_snapshot()?;
        Ok(ReferenceSummary {
            version: reference.version().to_string(),
            row_count: reference.row_count(),
            series: reference.coverage_report(),
        })
    }
}
