use chrono::NaiveDate;

use super::analysis_model::{GrowthAnalysis, IndicatorResult};
use crate::age::{resolve_age, ChildAge};
use crate::classification::classify;
use crate::config::GrowthConfig;
use crate::errors::{Error, Result};
use crate::measurements::Measurement;
use crate::reference::{Indicator, ReferenceData, ReferenceKey};
use crate::zscore::{percentile, score, score_restated};

/// Assesses measurements against one reference snapshot.
pub struct GrowthAnalyzer<'a> {
    reference: &'a ReferenceData,
    config: &'a GrowthConfig,
}

impl<'a> GrowthAnalyzer<'a> {
    pub fn new(reference: &'a ReferenceData, config: &'a GrowthConfig) -> Self {
        Self { reference, config }
    }

    /// Analyzes a measurement, treating `today` as the current date for the
    /// future-observation check.
    ///
    /// Fails if the measurement is invalid or a required indicator is outside
    /// the reference range. Required indicators are checked in order, so the
    /// first out-of-range one is reported. An out-of-range head circumference
    /// is omitted instead.
    pub fn analyze_as_of(&self, measurement: &Measurement, today: NaiveDate) -> Result<GrowthAnalysis> {
        measurement.validate(today)?;
        let age = resolve_age(
            measurement.birth_date,
            measurement.observation_date,
            self.config.age_convention,
        )?;

        let mut indicators = Vec::with_capacity(Indicator::ALL.len());
        for indicator in Indicator::REQUIRED {
            if let Some((value, key)) = indicator_inputs(indicator, measurement, &age) {
                indicators.push(self.assess(indicator, measurement, value, key)?);
            }
        }

        let head = Indicator::HeadCircumferenceForAge;
        if let Some((value, key)) = indicator_inputs(head, measurement, &age) {
            match self.assess(head, measurement, value, key) {
                Ok(result) => indicators.push(result),
                Err(Error::OutOfRange(err)) => {
                    log::debug!("Omitting {}: {}", head, err);
                }
                Err(err) => return Err(err),
            }
        }

        let alerts = indicators
            .iter()
            .filter(|r| r.status.alert)
            .map(|r| r.indicator)
            .collect();

        Ok(GrowthAnalysis {
            measurement_id: measurement.id.clone(),
            observation_date: measurement.observation_date,
            sex: measurement.sex,
            age,
            weight_kg: measurement.weight_kg,
            height_cm: measurement.height_cm,
            head_circumference_cm: measurement.head_circumference_cm,
            reference_version: self.reference.version().to_string(),
            indicators,
            alerts,
        })
    }

    fn assess(
        &self,
        indicator: Indicator,
        measurement: &Measurement,
        value: f64,
        key: ReferenceKey,
    ) -> Result<IndicatorResult> {
        let lms = self.reference.lookup(indicator, measurement.sex, key)?;
        let z_score = if self.config.is_tail_adjusted(indicator) {
            score_restated(value, &lms)?
        } else {
            score(value, &lms)?
        };
        let status = classify(&self.config.classification, indicator, z_score)?;
        log::debug!(
            "{} at {} {}: z = {:.3} ({})",
            indicator,
            key.value(),
            key.kind().unit(),
            z_score,
            status.code
        );

        Ok(IndicatorResult {
            indicator,
            value,
            index: key,
            lms,
            z_score,
            percentile: percentile(z_score)?,
            status,
        })
    }
}

/// Measured value and lookup key for an indicator, if the measurement has it.
fn indicator_inputs(
    indicator: Indicator,
    measurement: &Measurement,
    age: &ChildAge,
) -> Option<(f64, ReferenceKey)> {
    match indicator {
        Indicator::WeightForAge => Some((measurement.weight_kg, ReferenceKey::AgeMonths(age.months))),
        Indicator::HeightForAge => Some((measurement.height_cm, ReferenceKey::AgeMonths(age.months))),
        Indicator::WeightForHeight => {
            Some((measurement.weight_kg, ReferenceKey::HeightCm(measurement.height_cm)))
        }
        Indicator::HeadCircumferenceForAge => measurement
            .head_circumference_cm
            .map(|head| (head, ReferenceKey::AgeMonths(age.months))),
    }
}
