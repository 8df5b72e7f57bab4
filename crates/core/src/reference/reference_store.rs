use std::collections::{BTreeMap, HashMap};

use super::reference_errors::{OutOfRangeError, ReferenceDataError};
use super::reference_model::{
    Coverage, Indicator, KeyKind, LmsParameters, ReferenceEntry, ReferenceKey,
};
use crate::errors::{Error, Result, ValidationError};
use crate::measurements::Sex;

/// Rows of one (indicator, sex) series, sorted by strictly increasing index.
#[derive(Debug, Clone)]
struct ReferenceSeries {
    kind: KeyKind,
    indices: Vec<f64>,
    params: Vec<LmsParameters>,
}

impl ReferenceSeries {
    fn min(&self) -> f64 {
        self.indices[0]
    }

    fn max(&self) -> f64 {
        self.indices[self.indices.len() - 1]
    }

    /// Exact rows are returned as-is; values between rows are interpolated.
    /// Callers check the range first.
    fn parameters_at(&self, x: f64) -> LmsParameters {
        // First row whose index is >= x.
        let upper = self.indices.partition_point(|&idx| idx < x);
        if upper < self.indices.len() && self.indices[upper] == x {
            return self.params[upper];
        }
        let lower = upper - 1;
        let (x0, x1) = (self.indices[lower], self.indices[upper]);
        let t = (x - x0) / (x1 - x0);
        self.params[lower].interpolate(&self.params[upper], t)
    }
}

/// Immutable, versioned growth reference dataset.
///
/// Built once and shared by reference; there is no way to mutate a dataset
/// after construction. Replacing reference data means building a new
/// `ReferenceData` and swapping the whole value.
#[derive(Debug, Clone)]
pub struct ReferenceData {
    version: String,
    series: HashMap<(Indicator, Sex), ReferenceSeries>,
}

impl ReferenceData {
    /// Builds and validates a dataset from its rows.
    ///
    /// Rows may arrive in any order across series, but within a series the
    /// index must be strictly increasing in input order. Every indicator must
    /// be present for both sexes with at least two rows.
    pub fn from_entries(
        version: impl Into<String>,
        entries: impl IntoIterator<Item = ReferenceEntry>,
    ) -> std::result::Result<Self, ReferenceDataError> {
        let version = version.into();
        if version.trim().is_empty() {
            return Err(ReferenceDataError::MissingVersion);
        }

        let mut grouped: BTreeMap<(Indicator, Sex), Vec<ReferenceEntry>> = BTreeMap::new();
        for entry in entries {
            grouped
                .entry((entry.indicator, entry.sex))
                .or_default()
                .push(entry);
        }

        let mut series = HashMap::new();
        for indicator in Indicator::ALL {
            for sex in Sex::ALL {
                let rows = grouped
                    .remove(&(indicator, sex))
                    .ok_or(ReferenceDataError::MissingSeries { indicator, sex })?;
                series.insert((indicator, sex), build_series(indicator, sex, rows)?);
            }
        }

        let dataset = Self { version, series };
        log::info!(
            "Loaded growth reference dataset '{}' ({} rows)",
            dataset.version,
            dataset.row_count()
        );
        Ok(dataset)
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn row_count(&self) -> usize {
        self.series.values().map(|s| s.indices.len()).sum()
    }

    /// Looks up LMS parameters for an indicator at the given key.
    ///
    /// Fails with `OutOfRange` outside the tabulated range, and with a
    /// validation error if the key kind does not match the indicator.
    pub fn lookup(&self, indicator: Indicator, sex: Sex, key: ReferenceKey) -> Result<LmsParameters> {
        if key.kind() != indicator.key_kind() {
            return Err(ValidationError::InvalidInput(format!(
                "{} is indexed by {:?}, not {:?}",
                indicator,
                indicator.key_kind(),
                key.kind()
            ))
            .into());
        }
        let value = key.value();
        if !value.is_finite() {
            return Err(ValidationError::NonFiniteValue(format!("{} index", indicator)).into());
        }

        let series = self.series(indicator, sex)?;
        if value < series.min() || value > series.max() {
            return Err(Error::OutOfRange(OutOfRangeError {
                indicator,
                sex,
                kind: series.kind,
                value,
                min: series.min(),
                max: series.max(),
            }));
        }
        Ok(series.parameters_at(value))
    }

    pub fn lookup_by_age(&self, indicator: Indicator, sex: Sex, age_months: f64) -> Result<LmsParameters> {
        self.lookup(indicator, sex, ReferenceKey::AgeMonths(age_months))
    }

    pub fn lookup_by_height(&self, indicator: Indicator, sex: Sex, height_cm: f64) -> Result<LmsParameters> {
        self.lookup(indicator, sex, ReferenceKey::HeightCm(height_cm))
    }

    pub fn coverage(&self, indicator: Indicator, sex: Sex) -> Result<Coverage> {
        let series = self.series(indicator, sex)?;
        Ok(Coverage {
            indicator,
            sex,
            kind: series.kind,
            min: series.min(),
            max: series.max(),
        })
    }

    /// Coverage of every series, in indicator then sex order.
    pub fn coverage_report(&self) -> Vec<Coverage> {
        Indicator::ALL
            .into_iter()
            .flat_map(|indicator| Sex::ALL.into_iter().map(move |sex| (indicator, sex)))
            .filter_map(|(indicator, sex)| self.coverage(indicator, sex).ok())
            .collect()
    }

    /// Tabulated rows of a series in index order.
    pub fn entries(&self, indicator: Indicator, sex: Sex) -> Result<Vec<ReferenceEntry>> {
        let series = self.series(indicator, sex)?;
        Ok(series
            .indices
            .iter()
            .zip(series.params.iter())
            .map(|(&index, &lms)| ReferenceEntry {
                indicator,
                sex,
                index,
                lms,
            })
            .collect())
    }

    fn series(&self, indicator: Indicator, sex: Sex) -> Result<&ReferenceSeries> {
        // Unreachable for validated datasets.
        self.series
            .get(&(indicator, sex))
            .ok_or_else(|| ReferenceDataError::MissingSeries { indicator, sex }.into())
    }
}

fn build_series(
    indicator: Indicator,
    sex: Sex,
    rows: Vec<ReferenceEntry>,
) -> std::result::Result<ReferenceSeries, ReferenceDataError> {
    if rows.len() < 2 {
        return Err(ReferenceDataError::InsufficientRows {
            indicator,
            sex,
            rows: rows.len(),
        });
    }

    let mut indices = Vec::with_capacity(rows.len());
    let mut params = Vec::with_capacity(rows.len());
    for row in rows {
        if !row.index.is_finite() || !row.lms.is_valid() {
            return Err(ReferenceDataError::InvalidParameters {
                indicator,
                sex,
                index: row.index,
            });
        }
        if let Some(&last) = indices.last() {
            if row.index <= last {
                return Err(ReferenceDataError::UnorderedIndex {
                    indicator,
                    sex,
                    index: row.index,
                });
            }
        }
        indices.push(row.index);
        params.push(row.lms);
    }

    Ok(ReferenceSeries {
        kind: indicator.key_kind(),
        indices,
        params,
    })
}
