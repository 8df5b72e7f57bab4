use serde::{Deserialize, Serialize};

use super::reference_model::{Indicator, KeyKind};
use super::reference_store::ReferenceData;
use crate::constants::CHART_SD_LINES;
use crate::errors::Result;
use crate::measurements::Sex;
use crate::zscore::value_at_z;

/// Measurement values at fixed SD lines for one tabulated index.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurvePoint {
    pub index: f64,
    /// Values at -3, -2, -1, 0, +1, +2, +3 SD.
    pub values: Vec<f64>,
}

/// SD curves of one reference series, as plotted on growth charts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReferenceCurves {
    pub indicator: Indicator,
    pub sex: Sex,
    pub kind: KeyKind,
    pub version: String,
    pub sd_lines: Vec<f64>,
    pub points: Vec<CurvePoint>,
}

impl ReferenceData {
    /// Computes the -3..+3 SD curves at every tabulated row of a series.
    pub fn curves(&self, indicator: Indicator, sex: Sex) -> Result<ReferenceCurves> {
        let points = self
            .entries(indicator, sex)?
            .into_iter()
            .map(|entry| CurvePoint {
                index: entry.index,
                values: CHART_SD_LINES
                    .iter()
                    .map(|&z| value_at_z(z, &entry.lms))
                    .collect(),
            })
            .collect();

        Ok(ReferenceCurves {
            indicator,
            sex,
            kind: indicator.key_kind(),
            version: self.version().to_string(),
            sd_lines: CHART_SD_LINES.to_vec(),
            points,
        })
    }
}
