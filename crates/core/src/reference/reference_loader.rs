//! CSV loading for growth reference tables.
//!
//! Expected layout (lines starting with `#` are comments):
//!
//! ```text
//! indicator,sex,index,l,m,s
//! wfa,female,0,0.3809,3.2322,0.14171
//! ```
//!
//! `indicator` accepts the short code (`wfa`, `hfa`, `wfh`, `hcfa`) or the
//! full name; `index` is age in months, or length in cm for `wfh`.

use csv::{ReaderBuilder, Trim};
use serde::Deserialize;
use std::io::Read;
use std::path::Path;

use super::reference_errors::ReferenceDataError;
use super::reference_model::{Indicator, LmsParameters, ReferenceEntry};
use super::reference_store::ReferenceData;
use crate::errors::ValidationError;
use crate::measurements::Sex;

#[derive(Debug, Deserialize)]
struct ReferenceRow {
    indicator: String,
    sex: String,
    index: f64,
    l: f64,
    m: f64,
    s: f64,
}

/// Parses a reference table from any reader.
pub fn parse_reference_csv<R: Read>(
    reader: R,
    version: &str,
) -> Result<ReferenceData, ReferenceDataError> {
    let mut csv_reader = ReaderBuilder::new()
        .has_headers(true)
        .comment(Some(b'#'))
        .trim(Trim::All)
        .from_reader(reader);

    let headers = csv_reader
        .headers()
        .map_err(|e| ReferenceDataError::MalformedRow {
            line: 1,
            reason: e.to_string(),
        })?
        .clone();

    let mut entries = Vec::new();
    for result in csv_reader.records() {
        let record = result.map_err(|e| ReferenceDataError::MalformedRow {
            line: e.position().map(|p| p.line()).unwrap_or(0),
            reason: e.to_string(),
        })?;
        let line = record.position().map(|p| p.line()).unwrap_or(0);
        let row: ReferenceRow =
            record
                .deserialize(Some(&headers))
                .map_err(|e| ReferenceDataError::MalformedRow {
                    line,
                    reason: e.to_string(),
                })?;
        let indicator: Indicator =
            row.indicator
                .parse()
                .map_err(|e: ValidationError| ReferenceDataError::MalformedRow {
                    line,
                    reason: e.to_string(),
                })?;
        let sex: Sex = row
            .sex
            .parse()
            .map_err(|e: ValidationError| ReferenceDataError::MalformedRow {
                line,
                reason: e.to_string(),
            })?;
        entries.push(ReferenceEntry {
            indicator,
            sex,
            index: row.index,
            lms: LmsParameters::new(row.l, row.m, row.s),
        });
    }

    ReferenceData::from_entries(version, entries)
}

/// Loads a reference table from disk.
///
/// The dataset version defaults to the file stem when none is given.
pub fn load_reference_file(
    path: impl AsRef<Path>,
    version: Option<&str>,
) -> Result<ReferenceData, ReferenceDataError> {
    let path = path.as_ref();
    let file = std::fs::File::open(path)
        .map_err(|e| ReferenceDataError::Io(format!("{}: {}", path.display(), e)))?;
    let version = match version {
        Some(v) => v.to_string(),
        None => path
            .file_stem()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_default(),
    };
    log::debug!("Reading growth reference table from {}", path.display());
    parse_reference_csv(file, &version)
}
