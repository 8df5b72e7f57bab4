//! Reference module - growth reference tables, lookup and interpolation.
//!
//! A `ReferenceData` value is an immutable snapshot of one dataset version.
//! Lookups on tabulated rows return the row unchanged, lookups between rows
//! interpolate L, M and S linearly and independently, and lookups outside
//! the tabulated range fail instead of extrapolating.

mod reference_curves;
mod reference_errors;
mod reference_loader;
mod reference_model;
mod reference_store;
mod who_2006;

#[cfg(test)]
mod reference_store_tests;

pub use reference_curves::{CurvePoint, ReferenceCurves};
pub use reference_errors::{OutOfRangeError, ReferenceDataError};
pub use reference_loader::{load_reference_file, parse_reference_csv};
pub use reference_model::{
    Coverage, Indicator, KeyKind, LmsParameters, ReferenceEntry, ReferenceKey,
};
pub use reference_store::ReferenceData;
