//! Age module - converts birth and observation dates into a child's age.

mod age_resolver;

pub use age_resolver::{resolve_age, AgeConvention, ChildAge};
