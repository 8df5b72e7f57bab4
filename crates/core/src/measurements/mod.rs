//! Measurements module - raw anthropometric input records.

mod measurements_model;


pub use measurements_model::{Measurement, Sex};
