//! Analysis module - per-measurement growth assessment and the service facade.
//!
//! `GrowthAnalyzer` is a pure function of (measurement, reference snapshot,
//! configuration). `GrowthService` owns the current reference snapshot and
//! exposes the operations used by outer layers through `GrowthServiceTrait`.

mod analysis_model;
mod analyzer;
mod growth_service;
mod growth_traits;


pub use analysis_model::{GrowthAnalysis, IndicatorResult, ReferenceSummary};
pub use analyzer::GrowthAnalyzer;
pub use growth_service::GrowthService;
pub use growth_traits::GrowthServiceTrait;
