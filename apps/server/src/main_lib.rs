use std::sync::Arc;

use crate::config::Config;
use anyhow::Context;
use kidtrack_core::{
    config::GrowthConfig,
    reference::{load_reference_file, ReferenceData},
    GrowthService, GrowthServiceTrait,
};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

pub struct AppState {
    pub growth_service: Arc<dyn GrowthServiceTrait>,
}

pub fn init_tracing() {
    let log_format = std::env::var("KT_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    if log_format.eq_ignore_ascii_case("json") {
        registry
            .with(fmt::layer().json().with_current_span(false))
            .init();
    } else {
        registry
            .with(fmt::layer().with_target(true).with_line_number(true))
            .init();
    }
}

pub fn build_state(config: &Config) -> anyhow::Result<Arc<AppState>> {
    let growth_config = match &config.growth_config_path {
        Some(path) => GrowthConfig::load_from_path(path)
            .with_context(|| format!("Failed to load growth config {}", path.display()))?,
        None => GrowthConfig::default(),
    };

    let reference = match &config.reference_path {
        Some(path) => load_reference_file(path, None)
            .with_context(|| format!("Failed to load reference table {}", path.display()))?,
        None => ReferenceData::who_2006().context("Bundled reference table is invalid")?,
    };
    tracing::info!(
        "Reference dataset in use: {} ({} rows)",
        reference.version(),
        reference.row_count()
    );

    let growth_service = Arc::new(GrowthService::new(reference, growth_config)?);
    Ok(Arc::new(AppState { growth_service }))
}
