use std::sync::Arc;

use crate::{
    error::{ApiError, ApiResult},
    main_lib::AppState,
};
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    routing::{get, post},
    Json, Router,
};
use kidtrack_core::{
    analysis::ReferenceSummary,
    errors::ValidationError,
    reference::{Indicator, ReferenceCurves},
    trend::GrowthTrend,
    GrowthAnalysis, Measurement, Sex,
};

/// Analyze a single measurement.
async fn analyze(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<Measurement>, JsonRejection>,
) -> ApiResult<Json<GrowthAnalysis>> {
    let Json(measurement) = payload?;
    let analysis = state.growth_service.analyze(&measurement)?;
    Ok(Json(analysis))
}

/// Analyze several measurements; the first failure fails the request.
async fn analyze_batch(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<Vec<Measurement>>, JsonRejection>,
) -> ApiResult<Json<Vec<GrowthAnalysis>>> {
    let Json(measurements) = payload?;
    let analyses = state.growth_service.analyze_batch(&measurements)?;
    Ok(Json(analyses))
}

/// Compare the two latest measurements of a child.
async fn trend(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<Vec<Measurement>>, JsonRejection>,
) -> ApiResult<Json<GrowthTrend>> {
    let Json(history) = payload?;
    let trend = state.growth_service.trend_for_measurements(&history)?;
    Ok(Json(trend))
}

async fn reference_curves(
    State(state): State<Arc<AppState>>,
    Path((indicator, sex)): Path<(String, String)>,
) -> ApiResult<Json<ReferenceCurves>> {
    let indicator: Indicator = indicator
        .parse()
        .map_err(|e: ValidationError| ApiError::BadRequest(e.to_string()))?;
    let sex: Sex = sex
        .parse()
        .map_err(|e: ValidationError| ApiError::BadRequest(e.to_string()))?;
    let curves = state.growth_service.reference_curves(indicator, sex)?;
    Ok(Json(curves))
}

async fn reference_coverage(
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<ReferenceSummary>> {
    let summary = state.growth_service.reference_summary()?;
    Ok(Json(summary))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/growth/analyze", post(analyze))
        .route("/growth/analyze/batch", post(analyze_batch))
        .route("/growth/trend", post(trend))
        .route(
            "/growth/reference/{indicator}/{sex}/curves",
            get(reference_curves),
        )
        .route("/growth/reference/coverage", get(reference_coverage))
}
