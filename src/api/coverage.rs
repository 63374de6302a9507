use axum::{
    extract::{rejection::JsonRejection, State},
    response::Json,
};
use primix_core::{
    cube_exit_point, is_linearly_independent, CancellationToken, CoverageEstimator, GridOrigin,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use utoipa::ToSchema;

use super::types::{resolve_basis, ColorInput, RgbValue};
use crate::error::ApiError;
use crate::models::AppConfig;

/// Request body for a coverage scan
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct CoverageRequest {
    /// Three primaries; the configured default when omitted
    #[serde(default)]
    pub primaries: Option<Vec<ColorInput>>,
    /// Grid spacing; the configured default when omitted
    #[serde(default)]
    pub step: Option<u32>,
    /// Grid origin, `center` or `corner`
    #[serde(default)]
    pub origin: Option<String>,
    /// Return the reachable/unreachable sample lists
    #[serde(default)]
    pub include_samples: bool,
}

/// One primary and where its ray leaves the color cube
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct AxisInfo {
    pub primary: RgbValue,
    /// `null` for black
    pub exit: Option<RgbValue>,
}

/// Result of a coverage scan
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CoverageResponse {
    /// Share of the grid reachable with non-negative ratios (0-100)
    pub percentage: f64,
    /// Number of grid points scanned (0 for dependent primaries)
    pub total: usize,
    /// Reachable samples, in scan order (empty unless `include_samples`)
    pub inside: Vec<RgbValue>,
    /// Unreachable samples, in scan order (empty unless `include_samples`)
    pub outside: Vec<RgbValue>,
    /// Primary axes for drawing
    pub axes: Vec<AxisInfo>,
}

/// Estimate gamut coverage
///
/// Samples the RGB cube on a regular grid and reports the share of samples
/// reachable from the primaries. Dependent primaries have 0% coverage.
/// Steps below the configured minimum are rejected unless the primaries
/// are dependent.
#[utoipa::path(
    post,
    path = "/api/coverage",
    request_body = CoverageRequest,
    responses(
        (status = 200, description = "Coverage estimated", body = CoverageResponse),
        (status = 400, description = "Invalid primaries, step or origin"),
        (status = 503, description = "Server shutting down"),
    ),
    tag = "Coverage"
)]
pub async fn handle_coverage(
    State(config): State<Arc<AppConfig>>,
    State(shutdown): State<CancellationToken>,
    payload: Result<Json<CoverageRequest>, JsonRejection>,
) -> Result<Json<CoverageResponse>, ApiError> {
    let Json(request) = payload?;
    let basis = resolve_basis(&config, request.primaries.as_deref())?;

    let step = request.step.unwrap_or(config.coverage.step);
    // Dependent primaries are never scanned, so any step is cheap
    if step < config.coverage.min_step && is_linearly_independent(&basis) {
        return Err(ApiError::invalid_input(
            "step",
            format!("must be at least {}, got {step}", config.coverage.min_step),
        ));
    }

    let origin = match request.origin.as_deref() {
        Some(s) => s
            .parse::<GridOrigin>()
            .map_err(|e| ApiError::invalid_input("origin", e))?,
        None => config.coverage.origin,
    };

    let result = CoverageEstimator::new(basis)
        .step(step)
        .origin(origin)
        .collect_samples(request.include_samples)
        .cancel_token(shutdown.child_token())
        .run()
        .await?;

    tracing::info!(
        step,
        %origin,
        total = result.total,
        percentage = result.percentage,
        "Coverage estimated"
    );

    let axes = basis
        .colors()
        .iter()
        .map(|primary| AxisInfo {
            primary: (*primary).into(),
            exit: cube_exit_point(primary).map(RgbValue::from),
        })
        .collect();

    Ok(Json(CoverageResponse {
        percentage: result.percentage,
        total: result.total,
        inside: result.inside.into_iter().map(RgbValue::from).collect(),
        outside: result.outside.into_iter().map(RgbValue::from).collect(),
        axes,
    }))
}
