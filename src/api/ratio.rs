use axum::{
    extract::{rejection::JsonRejection, State},
    response::Json,
};
use primix_core::{is_linearly_independent, solve_mixing_ratios};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use utoipa::ToSchema;

use super::types::{resolve_basis, ColorInput, RgbValue};
use crate::error::ApiError;
use crate::models::AppConfig;

/// Request body for solving mixing ratios
#[derive(Debug, Deserialize, ToSchema)]
pub struct RatioRequest {
    /// Three primaries; the configured default when omitted
    #[serde(default)]
    pub primaries: Option<Vec<ColorInput>>,
    /// Color to reproduce
    pub target: ColorInput,
}

/// Mixing ratios for a target color
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct RatioResponse {
    /// False when the primaries are dependent; the ratios are then all zero
    pub independent: bool,
    /// Coefficient of the first primary
    pub x: f64,
    /// Coefficient of the second primary
    pub y: f64,
    /// Coefficient of the third primary
    pub z: f64,
    /// True when no coefficient is negative
    pub reachable: bool,
    /// Slider positions (ratios × 255) that feed `/api/mix`
    pub sliders: RgbValue,
}

/// Solve the mixing ratios of a target color
///
/// Returns `(x, y, z)` such that `x·primary1 + y·primary2 + z·primary3`
/// equals the target.
#[utoipa::path(
    post,
    path = "/api/ratio",
    request_body = RatioRequest,
    responses(
        (status = 200, description = "Ratios solved", body = RatioResponse),
        (status = 400, description = "Invalid primaries or target"),
    ),
    tag = "Mixing"
)]
pub async fn handle_ratio(
    State(config): State<Arc<AppConfig>>,
    payload: Result<Json<RatioRequest>, JsonRejection>,
) -> Result<Json<RatioResponse>, ApiError> {
    let Json(request) = payload?;
    let basis = resolve_basis(&config, request.primaries.as_deref())?;
    let target = request.target.resolve("target")?;

    let ratios = solve_mixing_ratios(&basis, &target);

    tracing::debug!(%target, x = ratios.x, y = ratios.y, z = ratios.z, "Ratios solved");

    Ok(Json(RatioResponse {
        independent: is_linearly_independent(&basis),
        x: ratios.x,
        y: ratios.y,
        z: ratios.z,
        reachable: ratios.is_reachable(),
        sliders: ratios.slider_positions().into(),
    }))
}
