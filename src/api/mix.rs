use axum::{
    extract::{rejection::JsonRejection, State},
    response::Json,
};
use primix_core::compose_color;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use utoipa::ToSchema;

use super::types::{resolve_basis, ColorInput, RgbValue};
use crate::error::ApiError;
use crate::models::AppConfig;

/// Request body for mixing
#[derive(Debug, Deserialize, ToSchema)]
pub struct MixRequest {
    /// Three primaries; the configured default when omitted
    #[serde(default)]
    pub primaries: Option<Vec<ColorInput>>,
    /// Slider positions, one per primary (0-255)
    pub ratios: ColorInput,
}

/// Result of mixing
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct MixResponse {
    /// Composed color, rounded and clipped to bytes
    pub color: RgbValue,
    /// `#RRGGBB` of the slider positions
    pub hex: String,
    /// `#RRGGBB` of the composed color
    pub color_hex: String,
}

/// Mix the primaries at the given slider positions
///
/// Each slider contributes `slider / 255` of its primary. Note that `hex`
/// encodes the slider positions, not the mixed color; use `color_hex` for
/// the latter.
#[utoipa::path(
    post,
    path = "/api/mix",
    request_body = MixRequest,
    responses(
        (status = 200, description = "Color mixed", body = MixResponse),
        (status = 400, description = "Invalid primaries or ratios"),
    ),
    tag = "Mixing"
)]
pub async fn handle_mix(
    State(config): State<Arc<AppConfig>>,
    payload: Result<Json<MixRequest>, JsonRejection>,
) -> Result<Json<MixResponse>, ApiError> {
    let Json(request) = payload?;
    let basis = resolve_basis(&config, request.primaries.as_deref())?;
    let ratios = request.ratios.resolve_unbounded("ratios")?;

    let mixed = compose_color(&basis, &ratios);

    tracing::debug!(%ratios, color = ?mixed.color, hex = %mixed.hex, "Color mixed");

    Ok(Json(MixResponse {
        color: mixed.color.into(),
        color_hex: mixed.color_hex(),
        hex: mixed.hex,
    }))
}
