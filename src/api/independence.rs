use axum::{
    extract::{rejection::JsonRejection, State},
    response::Json,
};
use primix_core::{determinant, is_linearly_independent};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use utoipa::ToSchema;

use super::types::{resolve_basis, ColorInput};
use crate::error::ApiError;
use crate::models::AppConfig;

/// Request body for the independence check
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct IndependenceRequest {
    /// Three primaries; the configured default when omitted
    #[serde(default)]
    pub primaries: Option<Vec<ColorInput>>,
}

/// Response from the independence check
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct IndependenceResponse {
    /// True when the primaries span the color space
    pub independent: bool,
    /// Determinant of the basis matrix
    pub determinant: f64,
}

/// Check whether three primaries are linearly independent
///
/// Primaries whose determinant is within 1e-6 of zero are reported as
/// dependent. Dependent primaries cannot mix every target.
#[utoipa::path(
    post,
    path = "/api/independence",
    request_body = IndependenceRequest,
    responses(
        (status = 200, description = "Independence computed", body = IndependenceResponse),
        (status = 400, description = "Invalid primaries"),
    ),
    tag = "Mixing"
)]
pub async fn handle_independence(
    State(config): State<Arc<AppConfig>>,
    payload: Result<Json<IndependenceRequest>, JsonRejection>,
) -> Result<Json<IndependenceResponse>, ApiError> {
    let Json(request) = payload?;
    let basis = resolve_basis(&config, request.primaries.as_deref())?;

    let response = IndependenceResponse {
        independent: is_linearly_independent(&basis),
        determinant: determinant(&basis),
    };

    tracing::debug!(
        independent = response.independent,
        determinant = response.determinant,
        "Independence checked"
    );

    Ok(Json(response))
}
