//! Request/response building blocks shared by the mixing endpoints.

use primix_core::{BasisError, Color, PrimaryBasis};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::ApiError;
use crate::models::AppConfig;

/// A color as sent by clients: `"#RRGGBB"` / `"#RGB"` or an `{r, g, b}` object
#[derive(Debug, Clone, PartialEq, Deserialize, ToSchema)]
#[serde(untagged)]
pub enum ColorInput {
    /// Hex string, with or without the leading `#`
    Hex(String),
    /// Raw components
    Rgb { r: f64, g: f64, b: f64 },
}

impl ColorInput {
    /// Parse the input, requiring every component to lie in `0..=255`.
    pub fn resolve(&self, field: &'static str) -> Result<Color, ApiError> {
        let color = self.resolve_unbounded(field)?;
        if !color.is_in_cube() {
            return Err(ApiError::invalid_input(
                field,
                format!("components must be between 0 and 255, got {color}"),
            ));
        }
        Ok(color)
    }

    /// Parse the input without a range check.
    pub fn resolve_unbounded(&self, field: &'static str) -> Result<Color, ApiError> {
        match self {
            ColorInput::Hex(s) => s
                .parse()
                .map_err(|source| ApiError::InvalidColor { field, source }),
            ColorInput::Rgb { r, g, b } => Ok(Color::new(*r, *g, *b)),
        }
    }
}

impl From<Color> for ColorInput {
    fn from(c: Color) -> Self {
        ColorInput::Rgb {
            r: c.r,
            g: c.g,
            b: c.b,
        }
    }
}

/// RGB triple in responses
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct RgbValue {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl From<Color> for RgbValue {
    fn from(c: Color) -> Self {
        Self {
            r: c.r,
            g: c.g,
            b: c.b,
        }
    }
}

impl From<[u8; 3]> for RgbValue {
    fn from(bytes: [u8; 3]) -> Self {
        Color::from(bytes).into()
    }
}

/// Resolve the request's primaries, or the configured default when omitted.
pub fn resolve_basis(
    config: &AppConfig,
    primaries: Option<&[ColorInput]>,
) -> Result<PrimaryBasis, ApiError> {
    let Some(primaries) = primaries else {
        return Ok(config.default_basis());
    };

    if primaries.len() != 3 {
        return Err(BasisError::WrongCount(primaries.len()).into());
    }

    let mut colors = [Color::default(); 3];
    for (i, (input, slot)) in primaries.iter().zip(colors.iter_mut()).enumerate() {
        *slot = match input.resolve("primaries") {
            Err(ApiError::InvalidColor { source, .. }) => {
                return Err(BasisError::ParseColor {
                    index: i + 1,
                    source,
                }
                .into())
            }
            other => other?,
        };
    }

    let [c1, c2, c3] = colors;
    Ok(PrimaryBasis::new(c1, c2, c3))
}
