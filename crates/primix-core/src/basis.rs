//! The three primaries a user mixes from

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::color::{Color, ParseColorError, BLUE, GREEN, RED};
use crate::matrix::Matrix3;

/// Error returned when a primary basis cannot be built from text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BasisError {
    #[error("expected 3 primary colors, got {0}")]
    WrongCount(usize),

    #[error("primary {index}: {source}")]
    ParseColor {
        /// 1-based position of the offending color
        index: usize,
        #[source]
        source: ParseColorError,
    },
}

/// Three primaries interpreted as the columns of a 3x3 matrix.
///
/// `color1`, `color2` and `color3` map to the `x`, `y` and `z` components of
/// [`MixingRatios`](crate::MixingRatios) respectively.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PrimaryBasis {
    pub color1: Color,
    pub color2: Color,
    pub color3: Color,
}

impl PrimaryBasis {
    #[inline]
    pub const fn new(color1: Color, color2: Color, color3: Color) -> Self {
        Self {
            color1,
            color2,
            color3,
        }
    }

    /// Red, green and blue at full intensity.
    #[inline]
    pub const fn standard() -> Self {
        Self::new(RED, GREEN, BLUE)
    }

    #[inline]
    pub fn colors(&self) -> [Color; 3] {
        [self.color1, self.color2, self.color3]
    }

    /// The basis matrix: row i = component i, column j = primary j.
    #[inline]
    pub fn matrix(&self) -> Matrix3 {
        Matrix3::from_columns(
            self.color1.to_array(),
            self.color2.to_array(),
            self.color3.to_array(),
        )
    }

    /// Parse a basis from three hex strings.
    ///
    /// # Example
    /// ```
    /// use primix_core::PrimaryBasis;
    ///
    /// let basis = PrimaryBasis::from_hex(&["#F00", "#0F0", "#00F"]).unwrap();
    /// assert_eq!(basis, PrimaryBasis::standard());
    /// ```
    pub fn from_hex<S: AsRef<str>>(colors: &[S]) -> Result<Self, BasisError> {
        if colors.len() != 3 {
            return Err(BasisError::WrongCount(colors.len()));
        }

        let parse = |i: usize| {
            Color::from_str(colors[i].as_ref()).map_err(|source| BasisError::ParseColor {
                index: i + 1,
                source,
            })
        };

        Ok(Self::new(parse(0)?, parse(1)?, parse(2)?))
    }
}

impl Default for PrimaryBasis {
    fn default() -> Self {
        Self::standard()
    }
}

impl FromStr for PrimaryBasis {
    type Err = BasisError;

    /// Parse a comma-separated list of three hex colors, e.g.
    /// `"#FF0000,#00FF00,#0000FF"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s
            .split(',')
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .collect();
        Self::from_hex(parts.as_slice())
    }
}
