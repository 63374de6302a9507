//! Mixing-ratio solver
//!
//! Expresses a target color in the basis spanned by three primaries by
//! solving `M·(x, y, z) = target` through the inverse of the basis matrix.

use serde::{Deserialize, Serialize};

use crate::basis::PrimaryBasis;
use crate::color::Color;
use crate::independence::is_linearly_independent;
use crate::matrix::Matrix3;

/// Coefficients `(x, y, z)` with `x·color1 + y·color2 + z·color3 = target`.
///
/// Ratios are unconstrained reals. A negative component means the target
/// lies outside the cone of non-negative combinations; values above 1 (or
/// above 255) are still valid coefficients.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct MixingRatios {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl MixingRatios {
    /// Fallback returned for a degenerate basis.
    pub const ZERO: Self = Self {
        x: 0.0,
        y: 0.0,
        z: 0.0,
    };

    #[inline]
    pub fn to_array(self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }

    /// True when every coefficient is non-negative.
    ///
    /// There is no upper bound. NaN coefficients are not reachable.
    #[inline]
    pub fn is_reachable(&self) -> bool {
        self.x >= 0.0 && self.y >= 0.0 && self.z >= 0.0
    }

    /// The mixer slider positions that reproduce the solved target.
    ///
    /// The mixer divides by 255, so each coefficient is scaled by 255.
    ///
    /// ```
    /// use primix_core::{compose_color, solve_mixing_ratios, Color, PrimaryBasis};
    ///
    /// let basis = PrimaryBasis::standard();
    /// let target = Color::from_u8(10, 20, 30);
    /// let sliders = solve_mixing_ratios(&basis, &target).slider_positions();
    /// assert_eq!(compose_color(&basis, &sliders).color, [10, 20, 30]);
    /// ```
    #[inline]
    pub fn slider_positions(&self) -> Color {
        Color::new(self.x * 255.0, self.y * 255.0, self.z * 255.0)
    }
}

/// A solver bound to one basis, holding the inverted basis matrix.
///
/// Use this when solving many targets against the same primaries; it
/// produces the same ratios as [`solve_mixing_ratios`] without inverting the
/// matrix per call.
#[derive(Debug, Clone, Copy)]
pub struct RatioSolver {
    inverse: Matrix3,
}

impl RatioSolver {
    /// Returns `None` when the basis is linearly dependent.
    pub fn new(basis: &PrimaryBasis) -> Option<Self> {
        if !is_linearly_independent(basis) {
            return None;
        }
        basis.matrix().inverse().map(|inverse| Self { inverse })
    }

    #[inline]
    pub fn solve(&self, target: &Color) -> MixingRatios {
        let [x, y, z] = self.inverse.multiply_vec(target.to_array());
        MixingRatios { x, y, z }
    }
}

/// Solve for the mixing ratios of `target` in the given basis.
///
/// Targets are read as raw components (no normalization by 255). A
/// dependent basis yields [`MixingRatios::ZERO`]; callers that must tell
/// "zero ratios" apart from "degenerate basis" check
/// [`is_linearly_independent`] themselves.
///
/// # Example
/// ```
/// use primix_core::{solve_mixing_ratios, Color, PrimaryBasis};
///
/// let basis = PrimaryBasis::standard();
/// let ratios = solve_mixing_ratios(&basis, &Color::from_u8(0, 255, 51));
/// assert!((ratios.y - 1.0).abs() < 1e-12);
/// assert!((ratios.z - 0.2).abs() < 1e-12);
/// ```
pub fn solve_mixing_ratios(basis: &PrimaryBasis, target: &Color) -> MixingRatios {
    match RatioSolver::new(basis) {
        Some(solver) => solver.solve(target),
        None => {
            tracing::trace!(?basis, "Degenerate basis, returning zero ratios");
            MixingRatios::ZERO
        }
    }
}
