//! Linear independence of a primary basis

use crate::basis::PrimaryBasis;

/// Absolute tolerance on the basis determinant.
///
/// Fixed rather than relative: components are bounded by 255, so real
/// determinants range up to about 1.6e7 and anything at or below 1e-6 is
/// numerically singular for 8-bit inputs.
pub const DETERMINANT_EPSILON: f64 = 1e-6;

/// Determinant of the basis matrix.
#[inline]
pub fn determinant(basis: &PrimaryBasis) -> f64 {
    basis.matrix().determinant()
}

/// Check whether the three primaries are linearly independent.
///
/// Returns `|det| > DETERMINANT_EPSILON`. A NaN determinant fails the
/// comparison, so bases containing NaN are reported as dependent.
///
/// # Example
/// ```
/// use primix_core::{is_linearly_independent, Color, PrimaryBasis};
///
/// assert!(is_linearly_independent(&PrimaryBasis::standard()));
///
/// let collinear = PrimaryBasis::new(
///     Color::new(1.0, 0.0, 0.0),
///     Color::new(2.0, 0.0, 0.0),
///     Color::new(0.0, 1.0, 0.0),
/// );
/// assert!(!is_linearly_independent(&collinear));
/// ```
#[inline]
pub fn is_linearly_independent(basis: &PrimaryBasis) -> bool {
    determinant(basis).abs() > DETERMINANT_EPSILON
}
