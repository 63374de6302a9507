//! primix-core: mixing ratios and gamut coverage for three-primary bases
//!
//! Three user-chosen primary colors span a cone inside the RGB cube. This
//! crate answers three questions about that cone:
//!
//! 1. Are the primaries linearly independent? ([`is_linearly_independent`])
//! 2. Which coefficients reproduce a target color? ([`solve_mixing_ratios`])
//! 3. How much of the cube is reachable with non-negative coefficients?
//!    ([`estimate_coverage`])
//!
//! A forward mixer ([`compose_color`]) turns slider positions back into a
//! displayable color.
//!
//! # Quick Start
//!
//! ```
//! use primix_core::{solve_mixing_ratios, Color, PrimaryBasis};
//!
//! let basis = PrimaryBasis::standard();
//! let target = Color::from_u8(255, 128, 0);
//!
//! let ratios = solve_mixing_ratios(&basis, &target);
//! assert!(ratios.is_reachable());
//! assert!((ratios.x - 1.0).abs() < 1e-9);
//! ```
//!
//! # Coordinates
//!
//! Colors are raw component triples in `0.0..=255.0`. The primaries are the
//! columns of a 3×3 matrix `M` (row i = component i, column j = primary j)
//! and the solver returns `x, y, z` with `M·(x, y, z) = target`. Targets are
//! NOT normalized by 255, so for the standard basis the ratios of an 8-bit
//! color fall in `0.0..=1.0`:
//!
//! ```text
//!   | 255   0   0 |   | x |   | r |
//!   |   0 255   0 | · | y | = | g |
//!   |   0   0 255 |   | z |   | b |
//! ```
//!
//! The mixer works in slider units instead: a slider at 255 contributes the
//! full primary. [`MixingRatios::slider_positions`] converts between the two.
//!
//! # Degenerate Bases
//!
//! A basis whose determinant is within [`DETERMINANT_EPSILON`] of zero is
//! treated as dependent. Degeneracy is not an error: the solver returns zero
//! ratios and the coverage estimator returns 0% with no samples. Bases with
//! NaN components compare as dependent and take the same path.

pub mod basis;
pub mod color;
pub mod composer;
pub mod coverage;
pub mod geometry;
pub mod independence;
pub mod matrix;
pub mod solver;


pub use basis::{BasisError, PrimaryBasis};
pub use color::{Color, ParseColorError, BLACK, BLUE, GREEN, RED};
pub use composer::{compose_color, hex_string, MixedColor};
pub use coverage::{
    estimate_coverage, CoverageError, CoverageEstimator, CoverageResult, GridOrigin,
    ReachabilitySample, DEFAULT_STEP,
};
pub use geometry::cube_exit_point;
pub use independence::{determinant, is_linearly_independent, DETERMINANT_EPSILON};
pub use matrix::Matrix3;
pub use solver::{solve_mixing_ratios, MixingRatios, RatioSolver};

/// Re-exported so callers can cancel a scan without naming tokio-util.
pub use tokio_util::sync::CancellationToken;
