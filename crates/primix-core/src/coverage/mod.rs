//! Gamut coverage estimation
//!
//! Samples the RGB cube on a regular grid, solves the mixing ratios of every
//! sample and reports the share of samples reachable with non-negative
//! ratios. See [`CoverageEstimator`] for the scan itself and [`GridOrigin`]
//! for where samples are placed.

mod estimator;
mod grid;

pub use estimator::{
    estimate_coverage, CoverageError, CoverageEstimator, CoverageResult, ReachabilitySample,
};
pub use grid::{grid_axis, GridOrigin, DEFAULT_STEP, MAX_STEP};
