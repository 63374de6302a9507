//! Cooperative grid scan over the color cube

use serde::Serialize;
use thiserror::Error;
use tokio_util::sync::CancellationToken;

use super::grid::{grid_axis, GridOrigin, DEFAULT_STEP, MAX_STEP};
use crate::basis::PrimaryBasis;
use crate::color::Color;
use crate::solver::RatioSolver;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoverageError {
    #[error("grid step must be between 1 and 255, got {0}")]
    InvalidStep(u32),

    #[error("coverage scan cancelled")]
    Cancelled,
}

/// One grid point and whether it is reachable.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ReachabilitySample {
    pub color: Color,
    pub inside: bool,
}

/// Aggregate of a coverage scan.
///
/// Sample lists keep scan order: `r` outermost, then `g`, then `b`.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct CoverageResult {
    /// Share of samples reachable with non-negative ratios (0..=100)
    pub percentage: f64,
    /// Number of grid points scanned
    pub total: usize,
    pub inside: Vec<Color>,
    pub outside: Vec<Color>,
}

impl CoverageResult {
    fn push(&mut self, sample: ReachabilitySample, keep: bool) {
        self.total += 1;
        match (sample.inside, keep) {
            (true, true) => self.inside.push(sample.color),
            (false, true) => self.outside.push(sample.color),
            _ => {}
        }
    }
}

/// Coverage scan builder.
///
/// Configuration methods consume and return `self`; [`run()`](Self::run)
/// borrows, so one estimator can be run repeatedly.
///
/// # Example
///
/// ```
/// use primix_core::{CoverageEstimator, GridOrigin, PrimaryBasis};
///
/// # tokio::runtime::Builder::new_current_thread().build().unwrap().block_on(async {
/// let result = CoverageEstimator::new(PrimaryBasis::standard())
///     .step(32)
///     .origin(GridOrigin::Corner)
///     .collect_samples(false)
///     .run()
///     .await
///     .unwrap();
///
/// assert_eq!(result.percentage, 100.0);
/// assert_eq!(result.total, 8 * 8 * 8);
/// assert!(result.inside.is_empty());
/// # });
/// ```
#[derive(Debug, Clone)]
pub struct CoverageEstimator {
    basis: PrimaryBasis,
    step: u32,
    origin: GridOrigin,
    collect_samples: bool,
    cancel: Option<CancellationToken>,
}

impl CoverageEstimator {
    /// Step 16, cell-center origin, samples collected, no cancellation.
    pub fn new(basis: PrimaryBasis) -> Self {
        Self {
            basis,
            step: DEFAULT_STEP,
            origin: GridOrigin::default(),
            collect_samples: true,
            cancel: None,
        }
    }

    /// Grid spacing along each axis, `1..=255`.
    #[inline]
    pub fn step(mut self, step: u32) -> Self {
        self.step = step;
        self
    }

    #[inline]
    pub fn origin(mut self, origin: GridOrigin) -> Self {
        self.origin = origin;
        self
    }

    /// Whether to keep the inside/outside sample lists.
    ///
    /// Counting still happens when disabled.
    #[inline]
    pub fn collect_samples(mut self, collect: bool) -> Self {
        self.collect_samples = collect;
        self
    }

    /// Stop the scan at the next yield point once `token` is cancelled.
    #[inline]
    pub fn cancel_token(mut self, token: CancellationToken) -> Self {
        self.cancel = Some(token);
        self
    }

    /// Run the scan.
    ///
    /// A degenerate basis short-circuits to 0% with no samples, whatever the
    /// step. Otherwise the step is validated and the cube is scanned with
    /// `r` outermost; after each completed `r` slice the task yields to the
    /// scheduler and checks the cancellation token.
    pub async fn run(&self) -> Result<CoverageResult, CoverageError> {
        let Some(solver) = RatioSolver::new(&self.basis) else {
            tracing::debug!(basis = ?self.basis, "Degenerate basis, coverage is 0%");
            return Ok(CoverageResult::default());
        };

        if self.step == 0 || self.step > MAX_STEP {
            return Err(CoverageError::InvalidStep(self.step));
        }

        let axis = grid_axis(self.step, self.origin);
        let mut result = CoverageResult::default();
        let mut inside_count = 0usize;

        for &r in &axis {
            for &g in &axis {
                for &b in &axis {
                    let color = Color::new(r, g, b);
                    let inside = solver.solve(&color).is_reachable();
                    if inside {
                        inside_count += 1;
                    }
                    result.push(ReachabilitySample { color, inside }, self.collect_samples);
                }
            }

            tokio::task::yield_now().await;

            if self.cancel.as_ref().is_some_and(|t| t.is_cancelled()) {
                tracing::debug!(r, scanned = result.total, "Coverage scan cancelled");
                return Err(CoverageError::Cancelled);
            }
        }

        result.percentage = inside_count as f64 / result.total as f64 * 100.0;

        tracing::debug!(
            step = self.step,
            origin = %self.origin,
            total = result.total,
            inside = inside_count,
            percentage = result.percentage,
            "Coverage scan complete"
        );

        Ok(result)
    }
}

/// Estimate coverage with the default cell-center grid.
///
/// Shorthand for `CoverageEstimator::new(*basis).step(step).run()`.
pub async fn estimate_coverage(
    basis: &PrimaryBasis,
    step: u32,
) -> Result<CoverageResult, CoverageError> {
    CoverageEstimator::new(*basis).step(step).run().await
}
