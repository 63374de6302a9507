//! Sample placement along one axis of the color cube

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Default grid spacing: 16 samples per axis, 4096 in total.
pub const DEFAULT_STEP: u32 = 16;

/// Largest step that still places at least one sample per axis.
pub const MAX_STEP: u32 = 255;

/// Where the first sample of each axis sits.
///
/// Both conventions advance by `step` and stop at the last value `<= 255`.
///
/// - `CellCenter` (default) starts at `step / 2`, sampling the middle of each
///   grid cell. At step 16 this gives `8, 24, .., 248`.
/// - `Corner` starts at `0`. At step 16 this gives `0, 16, .., 240`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GridOrigin {
    #[default]
    #[serde(rename = "center", alias = "cell_center", alias = "cell-center")]
    CellCenter,
    #[serde(rename = "corner")]
    Corner,
}

impl GridOrigin {
    /// First sample value for the given step.
    #[inline]
    pub fn start(self, step: u32) -> f64 {
        match self {
            GridOrigin::CellCenter => step as f64 / 2.0,
            GridOrigin::Corner => 0.0,
        }
    }
}

impl fmt::Display for GridOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GridOrigin::CellCenter => f.write_str("center"),
            GridOrigin::Corner => f.write_str("corner"),
        }
    }
}

impl FromStr for GridOrigin {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "center" | "cell_center" | "cell-center" => Ok(GridOrigin::CellCenter),
            "corner" => Ok(GridOrigin::Corner),
            other => Err(format!(
                "unknown grid origin '{other}' (expected 'center' or 'corner')"
            )),
        }
    }
}

/// Sample values along one axis. Empty for `step == 0`.
pub fn grid_axis(step: u32, origin: GridOrigin) -> Vec<f64> {
    if step == 0 {
        return Vec::new();
    }
    let start = origin.start(step);
    (0u32..)
        .map(|i| start + (i * step) as f64)
        .take_while(|v| *v <= 255.0)
        .collect()
}
