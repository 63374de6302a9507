//! Where a primary's ray leaves the color cube
//!
//! Renderers draw each primary as a segment from black to the primary and
//! extend it to the cube boundary. Scaling the primary by
//! `t = min(255 / c)` over its positive components lands on that boundary.

use crate::color::Color;

/// Scale `primary` along its ray from black until it touches the cube.
///
/// Returns `None` when no component is positive (the ray never reaches a
/// face with a component of 255).
///
/// # Example
/// ```
/// use primix_core::{cube_exit_point, Color};
///
/// let exit = cube_exit_point(&Color::from_u8(128, 64, 0)).unwrap();
/// assert_eq!(exit, Color::new(255.0, 127.5, 0.0));
/// ```
pub fn cube_exit_point(primary: &Color) -> Option<Color> {
    let t = primary
        .to_array()
        .into_iter()
        .filter(|c| *c > 0.0)
        .map(|c| 255.0 / c)
        .reduce(f64::min)?;

    Some(Color::from_array(primary.to_array().map(|c| c * t)))
}
