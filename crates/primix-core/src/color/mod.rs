//! Color value type and hex parsing
//!
//! [`Color`] is a plain `(r, g, b)` triple of raw components. It is used for
//! primaries, targets, grid samples and mixer slider positions alike; the
//! crate never applies gamma or perceptual transforms.
//!
//! # Example
//!
//! ```
//! use primix_core::Color;
//!
//! let orange: Color = "#FF8000".parse().unwrap();
//! assert_eq!(orange, Color::from_u8(255, 128, 0));
//! assert_eq!(orange.to_bytes(), [255, 128, 0]);
//! ```

mod error;
mod rgb;

pub use error::ParseColorError;
pub use rgb::{Color, BLACK, BLUE, GREEN, RED};
