//! Forward mixer: slider positions to a displayable color
//!
//! Each slider runs over `0..=255` and contributes `slider / 255` of its
//! primary:
//!
//! ```text
//! component_k = (color1_k·x + color2_k·y + color3_k·z) / 255
//! ```
//!
//! The result is rounded, then clipped into a byte.

use serde::Serialize;

use crate::basis::PrimaryBasis;
use crate::color::Color;

/// Output of [`compose_color`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MixedColor {
    /// Composed color, rounded and clipped to `0..=255`
    pub color: [u8; 3],
    /// `#RRGGBB` of the slider positions (not of `color`)
    pub hex: String,
}

impl MixedColor {
    /// `#RRGGBB` of the composed color.
    pub fn color_hex(&self) -> String {
        hex_string(self.color)
    }
}

/// Format three bytes as uppercase `#RRGGBB`.
///
/// ```
/// use primix_core::hex_string;
/// assert_eq!(hex_string([255, 0, 128]), "#FF0080");
/// ```
pub fn hex_string(bytes: [u8; 3]) -> String {
    format!("#{:02X}{:02X}{:02X}", bytes[0], bytes[1], bytes[2])
}

/// Mix the primaries at the given slider positions.
///
/// `ratios.r`, `ratios.g` and `ratios.b` are the slider positions for
/// `color1`, `color2` and `color3`. The returned hex string encodes those
/// positions, independent of the primaries; positions outside `0..=255` are
/// rounded and saturated before encoding.
///
/// # Example
/// ```
/// use primix_core::{compose_color, Color, PrimaryBasis};
///
/// let mixed = compose_color(&PrimaryBasis::standard(), &Color::from_u8(255, 0, 128));
/// assert_eq!(mixed.color, [255, 0, 128]);
/// assert_eq!(mixed.hex, "#FF0080");
/// ```
pub fn compose_color(basis: &PrimaryBasis, ratios: &Color) -> MixedColor {
    let [x, y, z] = ratios.to_array();
    let [c1, c2, c3] = basis.colors().map(Color::to_array);

    let mix = |k: usize| (c1[k] * x + c2[k] * y + c3[k] * z) / 255.0;
    let color = Color::new(mix(0), mix(1), mix(2)).to_bytes();

    MixedColor {
        color,
        hex: hex_string(ratios.to_bytes()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use crate::color::{BLACK, BLUE, GREEN, RED};

    #[test]
    fn test_hex_encodes_ratios_not_color() {
        let basis = PrimaryBasis::new(GREEN, BLUE, RED);
        let mixed = compose_color(&basis, &Color::from_u8(255, 0, 128));
        assert_eq!(mixed.hex, "#FF0080");
        // color1 = green at full, color3 = red at 128/255
        assert_eq!(mixed.color, [128, 255, 0]);
        assert_eq!(mixed.color_hex(), "#80FF00");
    }

    #[test]
    fn test_hex_zero_pads() {
        let mixed = compose_color(&PrimaryBasis::standard(), &Color::from_u8(1, 10, 15));
        assert_eq!(mixed.hex, "#010A0F");
    }

    #[test]
    fn test_black_sliders_give_black() {
        let mixed = compose_color(&PrimaryBasis::standard(), &BLACK);
        assert_eq!(mixed.color, [0, 0, 0]);
        assert_eq!(mixed.hex, "#000000");
    }

    #[test]
    fn test_overflowing_mix_is_clipped() {
        // Three whites at full intensity sum to 3 x 255 per component
        let white = Color::from_u8(255, 255, 255);
        let basis = PrimaryBasis::new(white, white, white);
        let mixed = compose_color(&basis, &Color::from_u8(255, 255, 255));
        assert_eq!(mixed.color, [255, 255, 255]);
    }

    #[test]
    fn test_components_are_rounded() {
        // 100 * 128 / 255 = 50.196...
        let basis = PrimaryBasis::new(Color::from_u8(100, 0, 0), GREEN, BLUE);
        let mixed = compose_color(&basis, &Color::from_u8(128, 0, 0));
        assert_eq!(mixed.color, [50, 0, 0]);

        // 255 * 127.5 / 255 = 127.5 rounds up
        let mixed = compose_color(&PrimaryBasis::standard(), &Color::new(127.5, 0.0, 0.0));
        assert_eq!(mixed.color, [128, 0, 0]);
    }

    #[test]
    fn test_out_of_range_ratios_saturate_in_hex() {
        let mixed = compose_color(&PrimaryBasis::standard(), &Color::new(-4.0, 300.0, 16.4));
        assert_eq!(mixed.hex, "#00FF10");
        assert_eq!(mixed.color, [0, 255, 16]);
    }
}
