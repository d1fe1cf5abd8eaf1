//! Color encoding for color tokens

use figtokens_core::ColorValue;
use serde::{Deserialize, Serialize};

use super::units::round_to;

/// Hex digit layout for opaque colors
///
/// `Unpadded` writes each channel with the fewest digits, so a channel
/// below 16 takes one digit and the result is not a valid CSS color. It
/// exists to reproduce legacy themes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HexStyle {
    #[default]
    Padded,
    Unpadded,
}

/// Channel fraction to `0..=255`, truncating
pub fn normalize_rgba(fraction: f64) -> u8 {
    (fraction * 255.0).floor().clamp(0.0, 255.0) as u8
}

pub fn to_hex(fraction: f64, style: HexStyle) -> String {
    let channel = normalize_rgba(fraction);
    match style {
        HexStyle::Padded => format!("{:02x}", channel),
        HexStyle::Unpadded => format!("{:x}", channel),
    }
}

/// `rgba(R,G,B,A)` with alpha rounded to two decimals
pub fn to_rgba_string(color: &ColorValue) -> String {
    format!(
        "rgba({},{},{},{})",
        normalize_rgba(color.r),
        normalize_rgba(color.g),
        normalize_rgba(color.b),
        round_to(color.a, 2)
    )
}

/// Hex for fully opaque colors, `rgba(..)` otherwise
pub fn to_color_string(color: &ColorValue, style: HexStyle) -> String {
    if color.a == 1.0 {
        format!(
            "#{}{}{}",
            to_hex(color.r, style),
            to_hex(color.g, style),
            to_hex(color.b, style)
        )
    } else {
        to_rgba_string(color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_white_is_hex() {
        let white = ColorValue::new(1.0, 1.0, 1.0, 1.0);
        assert_eq!(to_color_string(&white, HexStyle::Padded), "#ffffff");
    }

    #[test]
    fn test_translucent_is_rgba() {
        let opaque = ColorValue::new(1.0, 0.4, 0.23, 0.3);
        assert_eq!(
            to_color_string(&opaque, HexStyle::Padded),
            "rgba(255,102,58,0.3)"
        );
    }

    #[test]
    fn test_rgba_rounds_long_alpha() {
        let long_float = ColorValue::new(1.0, 0.4, 0.23, 0.023222);
        assert_eq!(to_rgba_string(&long_float), "rgba(255,102,58,0.02)");
    }

    #[test]
    fn test_rgba_alpha_rounds_like_to_fixed() {
        let faint = ColorValue::new(1.0, 0.4, 0.23, 0.015);
        assert_eq!(to_rgba_string(&faint), "rgba(255,102,58,0.01)");
        let eighth = ColorValue::new(1.0, 0.4, 0.23, 0.125);
        assert_eq!(to_rgba_string(&eighth), "rgba(255,102,58,0.13)");
    }

    #[test]
    fn test_normalize_truncates() {
        assert_eq!(normalize_rgba(1.0), 255);
        assert_eq!(normalize_rgba(0.0), 0);
        // 0.23 * 255 = 58.65
        assert_eq!(normalize_rgba(0.23), 58);
        for i in 0..100 {
            let f = i as f64 / 100.0;
            assert_eq!(normalize_rgba(f), (f * 255.0).floor() as u8);
        }
    }

    #[test]
    fn test_hex_padding() {
        let dark = ColorValue::new(0.02, 0.5, 1.0, 1.0);
        assert_eq!(to_color_string(&dark, HexStyle::Padded), "#057fff");
        assert_eq!(to_color_string(&dark, HexStyle::Unpadded), "#57fff");
    }
}
