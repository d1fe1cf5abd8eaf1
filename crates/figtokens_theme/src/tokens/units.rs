//! Unit conversion for dimension tokens

use super::TokenValue;

/// Base font size used for `em` conversion
pub const EM_BASE_PX: f64 = 16.0;

/// Fractional digits needed to print any `f64` exactly
const EXACT_DIGITS: usize = 1074;

/// Fixed-point text with `places` decimals, like JavaScript's `toFixed`
///
/// Rounds the exact binary value, so `1.005` stays `"1.00"`. Exact halves
/// such as `0.125` round away from zero.
pub fn to_fixed(value: f64, places: usize) -> String {
    let exact = format!("{:.*}", EXACT_DIGITS, value);
    let is_half = exact
        .split_once('.')
        .and_then(|(_, frac)| frac.get(places..))
        .is_some_and(|tail| tail.starts_with('5') && tail[1..].bytes().all(|b| b == b'0'));

    if is_half {
        // an exact half times a power of ten is exact too
        let factor = 10f64.powi(places as i32);
        format!("{:.*}", places, (value * factor).round() / factor)
    } else {
        format!("{:.*}", places, value)
    }
}

/// [`to_fixed`] read back as a number
pub fn round_to(value: f64, places: usize) -> f64 {
    to_fixed(value, places).parse().unwrap_or(value)
}

/// `0` stays unitless, everything else gets a `px` suffix
pub fn to_px(value: f64) -> String {
    if value == 0.0 {
        "0".to_string()
    } else {
        format!("{}px", value)
    }
}

/// Pixel letter spacing as `em` relative to a 16px base
///
/// Zero becomes the bare number `0`; anything else is a two-decimal string.
pub fn to_em(value: f64) -> TokenValue {
    if value == 0.0 {
        return TokenValue::number(0.0);
    }
    TokenValue::text(format!("{}em", to_fixed(value / EM_BASE_PX, 2)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_px() {
        assert_eq!(to_px(0.0), "0");
        assert_eq!(to_px(-0.0), "0");
        assert_eq!(to_px(4.0), "4px");
        assert_eq!(to_px(0.5), "0.5px");
        assert_eq!(to_px(-2.0), "-2px");
    }

    #[test]
    fn test_em() {
        assert_eq!(to_em(0.0), TokenValue::number(0.0));
        assert_eq!(to_em(-0.64), TokenValue::text("-0.04em"));
        assert_eq!(to_em(16.0), TokenValue::text("1.00em"));
        // 2 / 16 = 0.125 is an exact half and rounds up
        assert_eq!(to_em(2.0), TokenValue::text("0.13em"));
        assert_eq!(to_em(-2.0), TokenValue::text("-0.13em"));
        // -1.2 / 16 is just above -0.075
        assert_eq!(to_em(-1.2), TokenValue::text("-0.07em"));
        assert_eq!(to_em(0.24), TokenValue::text("0.01em"));
        assert_eq!(to_em(1.68), TokenValue::text("0.10em"));
    }

    #[test]
    fn test_to_fixed_rounds_exact_value() {
        assert_eq!(to_fixed(1.005, 2), "1.00");
        assert_eq!(to_fixed(0.015, 2), "0.01");
        assert_eq!(to_fixed(0.475, 2), "0.47");
        assert_eq!(to_fixed(0.125, 2), "0.13");
        assert_eq!(to_fixed(0.375, 2), "0.38");
        assert_eq!(to_fixed(2.5, 0), "3");
        assert_eq!(to_fixed(0.3, 2), "0.30");
    }

    #[test]
    fn test_round_to() {
        assert_eq!(round_to(0.023222, 2), 0.02);
        assert_eq!(round_to(0.3, 2), 0.3);
        assert_eq!(round_to(1.0, 2), 1.0);
        assert_eq!(round_to(0.015, 2), 0.01);
        assert_eq!(round_to(0.245, 2), 0.24);
    }
}
