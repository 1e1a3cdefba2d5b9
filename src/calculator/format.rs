//! Presentation formatting for the display.
//!
//! Long display text is shown in scientific notation. This is a render-time
//! transform only; the accumulator state keeps the full text.

use super::evaluation::{number_to_text, parse_display};
use crate::config::DisplayConfig;

/// Extra digits requested past the rounding position so ties can be rounded
/// away from zero instead of to even.
const GUARD_DIGITS: usize = 40;

/// Most fractional digits scientific notation will show.
pub const MAX_EXPONENT_DIGITS: usize = 100;

/// Format display text with the default limits (9 characters, 3 fractional digits).
pub fn format_display(display: &str) -> String {
    format_display_with(display, &DisplayConfig::default())
}

/// Format display text for rendering.
///
/// Text longer than `max_length` is re-rendered in scientific notation with
/// `exponent_digits` fractional digits, e.g. `"1234567890"` becomes `"1.235e+9"`.
pub fn format_display_with(display: &str, config: &DisplayConfig) -> String {
    if display.len() > config.max_length {
        to_exponential(parse_display(display), config.exponent_digits)
    } else {
        display.to_string()
    }
}

/// Render a value as `d.ddde±N` with a fixed number of fractional digits,
/// capped at [`MAX_EXPONENT_DIGITS`].
pub fn to_exponential(value: f64, fraction_digits: usize) -> String {
    if !value.is_finite() {
        return number_to_text(value);
    }

    let fraction_digits = fraction_digits.min(MAX_EXPONENT_DIGITS);
    let sign = if value < 0.0 { "-" } else { "" };
    let exact = format!("{:.*e}", fraction_digits + GUARD_DIGITS, value.abs());
    let (mantissa, exponent) = exact.split_once('e').unwrap_or((exact.as_str(), "0"));
    let mut exponent: i32 = exponent.parse().unwrap_or(0);

    let all: Vec<u8> = mantissa
        .bytes()
        .filter(u8::is_ascii_digit)
        .map(|b| b - b'0')
        .collect();
    let mut kept = all[..=fraction_digits].to_vec();

    if all.get(fraction_digits + 1).is_some_and(|&d| d >= 5) && increment(&mut kept) {
        // 9.999 rounded up to 10.000
        kept.insert(0, 1);
        kept.pop();
        exponent += 1;
    }
    if value == 0.0 {
        exponent = 0;
    }

    let digits: String = kept.iter().map(|&d| char::from(b'0' + d)).collect();
    let (first, rest) = digits.split_at(1);
    let dot = if rest.is_empty() { "" } else { "." };
    let exponent_sign = if exponent < 0 { '-' } else { '+' };

    format!(
        "{}{}{}{}e{}{}",
        sign,
        first,
        dot,
        rest,
        exponent_sign,
        exponent.abs()
    )
}

/// Add one in the last place. Returns `true` if the carry ran off the front.
fn increment(digits: &mut [u8]) -> bool {
    for digit in digits.iter_mut().rev() {
        if *digit == 9 {
            *digit = 0;
        } else {
            *digit += 1;
            return false;
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_text_unchanged() {
        assert_eq!(format_display("0"), "0");
        assert_eq!(format_display("12.5"), "12.5");
        assert_eq!(format_display("123456789"), "123456789");
        assert_eq!(format_display("-Infinity"), "-Infinity");
        assert_eq!(format_display("0."), "0.");
    }

    #[test]
    fn test_long_text_uses_exponent() {
        assert_eq!(format_display("1234567890"), "1.235e+9");
        assert_eq!(format_display("-1234567890"), "-1.235e+9");
        assert_eq!(format_display("0.12345678"), "1.235e-1");
        assert_eq!(format_display("0.00000001"), "1.000e-8");
        assert_eq!(format_display("9999999999"), "1.000e+10");
        assert_eq!(format_display("0.30000000000000004"), "3.000e-1");
    }

    #[test]
    fn test_ties_round_away_from_zero() {
        assert_eq!(to_exponential(12345.0, 3), "1.235e+4");
        assert_eq!(to_exponential(1.0625, 3), "1.063e+0");
        assert_eq!(to_exponential(-1.0625, 3), "-1.063e+0");
    }

    #[test]
    fn test_zero_and_special_values() {
        assert_eq!(format_display("0.00000000"), "0.000e+0");
        assert_eq!(to_exponential(f64::INFINITY, 3), "Infinity");
        assert_eq!(to_exponential(f64::NAN, 3), "NaN");
    }

    #[test]
    fn test_fraction_digits_capped() {
        let text = to_exponential(1.5, usize::MAX);
        assert_eq!(text.len(), "1.".len() + MAX_EXPONENT_DIGITS + "e+0".len());
        assert!(text.starts_with("1.5000"));
        assert!(text.ends_with("0e+0"));

        let config = DisplayConfig {
            max_length: 1,
            exponent_digits: usize::MAX,
        };
        assert!(format_display_with("12", &config).starts_with("1.2000"));
    }

    #[test]
    fn test_custom_limits() {
        let config = DisplayConfig {
            max_length: 4,
            exponent_digits: 1,
        };
        assert_eq!(format_display_with("1234", &config), "1234");
        assert_eq!(format_display_with("12345", &config), "1.2e+4");
        assert_eq!(to_exponential(56.0, 0), "6e+1");
    }
}
