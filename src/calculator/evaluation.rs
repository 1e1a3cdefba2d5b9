//! Operator evaluation and the number/text conversions the display runs on.
//!
//! Operands travel between key presses as display text, so every result is
//! rendered with [`number_to_text`] and read back with [`parse_display`].

use lazy_static::lazy_static;
use regex::Regex;

use super::state::Operator;

lazy_static! {
    /// Matches the longest numeric prefix of a display string.
    /// Allows: optional sign, then `Infinity` or digits with optional fraction and exponent.
    static ref NUMERIC_PREFIX: Regex = Regex::new(
        r"^[+-]?(?:Infinity|(?:\d+\.?\d*|\.\d+)(?:[eE][+-]?\d+)?)"
    ).unwrap();
}

/// Exponent notation kicks in at or above 10^21 and below 10^-6.
const MAX_PLAIN_EXPONENT: i32 = 21;
const MIN_PLAIN_EXPONENT: i32 = -6;

/// Apply a pending operator to its two operands.
///
/// Division by zero is not intercepted: it yields an infinity or NaN that the
/// display renders like any other value. Equals returns the second operand.
pub fn evaluate(a: f64, b: f64, op: Operator) -> f64 {
    match op {
        Operator::Add => a + b,
        Operator::Subtract => a - b,
        Operator::Multiply => a * b,
        Operator::Divide => a / b,
        Operator::Equals => b,
    }
}

/// Parse the numeric prefix of a display string.
///
/// Partial input such as `"0."` parses as its numeric prefix; text with no
/// numeric prefix at all parses as NaN.
pub fn parse_display(display: &str) -> f64 {
    let Some(found) = NUMERIC_PREFIX.find(display.trim_start()) else {
        return f64::NAN;
    };

    let text = found.as_str();
    if text.ends_with("Infinity") {
        return if text.starts_with('-') {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };
    }

    text.parse().unwrap_or(f64::NAN)
}

/// Render a number as its shortest round-trippable decimal text.
///
/// Negative zero renders as `"0"`; non-finite values render as `"NaN"`,
/// `"Infinity"` and `"-Infinity"`.
pub fn number_to_text(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        let text = if value.is_sign_positive() {
            "Infinity"
        } else {
            "-Infinity"
        };
        return text.to_string();
    }
    if value == 0.0 {
        return "0".to_string();
    }

    let (digits, exponent) = shortest_digits(value.abs());
    let sign = if value < 0.0 { "-" } else { "" };
    format!("{}{}", sign, layout_digits(&digits, exponent))
}

/// Shortest significant digits of a positive finite value, with the decimal
/// exponent of the first digit.
fn shortest_digits(value: f64) -> (String, i32) {
    // `{:e}` already produces the shortest digits that round-trip.
    let scientific = format!("{:e}", value);
    let (mantissa, exponent) = scientific
        .split_once('e')
        .unwrap_or((scientific.as_str(), "0"));

    let digits: String = mantissa.chars().filter(|c| c.is_ascii_digit()).collect();
    (digits, exponent.parse().unwrap_or(0))
}

/// Place the decimal point for `0.d1d2... × 10^(exponent + 1)`.
fn layout_digits(digits: &str, exponent: i32) -> String {
    let count = digits.len() as i32;
    let point = exponent + 1;

    if count <= point && point <= MAX_PLAIN_EXPONENT {
        format!("{}{}", digits, "0".repeat((point - count) as usize))
    } else if 0 < point && point <= MAX_PLAIN_EXPONENT {
        let (int_part, frac_part) = digits.split_at(point as usize);
        format!("{}.{}", int_part, frac_part)
    } else if MIN_PLAIN_EXPONENT < point && point <= 0 {
        format!("0.{}{}", "0".repeat((-point) as usize), digits)
    } else {
        let (first, rest) = digits.split_at(1);
        let dot = if rest.is_empty() { "" } else { "." };
        let sign = if exponent < 0 { '-' } else { '+' };
        format!("{}{}{}e{}{}", first, dot, rest, sign, exponent.abs())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_evaluation() {
        assert_eq!(evaluate(5.0, 3.0, Operator::Add), 8.0);
        assert_eq!(evaluate(5.0, 3.0, Operator::Subtract), 2.0);
        assert_eq!(evaluate(7.0, 8.0, Operator::Multiply), 56.0);
        assert_eq!(evaluate(10.0, 4.0, Operator::Divide), 2.5);
    }

    #[test]
    fn test_equals_returns_second_operand() {
        assert_eq!(evaluate(42.0, 7.0, Operator::Equals), 7.0);
    }

    #[test]
    fn test_division_by_zero() {
        assert_eq!(evaluate(10.0, 0.0, Operator::Divide), f64::INFINITY);
        assert_eq!(evaluate(-1.0, 0.0, Operator::Divide), f64::NEG_INFINITY);
        assert!(evaluate(0.0, 0.0, Operator::Divide).is_nan());
    }

    #[test]
    fn test_parse_partial_input() {
        assert_eq!(parse_display("0"), 0.0);
        assert_eq!(parse_display("0."), 0.0);
        assert_eq!(parse_display("12.5"), 12.5);
        assert_eq!(parse_display("-3"), -3.0);
        assert_eq!(parse_display("1e+21"), 1e21);
        assert_eq!(parse_display("1e"), 1.0);
    }

    #[test]
    fn test_parse_special_values() {
        assert_eq!(parse_display("Infinity"), f64::INFINITY);
        assert_eq!(parse_display("-Infinity"), f64::NEG_INFINITY);
        assert_eq!(parse_display("-Infinity5"), f64::NEG_INFINITY);
        assert!(parse_display("NaN").is_nan());
        assert!(parse_display("NaN7").is_nan());
        assert!(parse_display("").is_nan());
    }

    #[test]
    fn test_integers_have_no_fraction() {
        assert_eq!(number_to_text(8.0), "8");
        assert_eq!(number_to_text(3136.0), "3136");
        assert_eq!(number_to_text(-42.0), "-42");
        assert_eq!(number_to_text(1e20), "100000000000000000000");
    }

    #[test]
    fn test_zero_has_no_sign() {
        assert_eq!(number_to_text(0.0), "0");
        assert_eq!(number_to_text(-0.0), "0");
    }

    #[test]
    fn test_decimal_result() {
        assert_eq!(number_to_text(0.09), "0.09");
        assert_eq!(number_to_text(12.5), "12.5");
        assert_eq!(number_to_text(0.1 + 0.2), "0.30000000000000004");
        assert_eq!(number_to_text(1.0 / 3.0), "0.3333333333333333");
        assert_eq!(number_to_text(0.000001), "0.000001");
    }

    #[test]
    fn test_exponent_form() {
        assert_eq!(number_to_text(1e21), "1e+21");
        assert_eq!(number_to_text(1.5e22), "1.5e+22");
        assert_eq!(number_to_text(1e-7), "1e-7");
        assert_eq!(number_to_text(-2.5e-8), "-2.5e-8");
    }

    #[test]
    fn test_special_values_render() {
        assert_eq!(number_to_text(f64::INFINITY), "Infinity");
        assert_eq!(number_to_text(f64::NEG_INFINITY), "-Infinity");
        assert_eq!(number_to_text(f64::NAN), "NaN");
    }

    #[test]
    fn test_text_round_trips() {
        for value in [0.1, 123.456, 1e-7, 9.87e25, -0.000123, 5e-324] {
            assert_eq!(parse_display(&number_to_text(value)), value);
        }
    }
}
