//! Keypad labels and key-string parsing.
//!
//! Maps the text printed on keypad buttons (and a few ASCII stand-ins)
//! to [`KeyEvent`]s, so a key string such as `"12.5 × 2 ="` can drive the
//! accumulator.

use lazy_static::lazy_static;
use regex::Regex;

use super::state::{Digit, KeyEvent, Operator};
use crate::error::KeyError;

/// Button labels of the keypad, row by row. The `0` key spans two columns.
pub const KEYPAD: [&[&str]; 5] = [
    &["AC", "+/-", "%", "÷"],
    &["7", "8", "9", "×"],
    &["4", "5", "6", "−"],
    &["1", "2", "3", "+"],
    &["0", ".", "="],
];

lazy_static! {
    /// Matches one key label at the start of the input.
    /// Multi-character labels come first so `+/-` is not read as `+`.
    static ref KEY_TOKEN: Regex = Regex::new(
        r"^(?:(?i:AC)|\+/-|[0-9.%±+\-−×*xX÷/=cC])"
    ).unwrap();
}

/// Parse a single key label.
pub fn parse_key(label: &str) -> Result<KeyEvent, KeyError> {
    let label = label.trim();
    if label.eq_ignore_ascii_case("ac") || label.eq_ignore_ascii_case("c") {
        return Ok(KeyEvent::Clear);
    }

    let event = match label {
        "+/-" | "±" => KeyEvent::ToggleSign,
        "%" => KeyEvent::Percent,
        "." => KeyEvent::DecimalPoint,
        "+" => Operator::Add.into(),
        "−" | "-" => Operator::Subtract.into(),
        "×" | "*" | "x" | "X" => Operator::Multiply.into(),
        "÷" | "/" => Operator::Divide.into(),
        "=" => Operator::Equals.into(),
        other => {
            let mut chars = other.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) if c.is_ascii_digit() => Digit::try_from(c)?.into(),
                _ => return Err(KeyError::UnknownKey(other.to_string())),
            }
        }
    };
    Ok(event)
}

/// Split a key string into events. Whitespace between keys is optional.
pub fn parse_keys(input: &str) -> Result<Vec<KeyEvent>, KeyError> {
    let mut events = Vec::new();
    let mut rest = input.trim_start();

    while !rest.is_empty() {
        let Some(token) = KEY_TOKEN.find(rest) else {
            let bad = rest.split_whitespace().next().unwrap_or(rest);
            return Err(KeyError::UnknownKey(bad.to_string()));
        };

        events.push(parse_key(token.as_str())?);
        rest = rest[token.end()..].trim_start();
    }

    Ok(events)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn digit(d: u8) -> KeyEvent {
        Digit::new(d).unwrap().into()
    }

    #[test]
    fn test_single_labels() {
        assert_eq!(parse_key("AC").unwrap(), KeyEvent::Clear);
        assert_eq!(parse_key("+/-").unwrap(), KeyEvent::ToggleSign);
        assert_eq!(parse_key("%").unwrap(), KeyEvent::Percent);
        assert_eq!(parse_key(".").unwrap(), KeyEvent::DecimalPoint);
        assert_eq!(parse_key("7").unwrap(), digit(7));
        assert_eq!(parse_key(" ÷ ").unwrap(), KeyEvent::Operator(Operator::Divide));
    }

    #[test]
    fn test_ascii_aliases() {
        assert_eq!(parse_key("*").unwrap(), KeyEvent::Operator(Operator::Multiply));
        assert_eq!(parse_key("x").unwrap(), KeyEvent::Operator(Operator::Multiply));
        assert_eq!(parse_key("/").unwrap(), KeyEvent::Operator(Operator::Divide));
        assert_eq!(parse_key("-").unwrap(), KeyEvent::Operator(Operator::Subtract));
        assert_eq!(parse_key("c").unwrap(), KeyEvent::Clear);
    }

    #[test]
    fn test_key_string_without_spaces() {
        let events = parse_keys("5+3=").unwrap();
        assert_eq!(
            events,
            vec![
                digit(5),
                KeyEvent::Operator(Operator::Add),
                digit(3),
                KeyEvent::Operator(Operator::Equals)
            ]
        );
    }

    #[test]
    fn test_key_string_with_labels() {
        let events = parse_keys("AC 12.5 +/- ×2 =").unwrap();
        assert_eq!(events.len(), 9);
        assert_eq!(events[0], KeyEvent::Clear);
        assert_eq!(events[4], digit(5));
        assert_eq!(events[5], KeyEvent::ToggleSign);
        assert_eq!(events[6], KeyEvent::Operator(Operator::Multiply));
    }

    #[test]
    fn test_unknown_keys_rejected() {
        assert_eq!(
            parse_key("sqrt"),
            Err(KeyError::UnknownKey("sqrt".to_string()))
        );
        assert_eq!(
            parse_keys("5 + foo"),
            Err(KeyError::UnknownKey("foo".to_string()))
        );
        assert!(parse_key("12").is_err());
        assert!(parse_key("").is_err());
    }

    #[test]
    fn test_empty_input_has_no_events() {
        assert!(parse_keys("   ").unwrap().is_empty());
    }

    #[test]
    fn test_keypad_labels_parse() {
        let keys: Vec<&str> = KEYPAD.iter().flat_map(|row| row.iter().copied()).collect();
        assert_eq!(keys.len(), 19);
        for label in keys {
            let event = parse_key(label).unwrap();
            assert_eq!(event.to_string(), label);
        }
    }
}
