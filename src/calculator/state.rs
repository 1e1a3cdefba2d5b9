//! Accumulator state and the keypad event vocabulary.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::KeyError;

/// An operator key. Equals is stored as a pending operator like the others.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
    Equals,
}

impl Operator {
    /// The label printed on the keypad button.
    pub fn label(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "−",
            Self::Multiply => "×",
            Self::Divide => "÷",
            Self::Equals => "=",
        }
    }

    /// Check if this is one of the four arithmetic operators.
    pub fn is_arithmetic(self) -> bool {
        !matches!(self, Self::Equals)
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A single decimal digit, 0 through 9.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Digit(u8);

impl Digit {
    pub fn new(value: u8) -> Result<Self, KeyError> {
        if value <= 9 {
            Ok(Self(value))
        } else {
            Err(KeyError::InvalidDigit(value))
        }
    }

    pub fn value(self) -> u8 {
        self.0
    }

    pub fn as_char(self) -> char {
        char::from(b'0' + self.0)
    }
}

impl TryFrom<u8> for Digit {
    type Error = KeyError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<char> for Digit {
    type Error = KeyError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        c.to_digit(10)
            .map(|d| Self(d as u8))
            .ok_or_else(|| KeyError::UnknownKey(c.to_string()))
    }
}

impl From<Digit> for u8 {
    fn from(digit: Digit) -> Self {
        digit.0
    }
}

/// A symbolic event emitted by the keypad view.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum KeyEvent {
    Digit(Digit),
    DecimalPoint,
    Clear,
    ToggleSign,
    Percent,
    Operator(Operator),
}

impl fmt::Display for KeyEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Digit(d) => write!(f, "{}", d.as_char()),
            Self::DecimalPoint => f.write_str("."),
            Self::Clear => f.write_str("AC"),
            Self::ToggleSign => f.write_str("+/-"),
            Self::Percent => f.write_str("%"),
            Self::Operator(op) => f.write_str(op.label()),
        }
    }
}

impl From<Operator> for KeyEvent {
    fn from(op: Operator) -> Self {
        Self::Operator(op)
    }
}

impl From<Digit> for KeyEvent {
    fn from(digit: Digit) -> Self {
        Self::Digit(digit)
    }
}

/// The calculator's running state.
///
/// Operands live as display text between operations; only `previous_value`
/// keeps a parsed number, and it is always the value of some rendered text.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AccumulatorState {
    /// The text currently shown, never empty.
    pub display: String,
    /// Operand captured before the most recent pending operator.
    /// Serialized as display text so NaN and infinities survive a snapshot.
    #[serde(with = "value_text")]
    pub previous_value: Option<f64>,
    /// Operator awaiting its second operand.
    pub pending_operator: Option<Operator>,
    /// The next digit starts a new number instead of extending this one.
    pub awaiting_fresh_operand: bool,
    /// Last arithmetic operator evaluated, re-applied by repeated equals.
    pub repeat_operator: Option<Operator>,
}

impl Default for AccumulatorState {
    fn default() -> Self {
        Self {
            display: "0".to_string(),
            previous_value: None,
            pending_operator: None,
            awaiting_fresh_operand: false,
            repeat_operator: None,
        }
    }
}

/// Serde adapter writing an optional number as its display text.
mod value_text {
    use serde::{Deserialize, Deserializer, Serializer};

    use crate::calculator::evaluation::{number_to_text, parse_display};

    pub fn serialize<S: Serializer>(value: &Option<f64>, serializer: S) -> Result<S::Ok, S::Error> {
        match value {
            Some(v) => serializer.serialize_some(&number_to_text(*v)),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<f64>, D::Error> {
        let text = Option::<String>::deserialize(deserializer)?;
        Ok(text.map(|t| parse_display(&t)))
    }
}
