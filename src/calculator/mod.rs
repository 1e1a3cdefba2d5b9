//! Calculator core: an immediate-execution accumulator driven by keypad events.
//!
//! This module provides functionality to:
//! - Turn keypad events into display text (`accumulator`)
//! - Evaluate the four operators and convert between numbers and display text
//! - Format the display for rendering
//! - Parse key labels and copy results to the clipboard

mod accumulator;
mod clipboard;
mod evaluation;
mod format;
mod keys;
mod state;

pub use accumulator::Accumulator;
pub use clipboard::copy_to_clipboard;
pub use evaluation::{evaluate, number_to_text, parse_display};
pub use format::{MAX_EXPONENT_DIGITS, format_display, format_display_with, to_exponential};
pub use keys::{KEYPAD, parse_key, parse_keys};
pub use state::{AccumulatorState, Digit, KeyEvent, Operator};
