//! The immediate-execution accumulator.
//!
//! Interprets keypad events one at a time into display text. There is a
//! single pending operator and no precedence: `2 + 3 × 4 =` is `20`.

use tracing::{debug, trace};

use super::evaluation::{evaluate, number_to_text, parse_display};
use super::format::format_display_with;
use super::state::{AccumulatorState, Digit, KeyEvent, Operator};
use crate::config::DisplayConfig;

/// Drives an [`AccumulatorState`] from keypad events.
#[derive(Clone, Debug, Default)]
pub struct Accumulator {
    state: AccumulatorState,
    display_config: DisplayConfig,
}

impl Accumulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an accumulator that renders with custom display limits.
    pub fn with_display_config(display_config: DisplayConfig) -> Self {
        Self {
            state: AccumulatorState::default(),
            display_config,
        }
    }

    /// Current state.
    pub fn state(&self) -> &AccumulatorState {
        &self.state
    }

    /// Raw display text, before presentation formatting.
    pub fn display(&self) -> &str {
        &self.state.display
    }

    /// Display text as it should be rendered.
    pub fn rendered(&self) -> String {
        format_display_with(&self.state.display, &self.display_config)
    }

    /// Handle one keypad event and return the text to render.
    pub fn handle(&mut self, event: KeyEvent) -> String {
        match event {
            KeyEvent::Digit(digit) => self.input_digit(digit),
            KeyEvent::DecimalPoint => self.input_decimal_point(),
            KeyEvent::Clear => self.clear(),
            KeyEvent::ToggleSign => self.toggle_sign(),
            KeyEvent::Percent => self.percent(),
            KeyEvent::Operator(op) => self.apply_operator(op),
        }

        let rendered = self.rendered();
        debug!(key = %event, display = %rendered, "Handled key");
        rendered
    }

    /// Handle a sequence of events, returning the final text to render.
    pub fn handle_all(&mut self, events: impl IntoIterator<Item = KeyEvent>) -> String {
        for event in events {
            self.handle(event);
        }
        self.rendered()
    }

    /// Type a digit. A lone `"0"` is replaced rather than extended.
    pub fn input_digit(&mut self, digit: Digit) {
        let state = &mut self.state;
        state.repeat_operator = None;
        if state.awaiting_fresh_operand {
            state.display = digit.as_char().to_string();
            state.awaiting_fresh_operand = false;
        } else if state.display == "0" {
            state.display = digit.as_char().to_string();
        } else {
            state.display.push(digit.as_char());
        }
    }

    /// Type a decimal point. A second point in the same number is ignored.
    pub fn input_decimal_point(&mut self) {
        let state = &mut self.state;
        state.repeat_operator = None;
        if state.awaiting_fresh_operand {
            state.display = "0.".to_string();
            state.awaiting_fresh_operand = false;
        } else if !state.display.contains('.') {
            state.display.push('.');
        }
    }

    /// Reset everything to the initial state.
    pub fn clear(&mut self) {
        self.state = AccumulatorState::default();
    }

    pub fn toggle_sign(&mut self) {
        let value = parse_display(&self.state.display);
        self.state.display = number_to_text(-value);
        self.state.repeat_operator = None;
    }

    pub fn percent(&mut self) {
        let value = parse_display(&self.state.display);
        self.state.display = number_to_text(value / 100.0);
        self.state.repeat_operator = None;
    }

    /// Press an operator or equals.
    ///
    /// Resolves the pending operator against the current operand, then makes
    /// `op` the new pending operator. Pressing equals again straight after
    /// equals re-applies the last arithmetic operator to the result itself,
    /// so `7 × 8 = =` shows `3136`. Any key that edits the display in
    /// between (digit, point, sign, percent) ends the repeat, and the
    /// pending equals then just takes the shown value.
    pub fn apply_operator(&mut self, op: Operator) {
        let state = &mut self.state;
        let operand = parse_display(&state.display);

        match (state.previous_value, state.pending_operator) {
            (None, _) => state.previous_value = Some(operand),
            (Some(previous), Some(pending)) => {
                // A NaN left over from 0 ÷ 0 counts as zero.
                let previous = if previous.is_nan() { 0.0 } else { previous };

                let repeating = pending == Operator::Equals
                    && op == Operator::Equals
                    && state.awaiting_fresh_operand;
                let resolved = match state.repeat_operator {
                    Some(last) if repeating => last,
                    _ => pending,
                };

                let result = evaluate(previous, operand, resolved);
                trace!(previous, operand, operator = %resolved, result, "Evaluated");

                if resolved.is_arithmetic() {
                    state.repeat_operator = Some(resolved);
                }
                state.display = number_to_text(result);
                state.previous_value = Some(result);
            }
            (Some(_), None) => {}
        }

        state.awaiting_fresh_operand = true;
        state.pending_operator = Some(op);
    }
}
