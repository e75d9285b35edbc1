//! The calculator state machine
//!
//! One `Engine` instance owns the entire calculator state: the display
//! buffer being typed, the accumulator and pending operator of an in-flight
//! binary operation, the memory register, and the angle mode. Every key
//! press is a method call that runs to completion; the front end reads the
//! result back through `display_text()` and friends. No operation fails or
//! panics — numeric edge cases become IEEE-754 specials on the display.

use crate::format::{format_value, parse_number};
use crate::functions::{self, AngleMode, BinaryOp, UnaryFunction};
use crate::keypad::Key;

/// Calculator state machine driven by discrete key presses.
///
/// Chained evaluation: each operator press resolves any operator already
/// pending before storing the new one, so `3 + 4 * 2 =` evaluates left to
/// right as `(3 + 4) * 2 = 14`, not by precedence.
#[derive(Debug, Clone)]
pub struct Engine {
    /// Text being typed or last result; never empty, `"0"` when reset
    display: String,
    /// Left operand of the pending operation; `None` when none is in flight
    accumulator: Option<f64>,
    /// Operator awaiting its right operand
    pending: Option<BinaryOp>,
    /// Next digit starts a fresh number instead of extending the display
    awaiting_operand: bool,
    /// Memory register; survives `clear`, reset only by `memory_clear`
    memory: f64,
    angle_mode: AngleMode,
}

impl Engine {
    /// Create an engine in its initial state: display `"0"`, no pending
    /// operation, memory 0, radians.
    pub fn new() -> Self {
        Self {
            display: "0".to_string(),
            accumulator: None,
            pending: None,
            awaiting_operand: false,
            memory: 0.0,
            angle_mode: AngleMode::Radians,
        }
    }

    /// Dispatch a keypad key to the matching operation
    pub fn press(&mut self, key: Key) {
        match key {
            Key::Digit(d) => self.input_digit(d),
            Key::Decimal => self.input_decimal_point(),
            Key::Backspace => self.backspace(),
            Key::Clear => self.clear(),
            Key::Operator(op) => self.apply_binary_operator(op),
            Key::Equals => self.evaluate(),
            Key::Function(f) => self.apply_unary_function(f),
            Key::AngleToggle => self.toggle_angle_mode(),
            Key::MemoryAdd => self.memory_add(),
            Key::MemorySubtract => self.memory_subtract(),
            Key::MemoryRecall => self.memory_recall(),
            Key::MemoryClear => self.memory_clear(),
        }
    }

    /// Enter one digit (0-9; out-of-range values are clamped to 9).
    ///
    /// Starts a fresh number after an operator or function, and collapses
    /// the leading zero of the reset display.
    pub fn input_digit(&mut self, digit: u8) {
        let digit = digit.min(9);
        if self.awaiting_operand {
            self.display = digit.to_string();
            self.awaiting_operand = false;
        } else if self.display == "0" {
            self.display = digit.to_string();
        } else {
            self.display.push((b'0' + digit) as char);
        }
    }

    /// Enter the decimal point. Idempotent once the buffer contains one.
    pub fn input_decimal_point(&mut self) {
        if self.awaiting_operand {
            self.display = "0.".to_string();
            self.awaiting_operand = false;
        } else if !self.display.contains('.') {
            self.display.push('.');
        }
    }

    /// Delete the last typed character; an emptied buffer becomes `"0"`.
    pub fn backspace(&mut self) {
        self.display.pop();
        if self.display.is_empty() {
            self.display.push('0');
        }
    }

    /// Reset the transient state. Memory and angle mode are untouched.
    pub fn clear(&mut self) {
        self.display = "0".to_string();
        self.accumulator = None;
        self.pending = None;
        self.awaiting_operand = false;
    }

    /// Press a binary operator key.
    ///
    /// If an operator is already pending, it is applied first (chained
    /// evaluation) and its result shown; the new operator then waits for
    /// its right operand.
    pub fn apply_binary_operator(&mut self, op: BinaryOp) {
        let value = parse_number(&self.display);
        match (self.accumulator, self.pending) {
            (Some(acc), Some(pending)) => {
                let result = functions::calculate(acc, value, pending);
                self.accumulator = Some(result);
                self.display = format_value(result);
            }
            _ => self.accumulator = Some(value),
        }
        self.pending = Some(op);
        self.awaiting_operand = true;
    }

    /// Press `=`: close the pending operation, if any.
    ///
    /// With nothing pending this is a no-op, so a second `=` immediately
    /// after an evaluation leaves the display unchanged (the engine does
    /// not repeat the last operation).
    pub fn evaluate(&mut self) {
        if let (Some(acc), Some(op)) = (self.accumulator, self.pending) {
            let result = functions::calculate(acc, parse_number(&self.display), op);
            self.display = format_value(result);
            self.accumulator = None;
            self.pending = None;
            self.awaiting_operand = true;
        }
    }

    /// Apply a unary function key to the display value (not the
    /// accumulator); the result replaces the display.
    pub fn apply_unary_function(&mut self, function: UnaryFunction) {
        let value = parse_number(&self.display);
        let result = functions::apply_unary(value, function, self.angle_mode);
        self.display = format_value(result);
        self.awaiting_operand = true;
    }

    /// Flip between radians and degrees. Survives `clear`.
    pub fn toggle_angle_mode(&mut self) {
        self.angle_mode = self.angle_mode.toggled();
    }

    /// Add the display value to the memory register
    pub fn memory_add(&mut self) {
        self.memory += parse_number(&self.display);
        self.awaiting_operand = true;
    }

    /// Subtract the display value from the memory register
    pub fn memory_subtract(&mut self) {
        self.memory -= parse_number(&self.display);
        self.awaiting_operand = true;
    }

    /// Replace the display with the memory register
    pub fn memory_recall(&mut self) {
        self.display = format_value(self.memory);
        self.awaiting_operand = true;
    }

    /// Zero the memory register. The display is untouched.
    pub fn memory_clear(&mut self) {
        self.memory = 0.0;
    }

    /// The current display text
    pub fn display_text(&self) -> &str {
        &self.display
    }

    /// The memory register
    pub fn memory(&self) -> f64 {
        self.memory
    }

    /// The current angle mode
    pub fn angle_mode(&self) -> AngleMode {
        self.angle_mode
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}
