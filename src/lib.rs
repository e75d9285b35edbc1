//! Calculator evaluation engine
//!
//! A keypad-driven calculator: discrete key events (digits, operators, unary
//! functions, memory operations, mode toggles) drive a single state machine
//! that maintains a running numeric value and a formatted display string.
//! The interactive front end in `main.rs` is a thin shell over this library.

pub mod engine;
pub mod format;
pub mod functions;
pub mod keypad;

// Re-export core types for convenience
pub use crate::error::{CalcError, Result};
pub use engine::Engine;
pub use functions::{AngleMode, BinaryOp, UnaryFunction};
pub use keypad::Key;

/// Core error handling types for the calculator
pub mod error {
    use std::fmt;

    /// Result type for calculator operations
    pub type Result<T> = std::result::Result<T, CalcError>;

    /// Errors reported by the key-input layer.
    ///
    /// The engine itself never fails: numeric edge cases (division by zero,
    /// domain errors, overflow) resolve to IEEE-754 special values that flow
    /// into the display instead of being raised as errors. The only fallible
    /// surface is turning raw input text into key presses.
    #[derive(Debug, Clone, PartialEq)]
    pub enum CalcError {
        /// Input token that does not name any calculator key
        UnknownKey(String),
    }

    impl fmt::Display for CalcError {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            match self {
                CalcError::UnknownKey(token) => write!(f, "Unknown key: {}", token),
            }
        }
    }

    impl std::error::Error for CalcError {}
}
