//! Keypad input parsing
//!
//! Turns textual key tokens from the interactive front end into `Key` values
//! the engine can dispatch on. Tokens are whitespace-separated; a run of
//! digits (with an optional decimal point) expands into the individual key
//! presses that would type it, so `3.14` and `3 . 1 4` are equivalent.

use crate::error::{CalcError, Result};
use crate::functions::{BinaryOp, UnaryFunction};

/// A single calculator key press
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Key {
    /// Digit key 0-9
    Digit(u8),
    /// Decimal point
    Decimal,
    /// Delete the last typed character
    Backspace,
    /// Reset the current calculation
    Clear,
    /// Binary operator key
    Operator(BinaryOp),
    /// The `=` key
    Equals,
    /// Unary function key
    Function(UnaryFunction),
    /// Flip between radians and degrees
    AngleToggle,
    MemoryAdd,
    MemorySubtract,
    MemoryRecall,
    MemoryClear,
}

/// Parse one token into a key. Named keys are case-insensitive.
pub fn parse_key(token: &str) -> Result<Key> {
    let lower = token.to_ascii_lowercase();
    let key = match lower.as_str() {
        "." => Key::Decimal,
        "bs" | "backspace" => Key::Backspace,
        "c" | "clear" => Key::Clear,
        "+" | "add" => Key::Operator(BinaryOp::Add),
        "-" | "sub" => Key::Operator(BinaryOp::Subtract),
        "*" | "x" | "mul" => Key::Operator(BinaryOp::Multiply),
        "/" | "div" => Key::Operator(BinaryOp::Divide),
        "^" | "pow" => Key::Operator(BinaryOp::Power),
        "=" | "eval" => Key::Equals,
        "sin" => Key::Function(UnaryFunction::Sin),
        "cos" => Key::Function(UnaryFunction::Cos),
        "tan" => Key::Function(UnaryFunction::Tan),
        "log" => Key::Function(UnaryFunction::Log10),
        "ln" => Key::Function(UnaryFunction::Ln),
        "sqrt" => Key::Function(UnaryFunction::Sqrt),
        "sqr" | "square" => Key::Function(UnaryFunction::Square),
        "!" | "fact" => Key::Function(UnaryFunction::Factorial),
        "1/x" | "recip" => Key::Function(UnaryFunction::Reciprocal),
        "pi" => Key::Function(UnaryFunction::Pi),
        "e" => Key::Function(UnaryFunction::E),
        "mode" | "rad" | "deg" => Key::AngleToggle,
        "m+" => Key::MemoryAdd,
        "m-" => Key::MemorySubtract,
        "mr" => Key::MemoryRecall,
        "mc" => Key::MemoryClear,
        _ => {
            let mut chars = token.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) if c.is_ascii_digit() => Key::Digit(c as u8 - b'0'),
                _ => return Err(CalcError::UnknownKey(token.to_string())),
            }
        }
    };
    Ok(key)
}

/// Tokenize a whole input line into key presses.
///
/// Numeric tokens expand into one key per character, so users can type
/// values naturally instead of spacing out every digit.
pub fn tokenize_keys(line: &str) -> Result<Vec<Key>> {
    let mut keys = Vec::new();
    for token in line.split_whitespace() {
        if is_numeric_entry(token) {
            for c in token.chars() {
                if c == '.' {
                    keys.push(Key::Decimal);
                } else {
                    keys.push(Key::Digit(c as u8 - b'0'));
                }
            }
        } else {
            keys.push(parse_key(token)?);
        }
    }
    Ok(keys)
}

fn is_numeric_entry(token: &str) -> bool {
    token.chars().any(|c| c.is_ascii_digit())
        && token.chars().all(|c| c.is_ascii_digit() || c == '.')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digit_and_operator_keys() {
        assert_eq!(parse_key("7").unwrap(), Key::Digit(7));
        assert_eq!(parse_key("+").unwrap(), Key::Operator(BinaryOp::Add));
        assert_eq!(parse_key("^").unwrap(), Key::Operator(BinaryOp::Power));
        assert_eq!(parse_key("=").unwrap(), Key::Equals);
    }

    #[test]
    fn test_named_keys_are_case_insensitive() {
        assert_eq!(parse_key("SIN").unwrap(), Key::Function(UnaryFunction::Sin));
        assert_eq!(parse_key("Sqrt").unwrap(), Key::Function(UnaryFunction::Sqrt));
        assert_eq!(parse_key("M+").unwrap(), Key::MemoryAdd);
        assert_eq!(parse_key("Clear").unwrap(), Key::Clear);
    }

    #[test]
    fn test_unknown_token_is_rejected() {
        assert_eq!(
            parse_key("bogus"),
            Err(CalcError::UnknownKey("bogus".to_string()))
        );
        assert!(parse_key("12a").is_err());
    }

    #[test]
    fn test_numeric_token_expands_to_presses() {
        let keys = tokenize_keys("3.14").unwrap();
        assert_eq!(
            keys,
            vec![
                Key::Digit(3),
                Key::Decimal,
                Key::Digit(1),
                Key::Digit(4),
            ]
        );
    }

    #[test]
    fn test_multi_digit_token() {
        let keys = tokenize_keys("42 + 7 =").unwrap();
        assert_eq!(
            keys,
            vec![
                Key::Digit(4),
                Key::Digit(2),
                Key::Operator(BinaryOp::Add),
                Key::Digit(7),
                Key::Equals,
            ]
        );
    }

    #[test]
    fn test_lone_decimal_point_token() {
        assert_eq!(tokenize_keys(".").unwrap(), vec![Key::Decimal]);
    }

    #[test]
    fn test_tokenize_propagates_unknown_key() {
        assert!(tokenize_keys("3 + nope =").is_err());
    }
}
