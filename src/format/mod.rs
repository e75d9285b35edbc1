//! Display formatting and parsing
//!
//! The display buffer and the numeric kernels talk to each other through two
//! functions: `format_value` renders a result as the shortest decimal string
//! that parses back to the same `f64`, and `parse_number` reads the buffer
//! back, failing closed to NaN on anything unparsable.

/// Format a value for the display.
///
/// Finite values use the shortest round-trippable decimal representation
/// (Rust's `f64` `Display`). Special values use the fixed markers `NaN`,
/// `Infinity`, and `-Infinity`, which `parse_number` also accepts.
pub fn format_value(value: f64) -> String {
    if value.is_nan() {
        "NaN".to_string()
    } else if value == f64::INFINITY {
        "Infinity".to_string()
    } else if value == f64::NEG_INFINITY {
        "-Infinity".to_string()
    } else {
        value.to_string()
    }
}

/// Parse the display buffer back into a number.
///
/// All buffer mutation goes through the engine, so the text is normally a
/// valid number or one of the special markers. Anything else (a buffer
/// damaged by backspacing through a marker, say) parses as NaN rather than
/// failing.
pub fn parse_number(text: &str) -> f64 {
    text.parse::<f64>().unwrap_or(f64::NAN)
}
