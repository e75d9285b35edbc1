//! Numeric kernels for the calculator
//!
//! Implements the binary operators and unary function keys on `f64` values.
//! Domain errors and overflow follow IEEE-754: they produce NaN or signed
//! infinity rather than Rust errors, so the engine stays operable after any
//! input.

/// Binary operators selectable from the keypad
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    Add,
    Subtract,
    Multiply,
    Divide,
    Power,
}

/// Unary function keys
///
/// `Pi` and `E` are grouped here because, like the other functions, they
/// replace the current display value in one press; they simply ignore it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryFunction {
    Sin,
    Cos,
    Tan,
    Log10,
    Ln,
    Sqrt,
    Square,
    Factorial,
    Reciprocal,
    Pi,
    E,
}

/// Interpretation of the display value for trigonometric functions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AngleMode {
    Radians,
    Degrees,
}

impl AngleMode {
    /// The other mode
    pub fn toggled(self) -> Self {
        match self {
            AngleMode::Radians => AngleMode::Degrees,
            AngleMode::Degrees => AngleMode::Radians,
        }
    }
}

/// Apply a binary operator to two operands.
///
/// Division by zero yields signed infinity (or NaN for `0/0`) per standard
/// floating-point semantics.
pub fn calculate(a: f64, b: f64, op: BinaryOp) -> f64 {
    match op {
        BinaryOp::Add => a + b,
        BinaryOp::Subtract => a - b,
        BinaryOp::Multiply => a * b,
        BinaryOp::Divide => a / b,
        BinaryOp::Power => a.powf(b),
    }
}

/// Apply a unary function key to the current display value.
///
/// Trigonometric functions interpret the value per `angle_mode`, converting
/// degrees to radians before the native function. Logarithms of non-positive
/// values yield NaN.
pub fn apply_unary(value: f64, function: UnaryFunction, angle_mode: AngleMode) -> f64 {
    match function {
        UnaryFunction::Sin => trig_operand(value, angle_mode).sin(),
        UnaryFunction::Cos => trig_operand(value, angle_mode).cos(),
        UnaryFunction::Tan => trig_operand(value, angle_mode).tan(),
        UnaryFunction::Log10 => {
            if value <= 0.0 {
                f64::NAN
            } else {
                value.log10()
            }
        }
        UnaryFunction::Ln => {
            if value <= 0.0 {
                f64::NAN
            } else {
                value.ln()
            }
        }
        UnaryFunction::Sqrt => value.sqrt(),
        UnaryFunction::Square => value * value,
        UnaryFunction::Factorial => factorial(value),
        UnaryFunction::Reciprocal => 1.0 / value,
        UnaryFunction::Pi => std::f64::consts::PI,
        UnaryFunction::E => std::f64::consts::E,
    }
}

/// Factorial over `f64`.
///
/// Negative or NaN input yields NaN. Non-integer input is truncated toward
/// zero before the product. Truncated values above 170 exceed the double
/// range and yield positive infinity (171! overflows f64).
pub fn factorial(value: f64) -> f64 {
    if value.is_nan() || value < 0.0 {
        return f64::NAN;
    }
    let n = value.trunc();
    if n > 170.0 {
        return f64::INFINITY;
    }
    let mut product = 1.0;
    let mut i = 2.0;
    while i <= n {
        product *= i;
        i += 1.0;
    }
    product
}

fn trig_operand(value: f64, angle_mode: AngleMode) -> f64 {
    match angle_mode {
        AngleMode::Radians => value,
        AngleMode::Degrees => value.to_radians(),
    }
}
