//! Runtime values and their arithmetic.

use std::fmt::Display;

/// A value held in the interpreter's store. Integers and reals stay distinct
/// until an operation mixes them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Value {
    Integer(i64),
    Real(f64),
}

impl Value {
    pub fn as_real(self) -> f64 {
        match self {
            Value::Integer(value) => value as f64,
            Value::Real(value) => value,
        }
    }

    pub fn is_zero(self) -> bool {
        match self {
            Value::Integer(value) => value == 0,
            Value::Real(value) => value == 0.0,
        }
    }

    /// Integer operations return `None` when the result leaves the `i64`
    /// range; the interpreter reports that as a runtime error.
    pub fn add(self, other: Value) -> Option<Value> {
        match (self, other) {
            (Value::Integer(left), Value::Integer(right)) => {
                left.checked_add(right).map(Value::Integer)
            }
            _ => Some(Value::Real(self.as_real() + other.as_real())),
        }
    }

    pub fn subtract(self, other: Value) -> Option<Value> {
        match (self, other) {
            (Value::Integer(left), Value::Integer(right)) => {
                left.checked_sub(right).map(Value::Integer)
            }
            _ => Some(Value::Real(self.as_real() - other.as_real())),
        }
    }

    pub fn multiply(self, other: Value) -> Option<Value> {
        match (self, other) {
            (Value::Integer(left), Value::Integer(right)) => {
                left.checked_mul(right).map(Value::Integer)
            }
            _ => Some(Value::Real(self.as_real() * other.as_real())),
        }
    }

    /// Floor division. Two integers give an integer quotient rounded toward
    /// negative infinity; a real operand gives the floor of the real quotient.
    /// `i64::MIN div -1` is the one overflowing case.
    ///
    /// The caller checks for a zero divisor.
    pub fn floor_div(self, other: Value) -> Option<Value> {
        match (self, other) {
            (Value::Integer(left), Value::Integer(right)) => {
                let quotient = left.checked_div(right)?;
                if left % right != 0 && (left < 0) != (right < 0) {
                    Some(Value::Integer(quotient - 1))
                } else {
                    Some(Value::Integer(quotient))
                }
            }
            _ => Some(Value::Real((self.as_real() / other.as_real()).floor())),
        }
    }

    /// True division; the result is always real.
    ///
    /// The caller checks for a zero divisor.
    pub fn real_div(self, other: Value) -> Value {
        Value::Real(self.as_real() / other.as_real())
    }

    pub fn negate(self) -> Option<Value> {
        match self {
            Value::Integer(value) => value.checked_neg().map(Value::Integer),
            Value::Real(value) => Some(Value::Real(-value)),
        }
    }
}

impl Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::Integer(value) => write!(f, "{}", value),
            Value::Real(value) => write!(f, "{}", value),
        }
    }
}
