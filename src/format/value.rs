//! Formatter input values.

use super::number::is_number;

/// A formatter input: a number, or text that formatters pass through.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Value<'a> {
    /// A numeric value.
    Number(f64),
    /// Anything else, carried as-is.
    Opaque(&'a str),
}

impl<'a> Value<'a> {
    /// Classify command-line style input: numeric text becomes a number.
    pub fn from_input(input: &'a str) -> Self {
        if is_number(input) {
            input
                .trim()
                .parse()
                .map_or(Value::Opaque(input), Value::Number)
        } else {
            Value::Opaque(input)
        }
    }
}

impl From<f64> for Value<'_> {
    fn from(value: f64) -> Self {
        Value::Number(value)
    }
}

impl From<i64> for Value<'_> {
    fn from(value: i64) -> Self {
        Value::Number(value as f64)
    }
}

impl From<i32> for Value<'_> {
    fn from(value: i32) -> Self {
        Value::Number(f64::from(value))
    }
}

impl From<u32> for Value<'_> {
    fn from(value: u32) -> Self {
        Value::Number(f64::from(value))
    }
}

impl<'a> From<&'a str> for Value<'a> {
    fn from(value: &'a str) -> Self {
        Value::Opaque(value)
    }
}
