//! Thousands-separated integer formatting.

use std::fmt;

use super::number::{integer_string, round_half_up};
use super::value::Value;
use crate::util::GroupingConfig;

/// Result of [`format_grouped`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Grouped<'a> {
    /// A number rendered with grouping separators.
    Formatted(String),
    /// Opaque input, returned untouched.
    Unchanged(&'a str),
}

impl Grouped<'_> {
    /// The rendered text.
    pub fn as_str(&self) -> &str {
        match self {
            Grouped::Formatted(s) => s.as_str(),
            Grouped::Unchanged(s) => *s,
        }
    }

    /// Whether the input was a number.
    pub fn is_formatted(&self) -> bool {
        matches!(self, Grouped::Formatted(_))
    }

    /// Take the rendered text.
    pub fn into_string(self) -> String {
        match self {
            Grouped::Formatted(s) => s,
            Grouped::Unchanged(s) => s.to_string(),
        }
    }
}

impl fmt::Display for Grouped<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl PartialEq<&str> for Grouped<'_> {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

/// Round a number to an integer and separate thousands with commas.
///
/// `1234567.4` becomes `"1,234,567"` and `-1234` becomes `"-1,234"`.
/// Opaque text comes back as [`Grouped::Unchanged`]. Non-finite numbers are
/// rendered as Rust prints them (`NaN`, `inf`, `-inf`).
pub fn format_grouped<'a>(value: impl Into<Value<'a>>) -> Grouped<'a> {
    format_grouped_with(value, &GroupingConfig::default())
}

/// [`format_grouped`] with a custom separator or group size.
pub fn format_grouped_with<'a>(
    value: impl Into<Value<'a>>,
    config: &GroupingConfig,
) -> Grouped<'a> {
    match value.into() {
        Value::Number(n) => Grouped::Formatted(group_number(n, config)),
        Value::Opaque(s) => Grouped::Unchanged(s),
    }
}

fn group_number(value: f64, config: &GroupingConfig) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    let rounded = round_half_up(value);
    let sign = if rounded < 0.0 { "-" } else { "" };
    let digits = integer_string(rounded.abs());

    if config.group_size == 0 || digits.len() < config.group_size {
        return format!("{sign}{digits}");
    }

    // Walk from the least significant digit, separating every full group.
    let mut reversed = String::with_capacity(digits.len() + digits.len() / config.group_size);
    for (i, c) in digits.chars().rev().enumerate() {
        if i > 0 && i % config.group_size == 0 {
            reversed.push(config.separator);
        }
        reversed.push(c);
    }

    let grouped: String = reversed.chars().rev().collect();
    format!("{sign}{grouped}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn magnitude_boundaries() {
        assert_eq!(format_grouped(999), "999");
        assert_eq!(format_grouped(1000), "1,000");
        assert_eq!(format_grouped(1_000_000), "1,000,000");
        assert_eq!(format_grouped(1_234_567), "1,234,567");
        assert_eq!(format_grouped(-1_234_567), "-1,234,567");
        assert_eq!(format_grouped(100_000), "100,000");
    }

    #[test]
    fn small_values_are_not_grouped() {
        assert_eq!(format_grouped(0), "0");
        assert_eq!(format_grouped(7), "7");
        assert_eq!(format_grouped(-42), "-42");
        assert_eq!(format_grouped(-999), "-999");
    }

    #[test]
    fn rounds_to_nearest_integer() {
        assert_eq!(format_grouped(1234.6), "1,235");
        assert_eq!(format_grouped(1234.4), "1,234");
        assert_eq!(format_grouped(999.5), "1,000");
        assert_eq!(format_grouped(-0.4), "0");
    }

    #[test]
    fn ties_round_up() {
        assert_eq!(format_grouped(2.5), "3");
        assert_eq!(format_grouped(-2.5), "-2");
        assert_eq!(format_grouped(-1000.5), "-1,000");
        assert_eq!(format_grouped(-0.5), "0");
    }

    #[test]
    fn opaque_text_passes_through() {
        let grouped = format_grouped("abc");
        assert_eq!(grouped, "abc");
        assert_eq!(grouped, Grouped::Unchanged("abc"));
        assert!(!grouped.is_formatted());
        assert_eq!(format_grouped("1,234").into_string(), "1,234");
    }

    #[test]
    fn huge_values_keep_every_digit() {
        assert_eq!(format_grouped(1e21), "1,000,000,000,000,000,000,000");
    }

    #[test]
    fn non_finite_numbers() {
        assert_eq!(format_grouped(f64::NAN), "NaN");
        assert_eq!(format_grouped(f64::INFINITY), "inf");
        assert_eq!(format_grouped(f64::NEG_INFINITY), "-inf");
    }

    #[test]
    fn custom_grouping() {
        let config = GroupingConfig {
            separator: '.',
            group_size: 3,
        };
        assert_eq!(format_grouped_with(1_234_567, &config), "1.234.567");

        let ungrouped = GroupingConfig {
            separator: ',',
            group_size: 0,
        };
        assert_eq!(format_grouped_with(1_234_567, &ungrouped), "1234567");
    }

    #[test]
    fn display_matches_as_str() {
        assert_eq!(format_grouped(12_345).to_string(), "12,345");
    }
}
