//! Small numeric formatters.

use super::value::Value;
use crate::error::{Result, SwatchError};

/// Round to the nearest integer, with ties going toward positive infinity.
pub(crate) fn round_half_up(value: f64) -> f64 {
    let rounded = value.round();
    // `f64::round` sends negative ties away from zero.
    if value - rounded == 0.5 {
        rounded + 1.0
    } else {
        rounded
    }
}

/// Render an integral float without a fractional part or a negative zero.
pub(crate) fn integer_string(value: f64) -> String {
    format!("{:.0}", value + 0.0)
}

/// Abbreviate values of four or more integer digits to thousands.
///
/// `12345` becomes `"12k"` and `999` stays `"999"`. Numeric text is parsed.
///
/// # Errors
///
/// Returns [`SwatchError::InvalidNumber`] for text that is not a number.
pub fn abbreviate_number<'a>(value: impl Into<Value<'a>>) -> Result<String> {
    let number = match value.into() {
        Value::Number(n) => n,
        Value::Opaque(s) => s
            .trim()
            .parse::<f64>()
            .map_err(|_| SwatchError::invalid_number(s))?,
    };

    let rounded = round_half_up(number);
    if integer_string(rounded.abs()).len() > 3 {
        Ok(format!("{}k", integer_string(round_half_up(number / 1000.0))))
    } else {
        Ok(integer_string(rounded))
    }
}

/// Format a ratio as a whole percentage: `0.256` becomes `"26%"`.
///
/// Ties round away from zero (`-0.125` is `"-13%"`), and small negatives
/// keep their sign (`-0.001` is `"-0%"`).
///
/// Text is read up to its first non-numeric character (`"0.5 of all"` is
/// `"50%"`); text without a leading number counts as zero.
pub fn format_percent<'a>(value: impl Into<Value<'a>>) -> String {
    let ratio = match value.into() {
        Value::Number(n) => n,
        Value::Opaque(s) => parse_leading_float(s).unwrap_or(0.0),
    };
    let percent = if ratio.is_nan() { 0.0 } else { ratio * 100.0 };

    // Half-up on the magnitude; a negative that rounds to zero keeps its sign.
    let sign = if percent < 0.0 { "-" } else { "" };
    let magnitude = (percent.abs() + 0.5).floor();
    format!("{sign}{}%", integer_string(magnitude))
}

/// Count the digits left of the decimal point, sign included.
///
/// Text is measured as-is, in characters.
pub fn count_digits_no_decimals<'a>(value: impl Into<Value<'a>>) -> usize {
    match value.into() {
        Value::Number(n) if n.is_finite() => integer_string(n.trunc()).len(),
        Value::Number(n) => n.to_string().len(),
        Value::Opaque(s) => s.chars().count(),
    }
}

/// Whether `text` is a finite number, ignoring surrounding whitespace.
pub fn is_number(text: &str) -> bool {
    text.trim().parse::<f64>().is_ok_and(f64::is_finite)
}

/// Parse the longest numeric prefix of `text` after leading whitespace.
fn parse_leading_float(text: &str) -> Option<f64> {
    let text = text.trim_start();
    let bytes = text.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }
    let int_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut mantissa_digits = end - int_start;

    if end < bytes.len() && bytes[end] == b'.' {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        mantissa_digits += frac_end - frac_start;
        if mantissa_digits > 0 {
            end = frac_end;
        }
    }

    if mantissa_digits == 0 {
        return None;
    }

    if end < bytes.len() && matches!(bytes[end], b'e' | b'E') {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    text[..end].parse().ok()
}
