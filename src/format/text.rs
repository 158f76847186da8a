//! Text cleanup and short labels.

use crate::error::{Result, SwatchError};

const MONTH_ABBREVIATIONS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Punctuation dropped by [`remove_punctuation`].
const PUNCTUATION: &str = ".,/#!$%^&*;:{}=-_`~()";

/// Characters that cannot appear in a bare CSS identifier.
const CSS_UNSAFE: &str = "!\"#$%&'()*+,./:;<=>?@[\\]^`{|}~";

/// Uppercase the first character and lowercase the rest.
pub fn capital_case_word(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.as_str().to_lowercase().chars())
            .collect(),
        None => String::new(),
    }
}

/// Turn a `year-month-day` date into a short `Mon day` label.
///
/// `"2020-01-22"` becomes `"Jan 22"`. Leading zeros on the day are dropped.
///
/// # Errors
///
/// Returns [`SwatchError::InvalidDate`] when the month is not 1 through 12 or
/// the day is not a number.
pub fn format_date_label(date: &str, separator: &str) -> Result<String> {
    let mut parts = date.split(separator);
    let (_year, month, day) = match (parts.next(), parts.next(), parts.next()) {
        (Some(year), Some(month), Some(day)) => (year, month, day),
        _ => return Err(SwatchError::invalid_date(date)),
    };

    let month = month
        .trim()
        .parse::<usize>()
        .ok()
        .and_then(|m| m.checked_sub(1))
        .and_then(|m| MONTH_ABBREVIATIONS.get(m))
        .ok_or_else(|| SwatchError::invalid_date(date))?;
    let day = day
        .trim()
        .parse::<u32>()
        .map_err(|_| SwatchError::invalid_date(date))?;

    Ok(format!("{month} {day}"))
}

/// Strip common punctuation, then collapse repeated spaces and trim.
pub fn remove_punctuation(words: &str) -> String {
    let stripped: String = words.chars().filter(|c| !PUNCTUATION.contains(*c)).collect();

    let mut collapsed = String::with_capacity(stripped.len());
    let mut previous_space = false;
    for c in stripped.chars() {
        if c == ' ' && previous_space {
            continue;
        }
        previous_space = c == ' ';
        collapsed.push(c);
    }

    collapsed.trim().to_string()
}

/// Make a string usable as a CSS class or id.
///
/// Punctuation and whitespace are removed. Names starting with a digit get
/// a leading `-`, since identifiers may not start with one.
pub fn make_css_safe_name(name: &str) -> String {
    let starts_with_digit = name.chars().next().is_some_and(|c| c.is_ascii_digit());
    let safe: String = name
        .chars()
        .filter(|c| !c.is_whitespace() && !CSS_UNSAFE.contains(*c))
        .collect();

    if starts_with_digit {
        format!("-{safe}")
    } else {
        safe
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capital_case() {
        assert_eq!(capital_case_word("hELLO"), "Hello");
        assert_eq!(capital_case_word("a"), "A");
        assert_eq!(capital_case_word(""), "");
        assert_eq!(capital_case_word("ßig"), "SSig");
    }

    #[test]
    fn date_labels() {
        assert_eq!(format_date_label("2020-01-22", "-").unwrap(), "Jan 22");
        assert_eq!(format_date_label("2021-12-05", "-").unwrap(), "Dec 5");
        assert_eq!(format_date_label("2021/07/09", "/").unwrap(), "Jul 9");
    }

    #[test]
    fn date_label_errors() {
        for input in ["2020-13-01", "2020-00-01", "2020-01", "2020-ab-01", "2020-01-xx"] {
            let err = format_date_label(input, "-").unwrap_err();
            assert!(matches!(err, SwatchError::InvalidDate { .. }), "{input}");
        }
    }

    #[test]
    fn punctuation_removed() {
        assert_eq!(remove_punctuation("Hello, world!"), "Hello world");
        assert_eq!(remove_punctuation("  a - b  (c)  "), "a b c");
        assert_eq!(remove_punctuation("snake_case=1;"), "snakecase1");
        assert_eq!(remove_punctuation("keep 'quotes' ?"), "keep 'quotes' ?");
    }

    #[test]
    fn css_safe_names() {
        assert_eq!(make_css_safe_name("North America"), "NorthAmerica");
        assert_eq!(make_css_safe_name("a.b/c#d"), "abcd");
        assert_eq!(make_css_safe_name("2020 sales"), "-2020sales");
        assert_eq!(make_css_safe_name("series-1_a"), "series-1_a");
        assert_eq!(make_css_safe_name(""), "");
    }
}
