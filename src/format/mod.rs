//! Number and text formatting.
//!
//! Formatters take a [`Value`], which is either a number or opaque text.
//! Numeric formatters leave opaque text alone so that placeholder strings
//! can flow through the same pipeline as numbers.

mod grouped;
mod number;
mod text;
mod value;

pub use grouped::{format_grouped, format_grouped_with, Grouped};
pub use number::{abbreviate_number, count_digits_no_decimals, format_percent, is_number};
pub use text::{capital_case_word, format_date_label, make_css_safe_name, remove_punctuation};
pub use value::Value;
