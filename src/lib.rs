//! Swatchbook - deterministic palette colors and small presentation formatters.
//!
//! Swatchbook assigns stable colors to an ordered set of things (chart series,
//! tags, table rows) by walking the HSL color wheel from a named hue, and
//! formats numbers and labels for display without locale machinery.
//!
//! # Features
//!
//! - HSL to `#rrggbb` conversion
//! - Cyclic palettes: lightness levels first, then hue rotation
//! - Thousands separators, abbreviations and percentages
//! - Label cleanup, natural sorting and rem/pixel conversion
//!
//! # Example
//!
//! ```
//! use swatchbook::color::generate_color;
//! use swatchbook::format::format_grouped;
//!
//! let series_color = generate_color("teal", 3, 40, &[])?;
//! assert_eq!(series_color.to_string(), "#034363");
//!
//! assert_eq!(format_grouped(1234567.4).to_string(), "1,234,567");
//! assert_eq!(format_grouped("n/a").to_string(), "n/a");
//! # Ok::<(), swatchbook::SwatchError>(())
//! ```

#![warn(
    missing_docs,
    missing_debug_implementations,
    rust_2018_idioms,
    unreachable_pub
)]
#![deny(unsafe_code)]

pub mod app;
pub mod clipboard;
pub mod color;
pub mod error;
pub mod format;
pub mod sort;
pub mod ui;
pub mod util;

pub use error::{Result, SwatchError};
