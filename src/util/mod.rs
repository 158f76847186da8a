//! Utility functions.
//!
//! This module provides configuration defaults, rem/pixel conversion and
//! CSS rule text helpers.

mod config;
mod css;
mod units;

pub use config::{Config, GroupingConfig, PaletteConfig, UnitConfig};
pub use css::make_styles_from_items;
pub use units::{px_to_rem, rem_to_px};
