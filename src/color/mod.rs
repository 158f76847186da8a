//! Deterministic colors on the HSL color wheel.
//!
//! [`hsl_to_hex`] converts a single HSL triple. [`ColorRequest`] and
//! [`Palette`] walk the wheel from a named starting hue, cycling through a
//! list of lightness levels before advancing the hue.

mod generator;
mod hsl;
mod hue;
mod palette;

pub use generator::{
    generate_color, ColorRequest, HueWrap, DEFAULT_HUE_ROTATE, DEFAULT_LIGHTNESS, SATURATION,
};
pub use hsl::{hsl_to_hex, HexColor, Hsl};
pub use hue::{HueName, HUE_START_TABLE};
pub use palette::Palette;
