//! Configuration defaults for palettes, grouping and unit conversion.

use crate::color::{HueName, HueWrap, DEFAULT_HUE_ROTATE, DEFAULT_LIGHTNESS, SATURATION};

/// Configuration for generated palettes.
#[derive(Debug, Clone, PartialEq)]
pub struct PaletteConfig {
    /// Hue the palette starts from.
    pub start: HueName,
    /// Degrees the hue advances after each lightness cycle.
    pub hue_rotate: i32,
    /// Lightness levels cycled per hue. Empty falls back to the defaults.
    pub lightness: Vec<f64>,
    /// Saturation percentage.
    pub saturation: f64,
    /// What to do once the hue passes the end of the wheel.
    pub hue_wrap: HueWrap,
}

impl Default for PaletteConfig {
    fn default() -> Self {
        Self {
            start: HueName::Teal,
            hue_rotate: DEFAULT_HUE_ROTATE,
            lightness: DEFAULT_LIGHTNESS.to_vec(),
            saturation: SATURATION,
            hue_wrap: HueWrap::None,
        }
    }
}

/// Configuration for digit grouping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupingConfig {
    /// Character inserted between groups.
    pub separator: char,
    /// Digits per group. Zero disables grouping.
    pub group_size: usize,
}

impl Default for GroupingConfig {
    fn default() -> Self {
        Self {
            separator: ',',
            group_size: 3,
        }
    }
}

/// Configuration for rem/pixel conversion.
#[derive(Debug, Clone, PartialEq)]
pub struct UnitConfig {
    /// Root font size in pixels.
    pub base_font_px: f64,
}

impl Default for UnitConfig {
    fn default() -> Self {
        Self {
            base_font_px: 16.0, // browser default root font size
        }
    }
}

/// Combined configuration.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Config {
    /// Palette generation.
    pub palette: PaletteConfig,
    /// Number grouping.
    pub grouping: GroupingConfig,
    /// Unit conversion.
    pub units: UnitConfig,
}
