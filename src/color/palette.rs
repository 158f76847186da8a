//! Endless palettes for chart series.

use super::generator::ColorRequest;
use super::hsl::HexColor;
use crate::util::PaletteConfig;

/// An endless iterator over generated colors for indices `0, 1, 2, ...`.
///
/// Take as many colors as there are series:
///
/// ```
/// use swatchbook::color::Palette;
/// use swatchbook::util::PaletteConfig;
///
/// let colors: Vec<String> = Palette::new(PaletteConfig::default())
///     .take(3)
///     .map(|c| c.to_string())
///     .collect();
/// assert_eq!(colors, ["#036343", "#06e097", "#6afbcb"]);
/// ```
#[derive(Debug, Clone)]
pub struct Palette {
    config: PaletteConfig,
    next: u64,
}

impl Palette {
    /// Create a palette starting at index 0.
    pub fn new(config: PaletteConfig) -> Self {
        Self { config, next: 0 }
    }

    /// The color at an arbitrary index, independent of iteration state.
    pub fn color_at(&self, index: u64) -> HexColor {
        ColorRequest::new(self.config.start)
            .index(index)
            .hue_rotate(self.config.hue_rotate)
            .lightness(&self.config.lightness)
            .saturation(self.config.saturation)
            .hue_wrap(self.config.hue_wrap)
            .to_hex()
    }
}

impl Iterator for Palette {
    type Item = HexColor;

    fn next(&mut self) -> Option<Self::Item> {
        let color = self.color_at(self.next);
        self.next = self.next.checked_add(1)?;
        Some(color)
    }
}
