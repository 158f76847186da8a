//! Cyclic color generation from a named starting hue.

use super::hsl::{HexColor, Hsl};
use super::hue::HueName;
use crate::error::Result;

/// Lightness levels used when a request supplies none.
pub const DEFAULT_LIGHTNESS: [f64; 3] = [20.0, 45.0, 70.0];

/// Saturation applied to every generated color.
pub const SATURATION: f64 = 95.0;

/// Degrees the hue advances after each full lightness cycle.
pub const DEFAULT_HUE_ROTATE: i32 = 40;

/// What to do with hues that rotate past the end of the wheel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HueWrap {
    /// Leave the hue as computed. Hues past 360 degrees (or below 0) lose
    /// their chroma and come out as near-black grays.
    #[default]
    None,
    /// Reduce the hue modulo 360 so the palette keeps cycling.
    Modulo,
}

/// Parameters for a single generated color.
///
/// Colors for index `0..n` cycle through the lightness levels first and only
/// then advance the hue by `hue_rotate` degrees.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorRequest<'a> {
    /// Starting hue.
    pub start: HueName,
    /// Position in the sequence.
    pub index: u64,
    /// Hue step per lightness cycle, in degrees.
    pub hue_rotate: i32,
    /// Lightness levels; empty means [`DEFAULT_LIGHTNESS`].
    pub lightness: &'a [f64],
    /// Saturation percentage.
    pub saturation: f64,
    /// Hue wrapping policy.
    pub hue_wrap: HueWrap,
}

impl<'a> ColorRequest<'a> {
    /// Create a request for index 0 with the default rotation and lightness.
    pub fn new(start: HueName) -> Self {
        Self {
            start,
            index: 0,
            hue_rotate: DEFAULT_HUE_ROTATE,
            lightness: &[],
            saturation: SATURATION,
            hue_wrap: HueWrap::None,
        }
    }

    /// Set the sequence index.
    pub fn index(mut self, index: u64) -> Self {
        self.index = index;
        self
    }

    /// Set the hue step per lightness cycle.
    pub fn hue_rotate(mut self, degrees: i32) -> Self {
        self.hue_rotate = degrees;
        self
    }

    /// Set the lightness levels.
    pub fn lightness(mut self, levels: &'a [f64]) -> Self {
        self.lightness = levels;
        self
    }

    /// Set the saturation.
    pub fn saturation(mut self, saturation: f64) -> Self {
        self.saturation = saturation;
        self
    }

    /// Set the hue wrapping policy.
    pub fn hue_wrap(mut self, hue_wrap: HueWrap) -> Self {
        self.hue_wrap = hue_wrap;
        self
    }

    /// Resolve the request to an HSL triple.
    pub fn hsl(&self) -> Hsl {
        let levels: &[f64] = if self.lightness.is_empty() {
            &DEFAULT_LIGHTNESS
        } else {
            self.lightness
        };
        let count = levels.len() as u64;

        let lightness = levels[(self.index % count) as usize];
        let hue_steps = self.index / count;
        let mut hue = self.start.start_hue() + hue_steps as f64 * f64::from(self.hue_rotate);

        match self.hue_wrap {
            HueWrap::Modulo => hue = hue.rem_euclid(360.0),
            HueWrap::None => {
                if !(0.0..360.0).contains(&hue) {
                    tracing::warn!(
                        start = %self.start,
                        index = self.index,
                        hue,
                        "Hue left the color wheel, color has no chroma"
                    );
                }
            },
        }

        Hsl::new(hue, self.saturation, lightness)
    }

    /// Generate the color.
    pub fn to_hex(&self) -> HexColor {
        let hsl = self.hsl();
        let color = hsl.to_hex();
        tracing::debug!(
            start = %self.start,
            index = self.index,
            hue = hsl.hue,
            lightness = hsl.lightness,
            %color,
            "Generated color"
        );
        color
    }
}

impl Default for ColorRequest<'_> {
    fn default() -> Self {
        Self::new(HueName::default())
    }
}

/// Generate the color at `index` starting from the hue named `start`.
///
/// An empty `lightness` slice uses [`DEFAULT_LIGHTNESS`]. The hue is not
/// wrapped; use [`ColorRequest`] with [`HueWrap::Modulo`] to keep long
/// sequences on the wheel.
///
/// # Errors
///
/// Returns [`SwatchError::UnknownHueName`](crate::SwatchError::UnknownHueName)
/// when `start` is not a known hue name.
pub fn generate_color(
    start: &str,
    index: u64,
    hue_rotate: i32,
    lightness: &[f64],
) -> Result<HexColor> {
    let start = HueName::lookup(start)?;
    Ok(ColorRequest::new(start)
        .index(index)
        .hue_rotate(hue_rotate)
        .lightness(lightness)
        .to_hex())
}
