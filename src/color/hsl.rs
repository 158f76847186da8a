//! HSL to hex conversion.

use std::fmt;

/// A transient hue/saturation/lightness triple.
///
/// Saturation and lightness are percentages in `[0, 100]`. Hue is in degrees
/// and is not wrapped; see [`hsl_to_hex`] for what happens outside `[0, 360)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsl {
    /// Hue in degrees.
    pub hue: f64,
    /// Saturation percentage.
    pub saturation: f64,
    /// Lightness percentage.
    pub lightness: f64,
}

impl Hsl {
    /// Create a new HSL triple.
    pub fn new(hue: f64, saturation: f64, lightness: f64) -> Self {
        Self {
            hue,
            saturation,
            lightness,
        }
    }

    /// Convert to a hex color.
    pub fn to_hex(self) -> HexColor {
        hsl_to_hex(self.hue, self.saturation, self.lightness)
    }
}

/// An opaque RGB color rendered as `#rrggbb`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HexColor {
    r: u8,
    g: u8,
    b: u8,
}

impl HexColor {
    /// Create a color from its channels.
    pub fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// The red, green and blue channels.
    pub fn rgb(self) -> (u8, u8, u8) {
        (self.r, self.g, self.b)
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl PartialEq<&str> for HexColor {
    fn eq(&self, other: &&str) -> bool {
        self.to_string() == *other
    }
}

impl From<HexColor> for ratatui::style::Color {
    fn from(color: HexColor) -> Self {
        ratatui::style::Color::Rgb(color.r, color.g, color.b)
    }
}

impl From<HexColor> for crossterm::style::Color {
    fn from(color: HexColor) -> Self {
        crossterm::style::Color::Rgb {
            r: color.r,
            g: color.g,
            b: color.b,
        }
    }
}

/// Convert an HSL triple to a hex color.
///
/// `s` and `l` are percentages. Hues outside `[0, 360)` (including negative
/// and NaN hues) fall into no sector and contribute no chroma, so the result
/// is the gray given by the lightness offset alone. Channels are clamped to a
/// byte, so the output is always seven characters.
pub fn hsl_to_hex(h: f64, s: f64, l: f64) -> HexColor {
    let s = s / 100.0;
    let l = l / 100.0;

    let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
    let x = c * (1.0 - ((h / 60.0) % 2.0 - 1.0).abs());
    let m = l - c / 2.0;

    let (r, g, b) = if !(0.0..360.0).contains(&h) {
        (0.0, 0.0, 0.0)
    } else if h < 60.0 {
        (c, x, 0.0)
    } else if h < 120.0 {
        (x, c, 0.0)
    } else if h < 180.0 {
        (0.0, c, x)
    } else if h < 240.0 {
        (0.0, x, c)
    } else if h < 300.0 {
        (x, 0.0, c)
    } else {
        (c, 0.0, x)
    };

    HexColor::from_rgb(channel(r + m), channel(g + m), channel(b + m))
}

fn channel(value: f64) -> u8 {
    // NaN saturates to 0 in the cast.
    (value * 255.0).round().clamp(0.0, 255.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    fn is_hex(s: &str) -> bool {
        s.len() == 7
            && s.starts_with('#')
            && s[1..]
                .chars()
                .all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c))
    }

    #[test]
    fn primaries() {
        assert_eq!(hsl_to_hex(0.0, 100.0, 50.0), "#ff0000");
        assert_eq!(hsl_to_hex(60.0, 100.0, 50.0), "#ffff00");
        assert_eq!(hsl_to_hex(120.0, 100.0, 50.0), "#00ff00");
        assert_eq!(hsl_to_hex(240.0, 100.0, 50.0), "#0000ff");
        assert_eq!(hsl_to_hex(300.0, 100.0, 50.0), "#ff00ff");
    }

    #[test]
    fn grays_ignore_hue() {
        assert_eq!(hsl_to_hex(0.0, 0.0, 100.0), "#ffffff");
        assert_eq!(hsl_to_hex(0.0, 0.0, 0.0), "#000000");
        assert_eq!(hsl_to_hex(200.0, 0.0, 100.0), "#ffffff");
    }

    #[test]
    fn hue_outside_wheel_has_no_chroma() {
        assert_eq!(hsl_to_hex(360.0, 100.0, 50.0), "#000000");
        assert_eq!(hsl_to_hex(-10.0, 100.0, 50.0), "#000000");
        assert_eq!(hsl_to_hex(f64::NAN, 100.0, 50.0), "#000000");
        // Lightness offset survives: 370 degrees at 95% / 20%.
        assert_eq!(hsl_to_hex(370.0, 95.0, 20.0), "#030303");
    }

    #[test]
    fn sector_boundaries_are_half_open() {
        let at_sixty = hsl_to_hex(60.0, 100.0, 50.0);
        let below_sixty = hsl_to_hex(59.999, 100.0, 50.0);
        assert_eq!(at_sixty, "#ffff00");
        assert_eq!(below_sixty, "#ffff00");
        assert_eq!(hsl_to_hex(359.999, 100.0, 50.0), "#ff0000");
    }

    #[test]
    fn output_is_always_well_formed() {
        for h in (-90..450).step_by(7) {
            for s in [0.0, 33.0, 95.0, 100.0, 140.0] {
                for l in [0.0, 20.0, 45.0, 70.0, 100.0, -5.0] {
                    let hex = hsl_to_hex(f64::from(h), s, l).to_string();
                    assert!(is_hex(&hex), "{hex} for ({h}, {s}, {l})");
                }
            }
        }
    }

    #[test]
    fn deterministic() {
        assert_eq!(hsl_to_hex(160.0, 95.0, 45.0), hsl_to_hex(160.0, 95.0, 45.0));
        assert_eq!(Hsl::new(160.0, 95.0, 45.0).to_hex(), "#06e097");
    }

    #[test]
    fn terminal_color_conversions() {
        let teal = HexColor::from_rgb(3, 99, 67);
        assert_eq!(teal.rgb(), (3, 99, 67));
        assert_eq!(
            ratatui::style::Color::from(teal),
            ratatui::style::Color::Rgb(3, 99, 67)
        );
        assert_eq!(
            crossterm::style::Color::from(teal),
            crossterm::style::Color::Rgb { r: 3, g: 99, b: 67 }
        );
    }
}
