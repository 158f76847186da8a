//! Conversion between rem and pixel lengths.

use super::config::UnitConfig;

/// Multiply a rem length by the root font size.
pub fn rem_to_px(rem: f64, base_font_px: f64) -> f64 {
    rem * base_font_px
}

/// Divide a pixel length by the root font size.
///
/// A zero font size yields an infinite or NaN length, as plain division does.
pub fn px_to_rem(px: f64, base_font_px: f64) -> f64 {
    px / base_font_px
}

impl UnitConfig {
    /// Convert rem to pixels with this configuration's font size.
    pub fn rem_to_px(&self, rem: f64) -> f64 {
        rem_to_px(rem, self.base_font_px)
    }

    /// Convert pixels to rem with this configuration's font size.
    pub fn px_to_rem(&self, px: f64) -> f64 {
        px_to_rem(px, self.base_font_px)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_factor_is_sixteen() {
        let units = UnitConfig::default();
        assert_eq!(units.rem_to_px(1.5), 24.0);
        assert_eq!(units.px_to_rem(8.0), 0.5);
    }

    #[test]
    fn custom_factor() {
        assert_eq!(rem_to_px(2.0, 10.0), 20.0);
        assert_eq!(px_to_rem(25.0, 10.0), 2.5);
    }

    #[test]
    fn zero_is_zero() {
        assert_eq!(rem_to_px(0.0, 16.0), 0.0);
        assert_eq!(px_to_rem(0.0, 16.0), 0.0);
    }
}
