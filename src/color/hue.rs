//! Named starting hues.

use std::fmt;
use std::str::FromStr;

use crate::error::{Result, SwatchError};

/// A named starting point on the color wheel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum HueName {
    /// 0 degrees.
    Red,
    /// 20 degrees.
    Orange,
    /// 50 degrees.
    Yellow,
    /// 100 degrees.
    Green,
    /// 160 degrees.
    #[default]
    Teal,
    /// 180 degrees.
    Aqua,
    /// 200 degrees.
    Blue,
    /// 230 degrees.
    RoyalBlue,
    /// 265 degrees.
    Purple,
    /// 290 degrees.
    Pink,
}

/// Every named hue, in wheel order.
pub static HUE_START_TABLE: [HueName; 10] = [
    HueName::Red,
    HueName::Orange,
    HueName::Yellow,
    HueName::Green,
    HueName::Teal,
    HueName::Aqua,
    HueName::Blue,
    HueName::RoyalBlue,
    HueName::Purple,
    HueName::Pink,
];

impl HueName {
    /// Starting hue in degrees, in `[0, 360)`.
    pub fn start_hue(self) -> f64 {
        match self {
            HueName::Red => 0.0,
            HueName::Orange => 20.0,
            HueName::Yellow => 50.0,
            HueName::Green => 100.0,
            HueName::Teal => 160.0,
            HueName::Aqua => 180.0,
            HueName::Blue => 200.0,
            HueName::RoyalBlue => 230.0,
            HueName::Purple => 265.0,
            HueName::Pink => 290.0,
        }
    }

    /// The lookup key for this hue.
    pub fn name(self) -> &'static str {
        match self {
            HueName::Red => "red",
            HueName::Orange => "orange",
            HueName::Yellow => "yellow",
            HueName::Green => "green",
            HueName::Teal => "teal",
            HueName::Aqua => "aqua",
            HueName::Blue => "blue",
            HueName::RoyalBlue => "royalBlue",
            HueName::Purple => "purple",
            HueName::Pink => "pink",
        }
    }

    /// Look up a hue by its key. Keys are case-sensitive.
    ///
    /// # Errors
    ///
    /// Returns [`SwatchError::UnknownHueName`] when `name` is not in the table.
    pub fn lookup(name: &str) -> Result<Self> {
        HUE_START_TABLE
            .iter()
            .copied()
            .find(|hue| hue.name() == name)
            .ok_or_else(|| SwatchError::unknown_hue(name))
    }
}

impl FromStr for HueName {
    type Err = SwatchError;

    fn from_str(s: &str) -> Result<Self> {
        Self::lookup(s)
    }
}

impl fmt::Display for HueName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_round_trips_through_names() {
        for hue in HUE_START_TABLE {
            assert_eq!(HueName::lookup(hue.name()).unwrap(), hue);
        }
    }

    #[test]
    fn table_is_in_wheel_order() {
        let starts: Vec<f64> = HUE_START_TABLE.iter().map(|h| h.start_hue()).collect();
        assert!(starts.windows(2).all(|w| w[0] < w[1]));
        assert!(starts.iter().all(|h| (0.0..360.0).contains(h)));
    }

    #[test]
    fn royal_blue_uses_camel_case_key() {
        assert_eq!("royalBlue".parse::<HueName>().unwrap(), HueName::RoyalBlue);
        assert!("royalblue".parse::<HueName>().is_err());
    }

    #[test]
    fn unknown_name_is_rejected() {
        let err = HueName::lookup("chartreuse").unwrap_err();
        assert!(matches!(err, SwatchError::UnknownHueName { ref name } if name == "chartreuse"));
    }

    #[test]
    fn default_is_teal() {
        assert_eq!(HueName::default(), HueName::Teal);
        assert_eq!(HueName::Teal.to_string(), "teal");
    }
}
