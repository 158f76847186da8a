//! Command definitions and execution for the command-line front end.

use clap::{Args, Subcommand};

use crate::color::{hsl_to_hex, HexColor, HueName, HueWrap, Palette};
use crate::error::Result;
use crate::format::{
    abbreviate_number, format_date_label, format_grouped_with, format_percent, make_css_safe_name,
    Value,
};
use crate::util::{px_to_rem, rem_to_px, Config, PaletteConfig};

/// Most colors `palette` will generate in one run.
pub const MAX_PALETTE_COLORS: u64 = 10_000;

/// Palette options shared by `color` and `palette`.
#[derive(Debug, Clone, Args)]
pub struct PaletteArgs {
    /// Starting hue: red, orange, yellow, green, teal, aqua, blue, royalBlue, purple, pink [default: teal]
    #[arg(long)]
    pub start: Option<String>,

    /// Degrees the hue advances after each lightness cycle [default: 40]
    #[arg(long, allow_negative_numbers = true)]
    pub rotate: Option<i32>,

    /// Comma-separated lightness levels (percent)
    #[arg(long, value_delimiter = ',')]
    pub lightness: Vec<f64>,

    /// Wrap the hue around the color wheel instead of running off it
    #[arg(long)]
    pub wrap: bool,
}

impl PaletteArgs {
    /// Build a palette configuration from the flags, filling gaps from `defaults`.
    pub fn to_config(&self, defaults: &PaletteConfig) -> Result<PaletteConfig> {
        let defaults = defaults.clone();
        let start = match &self.start {
            Some(name) => HueName::lookup(name)?,
            None => defaults.start,
        };
        Ok(PaletteConfig {
            start,
            hue_rotate: self.rotate.unwrap_or(defaults.hue_rotate),
            lightness: if self.lightness.is_empty() {
                defaults.lightness
            } else {
                self.lightness.clone()
            },
            hue_wrap: if self.wrap {
                HueWrap::Modulo
            } else {
                defaults.hue_wrap
            },
            ..defaults
        })
    }
}

/// Available commands.
#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Generate the palette color at one index
    Color {
        #[command(flatten)]
        palette: PaletteArgs,

        /// Position in the palette
        #[arg(long, default_value_t = 0)]
        index: u64,
    },

    /// Generate the first COUNT palette colors
    Palette {
        #[command(flatten)]
        palette: PaletteArgs,

        /// Number of colors
        #[arg(
            long,
            default_value_t = 6,
            value_parser = clap::value_parser!(u64).range(..=MAX_PALETTE_COLORS)
        )]
        count: u64,

        /// Paint a true-color swatch next to each color
        #[arg(long)]
        preview: bool,
    },

    /// Convert hue, saturation and lightness to hex
    Hex {
        /// Hue in degrees
        #[arg(allow_negative_numbers = true)]
        hue: f64,
        /// Saturation percent
        saturation: f64,
        /// Lightness percent
        lightness: f64,
    },

    /// Round a number and separate thousands with commas
    Group {
        /// Number to format; anything else is echoed back
        #[arg(allow_hyphen_values = true)]
        value: String,
    },

    /// Abbreviate a number to thousands
    Abbreviate {
        /// Number to abbreviate
        #[arg(allow_hyphen_values = true)]
        value: String,
    },

    /// Format a ratio as a percentage
    Percent {
        /// Ratio, e.g. 0.25
        #[arg(allow_hyphen_values = true)]
        value: String,
    },

    /// Turn a year-month-day date into a short label
    Date {
        /// Date such as 2020-01-22
        date: String,

        /// Separator between year, month and day
        #[arg(long, default_value = "-")]
        separator: String,
    },

    /// Make a string safe to use as a CSS class name
    CssName {
        /// Name to clean up
        name: String,
    },

    /// Convert rem to pixels
    RemToPx {
        /// Length in rem
        #[arg(allow_negative_numbers = true)]
        value: f64,

        /// Root font size in pixels [default: 16]
        #[arg(long)]
        factor: Option<f64>,
    },

    /// Convert pixels to rem
    PxToRem {
        /// Length in pixels
        #[arg(allow_negative_numbers = true)]
        value: f64,

        /// Root font size in pixels [default: 16]
        #[arg(long)]
        factor: Option<f64>,
    },
}

/// What a command produced.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Outcome {
    /// Text to print and, on request, copy.
    pub text: String,
    /// Colors to paint as swatches instead of printing the text.
    pub swatches: Vec<HexColor>,
}

impl Outcome {
    fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            swatches: Vec::new(),
        }
    }
}

/// Run a command. Flags the user left out fall back to `config`.
pub fn run(command: &Command, config: &Config) -> Result<Outcome> {
    tracing::debug!(?command, "Running command");

    let outcome = match command {
        Command::Color { palette, index } => {
            let palette = Palette::new(palette.to_config(&config.palette)?);
            Outcome::text(palette.color_at(*index).to_string())
        },
        Command::Palette {
            palette,
            count,
            preview,
        } => {
            let count = (*count).min(MAX_PALETTE_COLORS) as usize;
            let colors: Vec<HexColor> = Palette::new(palette.to_config(&config.palette)?)
                .take(count)
                .collect();
            let text = colors
                .iter()
                .map(HexColor::to_string)
                .collect::<Vec<_>>()
                .join("\n");
            Outcome {
                text,
                swatches: if *preview { colors } else { Vec::new() },
            }
        },
        Command::Hex {
            hue,
            saturation,
            lightness,
        } => Outcome::text(hsl_to_hex(*hue, *saturation, *lightness).to_string()),
        Command::Group { value } => {
            let grouped = format_grouped_with(Value::from_input(value), &config.grouping);
            Outcome::text(grouped.into_string())
        },
        Command::Abbreviate { value } => Outcome::text(abbreviate_number(value.as_str())?),
        Command::Percent { value } => Outcome::text(format_percent(value.as_str())),
        Command::Date { date, separator } => {
            Outcome::text(format_date_label(date, separator)?)
        },
        Command::CssName { name } => Outcome::text(make_css_safe_name(name)),
        Command::RemToPx { value, factor } => {
            let factor = factor.unwrap_or(config.units.base_font_px);
            Outcome::text(rem_to_px(*value, factor).to_string())
        },
        Command::PxToRem { value, factor } => {
            let factor = factor.unwrap_or(config.units.base_font_px);
            Outcome::text(px_to_rem(*value, factor).to_string())
        },
    };

    Ok(outcome)
}
