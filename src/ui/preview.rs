//! True-color swatch preview for palettes.

use std::io::Write;

use crossterm::queue;
use crossterm::style::{Print, ResetColor, SetBackgroundColor};

use crate::color::HexColor;
use crate::error::Result;

/// Width of each swatch in terminal cells.
const SWATCH_WIDTH: usize = 6;

/// Write one line per color: a filled block, the index, and the hex code.
pub fn write_swatches<W: Write>(out: &mut W, colors: &[HexColor]) -> Result<()> {
    let block = " ".repeat(SWATCH_WIDTH);
    for (i, color) in colors.iter().enumerate() {
        queue!(
            out,
            SetBackgroundColor((*color).into()),
            Print(&block),
            ResetColor,
            Print(format!(" {i:>3}  {color}\n"))
        )?;
    }
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_line_per_color() {
        let colors = [HexColor::from_rgb(3, 99, 67), HexColor::from_rgb(6, 224, 151)];
        let mut out = Vec::new();
        write_swatches(&mut out, &colors).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.lines().count(), 2);
        assert!(text.contains("  0  #036343"));
        assert!(text.contains("  1  #06e097"));
        assert!(text.contains("48;2;3;99;67"));
    }

    #[test]
    fn empty_palette_writes_nothing() {
        let mut out = Vec::new();
        write_swatches(&mut out, &[]).unwrap();
        assert!(out.is_empty());
    }
}
