use std::io::{self, Write};

use anyhow::Result;
use crossterm::style::{Color as TermColor, ResetColor, SetBackgroundColor, SetForegroundColor};
use crossterm::QueueableCommand;

use crate::color::{Color, ContrastText};
use crate::palette::Palette;

fn swatch_bg(color: Color) -> TermColor {
    let (r, g, b) = color.to_rgb();
    TermColor::Rgb { r, g, b }
}

/// Black or white foreground, whichever stays readable on the swatch.
fn swatch_fg(color: Color) -> TermColor {
    match color.contrast_text() {
        ContrastText::Dark => TermColor::Black,
        ContrastText::Light => TermColor::White,
    }
}

/// Print one colored row per slot: hex code plus the HSL components.
pub fn print(palette: &Palette) -> Result<()> {
    let mut stdout = io::stdout();
    for (i, color) in palette.iter().enumerate() {
        stdout.queue(SetBackgroundColor(swatch_bg(*color)))?;
        stdout.queue(SetForegroundColor(swatch_fg(*color)))?;
        write!(
            stdout,
            "  {}  H {:>3}  S {:>3}  L {:>3}  ",
            color.to_hex(),
            color.h,
            color.s,
            color.l
        )?;
        stdout.queue(ResetColor)?;
        writeln!(stdout, "  slot {i}")?;
    }
    stdout.flush()?;
    Ok(())
}
