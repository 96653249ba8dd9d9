use std::path::PathBuf;

use clap::Parser;

use crate::palette::PaletteMode;

/// Generate five-color harmony palettes from a base hue.
#[derive(Parser, Debug)]
#[command(name = "palette-studio", version, about)]
pub struct Args {
    /// Harmony rule used to compute the palette
    #[arg(short, long, value_enum, default_value_t = PaletteMode::Monochromatic)]
    pub mode: PaletteMode,

    /// Base hue in degrees (values outside 0-359 wrap around)
    #[arg(short = 'H', long = "hue", default_value_t = 200)]
    pub base_hue: u16,

    /// Seed the random mode for reproducible output
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Write the palette to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Print a colored terminal preview of the palette
    #[arg(long, conflicts_with = "output")]
    pub preview: bool,

    /// Launch interactive TUI mode
    #[arg(long)]
    pub tui: bool,
}
