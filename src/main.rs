use anyhow::Result;
use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;

use palette_studio::cli::Args;
use palette_studio::palette::{self, LockSet};
use palette_studio::{export, preview, tui};

fn main() -> Result<()> {
    let args = Args::parse();
    let base_hue = args.base_hue % 360;

    if args.tui {
        let app = tui::App::new(args.mode, base_hue, args.seed);
        return tui::run(app);
    }

    let locks = LockSet::default();
    let palette = match args.seed {
        Some(seed) => palette::generate_with(
            args.mode,
            base_hue,
            &[],
            &locks,
            &mut StdRng::seed_from_u64(seed),
        ),
        None => palette::generate(args.mode, base_hue, &[], &locks),
    };

    if args.preview {
        preview::print(&palette)?;
    } else {
        match &args.output {
            Some(path) => export::write_to(&palette, path)?,
            None => print!("{}", export::serialize(&palette)),
        }
    }

    Ok(())
}
