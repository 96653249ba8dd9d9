use std::path::Path;

use anyhow::{Context, Result};

use crate::palette::Palette;

/// Default file name for an exported palette.
pub const DEFAULT_FILE_NAME: &str = "palette.txt";

/// Serialize the palette to plain text, one lowercase hex code per line.
pub fn serialize(palette: &Palette) -> String {
    let mut out = String::new();
    for color in palette.iter() {
        out.push_str(&color.to_hex());
        out.push('\n');
    }
    out
}

/// Write the palette text to `path`.
pub fn write_to(palette: &Palette, path: &Path) -> Result<()> {
    std::fs::write(path, serialize(palette))
        .with_context(|| format!("failed to write palette to {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette::{generate, LockSet, PaletteMode};

    fn test_palette() -> Palette {
        generate(PaletteMode::Complementary, 200, &[], &LockSet::default())
    }

    #[test]
    fn serialization_is_one_hex_per_line() {
        let output = serialize(&test_palette());
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 5);
        for line in &lines {
            assert_eq!(line.len(), 7);
            assert!(line.starts_with('#'));
            assert!(line[1..].chars().all(|c| c.is_ascii_hexdigit()));
            assert_eq!(*line, line.to_lowercase(), "hex not lowercase: '{line}'");
        }
        assert!(output.ends_with('\n'));
    }

    #[test]
    fn serialization_preserves_slot_order() {
        let palette = test_palette();
        let output = serialize(&palette);
        let expected: Vec<String> = palette.iter().map(|c| c.to_hex()).collect();
        let got: Vec<&str> = output.lines().collect();
        assert_eq!(got, expected);
    }

    #[test]
    fn write_to_creates_file() {
        let palette = test_palette();
        let dir = std::env::temp_dir().join("palette-studio-test-export");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join(DEFAULT_FILE_NAME);

        write_to(&palette, &path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content, serialize(&palette));

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn write_to_missing_directory_names_the_path() {
        let palette = test_palette();
        let path = Path::new("/nonexistent-palette-studio-dir/palette.txt");
        let err = write_to(&palette, path).unwrap_err().to_string();
        assert!(err.contains("/nonexistent-palette-studio-dir"), "got: {err}");
    }
}
