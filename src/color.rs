/// Core color type used throughout the generator.
/// An integer HSL triple: hue in degrees, saturation and lightness in percent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    /// Hue in [0, 360).
    pub h: u16,
    /// Saturation in [0, 100].
    pub s: u8,
    /// Lightness in [0, 100].
    pub l: u8,
}

/// Which text color stays readable on top of a swatch.
///
/// A plain threshold on lightness, not a colorimetric luminance computation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContrastText {
    /// Swatch is light; overlay dark text.
    Dark,
    /// Swatch is dark; overlay light text.
    Light,
}

impl Color {
    pub fn new(h: u16, s: u8, l: u8) -> Self {
        Self { h, s, l }
    }

    /// Convert to sRGB channels.
    ///
    /// Standard HSL→RGB: `k = (n + h/30) mod 12`,
    /// `channel = l - a * clamp(min(k-3, 9-k), -1, 1)` with offsets
    /// n = 0 (red), 8 (green), 4 (blue).
    pub fn to_rgb(self) -> (u8, u8, u8) {
        let h = f64::from(self.h);
        let l = f64::from(self.l) / 100.0;
        let a = f64::from(self.s) / 100.0 * l.min(1.0 - l);
        let channel = |n: f64| -> u8 {
            let k = (n + h / 30.0) % 12.0;
            let value = l - a * (k - 3.0).min(9.0 - k).clamp(-1.0, 1.0);
            (255.0 * value).round() as u8
        };
        (channel(0.0), channel(8.0), channel(4.0))
    }

    /// Serialize to lowercase hex `#rrggbb`.
    pub fn to_hex(self) -> String {
        let (r, g, b) = self.to_rgb();
        format!("#{:02x}{:02x}{:02x}", r, g, b)
    }

    /// Pick a readable overlay text class for this swatch.
    pub fn contrast_text(self) -> ContrastText {
        if self.l > 60 {
            ContrastText::Dark
        } else {
            ContrastText::Light
        }
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (r, g, b) = self.to_rgb();
        write!(f, "#{:02x}{:02x}{:02x}", r, g, b)
    }
}
