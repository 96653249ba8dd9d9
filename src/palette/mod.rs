pub mod rules;

use rand::Rng;

use crate::color::Color;

/// Every palette has exactly this many slots.
pub const PALETTE_LEN: usize = 5;

/// Harmony rule used to compute candidate colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum PaletteMode {
    Random,
    Monochromatic,
    Analogous,
    Complementary,
    Triadic,
}

impl PaletteMode {
    pub const ALL: [PaletteMode; 5] = [
        PaletteMode::Random,
        PaletteMode::Monochromatic,
        PaletteMode::Analogous,
        PaletteMode::Complementary,
        PaletteMode::Triadic,
    ];

    /// The next mode in display order, wrapping around.
    pub fn next(self) -> Self {
        let i = Self::ALL.iter().position(|&m| m == self).unwrap_or(0);
        Self::ALL[(i + 1) % Self::ALL.len()]
    }
}

impl std::fmt::Display for PaletteMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            PaletteMode::Random => "random",
            PaletteMode::Monochromatic => "monochromatic",
            PaletteMode::Analogous => "analogous",
            PaletteMode::Complementary => "complementary",
            PaletteMode::Triadic => "triadic",
        };
        f.write_str(name)
    }
}

/// An ordered set of five colors produced by one generation pass.
///
/// Slot order is meaningful (base tone, tint, accent... depending on mode)
/// and is preserved across regenerations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub slots: [Color; PALETTE_LEN],
}

impl Palette {
    pub fn iter(&self) -> impl Iterator<Item = &Color> {
        self.slots.iter()
    }
}

/// Which slots are pinned against regeneration.
///
/// Unset slots are unlocked. Lock state is owned by the caller and survives
/// regenerations until toggled again.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LockSet {
    locked: [bool; PALETTE_LEN],
}

impl LockSet {
    /// Out-of-range slots are never locked.
    pub fn is_locked(&self, slot: usize) -> bool {
        self.locked.get(slot).copied().unwrap_or(false)
    }

    pub fn toggle(&mut self, slot: usize) {
        if let Some(flag) = self.locked.get_mut(slot) {
            *flag = !*flag;
        }
    }

    pub fn set(&mut self, slot: usize, locked: bool) {
        if let Some(flag) = self.locked.get_mut(slot) {
            *flag = locked;
        }
    }

    pub fn any_locked(&self) -> bool {
        self.locked.iter().any(|&l| l)
    }
}

/// Generate the next palette using the thread-local random source.
///
/// Locked slots keep their color from `previous`; unlocked slots are
/// recomputed from the mode rule. `previous` may be shorter than a full
/// palette (first call); locked slots without a previous color fall back to
/// the fresh candidate. `base_hue` must already be normalized into [0, 360).
pub fn generate(mode: PaletteMode, base_hue: u16, previous: &[Color], locks: &LockSet) -> Palette {
    generate_with(mode, base_hue, previous, locks, &mut rand::rng())
}

/// [`generate`] with an injected random source, for reproducible output in
/// `random` mode. The other modes never touch the rng.
pub fn generate_with<R: Rng + ?Sized>(
    mode: PaletteMode,
    base_hue: u16,
    previous: &[Color],
    locks: &LockSet,
    rng: &mut R,
) -> Palette {
    let candidate = rules::candidates(mode, base_hue, rng);
    let slots = std::array::from_fn(|i| match previous.get(i) {
        Some(&prev) if locks.is_locked(i) => prev,
        _ => candidate[i],
    });
    Palette { slots }
}
