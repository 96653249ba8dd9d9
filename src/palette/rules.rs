//! Candidate rules: one pure `base_hue -> 5 colors` map per harmony mode.
//!
//! Lock handling lives in [`super::generate_with`]; nothing here looks at
//! previous palettes.

use rand::Rng;

use super::{PaletteMode, PALETTE_LEN};
use crate::color::Color;

/// Offset a hue and wrap it into [0, 360). Never negative.
fn rotate_hue(base: u16, offset: i32) -> u16 {
    (i32::from(base) + offset).rem_euclid(360) as u16
}

/// Compute the unconditional candidate palette for `mode`, ignoring locks.
/// Only `Random` draws from the rng.
pub fn candidates<R: Rng + ?Sized>(
    mode: PaletteMode,
    base_hue: u16,
    rng: &mut R,
) -> [Color; PALETTE_LEN] {
    match mode {
        PaletteMode::Random => random(rng),
        PaletteMode::Monochromatic => monochromatic(base_hue),
        PaletteMode::Analogous => analogous(base_hue),
        PaletteMode::Complementary => complementary(base_hue),
        PaletteMode::Triadic => triadic(base_hue),
    }
}

/// Lightness ramp from dark to light at a fixed hue, saturation easing off.
fn monochromatic(base_hue: u16) -> [Color; PALETTE_LEN] {
    std::array::from_fn(|i| {
        let i = i as u8;
        Color::new(base_hue, 70 - 5 * i, 30 + 15 * i)
    })
}

/// Five hues spanning 120° centered on the base, in 30° steps.
fn analogous(base_hue: u16) -> [Color; PALETTE_LEN] {
    std::array::from_fn(|i| {
        let h = rotate_hue(base_hue, (i as i32 - 2) * 30);
        Color::new(h, 70, 50 + 10 * (i as u8 % 2))
    })
}

/// Two tones each of two opposing hues plus one bridging accent.
fn complementary(base_hue: u16) -> [Color; PALETTE_LEN] {
    let complement = rotate_hue(base_hue, 180);
    let accent = rotate_hue(base_hue, 90);
    [
        Color::new(base_hue, 70, 45),
        Color::new(base_hue, 60, 60),
        Color::new(complement, 70, 45),
        Color::new(complement, 60, 60),
        Color::new(accent, 50, 50),
    ]
}

/// The base plus both hues 120° away, with a lighter tone of base and tri2.
fn triadic(base_hue: u16) -> [Color; PALETTE_LEN] {
    let tri1 = rotate_hue(base_hue, 120);
    let tri2 = rotate_hue(base_hue, 240);
    [
        Color::new(base_hue, 70, 50),
        Color::new(base_hue, 60, 65),
        Color::new(tri1, 70, 50),
        Color::new(tri2, 70, 50),
        Color::new(tri2, 60, 65),
    ]
}

/// Five independent samples; saturated mid-tones only.
fn random<R: Rng + ?Sized>(rng: &mut R) -> [Color; PALETTE_LEN] {
    std::array::from_fn(|_| {
        Color::new(
            rng.random_range(0..360),
            rng.random_range(60..100),
            rng.random_range(40..70),
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(42)
    }

    #[test]
    fn monochromatic_ramp() {
        let colors = candidates(PaletteMode::Monochromatic, 200, &mut rng());
        for (i, c) in colors.iter().enumerate() {
            assert_eq!(c.h, 200);
            assert_eq!(c.s, 70 - 5 * i as u8);
            assert_eq!(c.l, 30 + 15 * i as u8);
        }
    }

    #[test]
    fn analogous_spans_centered_on_base() {
        let colors = candidates(PaletteMode::Analogous, 200, &mut rng());
        let hues: Vec<u16> = colors.iter().map(|c| c.h).collect();
        assert_eq!(hues, vec![140, 170, 200, 230, 260]);
        let lightness: Vec<u8> = colors.iter().map(|c| c.l).collect();
        assert_eq!(lightness, vec![50, 60, 50, 60, 50]);
        assert!(colors.iter().all(|c| c.s == 70));
    }

    #[test]
    fn analogous_wraps_below_zero() {
        // base 10, i=0: 10 - 60 wraps to 310, not a negative hue
        let colors = candidates(PaletteMode::Analogous, 10, &mut rng());
        assert_eq!(colors[0].h, 310);
        assert_eq!(colors[1].h, 340);
        assert_eq!(colors[2].h, 10);
    }

    #[test]
    fn analogous_wraps_above_360() {
        let colors = candidates(PaletteMode::Analogous, 350, &mut rng());
        assert_eq!(colors[3].h, 20);
        assert_eq!(colors[4].h, 50);
    }

    #[test]
    fn complementary_scenario_at_200() {
        let colors = candidates(PaletteMode::Complementary, 200, &mut rng());
        let hsl: Vec<(u16, u8, u8)> = colors.iter().map(|c| (c.h, c.s, c.l)).collect();
        assert_eq!(
            hsl,
            vec![
                (200, 70, 45),
                (200, 60, 60),
                (20, 70, 45),
                (20, 60, 60),
                (290, 50, 50),
            ]
        );
    }

    #[test]
    fn triadic_hues_are_120_degrees_apart() {
        let colors = candidates(PaletteMode::Triadic, 300, &mut rng());
        let hues: Vec<u16> = colors.iter().map(|c| c.h).collect();
        assert_eq!(hues, vec![300, 300, 60, 180, 180]);
        assert_eq!(colors[1].l, 65);
        assert_eq!(colors[4].l, 65);
    }

    #[test]
    fn random_samples_stay_in_range() {
        let mut rng = rng();
        for _ in 0..50 {
            for c in candidates(PaletteMode::Random, 0, &mut rng) {
                assert!(c.h < 360, "hue out of range: {}", c.h);
                assert!((60..100).contains(&c.s), "saturation out of range: {}", c.s);
                assert!((40..70).contains(&c.l), "lightness out of range: {}", c.l);
            }
        }
    }

    #[test]
    fn random_ignores_base_hue() {
        let a = candidates(PaletteMode::Random, 0, &mut StdRng::seed_from_u64(5));
        let b = candidates(PaletteMode::Random, 359, &mut StdRng::seed_from_u64(5));
        assert_eq!(a, b);
    }

    #[test]
    fn deterministic_modes_never_draw_from_rng() {
        let mut a = StdRng::seed_from_u64(9);
        let mut b = StdRng::seed_from_u64(9);
        for mode in [
            PaletteMode::Monochromatic,
            PaletteMode::Analogous,
            PaletteMode::Complementary,
            PaletteMode::Triadic,
        ] {
            candidates(mode, 123, &mut a);
        }
        // a was never advanced, so both rngs still agree on the next sample
        assert_eq!(
            candidates(PaletteMode::Random, 0, &mut a),
            candidates(PaletteMode::Random, 0, &mut b)
        );
    }
}
