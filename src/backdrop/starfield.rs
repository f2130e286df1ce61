//! Seeded-random star layer.

use glam::Vec2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::backdrop::{Element, ElementKind};
use crate::sky::StarfieldConfig;

/// One star. Placement and twinkle phase are fixed at generation time;
/// only brightness varies per frame.
#[derive(Clone, Debug)]
pub struct Star {
    pub pos: Vec2,
    pub size: f32,
    pub base_brightness: f32,
    pub color: [f32; 3],
    pub twinkle_period: f32,
    pub phase: f32,
}

impl Star {
    /// Brightness at the given elapsed time. Twinkle is a sine wobble
    /// around the base brightness, never reaching full black.
    pub fn brightness(&self, elapsed: f32) -> f32 {
        let wave = (std::f32::consts::TAU * elapsed / self.twinkle_period + self.phase).sin();
        (self.base_brightness * (0.7 + 0.3 * wave)).clamp(0.0, 1.0)
    }
}

/// A fixed field of stars. Generation is deterministic for a given seed so
/// the field does not reshuffle between runs or ticks.
pub struct Starfield {
    stars: Vec<Star>,
}

// Slight temperature spread: white, warm white, cool blue
const STAR_COLORS: [[f32; 3]; 3] = [
    [1.0, 1.0, 1.0],
    [1.0, 0.93, 0.82],
    [0.78, 0.85, 1.0],
];

impl Starfield {
    pub fn generate(config: &StarfieldConfig, count: usize) -> Self {
        let mut rng = StdRng::seed_from_u64(config.seed);
        let [size_min, size_max] = config.size_range;
        let [period_min, period_max] = config.twinkle_period_range;

        let stars = (0..count)
            .map(|_| Star {
                pos: Vec2::new(rng.gen_range(0.0..100.0), rng.gen_range(0.0..100.0)),
                size: rng.gen_range(size_min..=size_max),
                base_brightness: rng.gen_range(0.3..=1.0),
                color: STAR_COLORS[rng.gen_range(0..STAR_COLORS.len())],
                twinkle_period: rng.gen_range(period_min..=period_max),
                phase: rng.gen_range(0.0..std::f32::consts::TAU),
            })
            .collect();

        Self { stars }
    }

    pub fn len(&self) -> usize {
        self.stars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stars.is_empty()
    }

    /// Emit one element per star at its current twinkle brightness.
    pub fn emit(&self, out: &mut Vec<Element>, elapsed: f32) {
        for star in &self.stars {
            out.push(Element {
                kind: ElementKind::Star,
                pos: star.pos,
                size: star.size,
                color: star.color,
                opacity: star.brightness(elapsed),
                rotation: 0.0,
            });
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deterministic_for_seed() {
        let cfg = StarfieldConfig::default();
        let a = Starfield::generate(&cfg, 50);
        let b = Starfield::generate(&cfg, 50);
        for (x, y) in a.stars.iter().zip(&b.stars) {
            assert_eq!(x.pos, y.pos);
            assert_eq!(x.twinkle_period, y.twinkle_period);
        }
    }

    #[test]
    fn test_different_seed_differs() {
        let mut cfg = StarfieldConfig::default();
        let a = Starfield::generate(&cfg, 50);
        cfg.seed += 1;
        let b = Starfield::generate(&cfg, 50);
        let moved = a.stars.iter().zip(&b.stars).filter(|(x, y)| x.pos != y.pos).count();
        assert!(moved > 0, "reseeding should move stars");
    }

    #[test]
    fn test_stars_within_viewport() {
        let field = Starfield::generate(&StarfieldConfig::default(), 200);
        for star in &field.stars {
            assert!((0.0..=100.0).contains(&star.pos.x));
            assert!((0.0..=100.0).contains(&star.pos.y));
        }
    }

    #[test]
    fn test_brightness_bounded() {
        let field = Starfield::generate(&StarfieldConfig::default(), 100);
        for t in [0.0, 1.3, 17.0, 220.5] {
            for star in &field.stars {
                let b = star.brightness(t);
                assert!((0.0..=1.0).contains(&b), "brightness {b} at t={t}");
            }
        }
    }

    #[test]
    fn test_zero_count_is_empty() {
        let field = Starfield::generate(&StarfieldConfig::default(), 0);
        assert!(field.is_empty());
        let mut out = Vec::new();
        field.emit(&mut out, 0.0);
        assert!(out.is_empty());
    }
}
