//! Planet layer.
//!
//! Each planet is a single disc element whose color carries the resolved
//! lighting: surface brightness and saturation scale the base color, and a
//! second faint element renders the atmospheric glow. Earth gains a dim
//! warm overlay at night for its city lights.

use glam::Vec2;

use crate::backdrop::{Element, ElementKind};
use crate::sky::{PlanetConfig, PlanetLighting};

/// Apply brightness and saturation to a base color.
fn shade(base: [f32; 3], brightness: f32, saturation: f32) -> [f32; 3] {
    // Desaturate toward the luminance gray, then scale
    let luma = 0.2126 * base[0] + 0.7152 * base[1] + 0.0722 * base[2];
    let mut out = [0.0; 3];
    for i in 0..3 {
        let saturated = luma + (base[i] - luma) * saturation;
        out[i] = (saturated * brightness).clamp(0.0, 1.0);
    }
    out
}

pub fn emit(out: &mut Vec<Element>, config: &PlanetConfig, lighting: &PlanetLighting, elapsed: f32) {
    let pos = Vec2::new(config.position[0], config.position[1]);
    let spin = (elapsed / config.spin_period * 360.0) % 360.0;

    // Atmospheric glow halo behind the disc
    out.push(Element {
        kind: ElementKind::Planet,
        pos,
        size: config.size * 1.6,
        color: shade(config.base_color, lighting.brightness * 0.6, lighting.saturation),
        opacity: lighting.glow,
        rotation: 0.0,
    });

    // The disc itself
    out.push(Element {
        kind: ElementKind::Planet,
        pos,
        size: config.size,
        color: shade(config.base_color, lighting.brightness, lighting.saturation),
        opacity: 1.0 - lighting.shadow_depth * 0.3,
        rotation: spin + lighting.lit_from_x,
    });

    if lighting.city_lights > 0.0 {
        out.push(Element {
            kind: ElementKind::Planet,
            pos,
            size: config.size * 0.8,
            color: [1.0, 1.0, 0.71],
            opacity: lighting.city_lights,
            rotation: spin,
        });
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sky::{ClockSample, SkyConfig, SkySystem};

    fn lighting_at(hour: u32, planet: usize) -> PlanetLighting {
        let mut sys = SkySystem::new(SkyConfig::default());
        sys.sample(ClockSample::new(hour, 0)).planets[planet].clone()
    }

    #[test]
    fn test_mars_has_no_city_lights() {
        let mars = PlanetConfig::mars();
        let mut out = Vec::new();
        emit(&mut out, &mars, &lighting_at(23, 0), 0.0);
        // Glow halo + disc only
        assert_eq!(out.len(), 2);
    }

    #[test]
    fn test_earth_city_lights_at_night() {
        let earth = PlanetConfig::earth();
        let mut day = Vec::new();
        let mut night = Vec::new();
        emit(&mut day, &earth, &lighting_at(12, 1), 0.0);
        emit(&mut night, &earth, &lighting_at(23, 1), 0.0);
        assert_eq!(day.len(), 2);
        assert_eq!(night.len(), 3, "night Earth should add the city-light overlay");
    }

    #[test]
    fn test_day_disc_brighter_than_night() {
        let mars = PlanetConfig::mars();
        let mut day = Vec::new();
        let mut night = Vec::new();
        emit(&mut day, &mars, &lighting_at(12, 0), 0.0);
        emit(&mut night, &mars, &lighting_at(23, 0), 0.0);
        // Element 1 is the disc; red channel dominates Mars
        assert!(day[1].color[0] > night[1].color[0]);
    }

    #[test]
    fn test_shade_clamps() {
        let c = shade([0.9, 0.5, 0.2], 2.0, 1.5);
        for ch in c {
            assert!((0.0..=1.0).contains(&ch));
        }
    }

    #[test]
    fn test_spin_wraps() {
        let mars = PlanetConfig::mars();
        let mut a = Vec::new();
        let mut b = Vec::new();
        emit(&mut a, &mars, &lighting_at(12, 0), 10.0);
        emit(&mut b, &mars, &lighting_at(12, 0), 10.0 + mars.spin_period);
        assert!((a[1].rotation - b[1].rotation).abs() < 1e-3);
    }
}
