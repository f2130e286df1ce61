//! Decorative backdrop composition.
//!
//! Turns a [`SkyState`] plus elapsed animation time into a flat list of
//! positioned elements in percent coordinates. Presenters consume the
//! frame; nothing here feeds back into the sky computation.

pub mod drift;
pub mod grid;
pub mod nebula;
pub mod planets;
pub mod starfield;

pub use starfield::Starfield;

use glam::Vec2;

use crate::scheduler::DeviceClass;
use crate::sky::{SkyConfig, SkyState};

// ---------------------------------------------------------------------------
// Frame model
// ---------------------------------------------------------------------------

/// What an element is, for presenters that render kinds differently.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ElementKind {
    Sun,
    Planet,
    Star,
    NebulaPatch,
    GridLine,
    Shape,
}

/// One positioned visual element.
#[derive(Clone, Debug)]
pub struct Element {
    pub kind: ElementKind,
    /// Center position, percent coordinates.
    pub pos: Vec2,
    /// Characteristic size, percent of viewport height.
    pub size: f32,
    /// Linear RGB color.
    pub color: [f32; 3],
    /// Opacity, 0-1.
    pub opacity: f32,
    /// Rotation in degrees, for elements that carry one.
    pub rotation: f32,
}

/// One composed backdrop frame.
#[derive(Clone, Debug, Default)]
pub struct Frame {
    pub elements: Vec<Element>,
    /// Background tint behind all elements.
    pub tint: [f32; 3],
}

// ---------------------------------------------------------------------------
// Backdrop
// ---------------------------------------------------------------------------

/// Composes the decorative layers into frames.
pub struct Backdrop {
    device: DeviceClass,
    starfield: Starfield,
    config: SkyConfig,
}

impl Backdrop {
    pub fn new(config: SkyConfig, device: DeviceClass) -> Self {
        let star_count = device.star_count(config.starfield.count);
        let starfield = Starfield::generate(&config.starfield, star_count);
        Self {
            device,
            starfield,
            config,
        }
    }

    /// Compose a frame for the given sky state and elapsed animation time
    /// in seconds.
    pub fn compose(&self, state: &SkyState, elapsed: f32) -> Frame {
        let mut elements = Vec::new();

        self.starfield.emit(&mut elements, elapsed);

        for neb in &self.config.nebulae {
            nebula::emit(&mut elements, neb, state, elapsed);
        }

        if self.device.decorative_layers() {
            grid::emit(&mut elements, &self.config.grid, elapsed);
            drift::emit(&mut elements, elapsed);
        }

        for (cfg, lighting) in self.config.planets.iter().zip(&state.planets) {
            planets::emit(&mut elements, cfg, lighting, elapsed);
        }

        if state.sun.visible {
            elements.push(Element {
                kind: ElementKind::Sun,
                pos: state.sun.position(),
                size: 4.0,
                color: [1.0, 0.86, 0.47],
                // Gentle 8-second pulse, matching the site's sun breathing
                opacity: 0.9 + 0.1 * (elapsed * std::f32::consts::TAU / 8.0).sin().abs(),
                rotation: state.sun.angle,
            });
        }

        Frame {
            elements,
            tint: state.sky_tint,
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sky::{ClockSample, SkySystem};

    fn state_at(hour: u32, minute: u32) -> SkyState {
        let mut sys = SkySystem::new(SkyConfig::default());
        sys.sample(ClockSample::new(hour, minute)).clone()
    }

    #[test]
    fn test_sun_present_only_in_daytime() {
        let backdrop = Backdrop::new(SkyConfig::default(), DeviceClass::Full);

        let day = backdrop.compose(&state_at(12, 0), 0.0);
        assert!(day.elements.iter().any(|e| e.kind == ElementKind::Sun));

        let night = backdrop.compose(&state_at(23, 0), 0.0);
        assert!(!night.elements.iter().any(|e| e.kind == ElementKind::Sun));
    }

    #[test]
    fn test_minimal_device_drops_decoration() {
        let full = Backdrop::new(SkyConfig::default(), DeviceClass::Full)
            .compose(&state_at(12, 0), 0.0);
        let minimal = Backdrop::new(SkyConfig::default(), DeviceClass::Minimal)
            .compose(&state_at(12, 0), 0.0);

        assert!(full.elements.iter().any(|e| e.kind == ElementKind::GridLine));
        assert!(full.elements.iter().any(|e| e.kind == ElementKind::Star));
        assert!(!minimal.elements.iter().any(|e| e.kind == ElementKind::GridLine));
        assert!(!minimal.elements.iter().any(|e| e.kind == ElementKind::Star));
        // Planets survive even on minimal devices
        assert!(minimal.elements.iter().any(|e| e.kind == ElementKind::Planet));
    }

    #[test]
    fn test_all_positions_in_viewport() {
        let backdrop = Backdrop::new(SkyConfig::default(), DeviceClass::Full);
        for &(h, m) in &[(0, 0), (6, 0), (12, 0), (18, 0), (21, 30)] {
            let frame = backdrop.compose(&state_at(h, m), 13.7);
            for e in &frame.elements {
                assert!(
                    (-10.0..=110.0).contains(&e.pos.x) && (-10.0..=110.0).contains(&e.pos.y),
                    "{:?} at {:?} escapes the viewport",
                    e.kind,
                    e.pos
                );
                assert!((0.0..=1.0).contains(&e.opacity), "{:?} opacity {}", e.kind, e.opacity);
            }
        }
    }

    #[test]
    fn test_frame_carries_sky_tint() {
        let backdrop = Backdrop::new(SkyConfig::default(), DeviceClass::Full);
        let state = state_at(12, 0);
        let frame = backdrop.compose(&state, 0.0);
        assert_eq!(frame.tint, state.sky_tint);
    }
}
