//! Nebula layer.
//!
//! Each nebula is a stack of soft gradient patches whose opacity switches
//! between day and night values, scaled by the hour-keyed luminance. The
//! wisp layer is the one place the sun angle leaks into the decoration:
//! the site rotated its wispy conic gradient by the current sun angle.

use glam::Vec2;

use crate::backdrop::{Element, ElementKind};
use crate::sky::{NebulaConfig, SkyState};

pub fn emit(out: &mut Vec<Element>, config: &NebulaConfig, state: &SkyState, elapsed: f32) {
    let origin = Vec2::new(config.position[0], config.position[1]);
    let extent = Vec2::new(config.extent[0], config.extent[1]);

    // Slow breathing of the whole nebula, period matching the site's
    // 60-second scale loop
    let breathe = 1.0 + 0.04 * (std::f32::consts::TAU * elapsed / 60.0).sin();

    for patch in &config.patches {
        let center = origin + Vec2::new(patch.offset[0], patch.offset[1]) / 100.0 * extent;
        let size = (patch.extent[0].max(patch.extent[1]) / 100.0) * extent.max_element() * breathe;
        let opacity =
            (patch.opacity.pick(state.sun.visible) * state.nebula_luminance).clamp(0.0, 1.0);

        out.push(Element {
            kind: ElementKind::NebulaPatch,
            pos: center,
            size,
            color: patch.color,
            opacity,
            rotation: 0.0,
        });
    }

    if config.wisp_follows_sun {
        out.push(Element {
            kind: ElementKind::NebulaPatch,
            pos: origin + extent * 0.5,
            size: extent.max_element() * breathe,
            color: [0.16, 0.12, 0.20],
            opacity: if state.sun.visible { 0.2 } else { 0.35 },
            rotation: state.sun.angle,
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

    fn state_at(hour: u32) -> SkyState {
        let mut sys = SkySystem::new(SkyConfig::default());
        sys.sample(ClockSample::new(hour, 0)).clone()
    }

    #[test]
    fn test_patch_count() {
        let orion = NebulaConfig::orion();
        let mut out = Vec::new();
        emit(&mut out, &orion, &state_at(12), 0.0);
        // All patches plus the wisp layer
        assert_eq!(out.len(), orion.patches.len() + 1);
    }

    #[test]
    fn test_wisp_rotation_tracks_sun() {
        let orion = NebulaConfig::orion();
        let state = state_at(9);
        let mut out = Vec::new();
        emit(&mut out, &orion, &state, 0.0);
        let wisp = out.last().unwrap();
        assert_eq!(wisp.rotation, state.sun.angle);
    }

    #[test]
    fn test_emission_fades_at_night() {
        let orion = NebulaConfig::orion();
        let mut day = Vec::new();
        let mut night = Vec::new();
        emit(&mut day, &orion, &state_at(12), 0.0);
        emit(&mut night, &orion, &state_at(2), 0.0);
        // First patch is the H-alpha emission region
        assert!(night[0].opacity < day[0].opacity);
    }

    #[test]
    fn test_opacity_clamped() {
        let orion = NebulaConfig::orion();
        let mut out = Vec::new();
        emit(&mut out, &orion, &state_at(0), 123.4);
        for e in &out {
            assert!((0.0..=1.0).contains(&e.opacity));
        }
    }
}
