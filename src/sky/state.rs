//! Sky runtime state.

use crate::sky::sun::SunTrack;

/// Lighting parameters for one decorative planet, resolved from its
/// day/night config pairs by the current sun visibility.
#[derive(Clone, Debug, PartialEq)]
pub struct PlanetLighting {
    pub name: String,
    /// Horizontal percent within the disc the light comes from.
    pub lit_from_x: f32,
    pub brightness: f32,
    pub saturation: f32,
    pub glow: f32,
    pub shadow_depth: f32,
    pub city_lights: f32,
}

/// Full sky state recomputed on each tick by [`super::SkySystem`].
///
/// Ephemeral: replaced wholesale on the next tick, never mutated in place
/// and never persisted.
#[derive(Clone, Debug, PartialEq)]
pub struct SkyState {
    /// Minutes since midnight of the driving clock sample.
    pub total_minutes: u32,
    /// The sun's screen track.
    pub sun: SunTrack,
    /// Background tint for the current hour.
    pub sky_tint: [f32; 3],
    /// Nebula luminance multiplier for the current hour.
    pub nebula_luminance: f32,
    /// Per-planet lighting, in config order.
    pub planets: Vec<PlanetLighting>,
}

impl Default for SkyState {
    fn default() -> Self {
        Self {
            total_minutes: 720,
            sun: crate::sky::sun::sun_track(720),
            sky_tint: [0.020, 0.031, 0.047],
            nebula_luminance: 1.0,
            planets: Vec::new(),
        }
    }
}
