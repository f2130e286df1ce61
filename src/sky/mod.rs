//! Time-of-day sky engine.
//!
//! Maps a wall-clock sample to the decorative sun's screen position plus
//! derived lighting for the rest of the backdrop. The main entry point is
//! [`SkySystem`], sampled on each scheduler tick to produce a [`SkyState`].

pub mod clock;
pub mod config;
pub mod ramp;
pub mod state;
pub mod sun;

// Re-exports
pub use clock::ClockSample;
pub use config::{DayNight, GridConfig, NebulaConfig, PlanetConfig, SkyConfig, StarfieldConfig};
pub use ramp::{Lerp, Ramp};
pub use state::{PlanetLighting, SkyState};
pub use sun::{SunTrack, sun_track};

// ---------------------------------------------------------------------------
// SkySystem
// ---------------------------------------------------------------------------

/// Main sky system. Call [`sample`](Self::sample) with the clock reading on
/// each tick, then read the resulting [`state`](Self::state).
///
/// The system holds only the last computed state; the computation itself is
/// a pure function of the clock sample and the config.
pub struct SkySystem {
    config: SkyConfig,
    state: SkyState,
}

impl SkySystem {
    /// Create a new sky system from the given configuration. The initial
    /// state is computed for noon and replaced on the first real tick.
    pub fn new(config: SkyConfig) -> Self {
        let mut sys = Self {
            config,
            state: SkyState::default(),
        };
        sys.recompute(ClockSample::new(12, 0));
        sys
    }

    /// Recompute all state from the given clock sample.
    pub fn sample(&mut self, clock: ClockSample) -> &SkyState {
        self.recompute(clock);
        &self.state
    }

    /// Last computed state.
    #[inline]
    pub fn state(&self) -> &SkyState {
        &self.state
    }

    /// Immutable reference to the configuration.
    #[inline]
    pub fn config(&self) -> &SkyConfig {
        &self.config
    }

    /// Whether the last sample fell inside the daytime window.
    #[inline]
    pub fn is_daytime(&self) -> bool {
        self.state.sun.visible
    }

    fn recompute(&mut self, clock: ClockSample) {
        let sun = sun_track(clock.total_minutes());
        let hour = clock.total_minutes() as f32 / 60.0;

        let planets = self
            .config
            .planets
            .iter()
            .map(|p| PlanetLighting {
                name: p.name.clone(),
                lit_from_x: p.lit_from_x.pick(sun.visible),
                brightness: p.brightness.pick(sun.visible),
                saturation: p.saturation.pick(sun.visible),
                glow: p.glow.pick(sun.visible),
                shadow_depth: p.shadow_depth.pick(sun.visible),
                city_lights: p.city_lights.pick(sun.visible),
            })
            .collect();

        self.state = SkyState {
            total_minutes: clock.total_minutes(),
            sun,
            sky_tint: self.config.sky_tint.sample(hour),
            nebula_luminance: self.config.nebula_luminance.sample(hour),
            planets,
        };
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
