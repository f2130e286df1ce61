//! Sky configuration.
//!
//! Defaults reproduce the site's shipped look: the Mars and Earth
//! placements, the Orion nebula patch stack, and the grid wave timings all
//! carry the original parameter values.

use serde::{Deserialize, Serialize};

use crate::core::Error;
use crate::sky::ramp::Ramp;

// ---------------------------------------------------------------------------
// Day/night parameter pair
// ---------------------------------------------------------------------------

/// A parameter with distinct daytime and nighttime values, selected by the
/// sun's visibility flag.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct DayNight<T> {
    pub day: T,
    pub night: T,
}

impl<T: Copy> DayNight<T> {
    pub const fn new(day: T, night: T) -> Self {
        Self { day, night }
    }

    /// Pick the value for the current sun visibility.
    #[inline]
    pub fn pick(&self, sun_visible: bool) -> T {
        if sun_visible { self.day } else { self.night }
    }
}

// ---------------------------------------------------------------------------
// Top-level config
// ---------------------------------------------------------------------------

/// Full sky configuration. Hour-keyed ramps are interpolated by [`Ramp`]
/// over a 24-hour cycle.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SkyConfig {
    /// Deep-space background tint (linear RGB) over the day.
    pub sky_tint: Ramp<[f32; 3]>,
    /// Overall nebula luminance multiplier over the day.
    pub nebula_luminance: Ramp<f32>,
    /// Decorative planets.
    pub planets: Vec<PlanetConfig>,
    /// Nebula definitions.
    pub nebulae: Vec<NebulaConfig>,
    /// Starfield parameters.
    pub starfield: StarfieldConfig,
    /// Background grid parameters.
    pub grid: GridConfig,
}

impl SkyConfig {
    /// Load a config from a JSON file. Rejects configs that would panic
    /// at sample time.
    pub fn load(path: &std::path::Path) -> Result<Self, Error> {
        let text = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&text)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate values that arrive from untrusted JSON.
    pub fn validate(&self) -> Result<(), Error> {
        self.sky_tint
            .validate()
            .map_err(|e| Error::Config(format!("sky_tint: {e}")))?;
        self.nebula_luminance
            .validate()
            .map_err(|e| Error::Config(format!("nebula_luminance: {e}")))?;
        for (name, period) in [
            ("grid.vertical_period", self.grid.vertical_period),
            ("grid.horizontal_period", self.grid.horizontal_period),
        ] {
            if !(period.is_finite() && period > 0.0) {
                return Err(Error::Config(format!(
                    "{name} must be positive, got {period}"
                )));
            }
        }
        for (name, range) in [
            ("starfield.size_range", self.starfield.size_range),
            (
                "starfield.twinkle_period_range",
                self.starfield.twinkle_period_range,
            ),
        ] {
            if !(range[0] < range[1]) {
                return Err(Error::Config(format!(
                    "{name} must be an increasing pair, got [{}, {}]",
                    range[0], range[1]
                )));
            }
        }
        Ok(())
    }
}

impl Default for SkyConfig {
    fn default() -> Self {
        Self {
            // The backdrop is deep space at all hours; daytime only lifts
            // it slightly toward blue
            sky_tint: Ramp::daily(vec![
                (0.0, [0.008, 0.012, 0.020]),
                (6.0, [0.015, 0.020, 0.035]),
                (12.0, [0.020, 0.031, 0.047]),
                (18.0, [0.015, 0.020, 0.035]),
                (20.0, [0.008, 0.012, 0.020]),
            ]),
            nebula_luminance: Ramp::daily(vec![
                (0.0, 0.6),
                (6.0, 0.8),
                (12.0, 1.0),
                (18.0, 0.8),
                (20.0, 0.6),
            ]),
            planets: vec![PlanetConfig::mars(), PlanetConfig::earth()],
            nebulae: vec![NebulaConfig::orion()],
            starfield: StarfieldConfig::default(),
            grid: GridConfig::default(),
        }
    }
}

// ---------------------------------------------------------------------------
// Planet config
// ---------------------------------------------------------------------------

/// A single decorative planet. Positions and sizes are percent of the
/// viewport; lighting pairs switch on sun visibility.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PlanetConfig {
    pub name: String,
    /// Center position, percent coordinates.
    pub position: [f32; 2],
    /// Disc diameter, percent of viewport height.
    pub size: f32,
    /// Base surface color (linear RGB).
    pub base_color: [f32; 3],
    /// Horizontal percent within the disc the light appears to come from.
    /// The terminator flips sides when the sun sets.
    pub lit_from_x: DayNight<f32>,
    /// Surface brightness multiplier.
    pub brightness: DayNight<f32>,
    /// Color saturation multiplier.
    pub saturation: DayNight<f32>,
    /// Atmospheric glow strength.
    pub glow: DayNight<f32>,
    /// Shadowed-limb darkness, 0-1.
    pub shadow_depth: DayNight<f32>,
    /// Night-side city light glow (Earth only).
    pub city_lights: DayNight<f32>,
    /// Seconds per full rotation of the surface texture.
    pub spin_period: f32,
}

impl PlanetConfig {
    /// The rust-red Mars disc at the upper right.
    pub fn mars() -> Self {
        Self {
            name: "Mars".to_string(),
            position: [75.0, 16.7],
            size: 12.0,
            base_color: [0.77, 0.27, 0.11],
            lit_from_x: DayNight::new(25.0, 75.0),
            brightness: DayNight::new(1.4, 0.5),
            saturation: DayNight::new(1.2, 1.2),
            glow: DayNight::new(0.35, 0.12),
            shadow_depth: DayNight::new(0.75, 0.95),
            city_lights: DayNight::new(0.0, 0.0),
            spin_period: 200.0,
        }
    }

    /// The blue Earth disc at the lower left.
    pub fn earth() -> Self {
        Self {
            name: "Earth".to_string(),
            position: [12.5, 80.0],
            size: 10.5,
            base_color: [0.27, 0.51, 0.71],
            lit_from_x: DayNight::new(30.0, 70.0),
            brightness: DayNight::new(1.3, 0.6),
            saturation: DayNight::new(1.4, 0.7),
            glow: DayNight::new(0.5, 0.25),
            shadow_depth: DayNight::new(0.6, 0.95),
            city_lights: DayNight::new(0.0, 0.03),
            spin_period: 150.0,
        }
    }
}

// ---------------------------------------------------------------------------
// Nebula config
// ---------------------------------------------------------------------------

/// One gradient patch within a nebula.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct NebulaPatch {
    /// Offset within the nebula bounds, percent.
    pub offset: [f32; 2],
    /// Patch extent, percent of the nebula bounds.
    pub extent: [f32; 2],
    /// Patch color (linear RGB).
    pub color: [f32; 3],
    /// Opacity by sun visibility.
    pub opacity: DayNight<f32>,
}

/// A nebula: a stack of soft gradient patches plus an optional wisp layer
/// whose rotation follows the sun angle.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct NebulaConfig {
    pub name: String,
    /// Top-left of the nebula bounds, percent coordinates.
    pub position: [f32; 2],
    /// Bounds extent, percent of the viewport.
    pub extent: [f32; 2],
    pub patches: Vec<NebulaPatch>,
    /// Whether the wispy cloud layer rotates with the sun angle.
    pub wisp_follows_sun: bool,
}

impl NebulaConfig {
    /// The Orion-style emission nebula at the lower left third.
    pub fn orion() -> Self {
        Self {
            name: "Orion".to_string(),
            position: [18.0, 55.0],
            extent: [13.8, 16.7],
            patches: vec![
                // Central H-alpha emission region
                NebulaPatch {
                    offset: [40.0, 45.0],
                    extent: [45.0, 60.0],
                    color: [0.86, 0.39, 0.31],
                    opacity: DayNight::new(0.40, 0.25),
                },
                // Oxygen III emission, blue-green
                NebulaPatch {
                    offset: [60.0, 35.0],
                    extent: [35.0, 40.0],
                    color: [0.31, 0.59, 0.47],
                    opacity: DayNight::new(0.30, 0.18),
                },
                // Dust lane; reads darker against the night luminance
                NebulaPatch {
                    offset: [50.0, 70.0],
                    extent: [80.0, 30.0],
                    color: [0.06, 0.04, 0.03],
                    opacity: DayNight::new(0.60, 0.80),
                },
                // Stellar nursery background glow
                NebulaPatch {
                    offset: [50.0, 50.0],
                    extent: [100.0, 80.0],
                    color: [0.24, 0.16, 0.31],
                    opacity: DayNight::new(0.15, 0.08),
                },
                // Reflection component
                NebulaPatch {
                    offset: [30.0, 30.0],
                    extent: [60.0, 40.0],
                    color: [0.39, 0.59, 1.0],
                    opacity: DayNight::new(0.12, 0.06),
                },
            ],
            wisp_follows_sun: true,
        }
    }
}

// ---------------------------------------------------------------------------
// Starfield config
// ---------------------------------------------------------------------------

/// Parameters for the seeded-random star layer.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct StarfieldConfig {
    /// RNG seed; fixed so the field is stable across runs.
    pub seed: u64,
    /// Star count before device-class scaling.
    pub count: usize,
    /// Min/max star size, percent of viewport height.
    pub size_range: [f32; 2],
    /// Min/max twinkle period, seconds.
    pub twinkle_period_range: [f32; 2],
}

impl Default for StarfieldConfig {
    fn default() -> Self {
        Self {
            seed: 0x5eed_cafe,
            count: 150,
            size_range: [0.1, 0.5],
            twinkle_period_range: [2.0, 8.0],
        }
    }
}

// ---------------------------------------------------------------------------
// Grid config
// ---------------------------------------------------------------------------

/// Parameters for the background grid and its opacity waves.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GridConfig {
    /// Vertical line count; spaced evenly across the width.
    pub vertical: usize,
    /// Horizontal line count; spaced evenly across the height.
    pub horizontal: usize,
    /// Wave period for vertical lines, seconds.
    pub vertical_period: f32,
    /// Wave period for horizontal lines, seconds.
    pub horizontal_period: f32,
    /// Phase delay per vertical line, seconds.
    pub vertical_delay: f32,
    /// Phase delay per horizontal line, seconds.
    pub horizontal_delay: f32,
    /// Min/max opacity of vertical lines over a wave.
    pub vertical_opacity: [f32; 2],
    /// Min/max opacity of horizontal lines over a wave.
    pub horizontal_opacity: [f32; 2],
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            vertical: 30,
            horizontal: 15,
            vertical_period: 4.0,
            horizontal_period: 5.0,
            vertical_delay: 0.1,
            horizontal_delay: 0.15,
            vertical_opacity: [0.2, 0.8],
            horizontal_opacity: [0.15, 0.7],
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
