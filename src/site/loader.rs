//! Cosmic loading sequence.
//!
//! A purely cosmetic progress bar: fills toward 90 in random increments,
//! holds there, jumps to 100 when the reveal timer fires, then fades out.
//! Durations depend on the device class; minimal devices skip the loader
//! entirely, as the site does on mobile.

use std::time::Duration;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::scheduler::DeviceClass;

/// Where the bar parks until the reveal timer fires.
const HOLD_AT: f32 = 90.0;
/// Progress increments land in [5, 20).
const INCREMENT_RANGE: std::ops::Range<f32> = 5.0..20.0;

/// Loader lifecycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoaderPhase {
    /// Progress bar filling toward 90.
    Filling,
    /// Progress snapped to 100, pausing before the fade.
    Ready,
    /// Fading out over the scene.
    Transitioning,
    /// Gone; the page is fully revealed.
    Hidden,
}

/// Timings for one loader run.
#[derive(Clone, Copy, Debug)]
pub struct LoaderTimings {
    /// Interval between progress increments.
    pub progress_tick: Duration,
    /// When progress snaps to 100.
    pub reveal_after: Duration,
    /// Pause at 100 before the fade starts.
    pub pause: Duration,
    /// Fade-out duration.
    pub fade: Duration,
}

impl LoaderTimings {
    pub fn for_device(device: DeviceClass) -> Self {
        match device {
            DeviceClass::Full => Self {
                progress_tick: Duration::from_millis(150),
                reveal_after: Duration::from_millis(3000),
                pause: Duration::from_millis(1000),
                fade: Duration::from_millis(1800),
            },
            // Shortened run, matching the site's mobile timings
            DeviceClass::Reduced => Self {
                progress_tick: Duration::from_millis(150),
                reveal_after: Duration::from_millis(1200),
                pause: Duration::from_millis(300),
                fade: Duration::from_millis(600),
            },
            DeviceClass::Minimal => Self {
                progress_tick: Duration::ZERO,
                reveal_after: Duration::ZERO,
                pause: Duration::ZERO,
                fade: Duration::ZERO,
            },
        }
    }
}

/// The loader state machine. Drive it with [`advance`](Self::advance).
pub struct CosmicLoader {
    timings: LoaderTimings,
    phase: LoaderPhase,
    progress: f32,
    elapsed: Duration,
    phase_elapsed: Duration,
    next_increment: Duration,
    rng: StdRng,
}

impl CosmicLoader {
    pub fn new(device: DeviceClass) -> Self {
        Self::with_seed(device, rand::random())
    }

    /// Seeded constructor so tests can pin the increment sequence.
    pub fn with_seed(device: DeviceClass, seed: u64) -> Self {
        let timings = LoaderTimings::for_device(device);
        let phase = if device == DeviceClass::Minimal {
            LoaderPhase::Hidden
        } else {
            LoaderPhase::Filling
        };
        Self {
            timings,
            phase,
            progress: 0.0,
            elapsed: Duration::ZERO,
            phase_elapsed: Duration::ZERO,
            next_increment: timings.progress_tick,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    #[inline]
    pub fn phase(&self) -> LoaderPhase {
        self.phase
    }

    /// Current progress percent, 0-100.
    #[inline]
    pub fn progress(&self) -> f32 {
        self.progress
    }

    /// Headline text for the current phase.
    pub fn label(&self) -> &'static str {
        match self.phase {
            LoaderPhase::Filling => "INITIALIZING",
            LoaderPhase::Ready => "READY",
            LoaderPhase::Transitioning => "WELCOME",
            LoaderPhase::Hidden => "",
        }
    }

    /// Advance the loader by `dt`.
    pub fn advance(&mut self, dt: Duration) {
        if self.phase == LoaderPhase::Hidden {
            return;
        }
        self.elapsed += dt;
        self.phase_elapsed += dt;

        match self.phase {
            LoaderPhase::Filling => {
                while self.elapsed >= self.next_increment && self.progress < HOLD_AT {
                    let inc = self.rng.gen_range(INCREMENT_RANGE);
                    self.progress = (self.progress + inc).min(HOLD_AT);
                    self.next_increment += self.timings.progress_tick;
                }
                if self.elapsed >= self.timings.reveal_after {
                    self.progress = 100.0;
                    self.enter(LoaderPhase::Ready);
                }
            }
            LoaderPhase::Ready => {
                if self.phase_elapsed >= self.timings.pause {
                    self.enter(LoaderPhase::Transitioning);
                }
            }
            LoaderPhase::Transitioning => {
                if self.phase_elapsed >= self.timings.fade {
                    self.enter(LoaderPhase::Hidden);
                }
            }
            LoaderPhase::Hidden => {}
        }
    }

    fn enter(&mut self, phase: LoaderPhase) {
        self.phase = phase;
        self.phase_elapsed = Duration::ZERO;
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
