//! Wall-clock sampling.

use chrono::{Local, Timelike};

use crate::sky::sun::{DAY_END_MIN, DAY_START_MIN};

/// A single wall-clock reading at minute resolution.
///
/// Created once per scheduler tick and replaced on the next; no history is
/// retained. The sample is owned by the tick loop and passed by value into
/// the pure sky computation, never held as ambient state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ClockSample {
    hour: u32,
    minute: u32,
}

impl ClockSample {
    /// Build a sample from explicit clock fields, wrapping out-of-range
    /// values so a sample can never represent an invalid time.
    pub fn new(hour: u32, minute: u32) -> Self {
        Self {
            hour: hour % 24,
            minute: minute % 60,
        }
    }

    /// Read the local system clock.
    pub fn now() -> Self {
        let now = Local::now();
        Self::new(now.hour(), now.minute())
    }

    /// Hour of day, 0-23.
    #[inline]
    pub fn hour(&self) -> u32 {
        self.hour
    }

    /// Minute of hour, 0-59.
    #[inline]
    pub fn minute(&self) -> u32 {
        self.minute
    }

    /// Minutes since midnight, in `[0, 1439]`.
    #[inline]
    pub fn total_minutes(&self) -> u32 {
        self.hour * 60 + self.minute
    }

    /// Whether the sample falls inside the fixed daytime window.
    #[inline]
    pub fn is_daytime(&self) -> bool {
        (DAY_START_MIN..=DAY_END_MIN).contains(&self.total_minutes())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
