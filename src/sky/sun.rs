//! Sun position calculation.
//!
//! Maps minutes-since-midnight onto a decorative elliptical arc across the
//! viewport in percent coordinates. This is a synthetic parameterization,
//! not an astronomical one: the 12-hour daytime window maps linearly onto
//! 0-180 degrees and the night hours continue past 180 with the sun
//! flagged invisible.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Minutes since midnight at which the daytime window opens (06:00).
pub const DAY_START_MIN: u32 = 360;
/// Minutes since midnight at which the daytime window closes (18:00).
pub const DAY_END_MIN: u32 = 1080;
/// Minutes spanned by each half of the cycle.
const HALF_CYCLE_MIN: f32 = 720.0;

/// Horizontal semi-axis of the arc ellipse, percent of viewport width.
const ARC_RADIUS_X: f32 = 45.0;
/// Vertical semi-axis of the arc ellipse, percent of viewport height.
const ARC_RADIUS_Y: f32 = 35.0;

/// Screen-space sun track computed from a single time sample.
///
/// Recomputed fresh on every tick; identical input yields bit-identical
/// output.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SunTrack {
    /// Horizontal position, percent of viewport width (always in [5, 95]).
    pub x: f32,
    /// Vertical position, percent of viewport height (always in [15, 85]).
    pub y: f32,
    /// Whether the sun is rendered. True iff the time falls inside the
    /// fixed 06:00-18:00 daytime window.
    pub visible: bool,
    /// Angular position along the arc, degrees.
    pub angle: f32,
}

impl SunTrack {
    /// Position as a vector, percent coordinates.
    #[inline]
    pub fn position(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }
}

/// Compute the sun track for the given minutes since midnight.
///
/// Daytime (06:00-18:00 inclusive): angle runs 0-180, sun rises on the
/// left horizon, peaks overhead at noon and sets on the right. Night
/// hours continue the parameterization past 180 degrees. The night branch
/// wraps past 360 crossing midnight; the sun is hidden for the whole
/// night window, so the seam is never on screen.
pub fn sun_track(total_minutes: u32) -> SunTrack {
    debug_assert!(
        total_minutes < 1440,
        "minutes since midnight out of range: {total_minutes}"
    );
    let minutes = total_minutes as f32;

    let (angle, visible) = if (DAY_START_MIN..=DAY_END_MIN).contains(&total_minutes) {
        (((minutes - 360.0) / HALF_CYCLE_MIN) * 180.0, true)
    } else if total_minutes < DAY_START_MIN {
        (180.0 + ((minutes + 720.0) / HALF_CYCLE_MIN) * 180.0, false)
    } else {
        (180.0 + ((minutes - 1080.0) / HALF_CYCLE_MIN) * 180.0, false)
    };

    let theta = (angle - 90.0).to_radians();
    SunTrack {
        x: 50.0 + theta.cos() * ARC_RADIUS_X,
        y: 50.0 - theta.sin() * ARC_RADIUS_Y,
        visible,
        angle,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_visible_inside_daytime_window() {
        for m in DAY_START_MIN..=DAY_END_MIN {
            assert!(sun_track(m).visible, "minute {m} should be daytime");
        }
    }

    #[test]
    fn test_hidden_outside_daytime_window() {
        for m in (0..DAY_START_MIN).chain(DAY_END_MIN + 1..1440) {
            assert!(!sun_track(m).visible, "minute {m} should be night");
        }
    }

    #[test]
    fn test_sunrise_angle_zero() {
        let t = sun_track(360);
        assert!(t.angle.abs() < 1e-5, "06:00 angle = {} expected 0", t.angle);
        // cos(-90) = 0, sin(-90) = -1 -> left of arc, at the low edge
        assert!((t.x - 50.0).abs() < 1e-3, "06:00 x = {} expected 50", t.x);
        assert!((t.y - 85.0).abs() < 1e-3, "06:00 y = {} expected 85", t.y);
    }

    #[test]
    fn test_noon_angle_ninety() {
        let t = sun_track(720);
        assert!((t.angle - 90.0).abs() < 1e-5, "noon angle = {}", t.angle);
        assert!((t.x - 95.0).abs() < 1e-3, "noon x = {} expected 95", t.x);
        assert!((t.y - 50.0).abs() < 1e-3, "noon y = {} expected 50", t.y);
    }

    #[test]
    fn test_sunset_angle_one_eighty() {
        let t = sun_track(1080);
        assert!((t.angle - 180.0).abs() < 1e-4, "18:00 angle = {}", t.angle);
    }

    #[test]
    fn test_midnight_wraps_to_full_circle() {
        // 180 + (720/720)*180 = 360 per the early-morning night branch
        let t = sun_track(0);
        assert!((t.angle - 360.0).abs() < 1e-4, "midnight angle = {}", t.angle);
        assert!(!t.visible);
    }

    #[test]
    fn test_position_always_in_bounds() {
        for m in 0..1440 {
            let t = sun_track(m);
            assert!((5.0..=95.0).contains(&t.x), "minute {m}: x = {} out of [5, 95]", t.x);
            assert!((15.0..=85.0).contains(&t.y), "minute {m}: y = {} out of [15, 85]", t.y);
        }
    }

    #[test]
    fn test_day_angle_monotonic() {
        let mut prev = -1.0;
        for m in DAY_START_MIN..=DAY_END_MIN {
            let a = sun_track(m).angle;
            assert!(a > prev, "day angle not increasing at minute {m}");
            prev = a;
        }
    }

    #[test]
    fn test_night_branches_monotonic() {
        // Evening branch: 18:01 to 23:59
        let mut prev = sun_track(1081).angle;
        for m in 1082..1440 {
            let a = sun_track(m).angle;
            assert!(a > prev, "evening angle not increasing at minute {m}");
            prev = a;
        }
        // Early-morning branch: 00:00 to 05:59
        let mut prev = sun_track(0).angle;
        for m in 1..360 {
            let a = sun_track(m).angle;
            assert!(a > prev, "morning angle not increasing at minute {m}");
            prev = a;
        }
    }

    #[test]
    fn test_idempotent() {
        for m in [0, 359, 360, 720, 1080, 1081, 1439] {
            let a = sun_track(m);
            let b = sun_track(m);
            assert_eq!(a, b, "minute {m}: repeated call differed");
        }
    }

    #[test]
    fn test_position_from_vec() {
        let t = sun_track(720);
        assert_eq!(t.position(), Vec2::new(t.x, t.y));
    }
}
