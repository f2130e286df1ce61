//! Generic keyframe interpolation with period wrapping.
//!
//! [`Ramp`] interpolates `(time, value)` keys over a repeating period.
//! A 24-hour period serves the hour-keyed sky tints; an arbitrary period
//! serves the looping animation oscillators the site expressed as
//! keyframe arrays.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Lerp trait
// ---------------------------------------------------------------------------

/// Trait for types that can be linearly interpolated.
pub trait Lerp: Clone {
    fn lerp(&self, other: &Self, t: f32) -> Self;
}

impl Lerp for f32 {
    #[inline]
    fn lerp(&self, other: &Self, t: f32) -> Self {
        self + (other - self) * t
    }
}

impl Lerp for [f32; 3] {
    #[inline]
    fn lerp(&self, other: &Self, t: f32) -> Self {
        [
            self[0] + (other[0] - self[0]) * t,
            self[1] + (other[1] - self[1]) * t,
            self[2] + (other[2] - self[2]) * t,
        ]
    }
}

// ---------------------------------------------------------------------------
// Ramp
// ---------------------------------------------------------------------------

/// Keyframe-based value ramp that repeats with a fixed period.
///
/// Keys are `(time, value)` pairs sorted by time. Sampling at any time `t`
/// returns a linearly interpolated value between the surrounding keys,
/// wrapping correctly across the period boundary.
#[derive(Clone, Debug)]
pub struct Ramp<T: Lerp> {
    period: f32,
    keys: Vec<(f32, T)>,
}

impl<T: Lerp> Ramp<T> {
    /// Create a new ramp from unsorted keys. Keys are sorted by time.
    pub fn new(period: f32, mut keys: Vec<(f32, T)>) -> Self {
        assert!(period > 0.0, "Ramp period must be positive");
        keys.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap_or(std::cmp::Ordering::Equal));
        Self { period, keys }
    }

    /// Create a ramp keyed over a 24-hour cycle.
    pub fn daily(keys: Vec<(f32, T)>) -> Self {
        Self::new(24.0, keys)
    }

    /// Create a looping oscillator from evenly spaced keyframe values,
    /// the way the site's animation tables list them. The last value
    /// lands exactly at the period so a `[a, .., a]` table loops cleanly.
    pub fn keyframes(period: f32, values: &[T]) -> Self {
        assert!(values.len() >= 2, "keyframe ramp needs at least two values");
        let step = period / (values.len() - 1) as f32;
        let keys = values
            .iter()
            .enumerate()
            .map(|(i, v)| (i as f32 * step, v.clone()))
            .collect();
        Self::new(period, keys)
    }

    /// Create a constant ramp that always returns the same value.
    pub fn constant(value: T) -> Self {
        Self {
            period: 1.0,
            keys: vec![(0.0, value)],
        }
    }

    /// The repeat period of this ramp.
    #[inline]
    pub fn period(&self) -> f32 {
        self.period
    }

    /// Check the invariants [`Ramp::new`] asserts, for ramps built from
    /// untrusted data. A ramp that fails this check would panic or return
    /// NaN when sampled.
    pub fn validate(&self) -> Result<(), String> {
        if !(self.period.is_finite() && self.period > 0.0) {
            return Err(format!("period must be positive, got {}", self.period));
        }
        if self.keys.is_empty() {
            return Err("no keys".into());
        }
        if self.keys.iter().any(|(t, _)| !t.is_finite()) {
            return Err("key time is not finite".into());
        }
        Ok(())
    }

    /// Sample the ramp at time `t`, with wrapping.
    pub fn sample(&self, t: f32) -> T {
        assert!(!self.keys.is_empty(), "Ramp must have at least one key");

        if self.keys.len() == 1 {
            return self.keys[0].1.clone();
        }

        // Wrap t into [0, period)
        let t = ((t % self.period) + self.period) % self.period;

        let n = self.keys.len();
        let upper_idx = self.keys.iter().position(|k| k.0 > t);

        match upper_idx {
            Some(idx) if idx > 0 => {
                // Normal case: t is between keys[idx-1] and keys[idx]
                let (t_a, ref v_a) = self.keys[idx - 1];
                let (t_b, ref v_b) = self.keys[idx];
                let span = t_b - t_a;
                if span < 1e-6 {
                    return v_a.clone();
                }
                v_a.lerp(v_b, (t - t_a) / span)
            }
            _ => {
                // t is before the first key or past the last -> wrap
                // between the last key and the first key
                let (t_a, ref v_a) = self.keys[n - 1];
                let (t_b, ref v_b) = self.keys[0];
                let span = (t_b + self.period) - t_a;
                if span < 1e-6 {
                    return v_a.clone();
                }
                let offset = if t < t_a { t + self.period - t_a } else { t - t_a };
                v_a.lerp(v_b, offset / span)
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Serde support
// ---------------------------------------------------------------------------

impl<T: Lerp + Serialize> Serialize for Ramp<T> {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        (self.period, &self.keys).serialize(serializer)
    }
}

impl<'de, T: Lerp + Deserialize<'de>> Deserialize<'de> for Ramp<T> {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let (period, mut keys) = <(f32, Vec<(f32, T)>)>::deserialize(deserializer)?;
        // Invalid data flows to validate() instead of panicking mid-parse
        keys.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap_or(std::cmp::Ordering::Equal));
        Ok(Self { period, keys })
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f32, b: f32, eps: f32) -> bool {
        (a - b).abs() < eps
    }

    #[test]
    fn test_single_key_returns_constant() {
        let ramp = Ramp::constant(0.5_f32);
        assert!(approx_eq(ramp.sample(0.0), 0.5, 1e-6));
        assert!(approx_eq(ramp.sample(7.3), 0.5, 1e-6));
    }

    #[test]
    fn test_basic_interpolation() {
        let ramp = Ramp::daily(vec![(0.0, 0.0_f32), (24.0, 24.0)]);
        assert!(approx_eq(ramp.sample(12.0), 12.0, 1e-4));
        assert!(approx_eq(ramp.sample(6.0), 6.0, 1e-4));
    }

    #[test]
    fn test_rgb_interpolation() {
        let ramp = Ramp::daily(vec![
            (0.0, [0.0_f32, 0.0, 0.0]),
            (12.0, [1.0, 1.0, 1.0]),
        ]);
        let mid = ramp.sample(6.0);
        for c in mid {
            assert!(approx_eq(c, 0.5, 1e-4), "channel = {c}");
        }
    }

    #[test]
    fn test_wrapping_across_period() {
        // Key at 22 = 0.0, key at 4 = 1.0; span across midnight is 6 hours
        let ramp = Ramp::daily(vec![(4.0, 1.0_f32), (22.0, 0.0)]);
        assert!(approx_eq(ramp.sample(22.0), 0.0, 1e-4));
        assert!(approx_eq(ramp.sample(4.0), 1.0, 1e-4));
        assert!(approx_eq(ramp.sample(1.0), 0.5, 1e-4));
    }

    #[test]
    fn test_negative_time_wraps() {
        let ramp = Ramp::daily(vec![(0.0, 0.0_f32), (12.0, 1.0)]);
        // -1.0 wraps to 23.0: 11 hours into the 12-hour wrap segment
        let expected = 1.0 - 11.0 / 12.0;
        assert!(approx_eq(ramp.sample(-1.0), expected, 1e-4));
    }

    #[test]
    fn test_keyframes_loop_cleanly() {
        // Mirrors a [0.2, 0.8, 0.2] opacity table over 4 seconds
        let ramp = Ramp::keyframes(4.0, &[0.2_f32, 0.8, 0.2]);
        assert!(approx_eq(ramp.sample(0.0), 0.2, 1e-4));
        assert!(approx_eq(ramp.sample(2.0), 0.8, 1e-4));
        assert!(approx_eq(ramp.sample(4.0), 0.2, 1e-4));
        assert!(approx_eq(ramp.sample(1.0), 0.5, 1e-4));
    }

    #[test]
    fn test_arbitrary_period_oscillator() {
        let ramp = Ramp::keyframes(20.0, &[0.0_f32, 20.0, -10.0, 15.0, 0.0]);
        assert!(approx_eq(ramp.sample(5.0), 20.0, 1e-4));
        assert!(approx_eq(ramp.sample(10.0), -10.0, 1e-4));
        // One full period later matches
        assert!(approx_eq(ramp.sample(25.0), ramp.sample(5.0), 1e-4));
    }

    #[test]
    fn test_validate_accepts_well_formed_ramp() {
        let ramp = Ramp::daily(vec![(0.0, 0.1_f32), (12.0, 0.9)]);
        assert!(ramp.validate().is_ok());
    }

    #[test]
    fn test_deserialized_bad_period_fails_validation() {
        // Parsing must not panic; the invariant breach surfaces in validate
        let ramp: Ramp<f32> = serde_json::from_str("[-1.0,[[0.0,0.5]]]").unwrap();
        assert!(ramp.validate().is_err());
    }

    #[test]
    fn test_deserialized_empty_keys_fail_validation() {
        let ramp: Ramp<f32> = serde_json::from_str("[24.0,[]]").unwrap();
        assert!(ramp.validate().is_err());
    }

    #[test]
    fn test_serde_round_trip() {
        let ramp = Ramp::daily(vec![(0.0, 0.1_f32), (12.0, 0.9)]);
        let json = serde_json::to_string(&ramp).unwrap();
        let back: Ramp<f32> = serde_json::from_str(&json).unwrap();
        assert!(approx_eq(back.sample(6.0), ramp.sample(6.0), 1e-6));
        assert!(approx_eq(back.period(), 24.0, 1e-6));
    }
}
