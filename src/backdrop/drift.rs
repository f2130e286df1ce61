//! Floating geometric shapes.
//!
//! Three faint wireframe shapes wander around fixed anchors on long,
//! looping keyframe paths. Periods and waypoints are the site's original
//! animation tables.

use glam::Vec2;

use crate::backdrop::{Element, ElementKind};
use crate::sky::Ramp;

struct Drifter {
    anchor: Vec2,
    size: f32,
    color: [f32; 3],
    spin_period: f32,
    /// Negative period spins the other way.
    spin_dir: f32,
    x_path: Ramp<f32>,
    y_path: Ramp<f32>,
    scale: Ramp<f32>,
}

fn drifters() -> [Drifter; 3] {
    [
        // Ring at the upper-left quarter
        Drifter {
            anchor: Vec2::new(25.0, 25.0),
            size: 4.0,
            color: [0.57, 0.78, 1.0],
            spin_period: 30.0,
            spin_dir: 1.0,
            x_path: Ramp::keyframes(20.0, &[0.0, 20.0, -10.0, 15.0, 0.0]),
            y_path: Ramp::keyframes(25.0, &[0.0, -15.0, 25.0, -5.0, 0.0]),
            scale: Ramp::keyframes(6.0, &[1.0, 1.1, 1.0]),
        },
        // Triangle at the lower-right third
        Drifter {
            anchor: Vec2::new(66.7, 66.7),
            size: 3.0,
            color: [0.78, 0.57, 1.0],
            spin_period: 25.0,
            spin_dir: -1.0,
            x_path: Ramp::keyframes(18.0, &[0.0, -25.0, 10.0, -15.0, 0.0]),
            y_path: Ramp::keyframes(22.0, &[0.0, 20.0, -30.0, 5.0, 0.0]),
            scale: Ramp::keyframes(8.0, &[1.0, 0.8, 1.2, 1.0]),
        },
        // Square at the upper-right quarter
        Drifter {
            anchor: Vec2::new(75.0, 16.7),
            size: 2.0,
            color: [0.47, 0.87, 1.0],
            spin_period: 20.0,
            spin_dir: 1.0,
            x_path: Ramp::keyframes(16.0, &[0.0, 15.0, -20.0, 12.0, 0.0]),
            y_path: Ramp::keyframes(19.0, &[0.0, -12.0, 18.0, -8.0, 0.0]),
            scale: Ramp::keyframes(5.0, &[1.0, 1.3, 0.9, 1.0]),
        },
    ]
}

pub fn emit(out: &mut Vec<Element>, elapsed: f32) {
    for d in drifters() {
        // Paths are expressed in tenths of a percent so the wander stays
        // subtle, as on the site
        let offset = Vec2::new(d.x_path.sample(elapsed), d.y_path.sample(elapsed)) * 0.1;
        let spin = d.spin_dir * (elapsed / d.spin_period * 360.0) % 360.0;
        out.push(Element {
            kind: ElementKind::Shape,
            pos: d.anchor + offset,
            size: d.size * d.scale.sample(elapsed),
            color: d.color,
            opacity: 0.2,
            rotation: spin.rem_euclid(360.0),
        });
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
