//! Background grid layer.
//!
//! 30 vertical and 15 horizontal lines whose opacity waves sweep across
//! the grid via a per-line phase delay.

use glam::Vec2;

use crate::backdrop::{Element, ElementKind};
use crate::sky::{GridConfig, Ramp};

const LINE_COLOR: [f32; 3] = [0.71, 0.78, 1.0];

fn wave(period: f32, range: [f32; 2]) -> Ramp<f32> {
    Ramp::keyframes(period, &[range[0], range[1], range[0]])
}

pub fn emit(out: &mut Vec<Element>, config: &GridConfig, elapsed: f32) {
    let v_wave = wave(config.vertical_period, config.vertical_opacity);
    let v_step = 100.0 / (config.vertical + 1) as f32;
    for i in 0..config.vertical {
        let x = (i + 1) as f32 * v_step;
        out.push(Element {
            kind: ElementKind::GridLine,
            pos: Vec2::new(x, 50.0),
            size: 100.0,
            color: LINE_COLOR,
            opacity: v_wave.sample(elapsed - i as f32 * config.vertical_delay),
            rotation: 90.0,
        });
    }

    let h_wave = wave(config.horizontal_period, config.horizontal_opacity);
    let h_step = 100.0 / (config.horizontal + 1) as f32;
    for i in 0..config.horizontal {
        let y = (i + 1) as f32 * h_step;
        out.push(Element {
            kind: ElementKind::GridLine,
            pos: Vec2::new(50.0, y),
            size: 100.0,
            color: LINE_COLOR,
            opacity: h_wave.sample(elapsed - i as f32 * config.horizontal_delay),
            rotation: 0.0,
        });
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_counts() {
        let mut out = Vec::new();
        emit(&mut out, &GridConfig::default(), 0.0);
        assert_eq!(out.len(), 45);
        assert_eq!(out.iter().filter(|e| e.rotation == 90.0).count(), 30);
    }

    #[test]
    fn test_opacity_within_configured_range() {
        let cfg = GridConfig::default();
        for t in [0.0, 0.7, 2.2, 13.9] {
            let mut out = Vec::new();
            emit(&mut out, &cfg, t);
            for e in out.iter().filter(|e| e.rotation == 90.0) {
                assert!(
                    e.opacity >= cfg.vertical_opacity[0] - 1e-4
                        && e.opacity <= cfg.vertical_opacity[1] + 1e-4,
                    "vertical opacity {} at t={t}",
                    e.opacity
                );
            }
        }
    }

    #[test]
    fn test_phase_delay_staggers_lines() {
        let mut out = Vec::new();
        emit(&mut out, &GridConfig::default(), 1.0);
        // Adjacent vertical lines should not all share one opacity
        let first = out[0].opacity;
        assert!(
            out[1..30].iter().any(|e| (e.opacity - first).abs() > 1e-3),
            "wave did not stagger"
        );
    }
}
