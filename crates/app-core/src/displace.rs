//! Render-only particle displacement.
//!
//! The vertex shader in `shaders/particles.wgsl` applies exactly this; the
//! CPU copy exists so the behavior can be pinned down in tests. Nothing here
//! feeds back into simulated positions.

use crate::config::{RepulsionParams, WaveParams};
use crate::easing::smoothstep;
use glam::{Vec2, Vec3};

/// Time- and position-driven drift.
#[inline]
pub fn wave_offset(p: Vec3, t: f32, w: &WaveParams) -> Vec3 {
    Vec3::new(
        (t * w.time_freq.x + p.y * w.space_freq.x).sin() * w.amplitude.x,
        (t * w.time_freq.y + p.x * w.space_freq.y).cos() * w.amplitude.y,
        (t * w.time_freq.z + p.x * w.space_freq.z).sin() * w.amplitude.z,
    )
}

/// XY push away from the pointer, already clamped to `max_offset`.
#[inline]
pub fn repulsion_offset(p: Vec2, pointer_ndc: Vec2, r: &RepulsionParams) -> Vec2 {
    let center = pointer_ndc * r.pointer_scale;
    let away = p - center;
    let falloff = smoothstep(r.radius, 0.0, away.length());
    let dir = (away + Vec2::splat(0.001)).normalize_or_zero();
    (dir * falloff * r.strength).clamp_length_max(r.max_offset.max(0.0))
}

/// Where a particle at simulated position `p` is drawn at time `t`.
pub fn displace_for_render(
    p: Vec3,
    t: f32,
    pointer_ndc: Vec2,
    wave: &WaveParams,
    repulsion: &RepulsionParams,
) -> Vec3 {
    let drifted = p + wave_offset(p, t, wave);
    let push = repulsion_offset(drifted.truncate(), pointer_ndc, repulsion);
    drifted + push.extend(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wave_is_bounded_by_amplitude() {
        let w = WaveParams::default();
        for i in 0..200 {
            let t = i as f32 * 0.37;
            let p = Vec3::new(i as f32 - 100.0, 50.0 - i as f32 * 0.5, 3.0);
            let o = wave_offset(p, t, &w);
            assert!(o.abs().cmple(w.amplitude + Vec3::splat(1e-5)).all());
        }
    }

    #[test]
    fn repulsion_pushes_away_inside_radius() {
        let r = RepulsionParams::default();
        let o = repulsion_offset(Vec2::new(3.0, 0.0), Vec2::ZERO, &r);
        assert!(o.x > 0.0);
        assert!(o.length() <= r.max_offset + 1e-5);
    }

    #[test]
    fn repulsion_vanishes_outside_radius() {
        let r = RepulsionParams::default();
        let o = repulsion_offset(Vec2::new(30.0, 0.0), Vec2::ZERO, &r);
        assert_eq!(o, Vec2::ZERO);
    }

    #[test]
    fn repulsion_respects_tighter_cap() {
        let r = RepulsionParams {
            max_offset: 1.0,
            ..RepulsionParams::default()
        };
        let o = repulsion_offset(Vec2::new(0.5, 0.5), Vec2::ZERO, &r);
        assert!(o.length() <= 1.0 + 1e-5);
        assert!(o.length() > 0.9);
    }

    #[test]
    fn pointer_is_scaled_to_world() {
        let r = RepulsionParams::default();
        // pointer at NDC (0.5, 0) sits at world x = 20
        let o = repulsion_offset(Vec2::new(18.0, 0.0), Vec2::new(0.5, 0.0), &r);
        assert!(o.x < 0.0);
    }

    #[test]
    fn displacement_does_not_touch_input() {
        let p = Vec3::new(1.0, 2.0, 3.0);
        let w = WaveParams::default();
        let r = RepulsionParams::default();
        let _ = displace_for_render(p, 4.0, Vec2::new(0.1, 0.1), &w, &r);
        assert_eq!(p, Vec3::new(1.0, 2.0, 3.0));
    }
}
