//! Particles, the box they live in, and the per-frame integration step.

use crate::config::FieldConfig;
use crate::error::ConfigError;
use glam::Vec3;
use rand::Rng;

/// Axis-aligned box the particles wrap around in. Every axis is toroidal.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    pub min: Vec3,
    pub max: Vec3,
}

impl Bounds {
    pub const fn new(min: Vec3, max: Vec3) -> Self {
        Self { min, max }
    }

    /// Box centered on the origin with the given half extents.
    pub fn symmetric(half: Vec3) -> Self {
        Self::new(-half, half)
    }

    #[inline]
    pub fn span(&self) -> Vec3 {
        self.max - self.min
    }

    #[inline]
    pub fn contains(&self, p: Vec3) -> bool {
        p.cmpge(self.min).all() && p.cmple(self.max).all()
    }

    /// Wrap a point back into the box, keeping the overshoot: leaving through
    /// `max` by `d` re-enters at `min + d`.
    #[inline]
    pub fn wrap(&self, p: Vec3) -> Vec3 {
        Vec3::new(
            wrap_axis(p.x, self.min.x, self.max.x),
            wrap_axis(p.y, self.min.y, self.max.y),
            wrap_axis(p.z, self.min.z, self.max.z),
        )
    }

    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        for (axis, min, max) in [
            ('x', self.min.x, self.max.x),
            ('y', self.min.y, self.max.y),
            ('z', self.min.z, self.max.z),
        ] {
            if !(min.is_finite() && max.is_finite() && max > min) {
                return Err(ConfigError::InvalidBounds { axis, min, max });
            }
        }
        Ok(())
    }
}

#[inline]
fn wrap_axis(v: f32, min: f32, max: f32) -> f32 {
    if v >= min && v <= max {
        return v;
    }
    let span = max - min;
    // rem_euclid may round up to `span` for tiny negatives; that still lands on `max`.
    min + (v - min).rem_euclid(span)
}

/// Categorical color class assigned at spawn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ParticleColor {
    Primary,
    Secondary,
    Tertiary,
}

impl ParticleColor {
    pub const ALL: [ParticleColor; 3] = [
        ParticleColor::Primary,
        ParticleColor::Secondary,
        ParticleColor::Tertiary,
    ];

    #[inline]
    pub fn index(self) -> usize {
        match self {
            ParticleColor::Primary => 0,
            ParticleColor::Secondary => 1,
            ParticleColor::Tertiary => 2,
        }
    }

    /// Weighted draw; `weights` must be non-negative with a positive sum.
    pub fn draw<R: Rng + ?Sized>(rng: &mut R, weights: &[f32; 3]) -> Self {
        let total: f32 = weights.iter().sum();
        let mut r = rng.gen::<f32>() * total;
        for (c, w) in Self::ALL.iter().zip(weights) {
            if r < *w {
                return *c;
            }
            r -= *w;
        }
        // Float slop at the top of the range; pick the last class with weight.
        Self::ALL
            .iter()
            .zip(weights)
            .rev()
            .find(|(_, w)| **w > 0.0)
            .map(|(c, _)| *c)
            .unwrap_or(ParticleColor::Primary)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
    pub position: Vec3,
    /// World units per frame.
    pub velocity: Vec3,
    pub color: ParticleColor,
    pub size: f32,
}

#[inline]
fn uniform<R: Rng + ?Sized>(rng: &mut R, lo: f32, hi: f32) -> f32 {
    lo + (hi - lo) * rng.gen::<f32>()
}

/// Spawn `cfg.particle_count` particles from `rng`.
pub fn spawn_particles<R: Rng + ?Sized>(cfg: &FieldConfig, rng: &mut R) -> Vec<Particle> {
    let b = cfg.bounds;
    let v = cfg.velocity;
    let (size_lo, size_hi) = cfg.size_range;
    (0..cfg.particle_count)
        .map(|_| {
            let position = Vec3::new(
                uniform(rng, b.min.x, b.max.x),
                uniform(rng, b.min.y, b.max.y),
                uniform(rng, b.min.z, b.max.z),
            );
            let color = ParticleColor::draw(rng, &cfg.color_weights);
            let size = uniform(rng, size_lo, size_hi);
            let velocity = Vec3::new(
                uniform(rng, -v.x, v.x),
                uniform(rng, -v.y, v.y),
                uniform(rng, -v.z, v.z),
            );
            Particle {
                position,
                velocity,
                color,
                size,
            }
        })
        .collect()
}

/// Advance every particle by one frame of velocity and wrap it into `bounds`.
pub fn step_particles(particles: &mut [Particle], bounds: &Bounds) {
    for p in particles.iter_mut() {
        p.position = bounds.wrap(p.position + p.velocity);
    }
}

/// Count of particles per color class, in [`ParticleColor::ALL`] order.
pub fn color_histogram(particles: &[Particle]) -> [usize; 3] {
    let mut out = [0usize; 3];
    for p in particles {
        out[p.color.index()] += 1;
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn unit_box() -> Bounds {
        Bounds::symmetric(Vec3::splat(50.0))
    }

    #[test]
    fn wrap_keeps_overshoot() {
        let b = unit_box();
        let p = b.wrap(Vec3::new(50.005, 0.0, 0.0));
        assert!((p.x - (-49.995)).abs() < 1e-4, "got {}", p.x);
        let p = b.wrap(Vec3::new(-50.25, 0.0, 0.0));
        assert!((p.x - 49.75).abs() < 1e-4, "got {}", p.x);
    }

    #[test]
    fn wrap_leaves_inside_and_edges_untouched() {
        let b = unit_box();
        let p = Vec3::new(50.0, -50.0, 12.5);
        assert_eq!(b.wrap(p), p);
    }

    #[test]
    fn wrap_handles_multiple_spans() {
        let b = unit_box();
        let p = b.wrap(Vec3::new(260.0, -310.0, 0.0));
        assert!(b.contains(p));
        assert!((p.x - (-40.0)).abs() < 1e-3);
        assert!((p.y - (-10.0)).abs() < 1e-3);
    }

    #[test]
    fn step_moves_then_wraps() {
        let b = unit_box();
        let mut ps = [Particle {
            position: Vec3::new(49.995, 0.0, 0.0),
            velocity: Vec3::new(0.01, 0.0, 0.0),
            color: ParticleColor::Primary,
            size: 1.0,
        }];
        step_particles(&mut ps, &b);
        assert!((ps[0].position.x - (-50.0 + 0.005)).abs() < 1e-4);
    }

    #[test]
    fn color_draw_respects_zero_weights() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..1000 {
            let c = ParticleColor::draw(&mut rng, &[0.0, 1.0, 0.0]);
            assert_eq!(c, ParticleColor::Secondary);
        }
    }

    #[test]
    fn color_draw_tracks_weights() {
        let mut rng = StdRng::seed_from_u64(99);
        let mut counts = [0usize; 3];
        let n = 20_000;
        for _ in 0..n {
            counts[ParticleColor::draw(&mut rng, &[0.6, 0.2, 0.2]).index()] += 1;
        }
        let primary = counts[0] as f32 / n as f32;
        assert!((primary - 0.6).abs() < 0.02, "primary share {primary}");
    }

    #[test]
    fn spawn_respects_config_ranges() {
        let cfg = FieldConfig::home();
        let mut rng = StdRng::seed_from_u64(1);
        let ps = spawn_particles(&cfg, &mut rng);
        assert_eq!(ps.len(), cfg.particle_count);
        for p in &ps {
            assert!(cfg.bounds.contains(p.position));
            assert!(p.velocity.abs().cmple(cfg.velocity).all());
            assert!(p.size >= cfg.size_range.0 && p.size <= cfg.size_range.1);
        }
    }
}
