//! Proximity connection lines between particles.
//!
//! Lines are rebuilt from scratch every frame. Only the first
//! `check_count` particles take part so the pair scan stays O(k²) in a
//! small k, and the output stops at `max` lines.

use crate::config::LineParams;
use crate::easing::clamp01;
use crate::packed::LineVertex;
use crate::particles::Particle;
use glam::Vec3;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ConnectionLine {
    pub a: Vec3,
    pub b: Vec3,
    /// `1 - distance / threshold`
    pub alpha: f32,
}

/// Opacity of a line whose endpoints are `distance` apart.
#[inline]
pub fn line_alpha(distance: f32, threshold: f32) -> f32 {
    clamp01(1.0 - distance / threshold)
}

/// Fixed-capacity line buffer. `vertices` always holds `2 * max` entries;
/// slots past the live lines are zeroed so nothing stale is drawn.
#[derive(Clone, Debug)]
pub struct LineSet {
    lines: Vec<ConnectionLine>,
    vertices: Vec<LineVertex>,
    max: usize,
}

impl LineSet {
    pub fn new(max: usize) -> Self {
        Self {
            lines: Vec::with_capacity(max),
            vertices: vec![LineVertex::ZERO; max * 2],
            max,
        }
    }

    pub fn capacity(&self) -> usize {
        self.max
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn lines(&self) -> &[ConnectionLine] {
        &self.lines
    }

    /// GPU-ready vertex pairs, including the zeroed tail.
    pub fn vertices(&self) -> &[LineVertex] {
        &self.vertices
    }

    /// Only the vertices of live lines.
    pub fn live_vertices(&self) -> &[LineVertex] {
        &self.vertices[..self.lines.len() * 2]
    }

    /// Rescan the first `params.check_count` particles and rebuild lines.
    /// Returns the number of lines emitted.
    pub fn rebuild(&mut self, particles: &[Particle], params: &LineParams) -> usize {
        self.lines.clear();
        let k = particles.len().min(params.check_count);
        let threshold = params.threshold;

        'outer: for i in 0..k {
            let pi = particles[i].position;
            for pj in particles[i + 1..k].iter().map(|p| p.position) {
                if self.lines.len() >= self.max {
                    break 'outer;
                }
                let dist = pi.distance(pj);
                if dist < threshold {
                    self.lines.push(ConnectionLine {
                        a: pi,
                        b: pj,
                        alpha: line_alpha(dist, threshold),
                    });
                }
            }
        }

        for (slot, line) in self.vertices.chunks_exact_mut(2).zip(&self.lines) {
            let c = [
                params.color[0] * line.alpha,
                params.color[1] * line.alpha,
                params.color[2] * line.alpha,
                params.opacity,
            ];
            slot[0] = LineVertex::new(line.a, c);
            slot[1] = LineVertex::new(line.b, c);
        }
        for v in &mut self.vertices[self.lines.len() * 2..] {
            *v = LineVertex::ZERO;
        }
        self.lines.len()
    }
}

/// Number of pairs among the first `check_count` positions closer than
/// `threshold`, ignoring any cap.
pub fn count_close_pairs(positions: &[Vec3], check_count: usize, threshold: f32) -> usize {
    let k = positions.len().min(check_count);
    let mut n = 0;
    for i in 0..k {
        for j in i + 1..k {
            if positions[i].distance(positions[j]) < threshold {
                n += 1;
            }
        }
    }
    n
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::particles::ParticleColor;

    fn at(x: f32) -> Particle {
        Particle {
            position: Vec3::new(x, 0.0, 0.0),
            velocity: Vec3::ZERO,
            color: ParticleColor::Primary,
            size: 1.0,
        }
    }

    fn params(max: usize, check: usize) -> LineParams {
        LineParams {
            threshold: 10.0,
            max,
            check_count: check,
            color: [1.0, 0.5, 0.25],
            opacity: 0.12,
        }
    }

    #[test]
    fn alpha_endpoints() {
        assert_eq!(line_alpha(0.0, 10.0), 1.0);
        assert_eq!(line_alpha(10.0, 10.0), 0.0);
        assert!((line_alpha(2.5, 10.0) - 0.75).abs() < 1e-6);
        assert_eq!(line_alpha(12.0, 10.0), 0.0);
    }

    #[test]
    fn pair_at_threshold_is_not_connected() {
        let ps = [at(0.0), at(10.0)];
        let mut set = LineSet::new(4);
        assert_eq!(set.rebuild(&ps, &params(4, 80)), 0);
    }

    #[test]
    fn rebuild_emits_close_pairs_with_premultiplied_color() {
        let ps = [at(0.0), at(5.0), at(100.0)];
        let mut set = LineSet::new(4);
        assert_eq!(set.rebuild(&ps, &params(4, 80)), 1);
        let line = set.lines()[0];
        assert!((line.alpha - 0.5).abs() < 1e-6);
        let v = set.live_vertices();
        assert_eq!(v.len(), 2);
        assert_eq!(v[0].position, [0.0, 0.0, 0.0]);
        assert_eq!(v[1].position, [5.0, 0.0, 0.0]);
        assert!((v[0].color[0] - 0.5).abs() < 1e-6);
        assert!((v[0].color[1] - 0.25).abs() < 1e-6);
    }

    #[test]
    fn cap_limits_output() {
        let ps: Vec<Particle> = (0..10).map(|i| at(i as f32 * 0.1)).collect();
        let mut set = LineSet::new(3);
        assert_eq!(set.rebuild(&ps, &params(3, 80)), 3);
    }

    #[test]
    fn only_checked_subset_participates() {
        let ps = [at(0.0), at(50.0), at(1.0)];
        let mut set = LineSet::new(8);
        // particle 2 sits outside the checked prefix
        assert_eq!(set.rebuild(&ps, &params(8, 2)), 0);
        assert_eq!(set.rebuild(&ps, &params(8, 3)), 1);
    }

    #[test]
    fn stale_slots_are_zeroed() {
        let close: Vec<Particle> = (0..4).map(|i| at(i as f32)).collect();
        let mut set = LineSet::new(6);
        assert_eq!(set.rebuild(&close, &params(6, 80)), 6);

        let far = [at(0.0), at(1.0), at(40.0), at(80.0)];
        assert_eq!(set.rebuild(&far, &params(6, 80)), 1);
        for v in &set.vertices()[2..] {
            assert_eq!(*v, LineVertex::ZERO);
        }
    }
}
