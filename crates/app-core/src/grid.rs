//! Line grid behind the particles. It is authored in the XZ plane and tilted
//! by roughly -90° about X, so it reads as a faint wall that slowly rocks and
//! sways in depth.

use crate::config::GridParams;
use crate::packed::LineVertex;
use glam::{Quat, Vec3};
use std::f32::consts::FRAC_PI_2;

#[derive(Clone, Debug)]
pub struct GridFloor {
    pub params: GridParams,
    pub rotation_x: f32,
    pub position: Vec3,
    edges: Vec<(Vec3, Vec3)>,
}

impl GridFloor {
    pub fn new(params: GridParams) -> Self {
        let half = params.size / 2.0;
        let div = params.divisions.max(1);
        let step = params.size / div as f32;
        let mut edges = Vec::with_capacity((div + 1) * 2);
        for i in 0..=div {
            let x = -half + i as f32 * step;
            edges.push((Vec3::new(x, 0.0, -half), Vec3::new(x, 0.0, half)));
        }
        for i in 0..=div {
            let z = -half + i as f32 * step;
            edges.push((Vec3::new(-half, 0.0, z), Vec3::new(half, 0.0, z)));
        }
        Self {
            params,
            rotation_x: -FRAC_PI_2,
            position: Vec3::new(0.0, params.base_y, params.base_z),
            edges,
        }
    }

    pub fn line_count(&self) -> usize {
        self.edges.len()
    }

    pub fn step(&mut self, t: f32) {
        self.rotation_x = -FRAC_PI_2 + (t * 0.05).sin() * 0.02;
        self.position.z = self.params.base_z + (t * 0.1).sin() * 2.0;
    }

    pub fn write_vertices(&self, out: &mut Vec<LineVertex>) {
        let q = Quat::from_rotation_x(self.rotation_x);
        let [r, g, b] = self.params.color;
        let color = [r, g, b, self.params.opacity];
        for (a, bv) in &self.edges {
            out.push(LineVertex::new(q * *a + self.position, color));
            out.push(LineVertex::new(q * *bv + self.position, color));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grid_has_two_families_of_lines() {
        let g = GridFloor::new(GridParams::default());
        assert_eq!(g.line_count(), 82);
    }

    #[test]
    fn sway_is_bounded() {
        let p = GridParams::default();
        let mut g = GridFloor::new(p);
        for i in 0..2000 {
            g.step(i as f32 * 0.1);
            assert!((g.position.z - p.base_z).abs() <= 2.0 + 1e-5);
            assert!((g.rotation_x + FRAC_PI_2).abs() <= 0.02 + 1e-6);
        }
    }
}
