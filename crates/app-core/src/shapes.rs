//! Floating wireframe accents.
//!
//! Each shape spins by a fixed per-axis delta every frame and bobs around its
//! anchor height on a sine with its own speed and phase. Wireframes are built
//! once in local space and transformed into line vertices per frame.

use crate::config::ShapeSpec;
use crate::constants::SHAPE_FLOAT_AMPLITUDE;
use crate::packed::LineVertex;
use glam::{EulerRot, Quat, Vec3};
use rand::Rng;
use std::f32::consts::{PI, TAU};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    Tetrahedron,
    Octahedron,
    Icosahedron,
    Dodecahedron,
    /// Tube radius is a tenth of the ring radius.
    Torus,
    /// Flat hexagonal annulus, inner radius two thirds of the outer.
    Ring,
}

const PHI: f32 = 1.618_034;

impl ShapeKind {
    /// Edges of the wireframe for circumradius `size`.
    pub fn wireframe(self, size: f32) -> Vec<(Vec3, Vec3)> {
        match self {
            ShapeKind::Tetrahedron => polyhedron_edges(&[
                Vec3::new(1.0, 1.0, 1.0),
                Vec3::new(-1.0, -1.0, 1.0),
                Vec3::new(-1.0, 1.0, -1.0),
                Vec3::new(1.0, -1.0, -1.0),
            ], size),
            ShapeKind::Octahedron => polyhedron_edges(&[
                Vec3::X,
                Vec3::NEG_X,
                Vec3::Y,
                Vec3::NEG_Y,
                Vec3::Z,
                Vec3::NEG_Z,
            ], size),
            ShapeKind::Icosahedron => {
                let mut v = Vec::with_capacity(12);
                for a in [-1.0, 1.0] {
                    for b in [-PHI, PHI] {
                        v.push(Vec3::new(0.0, a, b));
                        v.push(Vec3::new(a, b, 0.0));
                        v.push(Vec3::new(b, 0.0, a));
                    }
                }
                subdivided_edges(&v, size)
            }
            ShapeKind::Dodecahedron => {
                let inv = 1.0 / PHI;
                let mut v = Vec::with_capacity(20);
                for x in [-1.0, 1.0] {
                    for y in [-1.0, 1.0] {
                        for z in [-1.0, 1.0] {
                            v.push(Vec3::new(x, y, z));
                        }
                    }
                }
                for a in [-inv, inv] {
                    for b in [-PHI, PHI] {
                        v.push(Vec3::new(0.0, a, b));
                        v.push(Vec3::new(a, b, 0.0));
                        v.push(Vec3::new(b, 0.0, a));
                    }
                }
                polyhedron_edges(&v, size)
            }
            ShapeKind::Torus => torus_edges(size, size * 0.1, 8, 32),
            ShapeKind::Ring => ring_edges(size * 2.0 / 3.0, size, 6),
        }
    }
}

/// Index pairs at the minimum pairwise distance, which for the regular
/// solids is exactly the edge set.
fn adjacency(verts: &[Vec3]) -> Vec<(usize, usize)> {
    let mut min_d = f32::MAX;
    for i in 0..verts.len() {
        for j in i + 1..verts.len() {
            min_d = min_d.min(verts[i].distance(verts[j]));
        }
    }
    let tol = min_d * 1e-3;
    let mut pairs = Vec::new();
    for i in 0..verts.len() {
        for j in i + 1..verts.len() {
            if (verts[i].distance(verts[j]) - min_d).abs() <= tol {
                pairs.push((i, j));
            }
        }
    }
    pairs
}

fn on_sphere(raw: &[Vec3], radius: f32) -> Vec<Vec3> {
    raw.iter().map(|v| v.normalize() * radius).collect()
}

fn polyhedron_edges(raw: &[Vec3], radius: f32) -> Vec<(Vec3, Vec3)> {
    let verts = on_sphere(raw, radius);
    adjacency(&verts)
        .into_iter()
        .map(|(i, j)| (verts[i], verts[j]))
        .collect()
}

/// Triangle-faced solid split once: every face becomes four, with the new
/// midpoints pushed out to the circumsphere.
fn subdivided_edges(raw: &[Vec3], radius: f32) -> Vec<(Vec3, Vec3)> {
    let verts = on_sphere(raw, radius);
    let pairs = adjacency(&verts);
    let linked = |a: usize, b: usize| pairs.contains(&(a.min(b), a.max(b)));
    let mid = |a: usize, b: usize| (verts[a] + verts[b]).normalize() * radius;

    let mut edges = Vec::with_capacity(pairs.len() * 4);
    for &(i, j) in &pairs {
        let m = mid(i, j);
        edges.push((verts[i], m));
        edges.push((m, verts[j]));
    }
    for &(i, j) in &pairs {
        // each face is visited once, from its lowest edge
        for k in j + 1..verts.len() {
            if linked(i, k) && linked(j, k) {
                let (ij, jk, ki) = (mid(i, j), mid(j, k), mid(k, i));
                edges.push((ij, jk));
                edges.push((jk, ki));
                edges.push((ki, ij));
            }
        }
    }
    edges
}

fn torus_edges(radius: f32, tube: f32, radial: usize, tubular: usize) -> Vec<(Vec3, Vec3)> {
    let vertex = |i: usize, j: usize| {
        let u = (i % tubular) as f32 / tubular as f32 * TAU;
        let v = (j % radial) as f32 / radial as f32 * TAU;
        Vec3::new(
            (radius + tube * v.cos()) * u.cos(),
            (radius + tube * v.cos()) * u.sin(),
            tube * v.sin(),
        )
    };
    let mut edges = Vec::with_capacity(radial * tubular * 2);
    for i in 0..tubular {
        for j in 0..radial {
            edges.push((vertex(i, j), vertex(i + 1, j)));
            edges.push((vertex(i, j), vertex(i, j + 1)));
        }
    }
    edges
}

fn ring_edges(inner: f32, outer: f32, segments: usize) -> Vec<(Vec3, Vec3)> {
    let at = |r: f32, k: usize| {
        let a = (k % segments) as f32 / segments as f32 * TAU;
        Vec3::new(r * a.cos(), r * a.sin(), 0.0)
    };
    let mut edges = Vec::with_capacity(segments * 3);
    for k in 0..segments {
        edges.push((at(inner, k), at(inner, k + 1)));
        edges.push((at(outer, k), at(outer, k + 1)));
        edges.push((at(inner, k), at(outer, k)));
    }
    edges
}

#[derive(Clone, Debug)]
pub struct FloatingShape {
    pub spec: ShapeSpec,
    /// Radians added to the Euler rotation each frame.
    pub spin: Vec3,
    pub float_speed: f32,
    pub float_phase: f32,
    pub rotation: Vec3,
    pub position: Vec3,
    edges: Vec<(Vec3, Vec3)>,
}

impl FloatingShape {
    pub fn spawn<R: Rng + ?Sized>(spec: ShapeSpec, rng: &mut R) -> Self {
        let spin = Vec3::new(
            (rng.gen::<f32>() - 0.5) * 0.003,
            (rng.gen::<f32>() - 0.5) * 0.003,
            (rng.gen::<f32>() - 0.5) * 0.002,
        );
        Self {
            spec,
            spin,
            float_speed: 0.2 + rng.gen::<f32>() * 0.3,
            float_phase: rng.gen::<f32>() * PI * 2.0,
            rotation: Vec3::ZERO,
            position: spec.anchor,
            edges: spec.kind.wireframe(spec.size),
        }
    }

    /// One frame: accumulate spin, bob around the anchor at time `t`.
    pub fn step(&mut self, t: f32) {
        self.rotation += self.spin;
        self.position.y =
            self.spec.anchor.y + (t * self.float_speed + self.float_phase).sin() * SHAPE_FLOAT_AMPLITUDE;
    }

    /// Append world-space edge vertices.
    pub fn write_vertices(&self, opacity: f32, out: &mut Vec<LineVertex>) {
        let q = Quat::from_euler(EulerRot::XYZ, self.rotation.x, self.rotation.y, self.rotation.z);
        let [r, g, b] = self.spec.color;
        let color = [r, g, b, opacity];
        for (a, bv) in &self.edges {
            out.push(LineVertex::new(q * *a + self.position, color));
            out.push(LineVertex::new(q * *bv + self.position, color));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn platonic_edge_counts() {
        assert_eq!(ShapeKind::Tetrahedron.wireframe(1.5).len(), 6);
        assert_eq!(ShapeKind::Octahedron.wireframe(2.0).len(), 12);
        assert_eq!(ShapeKind::Dodecahedron.wireframe(1.8).len(), 30);
    }

    #[test]
    fn icosahedron_is_subdivided_once() {
        // 20 faces split into 80: 30 edges halved plus 3 inner edges per face
        let edges = ShapeKind::Icosahedron.wireframe(3.0);
        assert_eq!(edges.len(), 30 * 2 + 20 * 3);
        let mut verts: Vec<Vec3> = Vec::new();
        for (a, b) in &edges {
            for v in [*a, *b] {
                if !verts.iter().any(|u| u.distance(v) < 1e-4) {
                    verts.push(v);
                }
            }
        }
        assert_eq!(verts.len(), 42);
        // subdivided edges are much shorter than the base edge (~3.15)
        assert!(edges.iter().all(|(a, b)| a.distance(*b) < 2.0));
    }

    #[test]
    fn vertices_sit_on_circumradius() {
        for (a, b) in ShapeKind::Icosahedron.wireframe(3.0) {
            assert!((a.length() - 3.0).abs() < 1e-4);
            assert!((b.length() - 3.0).abs() < 1e-4);
        }
    }

    #[test]
    fn torus_and_ring_edge_counts() {
        assert_eq!(ShapeKind::Torus.wireframe(3.0).len(), 8 * 32 * 2);
        assert_eq!(ShapeKind::Ring.wireframe(3.0).len(), 18);
    }

    #[test]
    fn float_stays_within_amplitude_and_spin_accumulates() {
        let spec = ShapeSpec {
            kind: ShapeKind::Octahedron,
            anchor: Vec3::new(28.0, -8.0, -25.0),
            size: 2.0,
            color: [1.0, 1.0, 1.0],
        };
        let mut rng = StdRng::seed_from_u64(3);
        let mut s = FloatingShape::spawn(spec, &mut rng);
        for frame in 0..600 {
            s.step(frame as f32 / 60.0);
            assert!((s.position.y - spec.anchor.y).abs() <= SHAPE_FLOAT_AMPLITUDE + 1e-4);
            assert_eq!(s.position.x, spec.anchor.x);
        }
        assert!((s.rotation - s.spin * 600.0).length() < 1e-4);
    }

    #[test]
    fn write_vertices_emits_two_per_edge() {
        let spec = ShapeSpec {
            kind: ShapeKind::Tetrahedron,
            anchor: Vec3::ZERO,
            size: 1.0,
            color: [0.5, 0.5, 0.5],
        };
        let mut rng = StdRng::seed_from_u64(3);
        let s = FloatingShape::spawn(spec, &mut rng);
        let mut out = Vec::new();
        s.write_vertices(0.06, &mut out);
        assert_eq!(out.len(), 12);
        assert!(out.iter().all(|v| v.color[3] == 0.06));
    }
}
