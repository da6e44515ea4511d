//! The particle field: one struct owning every piece of backdrop state,
//! advanced by an explicit [`ParticleField::tick`].

use crate::camera::CameraRig;
use crate::config::FieldConfig;
use crate::constants::{
    DEPTH_FADE_FAR, DEPTH_FADE_NEAR, PARTICLE_ALPHA, POINT_SIZE_SCALE, SHAPE_OPACITY,
};
use crate::error::ConfigError;
use crate::fade::field_opacity;
use crate::grid::GridFloor;
use crate::input::{FrameInput, InputPort};
use crate::lines::LineSet;
use crate::packed::{LineVertex, ParticleInstance, SceneUniforms};
use crate::particles::{color_histogram, spawn_particles, step_particles, Particle};
use crate::pointer::Smoothed2;
use crate::shapes::FloatingShape;
use glam::Vec2;
use rand::rngs::StdRng;
use rand::SeedableRng;
use smallvec::SmallVec;

/// Borrowed view of everything the renderer needs for one frame.
#[derive(Clone, Copy, Debug)]
pub struct FrameSnapshot<'a> {
    pub instances: &'a [ParticleInstance],
    /// All `2 * line_max` slots; unused ones are zeroed.
    pub connection_vertices: &'a [LineVertex],
    pub connection_count: usize,
    /// Grid and shape wireframes.
    pub scene_vertices: &'a [LineVertex],
    pub uniforms: SceneUniforms,
}

pub struct ParticleField {
    config: FieldConfig,
    particles: Vec<Particle>,
    lines: LineSet,
    pointer: Smoothed2,
    shapes: SmallVec<[FloatingShape; 6]>,
    grid: GridFloor,
    rig: CameraRig,
    elapsed: f32,
    frames: u64,
    scroll_y: f32,
    viewport: Vec2,
    opacity: f32,
    instances: Vec<ParticleInstance>,
    scene_vertices: Vec<LineVertex>,
}

impl ParticleField {
    pub fn new(config: FieldConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let mut rng = StdRng::seed_from_u64(config.seed);
        let particles = spawn_particles(&config, &mut rng);
        let shapes = config
            .shapes
            .iter()
            .map(|spec| FloatingShape::spawn(*spec, &mut rng))
            .collect();
        let viewport = FrameInput::default().viewport;
        let mut field = Self {
            lines: LineSet::new(config.lines.max),
            pointer: Smoothed2::new(config.pointer_smoothing),
            grid: GridFloor::new(config.grid),
            rig: CameraRig::new(config.camera, viewport.x / viewport.y),
            shapes,
            particles,
            elapsed: 0.0,
            frames: 0,
            scroll_y: 0.0,
            viewport,
            opacity: 1.0,
            instances: Vec::with_capacity(config.particle_count),
            scene_vertices: Vec::new(),
            config,
        };
        field.refresh_instances();
        field.refresh_scene_vertices();
        log::debug!(
            "[field] particles={} colors={:?} shapes={} grid_lines={}",
            field.particles.len(),
            color_histogram(&field.particles),
            field.shapes.len(),
            field.grid.line_count()
        );
        Ok(field)
    }

    /// Poll `port` once and advance one frame.
    pub fn advance<P: InputPort + ?Sized>(&mut self, port: &mut P, dt: f32) {
        let input = port.poll();
        self.tick(dt, &input);
    }

    /// Advance one display frame. `dt` is seconds since the previous frame;
    /// particle motion is per frame, so only the clock depends on it.
    pub fn tick(&mut self, dt: f32, input: &FrameInput) {
        let dt = if dt.is_finite() && dt >= 0.0 {
            dt
        } else {
            log::warn!("[field] ignoring frame delta {dt}");
            0.0
        };
        self.elapsed += dt;
        self.frames += 1;
        let t = self.elapsed;

        if let Some(ndc) = input.pointer_ndc {
            self.pointer.set_target(ndc);
        }
        let pointer = self.pointer.step();

        if input.scroll_y.is_finite() {
            self.scroll_y = input.scroll_y;
        }
        if input.viewport != self.viewport && input.viewport.is_finite() {
            self.viewport = input.viewport;
            self.rig.set_viewport(self.viewport.x, self.viewport.y);
        }

        step_particles(&mut self.particles, &self.config.bounds);
        self.lines.rebuild(&self.particles, &self.config.lines);

        for shape in &mut self.shapes {
            shape.step(t);
        }
        self.grid.step(t);
        self.rig.step(pointer, self.scroll_y);
        self.opacity = field_opacity(&self.config.fade, self.scroll_y, self.viewport.y);

        self.refresh_instances();
        self.refresh_scene_vertices();
    }

    fn refresh_instances(&mut self) {
        let palette = &self.config.palette;
        self.instances.clear();
        self.instances.extend(self.particles.iter().map(|p| {
            let [r, g, b] = palette[p.color.index()];
            ParticleInstance {
                position: p.position.to_array(),
                size: p.size,
                color: [r, g, b, 1.0],
            }
        }));
    }

    fn refresh_scene_vertices(&mut self) {
        self.scene_vertices.clear();
        self.grid.write_vertices(&mut self.scene_vertices);
        for shape in &self.shapes {
            shape.write_vertices(SHAPE_OPACITY, &mut self.scene_vertices);
        }
    }

    /// Uniform block for a surface `surface_px` physical pixels large.
    pub fn uniforms(&self, surface_px: Vec2) -> SceneUniforms {
        let cam = &self.rig.camera;
        let w = &self.config.wave;
        let r = &self.config.repulsion;
        let p = self.pointer.value * r.pointer_scale;
        SceneUniforms {
            wave_time: [w.time_freq.x, w.time_freq.y, w.time_freq.z, self.elapsed],
            wave_space: [w.space_freq.x, w.space_freq.y, w.space_freq.z, self.opacity],
            wave_amp: [w.amplitude.x, w.amplitude.y, w.amplitude.z, PARTICLE_ALPHA],
            pointer: [p.x, p.y, r.radius, r.strength],
            resolution: [surface_px.x, surface_px.y, r.max_offset, POINT_SIZE_SCALE],
            depth_fade: [DEPTH_FADE_FAR, DEPTH_FADE_NEAR, 0.0, 0.0],
            ..SceneUniforms::matrices(cam.view_proj(), cam.view_matrix())
        }
    }

    pub fn snapshot(&self, surface_px: Vec2) -> FrameSnapshot<'_> {
        FrameSnapshot {
            instances: &self.instances,
            connection_vertices: self.lines.vertices(),
            connection_count: self.lines.len(),
            scene_vertices: &self.scene_vertices,
            uniforms: self.uniforms(surface_px),
        }
    }

    pub fn config(&self) -> &FieldConfig {
        &self.config
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Direct access for hosts that seed specific layouts (tests, demos).
    pub fn particles_mut(&mut self) -> &mut [Particle] {
        &mut self.particles
    }

    pub fn lines(&self) -> &LineSet {
        &self.lines
    }

    pub fn shapes(&self) -> &[FloatingShape] {
        &self.shapes
    }

    pub fn grid(&self) -> &GridFloor {
        &self.grid
    }

    pub fn rig(&self) -> &CameraRig {
        &self.rig
    }

    pub fn pointer(&self) -> Vec2 {
        self.pointer.value
    }

    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    pub fn frame_count(&self) -> u64 {
        self.frames
    }

    pub fn opacity(&self) -> f32 {
        self.opacity
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_field() {
        let a = ParticleField::new(FieldConfig::home()).unwrap();
        let b = ParticleField::new(FieldConfig::home()).unwrap();
        assert_eq!(a.particles(), b.particles());
        let c = ParticleField::new(FieldConfig::home().with_seed(1)).unwrap();
        assert_ne!(a.particles(), c.particles());
    }

    #[test]
    fn invalid_config_is_rejected() {
        let err = ParticleField::new(FieldConfig::home().with_particle_count(0));
        assert!(matches!(err, Err(ConfigError::NoParticles)));
    }

    #[test]
    fn bad_dt_does_not_move_clock() {
        let mut f = ParticleField::new(FieldConfig::home()).unwrap();
        let input = FrameInput::default();
        f.tick(-1.0, &input);
        f.tick(f32::NAN, &input);
        assert_eq!(f.elapsed(), 0.0);
        assert_eq!(f.frame_count(), 2);
        f.tick(0.5, &input);
        assert_eq!(f.elapsed(), 0.5);
    }

    #[test]
    fn snapshot_sizes_follow_config() {
        let f = ParticleField::new(FieldConfig::detail()).unwrap();
        let s = f.snapshot(Vec2::new(800.0, 600.0));
        assert_eq!(s.instances.len(), 800);
        assert_eq!(s.connection_vertices.len(), 200 * 2);
        assert_eq!(s.uniforms.resolution[0], 800.0);
    }
}
