//! Configuration records for the particle field.
//!
//! Both pages of the site run the same component; they differ only in the
//! numbers collected here. [`FieldConfig::home`] and [`FieldConfig::detail`]
//! are the two shipped presets.

use crate::constants::*;
use crate::error::ConfigError;
use crate::particles::Bounds;
use crate::shapes::ShapeKind;
use glam::{Vec2, Vec3};
use smallvec::{smallvec, SmallVec};

/// Connection line tuning.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LineParams {
    /// Pairs closer than this (world units) are connected.
    pub threshold: f32,
    /// Hard cap on lines emitted per frame.
    pub max: usize,
    /// Only the first `check_count` particles are tested pairwise.
    pub check_count: usize,
    pub color: [f32; 3],
    pub opacity: f32,
}

/// Render-only sinusoidal drift, evaluated per vertex.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WaveParams {
    pub time_freq: Vec3,
    pub space_freq: Vec3,
    pub amplitude: Vec3,
}

impl Default for WaveParams {
    fn default() -> Self {
        Self {
            time_freq: Vec3::new(0.15, 0.12, 0.1),
            space_freq: Vec3::new(0.05, 0.05, 0.03),
            amplitude: Vec3::new(WAVE_AMPLITUDE_XY, WAVE_AMPLITUDE_XY, WAVE_AMPLITUDE_Z),
        }
    }
}

/// Pointer repulsion applied to rendered particle positions.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RepulsionParams {
    /// Maps the smoothed pointer (NDC) into world units on the XY plane.
    pub pointer_scale: f32,
    pub radius: f32,
    pub strength: f32,
    /// Upper bound on the displacement length.
    pub max_offset: f32,
}

impl Default for RepulsionParams {
    fn default() -> Self {
        Self {
            pointer_scale: POINTER_WORLD_SCALE,
            radius: REPULSE_RADIUS,
            strength: REPULSE_STRENGTH,
            max_offset: REPULSE_STRENGTH,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CameraParams {
    pub base_z: f32,
    pub fov_deg: f32,
    pub near: f32,
    pub far: f32,
    /// World offset reached when the pointer sits at the NDC corner.
    pub parallax: Vec2,
    /// Per-frame follow factor toward the parallax target.
    pub follow: f32,
    /// Forward dolly per scrolled CSS pixel.
    pub dolly_per_px: f32,
}

impl Default for CameraParams {
    fn default() -> Self {
        Self {
            base_z: CAMERA_BASE_Z,
            fov_deg: CAMERA_FOV_DEG,
            near: CAMERA_NEAR,
            far: CAMERA_FAR,
            parallax: Vec2::new(CAMERA_PARALLAX_X, CAMERA_PARALLAX_Y),
            follow: CAMERA_FOLLOW,
            dolly_per_px: CAMERA_DOLLY_PER_PX,
        }
    }
}

/// Scroll fade thresholds in multiples of the viewport height.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FadeParams {
    pub start_vh: f32,
    pub end_vh: f32,
    pub floor: f32,
}

impl Default for FadeParams {
    fn default() -> Self {
        Self {
            start_vh: FADE_START_VH,
            end_vh: FADE_END_VH,
            floor: FADE_FLOOR,
        }
    }
}

/// One wireframe accent. Spin and float rates are drawn from the field RNG.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ShapeSpec {
    pub kind: ShapeKind,
    pub anchor: Vec3,
    pub size: f32,
    pub color: [f32; 3],
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridParams {
    pub size: f32,
    pub divisions: usize,
    pub base_y: f32,
    pub base_z: f32,
    pub color: [f32; 3],
    pub opacity: f32,
}

impl Default for GridParams {
    fn default() -> Self {
        Self {
            size: GRID_SIZE,
            divisions: GRID_DIVISIONS,
            base_y: GRID_BASE_Y,
            base_z: GRID_BASE_Z,
            color: AMBER,
            opacity: GRID_OPACITY,
        }
    }
}

/// Everything needed to build a [`ParticleField`](crate::ParticleField).
#[derive(Clone, Debug, PartialEq)]
pub struct FieldConfig {
    pub particle_count: usize,
    pub bounds: Bounds,
    /// Velocities are uniform in `[-velocity, velocity]` per axis (units/frame).
    pub velocity: Vec3,
    pub size_range: (f32, f32),
    /// Weights of primary, secondary and tertiary colors.
    pub color_weights: [f32; 3],
    pub palette: [[f32; 3]; 3],
    pub lines: LineParams,
    pub pointer_smoothing: f32,
    pub wave: WaveParams,
    pub repulsion: RepulsionParams,
    pub camera: CameraParams,
    pub fade: FadeParams,
    pub shapes: SmallVec<[ShapeSpec; 6]>,
    pub grid: GridParams,
    pub seed: u64,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self::home()
    }
}

impl FieldConfig {
    /// Landing page: 600 particles in a 100 x 100 x 50 box.
    pub fn home() -> Self {
        Self {
            particle_count: PARTICLE_COUNT_HOME,
            bounds: Bounds::new(Vec3::new(-50.0, -50.0, -35.0), Vec3::new(50.0, 50.0, 15.0)),
            velocity: Vec3::new(0.0075, 0.0075, 0.004),
            size_range: (PARTICLE_SIZE_MIN, PARTICLE_SIZE_MAX),
            color_weights: [0.6, 0.2, 0.2],
            palette: [AMBER, CYAN, STEEL],
            lines: LineParams {
                threshold: LINE_THRESHOLD,
                max: LINE_MAX,
                check_count: LINE_CHECK_COUNT,
                color: AMBER,
                opacity: LINE_OPACITY,
            },
            pointer_smoothing: POINTER_SMOOTHING,
            wave: WaveParams::default(),
            repulsion: RepulsionParams::default(),
            camera: CameraParams::default(),
            fade: FadeParams::default(),
            shapes: default_shapes(),
            grid: GridParams::default(),
            seed: 0x5EED_F1E1D,
        }
    }

    /// Service detail page: denser, tighter field with shorter links.
    pub fn detail() -> Self {
        Self {
            particle_count: PARTICLE_COUNT_DETAIL,
            bounds: Bounds::new(Vec3::new(-40.0, -40.0, -30.0), Vec3::new(40.0, 40.0, 10.0)),
            velocity: Vec3::new(0.01, 0.01, 0.005),
            color_weights: [0.5, 0.3, 0.2],
            lines: LineParams {
                threshold: 8.0,
                max: 200,
                check_count: 100,
                color: CYAN,
                opacity: LINE_OPACITY,
            },
            pointer_smoothing: 0.05,
            seed: 0xDE7A_11ED,
            ..Self::home()
        }
    }

    /// Picks a preset by name; unknown names fall back to `home`.
    pub fn preset(name: &str) -> Self {
        match name {
            "detail" => Self::detail(),
            _ => Self::home(),
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_particle_count(mut self, count: usize) -> Self {
        self.particle_count = count;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.particle_count == 0 {
            return Err(ConfigError::NoParticles);
        }
        self.bounds.validate()?;

        let w = self.color_weights;
        let weights_ok = w.iter().all(|x| x.is_finite() && *x >= 0.0) && w.iter().sum::<f32>() > 0.0;
        if !weights_ok {
            return Err(ConfigError::InvalidColorWeights(w));
        }

        let (lo, hi) = self.size_range;
        if !(lo >= 0.0 && hi >= lo) {
            return Err(ConfigError::InvalidSizeRange { min: lo, max: hi });
        }

        let t = self.lines.threshold;
        if !(t.is_finite() && t > 0.0) {
            return Err(ConfigError::InvalidLineThreshold(t));
        }

        for (name, value) in [
            ("pointer_smoothing", self.pointer_smoothing),
            ("camera.follow", self.camera.follow),
        ] {
            if !(value > 0.0 && value <= 1.0) {
                return Err(ConfigError::InvalidSmoothing { name, value });
            }
        }

        if !(self.fade.end_vh > self.fade.start_vh) {
            return Err(ConfigError::InvalidFade {
                start: self.fade.start_vh,
                end: self.fade.end_vh,
            });
        }
        Ok(())
    }
}

fn default_shapes() -> SmallVec<[ShapeSpec; 6]> {
    smallvec![
        ShapeSpec {
            kind: ShapeKind::Icosahedron,
            anchor: Vec3::new(-25.0, 10.0, -20.0),
            size: 3.0,
            color: AMBER,
        },
        ShapeSpec {
            kind: ShapeKind::Octahedron,
            anchor: Vec3::new(28.0, -8.0, -25.0),
            size: 2.0,
            color: CYAN,
        },
        ShapeSpec {
            kind: ShapeKind::Torus,
            anchor: Vec3::new(-20.0, -12.0, -15.0),
            size: 3.0,
            color: AMBER,
        },
        ShapeSpec {
            kind: ShapeKind::Tetrahedron,
            anchor: Vec3::new(22.0, 15.0, -18.0),
            size: 1.5,
            color: CYAN,
        },
        ShapeSpec {
            kind: ShapeKind::Ring,
            anchor: Vec3::new(0.0, -18.0, -22.0),
            size: 3.0,
            color: AMBER,
        },
        ShapeSpec {
            kind: ShapeKind::Dodecahedron,
            anchor: Vec3::new(30.0, 5.0, -30.0),
            size: 1.8,
            color: STEEL,
        },
    ]
}
