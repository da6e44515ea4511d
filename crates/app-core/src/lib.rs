pub mod animators;
pub mod camera;
pub mod choreo;
pub mod config;
pub mod constants;
pub mod displace;
pub mod easing;
pub mod error;
pub mod fade;
pub mod field;
pub mod grid;
pub mod input;
pub mod lines;
pub mod packed;
pub mod particles;
pub mod pointer;
pub mod shapes;

pub static PARTICLES_WGSL: &str = include_str!("../shaders/particles.wgsl");
pub static LINES_WGSL: &str = include_str!("../shaders/lines.wgsl");

pub use animators::*;
pub use camera::{Camera, CameraRig};
pub use choreo::*;
pub use config::*;
pub use constants::*;
pub use displace::displace_for_render;
pub use easing::*;
pub use error::ConfigError;
pub use fade::field_opacity;
pub use field::{FrameSnapshot, ParticleField};
pub use input::{FrameInput, InputPort, ScriptedInput, SharedInput};
pub use lines::{line_alpha, ConnectionLine, LineSet};
pub use packed::{LineVertex, ParticleInstance, SceneUniforms};
pub use particles::{Bounds, Particle, ParticleColor};
pub use pointer::{client_to_ndc, Smoothed2};
pub use shapes::{FloatingShape, ShapeKind};
