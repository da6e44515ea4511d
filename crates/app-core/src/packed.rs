//! GPU-facing buffer layouts. Field order and padding match the WGSL structs
//! in `shaders/`.

use glam::{Mat4, Vec3};

/// One particle instance for the billboard pipeline.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct ParticleInstance {
    pub position: [f32; 3],
    pub size: f32,
    pub color: [f32; 4],
}

/// Line-list vertex; `color.a` carries the material opacity.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct LineVertex {
    pub position: [f32; 3],
    pub _pad: f32,
    pub color: [f32; 4],
}

impl LineVertex {
    pub const ZERO: LineVertex = LineVertex {
        position: [0.0; 3],
        _pad: 0.0,
        color: [0.0; 4],
    };

    #[inline]
    pub fn new(position: Vec3, color: [f32; 4]) -> Self {
        Self {
            position: position.to_array(),
            _pad: 0.0,
            color,
        }
    }
}

/// Scene uniforms shared by both pipelines.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct SceneUniforms {
    pub view_proj: [[f32; 4]; 4],
    pub view: [[f32; 4]; 4],
    /// xyz: wave time frequencies, w: elapsed seconds
    pub wave_time: [f32; 4],
    /// xyz: wave spatial frequencies, w: field opacity
    pub wave_space: [f32; 4],
    /// xyz: wave amplitudes, w: particle base alpha
    pub wave_amp: [f32; 4],
    /// xy: pointer in world units, z: repulse radius, w: repulse strength
    pub pointer: [f32; 4],
    /// xy: surface size in px, z: max repulse offset, w: point size scale
    pub resolution: [f32; 4],
    /// x: depth fade far, y: depth fade near, zw: unused
    pub depth_fade: [f32; 4],
}

impl SceneUniforms {
    pub fn matrices(view_proj: Mat4, view: Mat4) -> Self {
        Self {
            view_proj: view_proj.to_cols_array_2d(),
            view: view.to_cols_array_2d(),
            ..bytemuck::Zeroable::zeroed()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layouts_are_16_byte_multiples() {
        assert_eq!(std::mem::size_of::<ParticleInstance>(), 32);
        assert_eq!(std::mem::size_of::<LineVertex>(), 32);
        assert_eq!(std::mem::size_of::<SceneUniforms>() % 16, 0);
        assert_eq!(std::mem::size_of::<SceneUniforms>(), 64 * 2 + 16 * 6);
    }
}
