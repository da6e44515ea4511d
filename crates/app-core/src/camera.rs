//! Pointer-parallax camera with a scroll dolly.
//!
//! These types avoid platform APIs so the same rig runs in host tests and in
//! the browser. The web frontend feeds it the smoothed pointer and the scroll
//! offset each frame and uploads the resulting matrices.

use crate::config::CameraParams;
use glam::{Mat4, Vec2, Vec3};

/// Simple right-handed camera description with perspective projection.
#[derive(Clone, Debug)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Camera {
    /// Compute the clip-space projection matrix.
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }
    /// Compute the view matrix that transforms world to view space.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }
    pub fn view_proj(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }
}

/// Camera that eases toward a pointer-driven offset and dollies back as the
/// page scrolls. It looks straight down -Z; parallax translates the eye
/// and target together.
#[derive(Clone, Debug)]
pub struct CameraRig {
    pub params: CameraParams,
    pub camera: Camera,
}

impl CameraRig {
    pub fn new(params: CameraParams, aspect: f32) -> Self {
        let eye = Vec3::new(0.0, 0.0, params.base_z);
        Self {
            params,
            camera: Camera {
                eye,
                target: eye - Vec3::Z,
                up: Vec3::Y,
                aspect: sane_aspect(aspect),
                fovy_radians: params.fov_deg.to_radians(),
                znear: params.near,
                zfar: params.far,
            },
        }
    }

    /// Viewport changed; only the projection depends on it.
    pub fn set_viewport(&mut self, width: f32, height: f32) {
        self.camera.aspect = sane_aspect(width / height);
    }

    pub fn step(&mut self, pointer_ndc: Vec2, scroll_y: f32) {
        let p = &self.params;
        let goal = pointer_ndc * p.parallax;
        let eye = &mut self.camera.eye;
        eye.x += (goal.x - eye.x) * p.follow;
        eye.y += (goal.y - eye.y) * p.follow;
        let scroll = if scroll_y.is_finite() { scroll_y.max(0.0) } else { 0.0 };
        eye.z = p.base_z + scroll * p.dolly_per_px;
        self.camera.target = *eye - Vec3::Z;
    }

    pub fn eye(&self) -> Vec3 {
        self.camera.eye
    }
}

#[inline]
fn sane_aspect(aspect: f32) -> f32 {
    if aspect.is_finite() && aspect > 0.0 {
        aspect
    } else {
        1.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dolly_tracks_scroll() {
        let mut rig = CameraRig::new(CameraParams::default(), 16.0 / 9.0);
        rig.step(Vec2::ZERO, 1000.0);
        assert!((rig.eye().z - 58.0).abs() < 1e-4);
        rig.step(Vec2::ZERO, 0.0);
        assert!((rig.eye().z - 50.0).abs() < 1e-4);
    }

    #[test]
    fn parallax_eases_toward_pointer() {
        let mut rig = CameraRig::new(CameraParams::default(), 1.0);
        rig.step(Vec2::new(1.0, 1.0), 0.0);
        assert!((rig.eye().x - 4.0 * 0.015).abs() < 1e-6);
        assert!((rig.eye().y - 3.0 * 0.015).abs() < 1e-6);
        for _ in 0..2000 {
            rig.step(Vec2::new(1.0, 1.0), 0.0);
        }
        assert!((rig.eye().x - 4.0).abs() < 1e-3);
        assert!((rig.eye().y - 3.0).abs() < 1e-3);
    }

    #[test]
    fn degenerate_viewport_keeps_finite_projection() {
        let mut rig = CameraRig::new(CameraParams::default(), 1.0);
        rig.set_viewport(800.0, 0.0);
        assert_eq!(rig.camera.aspect, 1.0);
        assert!(rig.camera.view_proj().is_finite());
    }

    #[test]
    fn origin_projects_inside_clip_space() {
        let rig = CameraRig::new(CameraParams::default(), 16.0 / 9.0);
        let clip = rig.camera.view_proj() * glam::Vec4::new(0.0, 0.0, 0.0, 1.0);
        let ndc = clip.truncate() / clip.w;
        assert!(ndc.x.abs() < 1e-5 && ndc.y.abs() < 1e-5);
        assert!(ndc.z > 0.0 && ndc.z < 1.0);
    }
}
