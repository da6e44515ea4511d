//! Single-pole low-pass follower for pointer-like 2D inputs.

use glam::Vec2;

/// `value += (target - value) * factor`, once per frame.
///
/// The backdrop uses it in NDC for repulsion and parallax; the custom cursor
/// uses the same filter in CSS pixels with a faster factor.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Smoothed2 {
    pub value: Vec2,
    pub target: Vec2,
    pub factor: f32,
}

impl Smoothed2 {
    pub fn new(factor: f32) -> Self {
        Self {
            value: Vec2::ZERO,
            target: Vec2::ZERO,
            factor: factor.clamp(0.0, 1.0),
        }
    }

    /// Record the latest raw sample. Non-finite samples are dropped.
    #[inline]
    pub fn set_target(&mut self, target: Vec2) {
        if target.is_finite() {
            self.target = target;
        }
    }

    #[inline]
    pub fn step(&mut self) -> Vec2 {
        self.value += (self.target - self.value) * self.factor;
        self.value
    }
}

/// Map a client-space position to NDC with y up. A zero-sized viewport maps
/// to the center.
#[inline]
pub fn client_to_ndc(x: f32, y: f32, width: f32, height: f32) -> Vec2 {
    if !(width > 0.0 && height > 0.0) {
        return Vec2::ZERO;
    }
    Vec2::new((x / width) * 2.0 - 1.0, -(y / height) * 2.0 + 1.0)
}
