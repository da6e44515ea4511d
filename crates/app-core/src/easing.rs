//! Scalar easing helpers shared by the field, the choreographer and the UI
//! animators.

/// Clamp to `[0, 1]`. NaN and infinities map to 0 so degenerate ratios
/// (zero-height sections, empty windows) never leak into styles.
#[inline]
pub fn clamp01(v: f32) -> f32 {
    if v.is_finite() {
        v.clamp(0.0, 1.0)
    } else {
        0.0
    }
}

/// Ratio `num / den` clamped to `[0, 1]`; a zero denominator yields 0.
#[inline]
pub fn ratio01(num: f32, den: f32) -> f32 {
    clamp01(num / den)
}

/// `1 - (1 - t)^3`
#[inline]
pub fn ease_out_cubic(t: f32) -> f32 {
    let t = clamp01(t);
    let inv = 1.0 - t;
    1.0 - inv * inv * inv
}

/// `1 - (1 - t)^4`
#[inline]
pub fn ease_out_quart(t: f32) -> f32 {
    let t = clamp01(t);
    let inv = 1.0 - t;
    1.0 - inv * inv * inv * inv
}

/// GLSL-style smoothstep. `edge0 > edge1` is allowed and yields a falling
/// curve, which the repulsion falloff relies on.
#[inline]
pub fn smoothstep(edge0: f32, edge1: f32, x: f32) -> f32 {
    let t = clamp01((x - edge0) / (edge1 - edge0));
    t * t * (3.0 - 2.0 * t)
}

#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Easing curve applied after a phase window re-normalizes progress.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Easing {
    Linear,
    #[default]
    OutCubic,
}

impl Easing {
    #[inline]
    pub fn apply(self, t: f32) -> f32 {
        match self {
            Easing::Linear => clamp01(t),
            Easing::OutCubic => ease_out_cubic(t),
        }
    }
}
