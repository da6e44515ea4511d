//! Configuration errors for the particle field.

use thiserror::Error;

/// Reasons a [`FieldConfig`](crate::FieldConfig) or
/// [`Choreography`](crate::Choreography) cannot be used.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("particle count must be at least 1")]
    NoParticles,

    #[error("bounds on axis {axis} are empty or inverted ({min} .. {max})")]
    InvalidBounds { axis: char, min: f32, max: f32 },

    #[error("color weights must be non-negative and sum to more than zero, got {0:?}")]
    InvalidColorWeights([f32; 3]),

    #[error("size range {min} .. {max} is inverted or negative")]
    InvalidSizeRange { min: f32, max: f32 },

    #[error("line threshold must be positive and finite, got {0}")]
    InvalidLineThreshold(f32),

    #[error("smoothing factor {name} must lie in (0, 1], got {value}")]
    InvalidSmoothing { name: &'static str, value: f32 },

    #[error("fade must end after it starts (start {start}, end {end})")]
    InvalidFade { start: f32, end: f32 },

    #[error("phase window {start} .. {end} is empty or outside [0, 1]")]
    InvalidPhaseWindow { start: f32, end: f32 },
}
