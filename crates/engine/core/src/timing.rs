//! Relationship between per-frame constants and elapsed time
//!
//! The movement and camera constants are tuned as "per rendered frame"
//! quantities. [`FrameTiming::PerFrame`] applies them as-is, so effective
//! speed depends on the display refresh rate. [`FrameTiming::Scaled`] treats
//! them as tuned for `reference_rate` frames per second and rescales by the
//! real frame interval.

use serde::{Deserialize, Serialize};

/// How per-frame quantities are scaled by the elapsed frame interval
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FrameTiming {
    /// Apply per-frame constants directly; `dt` is ignored
    #[default]
    PerFrame,
    /// Constants are tuned for `reference_rate` frames per second
    Scaled { reference_rate: f32 },
}

impl FrameTiming {
    /// Multiplier applied to per-frame displacements and accelerations
    pub fn frame_scale(&self, dt: f32) -> f32 {
        match self {
            FrameTiming::PerFrame => 1.0,
            FrameTiming::Scaled { reference_rate } => (dt * reference_rate).max(0.0),
        }
    }

    /// Convert a per-frame smoothing factor into the factor for this frame
    ///
    /// Under `Scaled`, the result is `1 - (1 - factor)^(dt * rate)` which
    /// equals `factor` when `dt` is exactly one reference frame.
    pub fn smoothing(&self, factor: f32, dt: f32) -> f32 {
        match self {
            FrameTiming::PerFrame => factor,
            FrameTiming::Scaled { .. } => {
                let frames = self.frame_scale(dt);
                1.0 - (1.0 - factor.clamp(0.0, 1.0)).powf(frames)
            }
        }
    }
}
