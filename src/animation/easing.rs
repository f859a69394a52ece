//! Easing curves applied to tween progress.
//!
//! Every curve maps `t ∈ [0, 1]` onto `[0, 1]` with fixed endpoints, so a
//! tween always starts at its start value and lands exactly on its end value.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Easing curve for a tween.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum Easing {
    /// Progress equals elapsed fraction.
    #[default]
    Linear,
    /// Quadratic ease-in-out.
    QuadraticInOut,
    /// Cubic ease-in-out.
    CubicInOut,
    /// Half-cosine ease-in-out.
    SineInOut,
}

impl Easing {
    /// Evaluate the curve at `t`. Input is clamped to `[0, 1]`.
    #[inline]
    #[must_use]
    pub fn evaluate(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::QuadraticInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    let u = -2.0 * t + 2.0;
                    1.0 - u * u / 2.0
                }
            }
            Self::CubicInOut => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    let u = -2.0 * t + 2.0;
                    1.0 - u * u * u / 2.0
                }
            }
            Self::SineInOut => -((std::f32::consts::PI * t).cos() - 1.0) / 2.0,
        }
    }
}
