use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use web_time::Duration;

use crate::animation::Easing;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Animation", inline)]
#[serde(default)]
/// Timing of gate rotations and the continuous dephasing drive.
pub struct AnimationOptions {
    /// Duration of one gate rotation in milliseconds.
    #[schemars(title = "Gate Duration", range(min = 0, max = 5000), extend("step" = 50))]
    pub gate_duration_ms: u64,
    /// Easing applied to gate rotations.
    #[schemars(title = "Gate Easing")]
    pub gate_easing: Easing,
    /// Duration of one drive half-turn in milliseconds.
    #[schemars(title = "Drive Period", range(min = 50, max = 26000), extend("step" = 50))]
    pub drive_duration_ms: u64,
    /// Drive frequency `f` maps to a half-turn duration of `offset − f`.
    #[schemars(skip)]
    pub drive_frequency_offset_ms: f32,
    /// Floor for the drive half-turn duration.
    #[schemars(skip)]
    pub min_drive_duration_ms: u64,
}

impl AnimationOptions {
    /// Gate rotation duration.
    pub fn gate_duration(&self) -> Duration {
        Duration::from_millis(self.gate_duration_ms)
    }

    /// Drive half-turn duration.
    pub fn drive_duration(&self) -> Duration {
        Duration::from_millis(self.drive_duration_ms)
    }

    /// Half-turn duration in milliseconds for drive frequency `frequency`.
    pub fn drive_duration_for_frequency(&self, frequency: f32) -> u64 {
        let floor = self.min_drive_duration_ms as f32;
        let ms = self.drive_frequency_offset_ms - frequency;
        if ms.is_nan() {
            return self.min_drive_duration_ms;
        }
        ms.max(floor).round() as u64
    }
}

impl Default for AnimationOptions {
    fn default() -> Self {
        Self {
            gate_duration_ms: 600,
            gate_easing: Easing::Linear,
            drive_duration_ms: 5000,
            drive_frequency_offset_ms: 26000.0,
            min_drive_duration_ms: 50,
        }
    }
}
