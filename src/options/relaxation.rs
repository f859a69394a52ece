use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Relaxation", inline)]
#[serde(default)]
/// Convergence thresholds for the T1/T2 animations.
pub struct RelaxationOptions {
    /// T1 stops once the damping probability reaches this value.
    #[schemars(title = "T1 Stop", range(min = 0.5, max = 0.999), extend("step" = 0.005))]
    pub gamma_threshold: f32,
    /// T2 stops once the transverse coherence falls to this value.
    #[schemars(title = "T2 Stop", range(min = 0.001, max = 0.5), extend("step" = 0.005))]
    pub coherence_threshold: f32,
}

impl Default for RelaxationOptions {
    fn default() -> Self {
        Self {
            gamma_threshold: 0.95,
            coherence_threshold: 0.05,
        }
    }
}
