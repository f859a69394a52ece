use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Challenge", inline)]
#[serde(default)]
/// Challenge-mode tolerances.
pub struct ChallengeOptions {
    /// A marker is collected when the arrow tip comes closer than this.
    #[schemars(title = "Capture Radius", range(min = 0.01, max = 0.5), extend("step" = 0.01))]
    pub capture_radius: f32,
}

impl Default for ChallengeOptions {
    fn default() -> Self {
        Self {
            capture_radius: 0.1,
        }
    }
}
