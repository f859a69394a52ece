//! Centralized engine options with TOML preset support.
//!
//! Sphere geometry, animation timing, relaxation thresholds, challenge-mode
//! tolerances and camera projection are consolidated here. Options
//! serialize to/from TOML so a visualization can be configured from a file.

mod animation;
mod camera;
mod challenge;
mod relaxation;
mod sphere;

use std::path::Path;

pub use animation::AnimationOptions;
pub use camera::CameraOptions;
pub use challenge::ChallengeOptions;
pub use relaxation::RelaxationOptions;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
pub use sphere::SphereOptions;

use crate::error::BlochError;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[animation]`) work correctly.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct Options {
    /// Sphere radius and rest-pose origin.
    pub sphere: SphereOptions,
    /// Gate-rotation and drive timing.
    pub animation: AnimationOptions,
    /// T1/T2 convergence thresholds.
    pub relaxation: RelaxationOptions,
    /// Challenge-mode tolerances.
    pub challenge: ChallengeOptions,
    /// Camera projection parameters.
    #[schemars(skip)]
    pub camera: CameraOptions,
}

impl Options {
    /// Generate JSON Schema describing the UI-exposed options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// Parse options from TOML text. Missing fields use defaults.
    pub fn from_toml(content: &str) -> Result<Self, BlochError> {
        toml::from_str(content)
            .map_err(|e| BlochError::OptionsParse(e.to_string()))
    }

    /// Load options from a TOML file. Missing fields use defaults.
    pub fn load(path: &Path) -> Result<Self, BlochError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Save options to a TOML file (pretty-printed).
    pub fn save(&self, path: &Path) -> Result<(), BlochError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| BlochError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content).map_err(BlochError::Io)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::Easing;

    #[test]
    fn default_round_trips_through_toml() {
        let opts = Options::default();
        let toml_str = toml::to_string_pretty(&opts).unwrap();
        let parsed = Options::from_toml(&toml_str).unwrap();
        assert_eq!(opts, parsed);
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let toml_str = r#"
[animation]
gate_duration_ms = 900
gate_easing = "sine_in_out"
"#;
        let opts = Options::from_toml(toml_str).unwrap();
        assert_eq!(opts.animation.gate_duration_ms, 900);
        assert_eq!(opts.animation.gate_easing, Easing::SineInOut);
        // Everything else should be default
        assert_eq!(opts.animation.drive_duration_ms, 5000);
        assert_eq!(opts.sphere.radius, 1.0);
        assert_eq!(opts.challenge.capture_radius, 0.1);
    }

    #[test]
    fn malformed_toml_is_an_options_error() {
        let err = Options::from_toml("[animation]\ngate_duration_ms = \"slow\"")
            .unwrap_err();
        assert!(matches!(err, BlochError::OptionsParse(_)));
    }

    #[test]
    fn save_then_load() {
        let dir = std::env::temp_dir().join(format!(
            "bloch-options-{}",
            std::process::id()
        ));
        let path = dir.join("preset.toml");
        let mut opts = Options::default();
        opts.sphere.radius = 2.0;
        opts.save(&path).unwrap();
        assert_eq!(Options::load(&path).unwrap(), opts);
        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = Options::load(Path::new("/nonexistent/bloch.toml"))
            .unwrap_err();
        assert!(matches!(err, BlochError::Io(_)));
    }

    #[test]
    fn schema_has_expected_properties() {
        let schema_value =
            serde_json::to_value(Options::json_schema()).unwrap();
        let props = schema_value["properties"].as_object().unwrap();

        assert!(props.contains_key("sphere"));
        assert!(props.contains_key("animation"));
        assert!(props.contains_key("relaxation"));
        assert!(props.contains_key("challenge"));
        assert!(!props.contains_key("camera"));

        let animation = &props["animation"]["properties"];
        assert!(animation.get("gate_duration_ms").is_some());
        assert!(animation.get("drive_frequency_offset_ms").is_none());
    }
}
