//! Centralized choreography options with TOML preset support.
//!
//! Every tunable (idle deadlines, transition shape, autorotate speed,
//! camera start pose, effect curves) lives here. Options serialize to and
//! from TOML so scene variants are presets rather than code.

mod autorotate;
mod camera;
mod effects;
mod idle;
mod transition;

use std::path::Path;

pub use autorotate::AutorotateOptions;
pub use camera::CameraOptions;
pub use effects::EffectsOptions;
pub use idle::IdleOptions;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
pub use transition::{TargetPolicy, TransitionOptions};

use crate::error::LullError;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[idle]`) work correctly.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct Options {
    /// Idle deadlines and activity signals.
    pub idle: IdleOptions,
    /// Idle transition shape and destination.
    pub transition: TransitionOptions,
    /// Idle orbit speed.
    pub autorotate: AutorotateOptions,
    /// Camera start pose, projection, and controls.
    pub camera: CameraOptions,
    /// Distance-driven post-process parameters.
    pub effects: EffectsOptions,
}

impl Options {
    /// Generate JSON Schema describing the UI-exposed options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// Parse options from TOML text. Missing fields use defaults.
    pub fn from_toml(content: &str) -> Result<Self, LullError> {
        toml::from_str(content)
            .map_err(|e| LullError::OptionsParse(e.to_string()))
    }

    /// Load options from a TOML file. Missing fields use defaults.
    pub fn load(path: &Path) -> Result<Self, LullError> {
        let content = std::fs::read_to_string(path).map_err(LullError::Io)?;
        Self::from_toml(&content)
    }

    /// Save options to a TOML file (pretty-printed).
    pub fn save(&self, path: &Path) -> Result<(), LullError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| LullError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(LullError::Io)?;
        }
        std::fs::write(path, content).map_err(LullError::Io)
    }

    /// List available preset names (TOML file stems) in a directory.
    #[must_use]
    pub fn list_presets(dir: &Path) -> Vec<String> {
        let mut names = Vec::new();
        if let Ok(entries) = std::fs::read_dir(dir) {
            for entry in entries.flatten() {
                let path = entry.path();
                if path.extension().is_some_and(|ext| ext == "toml") {
                    if let Some(stem) =
                        path.file_stem().and_then(|s| s.to_str())
                    {
                        names.push(stem.to_owned());
                    }
                }
            }
        }
        names.sort();
        names
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::InteractionKind;
    use crate::util::easing::EasingFunction;

    #[test]
    fn default_round_trips_through_toml() {
        let opts = Options::default();
        let toml_str = toml::to_string_pretty(&opts).unwrap();
        let parsed: Options = toml::from_str(&toml_str).unwrap();
        assert_eq!(opts, parsed);
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let toml_str = r"
[idle]
rotate_delay_ms = 8000
";
        let opts = Options::from_toml(toml_str).unwrap();
        assert_eq!(opts.idle.rotate_delay_ms, 8000);
        // Everything else should be default
        assert_eq!(opts.idle.transition_delay_ms, 10000);
        assert_eq!(opts.transition.duration_ms, 3000);
        assert_eq!(opts.transition.policy, TargetPolicy::ZoomOut { factor: 1.2 });
        assert_eq!(opts.camera.position, [0.0, 1.5, 4.0]);
    }

    #[test]
    fn variant_preset_parses() {
        let toml_str = r#"
[idle]
transition_delay_ms = 15000
signals = ["pointer_down", "pointer_move", "wheel"]

[transition]
duration_ms = 4000
seed = 7

[transition.easing]
kind = "cubic_in_out"

[transition.policy]
kind = "shell"
radius = 6.0
min_polar = 0.6
max_polar = 1.4

[effects.fog]
base = 0.0
slope = 0.02
min = 0.0
max = 0.2
"#;
        let opts = Options::from_toml(toml_str).unwrap();
        assert!(opts.idle.signals.contains(&InteractionKind::PointerMove));
        assert!(!opts.idle.signals.contains(&InteractionKind::KeyDown));
        assert_eq!(opts.transition.easing, EasingFunction::CubicInOut);
        assert_eq!(opts.transition.seed, Some(7));
        assert_eq!(
            opts.transition.policy,
            TargetPolicy::Shell {
                radius: 6.0,
                min_polar: 0.6,
                max_polar: 1.4
            }
        );
        assert_eq!(opts.effects.fog.max, 0.2);
        // Untouched curve keeps its defaults.
        assert_eq!(opts.effects.bloom, EffectsOptions::default().bloom);
    }

    #[test]
    fn malformed_toml_is_an_options_error() {
        let err = Options::from_toml("[idle]\nrotate_delay_ms = \"soon\"\n")
            .unwrap_err();
        assert!(matches!(err, LullError::OptionsParse(_)));
    }

    #[test]
    fn save_then_load_preserves_options() {
        let dir = std::env::temp_dir().join(format!(
            "lull-options-test-{}",
            std::process::id()
        ));
        let path = dir.join("slow_orbit.toml");
        let mut opts = Options::default();
        opts.autorotate.angular_speed = 0.25;
        opts.transition.policy = TargetPolicy::Waypoint {
            position: [2.0, 3.0, 6.0],
        };
        opts.save(&path).unwrap();

        assert_eq!(Options::load(&path).unwrap(), opts);
        assert_eq!(Options::list_presets(&dir), vec!["slow_orbit".to_owned()]);
        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn schema_has_expected_properties() {
        let schema_value =
            serde_json::to_value(Options::json_schema()).unwrap();
        let props = schema_value["properties"].as_object().unwrap();

        for section in ["idle", "transition", "autorotate", "camera", "effects"]
        {
            assert!(props.contains_key(section), "missing {section}");
        }

        let idle = &props["idle"]["properties"];
        assert!(idle.get("rotate_delay_ms").is_some());
        assert!(idle.get("signals").is_none());

        let camera = &props["camera"]["properties"];
        assert!(camera.get("fovy").is_some());
        assert!(camera.get("position").is_none());
    }
}
