use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Autorotate", inline)]
#[serde(default)]
/// Idle orbit speed.
pub struct AutorotateOptions {
    /// Orbit speed around the vertical axis in radians per second
    /// (negative reverses direction).
    #[schemars(title = "Angular Speed", range(min = -1.0, max = 1.0), extend("step" = 0.005))]
    pub angular_speed: f32,
}

impl Default for AutorotateOptions {
    fn default() -> Self {
        // One full orbit every two minutes.
        Self {
            angular_speed: std::f32::consts::TAU / 120.0,
        }
    }
}
