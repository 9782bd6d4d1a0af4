use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use web_time::Duration;

use crate::util::easing::EasingFunction;

/// Where an idle transition moves the camera.
///
/// ```toml
/// [transition.policy]
/// kind = "shell"
/// radius = 6.0
/// min_polar = 0.6
/// max_polar = 1.4
/// ```
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, JsonSchema)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TargetPolicy {
    /// Scale the eye's offset from the target by `factor`.
    ZoomOut {
        /// Radial scale factor (> 1 moves away from the target).
        factor: f32,
    },
    /// Random point on a sphere of `radius` around the target, with the
    /// polar angle (radians from +Y) drawn from `[min_polar, max_polar]`
    /// and a uniform azimuth.
    Shell {
        /// Shell radius.
        radius: f32,
        /// Smallest polar angle in radians.
        min_polar: f32,
        /// Largest polar angle in radians.
        max_polar: f32,
    },
    /// Fixed world-space point.
    Waypoint {
        /// Destination eye position.
        position: [f32; 3],
    },
}

impl Default for TargetPolicy {
    fn default() -> Self {
        Self::ZoomOut { factor: 1.2 }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Transition", inline)]
#[serde(default)]
/// Idle transition duration, easing, and destination policy.
pub struct TransitionOptions {
    /// Transition length in milliseconds (0 jumps straight to the end).
    #[schemars(title = "Duration (ms)", range(min = 0, max = 20000), extend("step" = 100))]
    pub duration_ms: u64,
    /// Velocity profile of the move.
    #[schemars(skip)]
    pub easing: EasingFunction,
    /// Destination policy.
    #[schemars(skip)]
    pub policy: TargetPolicy,
    /// Fixed RNG seed for the shell policy (random when absent).
    #[schemars(skip)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl TransitionOptions {
    /// Transition length as a [`Duration`].
    #[must_use]
    pub fn duration(&self) -> Duration {
        Duration::from_millis(self.duration_ms)
    }
}

impl Default for TransitionOptions {
    fn default() -> Self {
        Self {
            duration_ms: 3000,
            easing: EasingFunction::DEFAULT,
            policy: TargetPolicy::default(),
            seed: None,
        }
    }
}
