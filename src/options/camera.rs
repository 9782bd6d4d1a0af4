use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Camera", inline)]
#[serde(default)]
/// Camera start pose, projection, and orbit-control parameters.
pub struct CameraOptions {
    /// Eye position when the scene starts.
    #[schemars(skip)]
    pub position: [f32; 3],
    /// Fixed look-at target.
    #[schemars(skip)]
    pub target: [f32; 3],
    /// Vertical field of view in degrees.
    #[schemars(title = "Field of View", range(min = 20.0, max = 90.0), extend("step" = 1.0))]
    pub fovy: f32,
    /// Near clipping plane distance.
    #[schemars(skip)]
    pub znear: f32,
    /// Far clipping plane distance.
    #[schemars(skip)]
    pub zfar: f32,
    /// Orbit radians per pixel of pointer drag.
    #[schemars(title = "Rotate Speed", range(min = 0.001, max = 0.02), extend("step" = 0.001))]
    pub rotate_speed: f32,
    /// Zoom sensitivity multiplier.
    #[schemars(title = "Zoom Speed", range(min = 0.01, max = 0.5), extend("step" = 0.01))]
    pub zoom_speed: f32,
    /// Share of pending orbit motion released per 60 Hz frame
    /// (0 or 1 disables damping).
    #[schemars(title = "Damping", range(min = 0.0, max = 1.0), extend("step" = 0.01))]
    pub damping: f32,
    /// Closest allowed eye distance for user zoom.
    #[schemars(skip)]
    pub min_distance: f32,
    /// Farthest allowed eye distance for user zoom.
    #[schemars(skip)]
    pub max_distance: f32,
}

impl Default for CameraOptions {
    fn default() -> Self {
        Self {
            position: [0.0, 1.5, 4.0],
            target: [0.0, 0.0, 0.0],
            fovy: 60.0,
            znear: 0.1,
            zfar: 1000.0,
            rotate_speed: 0.005,
            zoom_speed: 0.1,
            damping: 0.05,
            min_distance: 1.0,
            max_distance: 50.0,
        }
    }
}
