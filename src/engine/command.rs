//! The engine's complete interactive vocabulary.
//!
//! Every user-facing operation reaches the engine as a `SceneCommand`,
//! whether it came from the [`InputProcessor`](crate::input::InputProcessor)
//! or a programmatic call to
//! [`ChoreographyEngine::execute`](super::ChoreographyEngine::execute).

use glam::Vec2;

use crate::input::InteractionKind;

/// A single operation applied to the choreography engine.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SceneCommand {
    /// User activity: restart the idle cycle, cancel any transition, stop
    /// autorotate.
    Interaction {
        /// Which signal was observed.
        kind: InteractionKind,
    },
    /// Orbit the camera by a pointer drag delta in pixels.
    Rotate {
        /// Drag delta in physical pixels.
        delta: Vec2,
    },
    /// Zoom the camera (positive = toward the target).
    Zoom {
        /// Scroll amount.
        delta: f32,
    },
}
