use serde::{Deserialize, Serialize};

/// Platform-agnostic input events.
///
/// These are fed into an [`InputProcessor`](super::InputProcessor) which
/// converts them into [`SceneCommand`](crate::engine::SceneCommand) values.
///
/// # Example
///
/// ```ignore
/// for cmd in input_processor.handle_event(InputEvent::Scroll { delta: 1.0 }) {
///     engine.execute(cmd, now);
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Cursor moved to absolute screen position.
    CursorMoved {
        /// Horizontal position in physical pixels.
        x: f32,
        /// Vertical position in physical pixels.
        y: f32,
    },
    /// Mouse button pressed or released.
    MouseButton {
        /// Which button changed.
        button: MouseButton,
        /// `true` for press, `false` for release.
        pressed: bool,
    },
    /// Scroll wheel (positive = zoom in).
    Scroll {
        /// Scroll amount (positive = zoom in, negative = zoom out).
        delta: f32,
    },
    /// Any keyboard key pressed.
    KeyDown,
    /// A touch contact began.
    TouchStart,
}

impl InputEvent {
    /// The interaction signal this event represents.
    #[must_use]
    pub fn interaction_kind(&self) -> InteractionKind {
        match self {
            Self::CursorMoved { .. } => InteractionKind::PointerMove,
            Self::MouseButton { pressed: true, .. } => {
                InteractionKind::PointerDown
            }
            Self::MouseButton { pressed: false, .. } => {
                InteractionKind::PointerUp
            }
            Self::Scroll { .. } => InteractionKind::Wheel,
            Self::KeyDown => InteractionKind::KeyDown,
            Self::TouchStart => InteractionKind::TouchStart,
        }
    }
}

/// Kinds of user activity that may reset the idle cycle.
///
/// Serde uses `snake_case` strings so presets stay readable:
/// ```toml
/// [idle]
/// signals = ["pointer_down", "wheel", "key_down"]
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InteractionKind {
    /// A pointer button went down.
    PointerDown,
    /// A pointer button was released.
    PointerUp,
    /// The pointer moved.
    PointerMove,
    /// The scroll wheel turned.
    Wheel,
    /// A key was pressed.
    KeyDown,
    /// A touch contact began.
    TouchStart,
}

impl InteractionKind {
    /// Signals that count as activity unless options say otherwise.
    pub const DEFAULT_SIGNALS: [InteractionKind; 4] = [
        InteractionKind::PointerDown,
        InteractionKind::Wheel,
        InteractionKind::KeyDown,
        InteractionKind::TouchStart,
    ];
}

/// Platform-agnostic mouse button identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    /// Primary (left) mouse button.
    Left,
    /// Secondary (right) mouse button.
    Right,
    /// Middle mouse button (wheel click).
    Middle,
}

#[cfg(feature = "viewer")]
impl From<winit::event::MouseButton> for MouseButton {
    fn from(button: winit::event::MouseButton) -> Self {
        match button {
            winit::event::MouseButton::Right => Self::Right,
            winit::event::MouseButton::Middle => Self::Middle,
            _ => Self::Left,
        }
    }
}
