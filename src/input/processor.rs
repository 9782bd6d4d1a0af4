//! Converts raw platform events into engine commands.
//!
//! The `InputProcessor` owns all transient input state (pointer position and
//! button state) and the set of signals that count as user activity. It is
//! the only thing that sits between raw window events and the engine's
//! [`execute`](crate::engine::ChoreographyEngine::execute) method.

use glam::Vec2;

use super::event::{InputEvent, InteractionKind, MouseButton};
use crate::engine::SceneCommand;

/// Converts raw window events into [`SceneCommand`]s.
///
/// Each event yields at most one activity command (when its kind is a
/// configured signal) followed by at most one camera-control command.
///
/// A cursor move while the primary button is held is a drag; it reports as
/// a continued [`InteractionKind::PointerDown`], so holding a drag keeps the
/// scene awake even when plain pointer motion is not a configured signal.
///
/// # Usage
///
/// ```ignore
/// for cmd in input_processor.handle_event(event) {
///     engine.execute(cmd, now);
/// }
/// ```
pub struct InputProcessor {
    /// Signals that reset the idle cycle.
    signals: Vec<InteractionKind>,
    /// Whether the primary mouse button is currently held.
    mouse_pressed: bool,
    /// Last cursor position in physical pixels (`None` until first move).
    last_cursor: Option<Vec2>,
}

impl InputProcessor {
    /// Create a processor that treats `signals` as user activity.
    #[must_use]
    pub fn new(signals: &[InteractionKind]) -> Self {
        Self {
            signals: signals.to_vec(),
            mouse_pressed: false,
            last_cursor: None,
        }
    }

    /// Process a raw input event into zero, one, or two commands.
    pub fn handle_event(&mut self, event: InputEvent) -> Vec<SceneCommand> {
        let mut commands = Vec::with_capacity(2);

        let kind = self.signal_kind(&event);
        if self.signals.contains(&kind) {
            commands.push(SceneCommand::Interaction { kind });
        }

        match event {
            InputEvent::CursorMoved { x, y } => {
                if let Some(cmd) = self.handle_cursor_moved(Vec2::new(x, y)) {
                    commands.push(cmd);
                }
            }
            InputEvent::MouseButton {
                button: MouseButton::Left,
                pressed,
            } => {
                self.mouse_pressed = pressed;
            }
            InputEvent::Scroll { delta } => {
                commands.push(SceneCommand::Zoom { delta });
            }
            InputEvent::MouseButton { .. }
            | InputEvent::KeyDown
            | InputEvent::TouchStart => {}
        }

        commands
    }

    /// Signal kind for `event`, treating drags as a held pointer press.
    fn signal_kind(&self, event: &InputEvent) -> InteractionKind {
        match event {
            InputEvent::CursorMoved { .. } if self.mouse_pressed => {
                InteractionKind::PointerDown
            }
            _ => event.interaction_kind(),
        }
    }

    /// Cursor moved: compute the delta and orbit if the button is held.
    fn handle_cursor_moved(&mut self, pos: Vec2) -> Option<SceneCommand> {
        let last = self.last_cursor.replace(pos)?;
        let delta = pos - last;
        if self.mouse_pressed && delta != Vec2::ZERO {
            return Some(SceneCommand::Rotate { delta });
        }
        None
    }
}

impl Default for InputProcessor {
    fn default() -> Self {
        Self::new(&InteractionKind::DEFAULT_SIGNALS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(pressed: bool) -> InputEvent {
        InputEvent::MouseButton {
            button: MouseButton::Left,
            pressed,
        }
    }

    #[test]
    fn default_signals_filter_hover() {
        let mut processor = InputProcessor::default();
        let _ = processor.handle_event(InputEvent::CursorMoved { x: 0.0, y: 0.0 });
        let cmds =
            processor.handle_event(InputEvent::CursorMoved { x: 5.0, y: 5.0 });
        assert!(cmds.is_empty());
    }

    #[test]
    fn key_down_is_activity_only() {
        let mut processor = InputProcessor::default();
        assert_eq!(
            processor.handle_event(InputEvent::KeyDown),
            vec![SceneCommand::Interaction {
                kind: InteractionKind::KeyDown
            }]
        );
    }

    #[test]
    fn scroll_is_activity_then_zoom() {
        let mut processor = InputProcessor::default();
        assert_eq!(
            processor.handle_event(InputEvent::Scroll { delta: 2.0 }),
            vec![
                SceneCommand::Interaction {
                    kind: InteractionKind::Wheel
                },
                SceneCommand::Zoom { delta: 2.0 },
            ]
        );
    }

    #[test]
    fn drag_rotates_and_keeps_scene_awake() {
        let mut processor = InputProcessor::default();
        let _ = processor.handle_event(InputEvent::CursorMoved { x: 10.0, y: 10.0 });
        let down = processor.handle_event(press(true));
        assert_eq!(
            down,
            vec![SceneCommand::Interaction {
                kind: InteractionKind::PointerDown
            }]
        );
        let drag =
            processor.handle_event(InputEvent::CursorMoved { x: 14.0, y: 7.0 });
        assert_eq!(
            drag,
            vec![
                SceneCommand::Interaction {
                    kind: InteractionKind::PointerDown
                },
                SceneCommand::Rotate {
                    delta: Vec2::new(4.0, -3.0)
                },
            ]
        );
        // Release is not a default signal.
        assert!(processor.handle_event(press(false)).is_empty());
        assert!(processor
            .handle_event(InputEvent::CursorMoved { x: 20.0, y: 20.0 })
            .is_empty());
    }

    #[test]
    fn opt_in_pointer_move() {
        let mut processor = InputProcessor::new(&[InteractionKind::PointerMove]);
        let cmds =
            processor.handle_event(InputEvent::CursorMoved { x: 1.0, y: 1.0 });
        assert_eq!(
            cmds,
            vec![SceneCommand::Interaction {
                kind: InteractionKind::PointerMove
            }]
        );
        assert!(processor.handle_event(InputEvent::KeyDown).is_empty());
    }
}
