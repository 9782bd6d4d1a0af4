//! Input handling: event types, interaction signals, and the input processor
//! that converts raw window events into engine commands.

/// Platform-agnostic input events and interaction signal kinds.
pub mod event;
/// Converts raw events into engine commands.
pub mod processor;

pub use event::{InputEvent, InteractionKind, MouseButton};
pub use processor::InputProcessor;
