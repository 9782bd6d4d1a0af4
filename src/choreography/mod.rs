//! Idle-driven camera choreography.
//!
//! Three cooperating pieces, all polled once per frame by the
//! [`engine`](crate::engine):
//!
//! - [`IdleWatcher`] turns "time since last interaction" into the
//!   `rotate_due` / `transition_due` signals.
//! - [`AutorotateDriver`] orbits the camera while `rotate_due` holds.
//! - [`TransitionScheduler`] runs one eased, cancellable camera move when
//!   `transition_due` fires.

/// Idle orbit around the vertical axis.
pub mod autorotate;
/// Idle deadline tracking.
pub mod idle;
/// Eased, cancellable camera moves and destination policies.
pub mod transition;

pub use autorotate::AutorotateDriver;
pub use idle::{IdleStatus, IdleWatcher};
pub use transition::{CameraTransition, TransitionScheduler, TransitionStep};
