//! Camera state and user-facing orbit controls.
//!
//! The camera keeps only an eye position around a fixed look-at target;
//! everything orientation-related is derived on demand.

/// Damped orbit rotate/zoom controls around the fixed target.
pub mod controller;
/// Core camera struct and GPU uniform types.
pub mod core;

pub use controller::OrbitController;
pub use self::core::{Camera, CameraUniform};
