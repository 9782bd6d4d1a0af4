//! Small shared helpers: easing curves and frame timing.

/// Easing curves for eased camera transitions.
pub mod easing;
/// Frame-to-frame elapsed time measurement.
pub mod frame_timing;
