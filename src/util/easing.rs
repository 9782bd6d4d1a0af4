//! Easing curves for camera transitions.
//!
//! Every curve maps normalized time in `[0, 1]` to normalized progress in
//! `[0, 1]`, hits both endpoints exactly, and is non-decreasing, so an eased
//! lerp never leaves the segment between its endpoints.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Easing curve selected by `[transition] easing` in options.
///
/// Serialized as a tagged table so presets stay readable:
/// ```toml
/// [transition.easing]
/// kind = "quadratic_in_out"
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema,
)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum EasingFunction {
    /// Constant velocity.
    Linear,
    /// Quadratic ease-in (slow start, fast end).
    QuadraticIn,
    /// Quadratic ease-out (fast start, slow end).
    QuadraticOut,
    /// Quadratic ease-in-out (slow at both ends).
    QuadraticInOut,
    /// Cubic ease-in-out, a steeper middle than the quadratic variant.
    CubicInOut,
    /// Square root ease-out (fast start, gradual slow).
    SqrtOut,
    /// Cubic Bezier-style curve with fixed endpoints 0 and 1:
    /// `c1·3t(1-t)² + c2·3(1-t)t² + t³`.
    ///
    /// Monotonic only while both control values stay within `[0, 1]`.
    CubicHermite {
        /// First interior control value.
        c1: f32,
        /// Second interior control value.
        c2: f32,
    },
}

impl EasingFunction {
    /// Default camera easing: symmetric quadratic ease-in-out.
    pub const DEFAULT: EasingFunction = EasingFunction::QuadraticInOut;

    /// Evaluate the curve at `t` (clamped to `[0, 1]`).
    #[inline]
    #[must_use]
    pub fn evaluate(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);

        match *self {
            Self::Linear => t,
            Self::QuadraticIn => t * t,
            Self::QuadraticOut => {
                let omt = 1.0 - t;
                1.0 - omt * omt
            }
            Self::QuadraticInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    let u = -2.0 * t + 2.0;
                    1.0 - u * u / 2.0
                }
            }
            Self::CubicInOut => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    let u = -2.0 * t + 2.0;
                    1.0 - u * u * u / 2.0
                }
            }
            Self::SqrtOut => t.sqrt(),
            Self::CubicHermite { c1, c2 } => {
                let omt = 1.0 - t;
                c1 * 3.0 * t * omt * omt + c2 * 3.0 * omt * t * t + t * t * t
            }
        }
    }

    /// Whether the curve can leave `[0, 1]` between its endpoints.
    #[must_use]
    pub fn overshoots(&self) -> bool {
        match *self {
            Self::CubicHermite { c1, c2 } => {
                !(0.0..=1.0).contains(&c1) || !(0.0..=1.0).contains(&c2)
            }
            _ => false,
        }
    }
}

impl Default for EasingFunction {
    #[inline]
    fn default() -> Self {
        Self::DEFAULT
    }
}
