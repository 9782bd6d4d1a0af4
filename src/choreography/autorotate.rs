//! Idle orbit around the vertical axis.

use glam::Quat;

use crate::camera::Camera;

/// Relative distance change below which the orbit radius is held.
pub const DRIFT_TOLERANCE: f32 = 1e-5;

/// Orbits the camera around the vertical axis through its target.
///
/// Rotation is `angular_speed * dt`, so the orbit runs at the same speed
/// at any frame rate. Each increment keeps the distance the camera had
/// before it: changes smaller than [`DRIFT_TOLERANCE`] are treated as float
/// error and snapped back to the held radius, larger ones (a zoom from the
/// orbit controls) become the new radius.
#[derive(Debug, Clone)]
pub struct AutorotateDriver {
    /// Radians per second; the sign picks the direction.
    angular_speed: f32,
    /// Orbit radius after the last increment (`None` while inactive).
    radius: Option<f32>,
}

impl AutorotateDriver {
    /// Create an inactive driver.
    #[must_use]
    pub fn new(angular_speed: f32) -> Self {
        Self {
            angular_speed,
            radius: None,
        }
    }

    /// Whether the driver is currently orbiting.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.radius.is_some()
    }

    /// Start orbiting at the camera's current distance. No-op when already
    /// active. Returns `true` if this call activated the driver.
    pub fn activate(&mut self, camera: &Camera) -> bool {
        if self.radius.is_some() {
            return false;
        }
        self.radius = Some(camera.distance_to_target());
        true
    }

    /// Stop orbiting. Always safe to call. Returns `true` if the driver was
    /// active.
    pub fn deactivate(&mut self) -> bool {
        self.radius.take().is_some()
    }

    /// Rotate the eye by `angular_speed * dt` radians. Inactive drivers and
    /// degenerate (zero-length) offsets leave the camera untouched.
    pub fn advance(&mut self, camera: &mut Camera, dt: f32) {
        let Some(held) = self.radius else {
            return;
        };
        let offset = camera.offset();
        if offset.length_squared() <= f32::EPSILON {
            return;
        }

        let distance = offset.length();
        let radius = if (distance - held).abs() <= held * DRIFT_TOLERANCE {
            held
        } else {
            distance
        };
        self.radius = Some(radius);

        let rotation = Quat::from_rotation_y(self.angular_speed * dt);
        let rotated = rotation * offset;
        camera.eye = camera.target + rotated.normalize() * radius;
    }
}
