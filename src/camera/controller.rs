use glam::{Vec2, Vec3};

use super::core::Camera;
use crate::options::CameraOptions;

/// Residual velocity below which damping snaps to rest.
const REST_EPSILON: f32 = 1e-5;

/// Reference frame rate that the damping factor is expressed against.
const DAMPING_REFERENCE_HZ: f32 = 60.0;

/// Polar angle margin that keeps the eye off the vertical axis.
const POLAR_MARGIN: f32 = 1e-3;

/// Damped orbit controls around the camera's fixed look-at target.
///
/// User gestures accumulate pending motion; [`update`](Self::update) releases
/// a damped share of it each frame, scaled by elapsed time so the glide looks
/// the same at any refresh rate. The sum of all released shares equals the
/// requested motion.
pub struct OrbitController {
    /// Pending azimuth (x) and polar (y) rotation in radians.
    rotate_pending: Vec2,
    /// Pending zoom as a log-scale distance change.
    zoom_pending: f32,

    rotate_speed: f32,
    zoom_speed: f32,
    /// Fraction of pending motion released per reference frame.
    damping: f32,
    min_distance: f32,
    max_distance: f32,
}

impl OrbitController {
    /// Create controls from camera options.
    #[must_use]
    pub fn new(options: &CameraOptions) -> Self {
        let (min_distance, max_distance) = if options.min_distance
            <= options.max_distance
        {
            (options.min_distance, options.max_distance)
        } else {
            (options.max_distance, options.min_distance)
        };
        Self {
            rotate_pending: Vec2::ZERO,
            zoom_pending: 0.0,
            rotate_speed: options.rotate_speed,
            zoom_speed: options.zoom_speed,
            damping: options.damping,
            min_distance,
            max_distance,
        }
    }

    /// Queue an orbit from a pointer drag delta in pixels.
    pub fn rotate(&mut self, delta: Vec2) {
        self.rotate_pending += -delta * self.rotate_speed;
    }

    /// Queue a zoom; positive delta moves the eye toward the target.
    pub fn zoom(&mut self, delta: f32) {
        self.zoom_pending += delta * self.zoom_speed;
    }

    /// Whether any queued motion remains.
    #[must_use]
    pub fn is_moving(&self) -> bool {
        self.rotate_pending != Vec2::ZERO || self.zoom_pending != 0.0
    }

    /// Drop all queued motion without applying it.
    pub fn stop(&mut self) {
        self.rotate_pending = Vec2::ZERO;
        self.zoom_pending = 0.0;
    }

    /// Release a damped share of the queued motion onto `camera`.
    ///
    /// Returns `true` if the eye moved. With nothing queued the camera is
    /// not touched at all.
    pub fn update(&mut self, camera: &mut Camera, dt: f32) -> bool {
        if !self.is_moving() || dt <= 0.0 {
            return false;
        }

        let share = self.release_share(dt);
        let rotate = self.rotate_pending * share;
        let zoom = self.zoom_pending * share;
        self.rotate_pending -= rotate;
        self.zoom_pending -= zoom;
        if self.rotate_pending.length() < REST_EPSILON {
            self.rotate_pending = Vec2::ZERO;
        }
        if self.zoom_pending.abs() < REST_EPSILON {
            self.zoom_pending = 0.0;
        }

        let offset = camera.offset();
        let radius = offset.length();
        if radius <= f32::EPSILON {
            return false;
        }

        // Spherical coordinates around +Y, azimuth measured from +Z.
        let polar = (offset.y / radius).clamp(-1.0, 1.0).acos();
        let azimuth = offset.x.atan2(offset.z);

        let polar = (polar + rotate.y)
            .clamp(POLAR_MARGIN, std::f32::consts::PI - POLAR_MARGIN);
        let azimuth = azimuth + rotate.x;
        let radius = (radius * (-zoom).exp())
            .clamp(self.min_distance, self.max_distance);

        let (sin_p, cos_p) = polar.sin_cos();
        let (sin_a, cos_a) = azimuth.sin_cos();
        camera.eye =
            camera.target + Vec3::new(sin_p * sin_a, cos_p, sin_p * cos_a) * radius;
        true
    }

    /// Fraction of the queued motion to apply for a frame of length `dt`.
    fn release_share(&self, dt: f32) -> f32 {
        if self.damping <= 0.0 || self.damping >= 1.0 {
            return 1.0;
        }
        let frames = dt * DAMPING_REFERENCE_HZ;
        1.0 - (1.0 - self.damping).powf(frames)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup() -> (OrbitController, Camera) {
        let options = CameraOptions::default();
        (
            OrbitController::new(&options),
            Camera::from_options(&options, 1.0),
        )
    }

    #[test]
    fn idle_controls_leave_camera_untouched() {
        let (mut controls, mut camera) = setup();
        let before = camera.eye;
        assert!(!controls.update(&mut camera, 0.016));
        assert_eq!(camera.eye, before);
    }

    #[test]
    fn rotation_preserves_distance() {
        let (mut controls, mut camera) = setup();
        let radius = camera.distance_to_target();
        controls.rotate(Vec2::new(40.0, 10.0));
        for _ in 0..30 {
            let _ = controls.update(&mut camera, 1.0 / 60.0);
        }
        assert!((camera.distance_to_target() - radius).abs() < 1e-4);
    }

    #[test]
    fn damping_is_frame_rate_independent() {
        let (mut fast, mut cam_fast) = setup();
        let (mut slow, mut cam_slow) = setup();
        fast.rotate(Vec2::new(50.0, 0.0));
        slow.rotate(Vec2::new(50.0, 0.0));

        for _ in 0..120 {
            let _ = fast.update(&mut cam_fast, 1.0 / 120.0);
        }
        for _ in 0..30 {
            let _ = slow.update(&mut cam_slow, 1.0 / 30.0);
        }
        assert!(cam_fast.eye.abs_diff_eq(cam_slow.eye, 1e-3));
    }

    #[test]
    fn damped_motion_settles_on_requested_rotation() {
        let (mut controls, mut camera) = setup();
        let start_azimuth = camera.offset().x.atan2(camera.offset().z);
        controls.rotate(Vec2::new(-100.0, 0.0));
        let expected = start_azimuth + 100.0 * CameraOptions::default().rotate_speed;
        for _ in 0..2000 {
            let _ = controls.update(&mut camera, 1.0 / 60.0);
        }
        assert!(!controls.is_moving());
        let azimuth = camera.offset().x.atan2(camera.offset().z);
        assert!((azimuth - expected).abs() < 1e-3);
    }

    #[test]
    fn zoom_respects_distance_limits() {
        let (mut controls, mut camera) = setup();
        controls.zoom(1000.0);
        for _ in 0..600 {
            let _ = controls.update(&mut camera, 1.0 / 60.0);
        }
        let min = CameraOptions::default().min_distance;
        assert!((camera.distance_to_target() - min).abs() < 1e-4);
    }

    #[test]
    fn stop_discards_pending_motion() {
        let (mut controls, mut camera) = setup();
        controls.rotate(Vec2::new(10.0, 10.0));
        controls.stop();
        let before = camera.eye;
        assert!(!controls.update(&mut camera, 0.1));
        assert_eq!(camera.eye, before);
    }
}
