//! Interruptible, eased point-to-point camera moves.

use std::f32::consts::{PI, TAU};

use glam::Vec3;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use web_time::{Duration, Instant};

use crate::camera::Camera;
use crate::options::{TargetPolicy, TransitionOptions};
use crate::util::easing::EasingFunction;

/// Minimum angular distance (radians) a shell sample keeps from either pole.
pub const POLE_MARGIN: f32 = 0.05;

/// One eased camera move from `start_position` to `end_position`.
#[derive(Debug, Clone, PartialEq)]
pub struct CameraTransition {
    start_position: Vec3,
    end_position: Vec3,
    start_time: Instant,
    duration: Duration,
    easing: EasingFunction,
    cancelled: bool,
}

impl CameraTransition {
    /// Create a running transition.
    #[must_use]
    pub fn new(
        start_position: Vec3,
        end_position: Vec3,
        start_time: Instant,
        duration: Duration,
        easing: EasingFunction,
    ) -> Self {
        Self {
            start_position,
            end_position,
            start_time,
            duration,
            easing,
            cancelled: false,
        }
    }

    /// Eye position when the transition began.
    #[must_use]
    pub fn start_position(&self) -> Vec3 {
        self.start_position
    }

    /// Eye position the transition is heading to.
    #[must_use]
    pub fn end_position(&self) -> Vec3 {
        self.end_position
    }

    /// Whether the transition has been cancelled.
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.cancelled
    }

    /// Normalized time in `[0, 1]`.
    ///
    /// A zero duration is complete immediately; a timestamp before the start
    /// counts as zero progress.
    #[must_use]
    pub fn progress(&self, now: Instant) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(self.start_time);
        (elapsed.as_secs_f32() / self.duration.as_secs_f32()).min(1.0)
    }

    /// Eye position at normalized time `t`.
    ///
    /// Exactly `start_position` at `t <= 0` and exactly `end_position` at
    /// `t >= 1`.
    #[must_use]
    pub fn position_at(&self, t: f32) -> Vec3 {
        if t >= 1.0 {
            return self.end_position;
        }
        let eased = self.easing.evaluate(t);
        if eased <= 0.0 {
            return self.start_position;
        }
        self.start_position.lerp(self.end_position, eased)
    }
}

/// Outcome of advancing the scheduler by one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TransitionStep {
    /// No transition exists.
    Idle,
    /// The camera was moved; normalized time after this frame.
    Running {
        /// Normalized time in `[0, 1)`.
        progress: f32,
    },
    /// The camera reached the end position this frame.
    Completed,
    /// A cancelled transition was discarded; the camera was not touched.
    Cancelled,
}

/// Owns at most one [`CameraTransition`] and drives it frame by frame.
///
/// `Idle → Running → {Completed | Cancelled} → Idle`. A cancelled
/// transition is never resumed; the next idle cycle builds a new one.
pub struct TransitionScheduler {
    active: Option<CameraTransition>,
    policy: TargetPolicy,
    duration: Duration,
    easing: EasingFunction,
    rng: StdRng,
}

impl TransitionScheduler {
    /// Create an idle scheduler.
    #[must_use]
    pub fn new(
        policy: TargetPolicy,
        duration: Duration,
        easing: EasingFunction,
        rng: StdRng,
    ) -> Self {
        Self {
            active: None,
            policy,
            duration,
            easing,
            rng,
        }
    }

    /// Create an idle scheduler from the `[transition]` options section.
    #[must_use]
    pub fn from_options(options: &TransitionOptions) -> Self {
        let rng = options
            .seed
            .map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);
        Self::new(options.policy, options.duration(), options.easing, rng)
    }

    /// Whether a non-cancelled transition is in flight.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.active.as_ref().is_some_and(|t| !t.cancelled)
    }

    /// Whether any transition (running or awaiting discard) exists.
    #[must_use]
    pub fn has_active(&self) -> bool {
        self.active.is_some()
    }

    /// The current transition, if any.
    #[must_use]
    pub fn active(&self) -> Option<&CameraTransition> {
        self.active.as_ref()
    }

    /// Begin a transition from the camera's current eye at `now`.
    ///
    /// Returns `false` and changes nothing while another transition is
    /// running. A cancelled transition still awaiting discard is replaced.
    pub fn start(&mut self, camera: &Camera, now: Instant) -> bool {
        if self.is_running() {
            return false;
        }
        let start = camera.eye;
        let end = self.end_position(camera);
        self.active = Some(CameraTransition::new(
            start,
            end,
            now,
            self.duration,
            self.easing,
        ));
        true
    }

    /// Flag the running transition as cancelled.
    ///
    /// The camera keeps its last written position and the transition is
    /// dropped on the next [`advance`](Self::advance). Returns `true` only
    /// when this call cancelled something; repeated calls are no-ops.
    pub fn cancel(&mut self) -> bool {
        match self.active.as_mut() {
            Some(transition) if !transition.cancelled => {
                transition.cancelled = true;
                true
            }
            _ => false,
        }
    }

    /// Move the camera for the frame at `now`.
    pub fn advance(&mut self, camera: &mut Camera, now: Instant) -> TransitionStep {
        let Some(transition) = self.active.as_ref() else {
            return TransitionStep::Idle;
        };
        if transition.cancelled {
            self.active = None;
            return TransitionStep::Cancelled;
        }

        let t = transition.progress(now);
        camera.eye = transition.position_at(t);

        if t >= 1.0 {
            self.active = None;
            TransitionStep::Completed
        } else {
            TransitionStep::Running { progress: t }
        }
    }

    /// Destination for a transition starting from `camera`.
    fn end_position(&mut self, camera: &Camera) -> Vec3 {
        match self.policy {
            TargetPolicy::ZoomOut { factor } => {
                camera.target + camera.offset() * factor
            }
            TargetPolicy::Shell {
                radius,
                min_polar,
                max_polar,
            } => {
                let (lo, hi) = polar_bounds(min_polar, max_polar);
                let polar = if lo < hi {
                    self.rng.random_range(lo..=hi)
                } else {
                    lo
                };
                let azimuth = self.rng.random_range(0.0..TAU);
                camera.target + shell_point(radius, polar, azimuth)
            }
            TargetPolicy::Waypoint { position } => Vec3::from_array(position),
        }
    }
}

/// Order the configured polar bounds and keep them off the poles.
fn polar_bounds(min_polar: f32, max_polar: f32) -> (f32, f32) {
    let (lo, hi) = if min_polar <= max_polar {
        (min_polar, max_polar)
    } else {
        (max_polar, min_polar)
    };
    let clamp = |a: f32| a.clamp(POLE_MARGIN, PI - POLE_MARGIN);
    (clamp(lo), clamp(hi))
}

/// Point on a sphere of `radius`, polar angle measured from +Y.
fn shell_point(radius: f32, polar: f32, azimuth: f32) -> Vec3 {
    let (sin_p, cos_p) = polar.sin_cos();
    let (sin_a, cos_a) = azimuth.sin_cos();
    Vec3::new(sin_p * cos_a, cos_p, sin_p * sin_a) * radius
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::CameraOptions;

    fn ms(v: u64) -> Duration {
        Duration::from_millis(v)
    }

    fn camera() -> Camera {
        Camera::from_options(&CameraOptions::default(), 1.0)
    }

    fn scheduler(policy: TargetPolicy, duration: Duration) -> TransitionScheduler {
        TransitionScheduler::new(
            policy,
            duration,
            EasingFunction::QuadraticInOut,
            StdRng::seed_from_u64(42),
        )
    }

    #[test]
    fn endpoints_are_exact() {
        let t0 = Instant::now();
        let transition = CameraTransition::new(
            Vec3::new(0.1, 1.5, 4.0),
            Vec3::new(0.12, 1.8, 4.8),
            t0,
            ms(4000),
            EasingFunction::CubicInOut,
        );
        assert_eq!(transition.position_at(transition.progress(t0)), transition.start_position());
        assert_eq!(
            transition.position_at(transition.progress(t0 + ms(4000))),
            transition.end_position()
        );
        assert_eq!(
            transition.position_at(transition.progress(t0 + ms(9000))),
            transition.end_position()
        );
    }

    #[test]
    fn interior_points_stay_on_segment() {
        let t0 = Instant::now();
        let start = Vec3::new(-1.0, 2.0, 3.0);
        let end = Vec3::new(4.0, -2.0, 8.0);
        let transition =
            CameraTransition::new(start, end, t0, ms(1000), EasingFunction::QuadraticInOut);
        let span = (end - start).length();
        for step in 0..=100u64 {
            let p = transition.position_at(transition.progress(t0 + ms(step * 10)));
            let along = (p - start).length() + (end - p).length();
            assert!((along - span).abs() < 1e-4, "off segment at step {step}");
        }
    }

    #[test]
    fn zero_duration_completes_immediately() {
        let t0 = Instant::now();
        let mut sched = scheduler(TargetPolicy::ZoomOut { factor: 2.0 }, Duration::ZERO);
        let mut cam = camera();
        let expected = cam.eye * 2.0;
        assert!(sched.start(&cam, t0));
        assert_eq!(sched.advance(&mut cam, t0), TransitionStep::Completed);
        assert_eq!(cam.eye, expected);
        assert!(!sched.has_active());
    }

    #[test]
    fn timestamp_before_start_is_zero_progress() {
        let t0 = Instant::now() + ms(1000);
        let mut sched = scheduler(TargetPolicy::ZoomOut { factor: 2.0 }, ms(500));
        let mut cam = camera();
        let start = cam.eye;
        assert!(sched.start(&cam, t0));
        assert_eq!(
            sched.advance(&mut cam, t0 - ms(200)),
            TransitionStep::Running { progress: 0.0 }
        );
        assert_eq!(cam.eye, start);
    }

    #[test]
    fn runs_then_completes() {
        let t0 = Instant::now();
        let mut sched = scheduler(TargetPolicy::ZoomOut { factor: 1.2 }, ms(3000));
        let mut cam = camera();
        let end = cam.target + cam.offset() * 1.2;
        assert!(sched.start(&cam, t0));
        assert_eq!(
            sched.advance(&mut cam, t0 + ms(1500)),
            TransitionStep::Running { progress: 0.5 }
        );
        assert_eq!(sched.advance(&mut cam, t0 + ms(3000)), TransitionStep::Completed);
        assert_eq!(cam.eye, end);
        assert_eq!(sched.advance(&mut cam, t0 + ms(3100)), TransitionStep::Idle);
    }

    #[test]
    fn start_is_guarded_while_running() {
        let t0 = Instant::now();
        let mut sched = scheduler(TargetPolicy::ZoomOut { factor: 1.5 }, ms(1000));
        let mut cam = camera();
        assert!(sched.start(&cam, t0));
        let first = sched.active().cloned();
        let _ = sched.advance(&mut cam, t0 + ms(500));
        assert!(!sched.start(&cam, t0 + ms(600)));
        assert_eq!(sched.active().cloned(), first);
    }

    #[test]
    fn cancel_freezes_camera_and_is_idempotent() {
        let t0 = Instant::now();
        let mut sched = scheduler(TargetPolicy::ZoomOut { factor: 1.5 }, ms(1000));
        let mut cam = camera();
        assert!(sched.start(&cam, t0));
        let _ = sched.advance(&mut cam, t0 + ms(400));
        let frozen = cam.eye;
        let expected = sched.active().map(|t| t.position_at(0.4));
        assert_eq!(Some(frozen), expected);

        assert!(sched.cancel());
        assert!(!sched.cancel());
        assert!(!sched.is_running());
        assert_eq!(sched.advance(&mut cam, t0 + ms(500)), TransitionStep::Cancelled);
        assert_eq!(sched.advance(&mut cam, t0 + ms(600)), TransitionStep::Idle);
        assert!(!sched.cancel());
        assert_eq!(cam.eye, frozen);
    }

    #[test]
    fn cancelled_transition_is_replaced_not_resumed() {
        let t0 = Instant::now();
        let mut sched = scheduler(TargetPolicy::ZoomOut { factor: 2.0 }, ms(1000));
        let mut cam = camera();
        assert!(sched.start(&cam, t0));
        let _ = sched.advance(&mut cam, t0 + ms(500));
        assert!(sched.cancel());

        let restart_from = cam.eye;
        assert!(sched.start(&cam, t0 + ms(700)));
        let fresh = sched.active().cloned();
        assert_eq!(fresh.as_ref().map(CameraTransition::start_position), Some(restart_from));
        assert!(fresh.is_some_and(|t| !t.is_cancelled()));
    }

    #[test]
    fn shell_policy_respects_radius_and_polar_bounds() {
        let t0 = Instant::now();
        let (min_polar, max_polar) = (0.6, 1.4);
        let mut sched = scheduler(
            TargetPolicy::Shell {
                radius: 6.0,
                min_polar,
                max_polar,
            },
            ms(10),
        );
        let mut cam = camera();
        cam.target = Vec3::new(1.0, 0.0, -1.0);
        for _ in 0..200 {
            assert!(sched.start(&cam, t0));
            let end = sched.active().map(CameraTransition::end_position);
            let offset = end.map(|e| e - cam.target).unwrap_or_default();
            assert!((offset.length() - 6.0).abs() < 1e-4);
            let polar = (offset.y / offset.length()).acos();
            assert!(polar >= min_polar - 1e-4 && polar <= max_polar + 1e-4);
            assert!(sched.cancel());
        }
    }

    #[test]
    fn shell_policy_keeps_off_poles_with_inverted_bounds() {
        let t0 = Instant::now();
        let mut sched = scheduler(
            TargetPolicy::Shell {
                radius: 3.0,
                min_polar: PI,
                max_polar: 0.0,
            },
            ms(10),
        );
        let cam = camera();
        for _ in 0..100 {
            assert!(sched.start(&cam, t0));
            let end = sched.active().map(CameraTransition::end_position).unwrap_or_default();
            let polar = (end.y / end.length()).acos();
            assert!(polar >= POLE_MARGIN - 1e-3 && polar <= PI - POLE_MARGIN + 1e-3);
            assert!(sched.cancel());
        }
    }

    #[test]
    fn seeded_schedulers_agree() {
        let options = TransitionOptions {
            policy: TargetPolicy::Shell {
                radius: 5.0,
                min_polar: 0.5,
                max_polar: 1.2,
            },
            seed: Some(9),
            ..TransitionOptions::default()
        };
        let cam = camera();
        let t0 = Instant::now();
        let mut a = TransitionScheduler::from_options(&options);
        let mut b = TransitionScheduler::from_options(&options);
        assert!(a.start(&cam, t0) && b.start(&cam, t0));
        assert_eq!(a.active(), b.active());
    }

    #[test]
    fn waypoint_policy_is_fixed() {
        let t0 = Instant::now();
        let mut sched = scheduler(
            TargetPolicy::Waypoint {
                position: [2.0, 3.0, 6.0],
            },
            ms(100),
        );
        let mut cam = camera();
        assert!(sched.start(&cam, t0));
        assert_eq!(sched.advance(&mut cam, t0 + ms(100)), TransitionStep::Completed);
        assert_eq!(cam.eye, Vec3::new(2.0, 3.0, 6.0));
    }
}
