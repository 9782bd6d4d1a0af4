//! Per-frame orchestration of the idle choreography.
//!
//! [`ChoreographyEngine`] owns the camera and every component that may move
//! it. The host calls [`ChoreographyEngine::frame`] once per display frame
//! and forwards input through [`ChoreographyEngine::handle_input`] (or
//! [`ChoreographyEngine::execute`]) as it arrives. Input handlers finish
//! synchronously, so each frame sees all input delivered before it.

pub mod command;
pub mod frame;


pub use command::SceneCommand;
pub use frame::{ActiveDriver, FrameReport, FrameSink, FrameState, StaticEffects};
use web_time::Instant;

use crate::camera::{Camera, OrbitController};
use crate::choreography::{
    AutorotateDriver, IdleWatcher, TransitionScheduler, TransitionStep,
};
use crate::effects::{EffectMapper, EffectParams};
use crate::input::{InputEvent, InputProcessor, InteractionKind};
use crate::options::Options;
use crate::util::frame_timing::FrameTiming;

/// The idle-choreography state machine for one scene.
///
/// Frame order is fixed: idle tick, transition start, transition advance
/// *or* autorotate, effect mapping, orbit controls, submit. Only one of the
/// two autonomous drivers writes the camera position in any frame.
pub struct ChoreographyEngine {
    camera: Camera,
    controls: OrbitController,
    idle: IdleWatcher,
    autorotate: AutorotateDriver,
    transitions: TransitionScheduler,
    effects: EffectMapper,
    static_effects: StaticEffects,
    input: InputProcessor,
    /// Frame-to-frame timing for `dt` and FPS reporting.
    pub frame_timing: FrameTiming,
    options: Options,
}

impl ChoreographyEngine {
    /// Build the engine from options; the first idle cycle starts at `now`.
    #[must_use]
    pub fn new(options: Options, aspect: f32, now: Instant) -> Self {
        Self {
            camera: Camera::from_options(&options.camera, aspect),
            controls: OrbitController::new(&options.camera),
            idle: IdleWatcher::new(
                options.idle.rotate_delay(),
                options.idle.transition_delay(),
                now,
            ),
            autorotate: AutorotateDriver::new(options.autorotate.angular_speed),
            transitions: TransitionScheduler::from_options(&options.transition),
            effects: EffectMapper::from_options(&options.effects),
            static_effects: StaticEffects::from_options(&options.effects),
            input: InputProcessor::new(&options.idle.signals),
            frame_timing: FrameTiming::new(),
            options,
        }
    }

    // ── Accessors ──

    /// Current camera.
    #[must_use]
    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    /// Options the engine was built with.
    #[must_use]
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Idle deadline state.
    #[must_use]
    pub fn idle(&self) -> &IdleWatcher {
        &self.idle
    }

    /// Whether the idle orbit is active.
    #[must_use]
    pub fn is_autorotating(&self) -> bool {
        self.autorotate.is_active()
    }

    /// Whether an idle transition is in flight (not cancelled).
    #[must_use]
    pub fn is_transition_running(&self) -> bool {
        self.transitions.is_running()
    }

    /// The transition scheduler, for inspecting the active move.
    #[must_use]
    pub fn transitions(&self) -> &TransitionScheduler {
        &self.transitions
    }

    /// Effect values for the camera as it stands now.
    #[must_use]
    pub fn effect_params(&self) -> EffectParams {
        self.effects.map(&self.camera)
    }

    /// Update the projection aspect after a viewport resize.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.camera.resize(width, height);
    }

    // ── Input ──

    /// Process a platform-agnostic input event received at `now`.
    ///
    /// # Example
    ///
    /// ```ignore
    /// engine.handle_input(InputEvent::KeyDown, Instant::now());
    /// ```
    pub fn handle_input(&mut self, event: InputEvent, now: Instant) {
        for cmd in self.input.handle_event(event) {
            self.execute(cmd, now);
        }
    }

    /// Apply a single command at `now`.
    pub fn execute(&mut self, cmd: SceneCommand, now: Instant) {
        match cmd {
            SceneCommand::Interaction { kind } => self.interaction(kind, now),
            SceneCommand::Rotate { delta } => self.controls.rotate(delta),
            SceneCommand::Zoom { delta } => self.controls.zoom(delta),
        }
    }

    /// User activity: restart deadlines, cancel the transition, stop the
    /// orbit. Safe to call any number of times.
    fn interaction(&mut self, kind: InteractionKind, now: Instant) {
        self.idle.on_interaction(now);
        if self.transitions.cancel() {
            log::info!("idle transition cancelled by {kind:?}");
        }
        if self.autorotate.deactivate() {
            log::debug!("autorotate stopped by {kind:?}");
        }
    }

    // ── Frame ──

    /// Run one frame at `now` and submit it to `sink`.
    ///
    /// # Errors
    ///
    /// Returns the sink's error if drawing fails. Camera and idle state
    /// have already advanced for this frame when that happens.
    pub fn frame<S: FrameSink>(
        &mut self,
        now: Instant,
        sink: &mut S,
    ) -> Result<FrameReport, S::Error> {
        let dt = self.frame_timing.tick(now).as_secs_f32();

        let status = self.idle.tick(now);

        if status.transition_due {
            self.start_transition(now);
        }

        let (driver, transition) = if self.transitions.has_active() {
            let step = self.transitions.advance(&mut self.camera, now);
            match step {
                TransitionStep::Completed => {
                    log::info!("idle transition completed");
                    self.idle.restart_cycle(now);
                }
                TransitionStep::Cancelled => {
                    log::debug!("discarded cancelled transition");
                }
                TransitionStep::Running { .. } | TransitionStep::Idle => {}
            }
            (ActiveDriver::Transition, step)
        } else if status.rotate_due {
            if self.autorotate.activate(&self.camera) {
                log::info!("autorotate started");
            }
            self.autorotate.advance(&mut self.camera, dt);
            (ActiveDriver::Autorotate, TransitionStep::Idle)
        } else {
            let _ = self.autorotate.deactivate();
            (ActiveDriver::None, TransitionStep::Idle)
        };

        let effects = self.effects.map(&self.camera);

        let _ = self.controls.update(&mut self.camera, dt);

        sink.submit(&FrameState {
            camera: &self.camera,
            effects,
            static_effects: self.static_effects,
        })?;

        Ok(FrameReport {
            driver,
            transition,
            effects,
        })
    }

    /// Launch the idle transition unless one is already running.
    fn start_transition(&mut self, now: Instant) {
        if !self.transitions.start(&self.camera, now) {
            log::debug!("transition deadline ignored: a transition is running");
            return;
        }
        let _ = self.autorotate.deactivate();
        self.controls.stop();
        if let Some(t) = self.transitions.active() {
            log::info!(
                "idle transition started: {} -> {}",
                t.start_position(),
                t.end_position()
            );
        }
    }
}
