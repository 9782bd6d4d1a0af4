//! Per-frame output handed to the rendering collaborator.

use crate::camera::Camera;
use crate::choreography::TransitionStep;
use crate::effects::EffectParams;
use crate::options::EffectsOptions;

/// Which autonomous driver wrote the camera position this frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActiveDriver {
    /// Neither driver moved the camera.
    None,
    /// The idle orbit moved the camera.
    Autorotate,
    /// The idle transition moved (or discarded) the camera move.
    Transition,
}

/// Static post-process settings that do not depend on the camera.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StaticEffects {
    /// Bloom blur radius.
    pub bloom_radius: f32,
    /// Luminance threshold above which pixels bloom.
    pub bloom_threshold: f32,
    /// Linear RGB fog color.
    pub fog_color: [f32; 3],
}

impl StaticEffects {
    /// Extract the static settings from the `[effects]` options section.
    #[must_use]
    pub fn from_options(options: &EffectsOptions) -> Self {
        Self {
            bloom_radius: options.bloom_radius,
            bloom_threshold: options.bloom_threshold,
            fog_color: options.fog_color,
        }
    }
}

/// Everything the renderer needs to draw one frame.
#[derive(Debug, Clone, Copy)]
pub struct FrameState<'a> {
    /// Camera after all of this frame's updates.
    pub camera: &'a Camera,
    /// Distance-derived post-process values.
    pub effects: EffectParams,
    /// Camera-independent post-process settings.
    pub static_effects: StaticEffects,
}

/// Summary of what one call to
/// [`ChoreographyEngine::frame`](super::ChoreographyEngine::frame) did.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameReport {
    /// The single driver allowed to write the camera position this frame.
    pub driver: ActiveDriver,
    /// What the transition scheduler did.
    pub transition: TransitionStep,
    /// Effect values submitted with the frame.
    pub effects: EffectParams,
}

/// The rendering collaborator: receives camera and effect state once per
/// frame and issues the draw/composite call.
pub trait FrameSink {
    /// Error produced when drawing fails.
    type Error;

    /// Commit `frame` to the renderer and draw it.
    fn submit(&mut self, frame: &FrameState<'_>) -> Result<(), Self::Error>;
}
