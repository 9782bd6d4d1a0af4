//! wgpu plumbing for the viewer: device setup, scene uniforms and the
//! window-backed frame sink.

/// Fullscreen pass shading the backdrop with fog and bloom.
pub mod composite;
/// Device, queue and surface management.
pub mod render_context;
/// The [`FrameSink`](crate::engine::FrameSink) that presents to a window.
pub mod renderer;
/// Camera and effect uniform buffers.
pub mod uniforms;

pub use composite::CompositePass;
pub use render_context::{RenderContext, RenderContextError};
pub use renderer::SceneRenderer;
pub use uniforms::{EffectUniform, SceneUniforms};
