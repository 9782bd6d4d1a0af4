//! Window-backed [`FrameSink`].

use crate::engine::{FrameSink, FrameState};
use crate::gpu::composite::CompositePass;
use crate::gpu::render_context::RenderContext;
use crate::gpu::uniforms::SceneUniforms;

/// Uploads each frame's uniforms and runs the [`CompositePass`] over the
/// whole surface.
pub struct SceneRenderer {
    context: RenderContext,
    uniforms: SceneUniforms,
    composite: CompositePass,
}

impl SceneRenderer {
    /// Allocate the scene uniforms on `context`.
    #[must_use]
    pub fn new(context: RenderContext) -> Self {
        let uniforms = SceneUniforms::new(&context);
        let composite = CompositePass::new(&context, &uniforms);
        log::info!(
            "scene renderer ready ({:?}, {:?})",
            context.format(),
            context.size()
        );
        Self {
            context,
            uniforms,
            composite,
        }
    }

    /// Reconfigure the surface after a window resize.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.context.resize(width, height);
    }
}

impl FrameSink for SceneRenderer {
    type Error = wgpu::SurfaceError;

    fn submit(&mut self, frame: &FrameState<'_>) -> Result<(), Self::Error> {
        self.uniforms.write(&self.context.queue, frame);

        let output = self.context.get_next_frame()?;
        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = self.context.create_encoder();
        self.composite.render(&mut encoder, &view, &self.uniforms);
        self.context.submit(encoder);
        output.present();
        Ok(())
    }
}
