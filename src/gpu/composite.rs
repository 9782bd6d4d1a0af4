//! Fullscreen composite pass that shades the scene backdrop with the
//! per-frame fog and bloom uniforms.

use crate::gpu::render_context::RenderContext;
use crate::gpu::uniforms::SceneUniforms;

/// Fullscreen-triangle pipeline bound to [`SceneUniforms`].
pub struct CompositePass {
    pipeline: wgpu::RenderPipeline,
}

impl CompositePass {
    /// Compile the composite shader for the context's surface format.
    #[must_use]
    pub fn new(context: &RenderContext, uniforms: &SceneUniforms) -> Self {
        let shader =
            context
                .device
                .create_shader_module(wgpu::ShaderModuleDescriptor {
                    label: Some("Composite Shader"),
                    source: wgpu::ShaderSource::Wgsl(
                        include_str!("../../assets/shaders/composite.wgsl")
                            .into(),
                    ),
                });

        let layout = context.device.create_pipeline_layout(
            &wgpu::PipelineLayoutDescriptor {
                label: Some("Composite Pipeline Layout"),
                bind_group_layouts: &[&uniforms.layout],
                push_constant_ranges: &[],
            },
        );

        let pipeline = context.device.create_render_pipeline(
            &wgpu::RenderPipelineDescriptor {
                label: Some("Composite Pipeline"),
                layout: Some(&layout),
                vertex: wgpu::VertexState {
                    module: &shader,
                    entry_point: Some("vs_main"),
                    buffers: &[],
                    compilation_options: Default::default(),
                },
                fragment: Some(wgpu::FragmentState {
                    module: &shader,
                    entry_point: Some("fs_main"),
                    targets: &[Some(wgpu::ColorTargetState {
                        format: context.format(),
                        blend: None,
                        write_mask: wgpu::ColorWrites::ALL,
                    })],
                    compilation_options: Default::default(),
                }),
                primitive: wgpu::PrimitiveState::default(),
                depth_stencil: None,
                multisample: wgpu::MultisampleState::default(),
                multiview: None,
                cache: None,
            },
        );

        Self { pipeline }
    }

    /// Record the pass into `encoder`, writing every pixel of `output`.
    pub fn render(
        &self,
        encoder: &mut wgpu::CommandEncoder,
        output: &wgpu::TextureView,
        uniforms: &SceneUniforms,
    ) {
        let mut pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("Composite Pass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view: output,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Clear(wgpu::Color::BLACK),
                    store: wgpu::StoreOp::Store,
                },
                depth_slice: None,
            })],
            depth_stencil_attachment: None,
            ..Default::default()
        });

        pass.set_pipeline(&self.pipeline);
        pass.set_bind_group(0, &uniforms.bind_group, &[]);
        pass.draw(0..3, 0..1);
    }
}
