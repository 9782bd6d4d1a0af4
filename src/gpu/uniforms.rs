//! GPU-side copies of the per-frame camera and effect state.

use bytemuck::Zeroable;
use wgpu::util::DeviceExt;

use crate::camera::CameraUniform;
use crate::engine::FrameState;
use crate::gpu::render_context::RenderContext;

/// Post-process parameters as laid out for the composite shader.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct EffectUniform {
    /// Exponential fog density.
    pub fog_density: f32,
    /// Bloom strength.
    pub bloom_strength: f32,
    /// Bloom blur radius.
    pub bloom_radius: f32,
    /// Luminance threshold above which pixels bloom.
    pub bloom_threshold: f32,
    /// Linear RGB fog color.
    pub fog_color: [f32; 3],
    _padding: f32,
}

impl EffectUniform {
    /// Pack the dynamic and static effect values of `frame`.
    #[must_use]
    pub const fn from_frame(frame: &FrameState<'_>) -> Self {
        Self {
            fog_density: frame.effects.fog_density,
            bloom_strength: frame.effects.bloom_strength,
            bloom_radius: frame.static_effects.bloom_radius,
            bloom_threshold: frame.static_effects.bloom_threshold,
            fog_color: frame.static_effects.fog_color,
            _padding: 0.0,
        }
    }
}

/// Camera and effect uniform buffers sharing one bind group.
///
/// Binding 0 is the [`CameraUniform`], binding 1 the [`EffectUniform`].
pub struct SceneUniforms {
    camera: CameraUniform,
    camera_buffer: wgpu::Buffer,
    effects: EffectUniform,
    effects_buffer: wgpu::Buffer,
    /// Layout for pipelines that consume the scene uniforms.
    pub layout: wgpu::BindGroupLayout,
    /// Bind group holding both buffers.
    pub bind_group: wgpu::BindGroup,
}

impl SceneUniforms {
    /// Allocate zeroed buffers and their bind group.
    #[must_use]
    pub fn new(context: &RenderContext) -> Self {
        let camera = CameraUniform::new();
        let effects = EffectUniform::zeroed();

        let camera_buffer =
            context
                .device
                .create_buffer_init(&wgpu::util::BufferInitDescriptor {
                    label: Some("Camera Buffer"),
                    contents: bytemuck::cast_slice(&[camera]),
                    usage: wgpu::BufferUsages::UNIFORM
                        | wgpu::BufferUsages::COPY_DST,
                });
        let effects_buffer =
            context
                .device
                .create_buffer_init(&wgpu::util::BufferInitDescriptor {
                    label: Some("Effects Buffer"),
                    contents: bytemuck::cast_slice(&[effects]),
                    usage: wgpu::BufferUsages::UNIFORM
                        | wgpu::BufferUsages::COPY_DST,
                });

        let layout = context.device.create_bind_group_layout(
            &wgpu::BindGroupLayoutDescriptor {
                label: Some("Scene Uniforms Layout"),
                entries: &[uniform_entry(0), uniform_entry(1)],
            },
        );

        let bind_group =
            context
                .device
                .create_bind_group(&wgpu::BindGroupDescriptor {
                    layout: &layout,
                    entries: &[
                        wgpu::BindGroupEntry {
                            binding: 0,
                            resource: camera_buffer.as_entire_binding(),
                        },
                        wgpu::BindGroupEntry {
                            binding: 1,
                            resource: effects_buffer.as_entire_binding(),
                        },
                    ],
                    label: Some("Scene Uniforms Bind Group"),
                });

        Self {
            camera,
            camera_buffer,
            effects,
            effects_buffer,
            layout,
            bind_group,
        }
    }

    /// Copy `frame` into both buffers.
    pub fn write(&mut self, queue: &wgpu::Queue, frame: &FrameState<'_>) {
        self.camera.update_view_proj(frame.camera);
        self.effects = EffectUniform::from_frame(frame);
        queue.write_buffer(
            &self.camera_buffer,
            0,
            bytemuck::cast_slice(&[self.camera]),
        );
        queue.write_buffer(
            &self.effects_buffer,
            0,
            bytemuck::cast_slice(&[self.effects]),
        );
    }
}

const fn uniform_entry(binding: u32) -> wgpu::BindGroupLayoutEntry {
    wgpu::BindGroupLayoutEntry {
        binding,
        visibility: wgpu::ShaderStages::VERTEX
            .union(wgpu::ShaderStages::FRAGMENT),
        ty: wgpu::BindingType::Buffer {
            ty: wgpu::BufferBindingType::Uniform,
            has_dynamic_offset: false,
            min_binding_size: None,
        },
        count: None,
    }
}
