pub mod draw;
pub mod init;
pub mod pipeline;
pub mod resources;
pub mod shaders;

use std::sync::Arc;

use wgpu::*;
use winit::window::Window;

use crate::camera::Camera;
use crate::mesh::{create_quad, Mesh};
use crate::sprite::Sprite;
use resources::{GameBuffers, InstanceData};

/// Background clear color: azure, linearized for the sRGB surface
pub const CLEAR_COLOR: Color = Color {
    r: 0.871,
    g: 1.0,
    b: 1.0,
    a: 1.0,
};

#[allow(dead_code)]
pub struct Renderer {
    pub device: Device,
    pub queue: Queue,
    pub surface: Surface<'static>,
    pub surface_config: SurfaceConfiguration,
    pub size: (u32, u32),
    pub camera: Camera,

    pub sprite_pipeline: RenderPipeline,
    pub camera_bind_group: BindGroup,
    pub sprite_bind_group: BindGroup,

    pub buffers: GameBuffers,
    pub quad: Mesh,
    pub sprite_size: (u32, u32),

    pub last_instance: Option<InstanceData>,
}

impl Renderer {
    pub async fn new(window: Arc<Window>, sprite: &Sprite) -> Result<Self, String> {
        let ctx = init::init_wgpu(window).await?;
        let camera = Camera::screen_space(ctx.size.0 as f32, ctx.size.1 as f32);

        let buffers = resources::create_buffers(&ctx.device, &camera);
        let texture = resources::create_sprite_texture(&ctx.device, &ctx.queue, sprite);
        let pipes = pipeline::create_pipelines(&ctx.device, ctx.config.format);

        let (quad_vertices, quad_indices) = create_quad();
        let quad = Mesh::new(&ctx.device, &ctx.queue, &quad_vertices, &quad_indices);

        let camera_bind_group = ctx.device.create_bind_group(&BindGroupDescriptor {
            label: Some("Camera Bind Group"),
            layout: &pipes.camera_layout,
            entries: &[BindGroupEntry {
                binding: 0,
                resource: buffers.camera.as_entire_binding(),
            }],
        });

        let sprite_bind_group = ctx.device.create_bind_group(&BindGroupDescriptor {
            label: Some("Sprite Bind Group"),
            layout: &pipes.sprite_layout,
            entries: &[
                BindGroupEntry {
                    binding: 0,
                    resource: BindingResource::TextureView(&texture.view),
                },
                BindGroupEntry {
                    binding: 1,
                    resource: BindingResource::Sampler(&texture.sampler),
                },
            ],
        });

        Ok(Self {
            device: ctx.device,
            queue: ctx.queue,
            surface: ctx.surface,
            surface_config: ctx.config,
            size: ctx.size,
            camera,
            sprite_pipeline: pipes.sprite_pipeline,
            camera_bind_group,
            sprite_bind_group,
            buffers,
            quad,
            sprite_size: (sprite.width, sprite.height),
            last_instance: None,
        })
    }

    /// Render one frame with the sprite at `pos` (top-left, screen pixels)
    pub fn draw(&mut self, pos: glam::Vec2) -> Result<(), String> {
        draw::draw_frame(self, pos)
    }
}
