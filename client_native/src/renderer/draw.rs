use glam::Vec2;
use wgpu::*;

use super::resources::InstanceData;
use super::{Renderer, CLEAR_COLOR};

pub fn draw_frame(renderer: &mut Renderer, pos: Vec2) -> Result<(), String> {
    update_buffers(renderer, pos);

    let output = renderer
        .surface
        .get_current_texture()
        .map_err(|e| format!("Failed to get current texture: {:?}", e))?;
    let view = output
        .texture
        .create_view(&TextureViewDescriptor::default());
    let mut encoder = renderer
        .device
        .create_command_encoder(&CommandEncoderDescriptor {
            label: Some("Render Encoder"),
        });

    {
        let mut pass = encoder.begin_render_pass(&RenderPassDescriptor {
            label: Some("Main Pass"),
            color_attachments: &[Some(RenderPassColorAttachment {
                view: &view,
                resolve_target: None,
                ops: Operations {
                    load: LoadOp::Clear(CLEAR_COLOR),
                    store: StoreOp::Store,
                },
            })],
            depth_stencil_attachment: None,
            timestamp_writes: None,
            occlusion_query_set: None,
        });

        pass.set_pipeline(&renderer.sprite_pipeline);
        pass.set_bind_group(0, &renderer.camera_bind_group, &[]);
        pass.set_bind_group(1, &renderer.sprite_bind_group, &[]);
        pass.set_vertex_buffer(0, renderer.quad.vertex_buffer.slice(..));
        pass.set_vertex_buffer(1, renderer.buffers.player.slice(..));
        pass.set_index_buffer(renderer.quad.index_buffer.slice(..), IndexFormat::Uint16);
        pass.draw_indexed(0..renderer.quad.index_count, 0, 0..1);
    }

    renderer.queue.submit(std::iter::once(encoder.finish()));
    output.present();

    Ok(())
}

/// Rewrite the instance buffer only when the body actually moved
fn update_buffers(renderer: &mut Renderer, pos: Vec2) {
    let (w, h) = renderer.sprite_size;
    let instance = InstanceData {
        transform: [pos.x, pos.y, w as f32, h as f32],
        tint: [1.0, 1.0, 1.0, 1.0],
    };

    let needs_update = renderer
        .last_instance
        .map(|last| last.transform != instance.transform)
        .unwrap_or(true);

    if needs_update {
        renderer
            .queue
            .write_buffer(&renderer.buffers.player, 0, bytemuck::cast_slice(&[instance]));
        renderer.last_instance = Some(instance);
    }
}
