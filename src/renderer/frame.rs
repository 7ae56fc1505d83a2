//! Frame rendering - advances the simulation and draws the active theme

use std::cell::RefCell;

use rand::rngs::SmallRng;
use rand::SeedableRng;

use super::state::GPU_STATE;
use super::themes::{build_frame_vertices, BACKGROUND};
use crate::animation;

// Jitter source for per-frame decoration (sparkles); separate from the
// engine's seeded spawn RNG so simulation state stays deterministic
thread_local! {
    static FRAME_RNG: RefCell<SmallRng> = RefCell::new(SmallRng::from_entropy());
}

/// Render one frame: tick the entity pools and cursors, then draw
pub fn render_frame() {
    let vertices = animation::with_engine(|engine| {
        engine.advance();
        FRAME_RNG.with(|rng| build_frame_vertices(engine, &mut rng.borrow_mut()))
    });

    GPU_STATE.with(|state_cell| {
        let state_ref = state_cell.borrow();
        let state = match state_ref.as_ref() {
            Some(s) => s,
            None => return,
        };

        let output = match state.surface.get_current_texture() {
            Ok(t) => t,
            Err(_) => return,
        };

        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        let mut encoder = state
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Render Encoder"),
            });

        if !vertices.is_empty() {
            state
                .queue
                .write_buffer(&state.vertex_buffer, 0, bytemuck::cast_slice(&vertices));
        }

        {
            let mut pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Theme Render Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(BACKGROUND),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });

            if !vertices.is_empty() {
                pass.set_pipeline(&state.render_pipeline);
                pass.set_vertex_buffer(0, state.vertex_buffer.slice(..));
                pass.draw(0..vertices.len() as u32, 0..1);
            }
        }

        state.queue.submit(std::iter::once(encoder.finish()));
        output.present();
    });
}
