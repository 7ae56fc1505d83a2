//! Theme draw strategies
//!
//! Each theme builds a vertex list from the same shared entity state; the
//! wrist cursor overlay is drawn on top regardless of theme. Everything
//! here is pure vertex math, so it runs (and is tested) off-wasm.

use rand::rngs::SmallRng;
use rand::Rng;

use crate::animation::AnimationEngine;
use crate::animation::Theme;

use super::shapes::{push_circle, push_line, push_ring, Vertex};

/// Hard ceiling on vertices per frame; overflow is truncated, never an
/// error. Sized for the worst case (a full flower-theme pool).
pub const MAX_VERTICES: usize = 60_000;

/// Clear color behind every theme (dark blue)
pub const BACKGROUND: wgpu::Color = wgpu::Color {
    r: 20.0 / 255.0,
    g: 20.0 / 255.0,
    b: 40.0 / 255.0,
    a: 1.0,
};

const CIRCLE_SEGMENTS: u32 = 12;
const RING_SEGMENTS: u32 = 48;

/// Trail stroke width in surface pixels
const TRAIL_WIDTH: f32 = 2.0;

/// Ripple stroke width in surface pixels
const RIPPLE_STROKE: f32 = 3.0;

/// Sparkle settings for the fireworks theme
const SPARKLE_MIN_LIFE: f32 = 0.7;
const SPARKLE_CHANCE: f64 = 0.1;
const SPARKLE_JITTER: f32 = 10.0;
const SPARKLE_DIAMETER: f32 = 3.0;

/// Flower geometry, relative to particle size
const FLOWER_PETALS: u32 = 6;
const PETAL_SCALE: f32 = 0.8;
const FLOWER_CENTER_SCALE: f32 = 0.4;
const FLOWER_CENTER_COLOR: [u8; 3] = [255, 255, 100];

/// Cursor overlay appearance
const CURSOR_RADIUS: f32 = 12.0;
const CURSOR_RING_STROKE: f32 = 3.0;
const CURSOR_COLORS: [[u8; 3]; 2] = [[100, 200, 255], [255, 100, 150]];

fn rgba(color: [u8; 3], alpha: f32) -> [f32; 4] {
    [
        color[0] as f32 / 255.0,
        color[1] as f32 / 255.0,
        color[2] as f32 / 255.0,
        alpha.clamp(0.0, 1.0),
    ]
}

/// Build this frame's vertex list for the active theme. Returns an empty
/// list when the surface has no size yet.
pub fn build_frame_vertices(engine: &AnimationEngine, rng: &mut SmallRng) -> Vec<Vertex> {
    let (width, height) = engine.surface_size();
    if width <= 0.0 || height <= 0.0 {
        return Vec::new();
    }

    let mut vertices = Vec::new();
    match engine.theme() {
        Theme::Particles => draw_particles(&mut vertices, engine),
        Theme::Ripples => draw_ripples(&mut vertices, engine),
        Theme::Fireworks => {
            draw_particles(&mut vertices, engine);
            draw_sparkles(&mut vertices, engine, rng);
        }
        Theme::Flowers => draw_flowers(&mut vertices, engine),
    }
    draw_cursors(&mut vertices, engine);

    // Keep whole triangles when clipping to the vertex budget
    if vertices.len() > MAX_VERTICES {
        vertices.truncate(MAX_VERTICES - MAX_VERTICES % 3);
    }

    // Pixel space -> clip space, Y flipped
    for vertex in &mut vertices {
        vertex.position = [
            vertex.position[0] / width * 2.0 - 1.0,
            -(vertex.position[1] / height * 2.0 - 1.0),
        ];
    }
    vertices
}

/// Filled dots with fading trails
fn draw_particles(out: &mut Vec<Vertex>, engine: &AnimationEngine) {
    for p in engine.particles().iter() {
        let color = rgba(p.color, p.life);
        push_circle(out, p.x, p.y, p.size / 2.0, color, CIRCLE_SEGMENTS);

        let trail_color = rgba(p.color, p.life * 0.5);
        let mut points = p.trail.iter().copied();
        if let Some(mut prev) = points.next() {
            for point in points {
                push_line(
                    out, prev.0, prev.1, point.0, point.1, TRAIL_WIDTH, trail_color,
                );
                prev = point;
            }
        }
    }
}

/// Expanding stroked rings
fn draw_ripples(out: &mut Vec<Vertex>, engine: &AnimationEngine) {
    for r in engine.ripples().iter() {
        let alpha = r.life * (r.color[3] as f32 / 255.0);
        let color = rgba([r.color[0], r.color[1], r.color[2]], alpha);
        push_ring(out, r.x, r.y, r.radius, RIPPLE_STROKE, color, RING_SEGMENTS);
    }
}

/// White glints scattered around young particles
fn draw_sparkles(out: &mut Vec<Vertex>, engine: &AnimationEngine, rng: &mut SmallRng) {
    for p in engine.particles().iter() {
        if p.life > SPARKLE_MIN_LIFE && rng.gen_bool(SPARKLE_CHANCE) {
            let color = rgba([255, 255, 255], p.life);
            push_circle(
                out,
                p.x + rng.gen_range(-SPARKLE_JITTER..SPARKLE_JITTER),
                p.y + rng.gen_range(-SPARKLE_JITTER..SPARKLE_JITTER),
                SPARKLE_DIAMETER / 2.0,
                color,
                CIRCLE_SEGMENTS,
            );
        }
    }
}

/// Six petals around a yellow center, sized by the particle
fn draw_flowers(out: &mut Vec<Vertex>, engine: &AnimationEngine) {
    for p in engine.particles().iter() {
        let petal_color = rgba(p.color, p.life);
        let petal_size = p.size * PETAL_SCALE;

        for i in 0..FLOWER_PETALS {
            let angle = (i as f32 / FLOWER_PETALS as f32) * std::f32::consts::TAU;
            push_circle(
                out,
                p.x + angle.cos() * petal_size * 0.5,
                p.y + angle.sin() * petal_size * 0.5,
                petal_size / 2.0,
                petal_color,
                CIRCLE_SEGMENTS,
            );
        }

        let center_color = rgba(FLOWER_CENTER_COLOR, p.life);
        push_circle(
            out,
            p.x,
            p.y,
            p.size * FLOWER_CENTER_SCALE / 2.0,
            center_color,
            CIRCLE_SEGMENTS,
        );
    }
}

/// Smoothed wrist markers, drawn while fading in or out
fn draw_cursors(out: &mut Vec<Vertex>, engine: &AnimationEngine) {
    if !engine.cursors_visible() {
        return;
    }
    for (cursor, color) in engine.cursors().iter().zip(CURSOR_COLORS) {
        if cursor.alpha <= 0.0 {
            continue;
        }
        push_circle(
            out,
            cursor.x,
            cursor.y,
            CURSOR_RADIUS,
            rgba(color, cursor.alpha * 0.4),
            CIRCLE_SEGMENTS,
        );
        push_ring(
            out,
            cursor.x,
            cursor.y,
            CURSOR_RADIUS,
            CURSOR_RING_STROKE,
            rgba(color, cursor.alpha),
            CIRCLE_SEGMENTS * 2,
        );
    }
}
