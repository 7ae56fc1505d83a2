//! Shape primitives - vertices for circles, rings and lines
//!
//! Builders emit triangle-list vertices in surface pixel space; the theme
//! pass converts to clip space once per frame.

/// Vertex structure for rendering colored shapes
#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

impl Vertex {
    const ATTRIBS: [wgpu::VertexAttribute; 2] = wgpu::vertex_attr_array![
        0 => Float32x2,
        1 => Float32x4
    ];

    pub fn desc() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRIBS,
        }
    }
}

/// Append a filled circle (triangle fan)
pub fn push_circle(
    out: &mut Vec<Vertex>,
    cx: f32,
    cy: f32,
    radius: f32,
    color: [f32; 4],
    segments: u32,
) {
    out.reserve((segments * 3) as usize);
    for i in 0..segments {
        let angle1 = (i as f32 / segments as f32) * std::f32::consts::TAU;
        let angle2 = ((i + 1) as f32 / segments as f32) * std::f32::consts::TAU;

        out.push(Vertex {
            position: [cx, cy],
            color,
        });
        out.push(Vertex {
            position: [cx + radius * angle1.cos(), cy + radius * angle1.sin()],
            color,
        });
        out.push(Vertex {
            position: [cx + radius * angle2.cos(), cy + radius * angle2.sin()],
            color,
        });
    }
}

/// Append a stroked circle: an annulus of the given stroke thickness
/// centered on `radius`
pub fn push_ring(
    out: &mut Vec<Vertex>,
    cx: f32,
    cy: f32,
    radius: f32,
    thickness: f32,
    color: [f32; 4],
    segments: u32,
) {
    let inner = (radius - thickness / 2.0).max(0.0);
    let outer = radius + thickness / 2.0;

    out.reserve((segments * 6) as usize);
    for i in 0..segments {
        let angle1 = (i as f32 / segments as f32) * std::f32::consts::TAU;
        let angle2 = ((i + 1) as f32 / segments as f32) * std::f32::consts::TAU;
        let (sin1, cos1) = angle1.sin_cos();
        let (sin2, cos2) = angle2.sin_cos();

        let inner1 = [cx + inner * cos1, cy + inner * sin1];
        let inner2 = [cx + inner * cos2, cy + inner * sin2];
        let outer1 = [cx + outer * cos1, cy + outer * sin1];
        let outer2 = [cx + outer * cos2, cy + outer * sin2];

        out.push(Vertex { position: inner1, color });
        out.push(Vertex { position: outer1, color });
        out.push(Vertex { position: outer2, color });

        out.push(Vertex { position: inner1, color });
        out.push(Vertex { position: outer2, color });
        out.push(Vertex { position: inner2, color });
    }
}

/// Append a line segment (rendered as thin quad)
pub fn push_line(
    out: &mut Vec<Vertex>,
    x1: f32,
    y1: f32,
    x2: f32,
    y2: f32,
    width: f32,
    color: [f32; 4],
) {
    let dx = x2 - x1;
    let dy = y2 - y1;
    let len = (dx * dx + dy * dy).sqrt();

    if len < 0.001 {
        return;
    }

    // Perpendicular direction for line thickness
    let px = -dy / len * width / 2.0;
    let py = dx / len * width / 2.0;

    out.push(Vertex { position: [x1 - px, y1 - py], color });
    out.push(Vertex { position: [x1 + px, y1 + py], color });
    out.push(Vertex { position: [x2 + px, y2 + py], color });

    out.push(Vertex { position: [x1 - px, y1 - py], color });
    out.push(Vertex { position: [x2 + px, y2 + py], color });
    out.push(Vertex { position: [x2 - px, y2 - py], color });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn circle_emits_a_triangle_list() {
        let mut out = Vec::new();
        push_circle(&mut out, 0.0, 0.0, 1.0, [1.0; 4], 12);
        assert_eq!(out.len(), 36);
    }

    #[test]
    fn ring_emits_two_triangles_per_segment() {
        let mut out = Vec::new();
        push_ring(&mut out, 0.0, 0.0, 10.0, 2.0, [1.0; 4], 8);
        assert_eq!(out.len(), 48);
    }

    #[test]
    fn degenerate_line_emits_nothing() {
        let mut out = Vec::new();
        push_line(&mut out, 5.0, 5.0, 5.0, 5.0, 2.0, [1.0; 4]);
        assert!(out.is_empty());
    }

    #[test]
    fn line_quad_has_the_requested_width() {
        let mut out = Vec::new();
        push_line(&mut out, 0.0, 0.0, 10.0, 0.0, 4.0, [1.0; 4]);
        assert_eq!(out.len(), 6);
        // Horizontal line: thickness spans y = -2 .. +2
        let ys: Vec<f32> = out.iter().map(|v| v.position[1]).collect();
        assert!(ys.iter().any(|&y| (y - 2.0).abs() < 1e-6));
        assert!(ys.iter().any(|&y| (y + 2.0).abs() < 1e-6));
    }
}
