//! Camera-space to render-surface projection
//!
//! The camera faces the user, so X is mirrored: a hand raised on the
//! user's left lands on the left of the displayed animation. Pure
//! function, no side effects.

/// Project a camera-space point onto the render surface, mirroring
/// horizontally and clamping to the surface bounds. Callers should pass
/// the true camera resolution whenever known; a mismatch distorts effect
/// placement proportionally. A zero-sized surface clamps to the origin.
pub fn map_to_surface(
    x: f32,
    y: f32,
    camera_width: f32,
    camera_height: f32,
    surface_width: f32,
    surface_height: f32,
) -> (f32, f32) {
    let mapped_x = ((camera_width - x) / camera_width) * surface_width;
    let mapped_y = (y / camera_height) * surface_height;
    (
        mapped_x.clamp(0.0, surface_width.max(0.0)),
        mapped_y.clamp(0.0, surface_height.max(0.0)),
    )
}
