//! Motion Web - pose-reactive particle animation engine
//!
//! Entry point for WASM module. Only contains:
//! - Module declarations
//! - wasm_bindgen entry points that delegate to submodules

mod animation;
mod bridge;
mod gesture;
mod renderer;

use wasm_bindgen::prelude::*;

// Re-export wasm_bindgen functions for JS access
pub use bridge::update_pose;
pub use bridge::{
    active_theme, calibration_counts, is_calibrated, last_movement_ms, particle_count,
    reset_calibration, ripple_count, set_cursors_visible, set_playing, set_theme,
    status_overlay_text,
};

// ============================================================================
// CONSOLE LOGGING
// ============================================================================

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console)]
    fn log(s: &str);
}

#[cfg(target_arch = "wasm32")]
macro_rules! console_log {
    ($($t:tt)*) => (log(&format_args!($($t)*).to_string()))
}

// ============================================================================
// WASM ENTRY POINTS
// ============================================================================

/// Called automatically when WASM module loads
#[wasm_bindgen(start)]
pub fn init_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Initialize WebGPU - must be called before render_frame
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
pub async fn init() -> Result<(), JsValue> {
    renderer::initialize_gpu().await?;
    console_log!("✅ WebGPU initialized, animation surface ready");
    Ok(())
}

/// Render one animation tick: advance the simulation and draw the active theme
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
pub fn render_frame() {
    renderer::render_frame();
}

/// Resize the render surface; simulation and theme state are preserved
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
pub fn resize_surface(width: u32, height: u32) {
    renderer::resize_surface(width, height);
}

/// Drop GPU resources and reset all engine state. Nothing runs after this
/// until the host re-initializes.
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
pub fn teardown() {
    renderer::release_gpu();
    bridge::reset_session();
    animation::reset_engine();
}
