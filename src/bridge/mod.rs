//! Bridge module - JS ↔ Rust communication
//!
//! All #[wasm_bindgen] entry points live here.
//! Re-exports only in mod.rs, logic in submodules.

mod controls;
pub mod pose;
mod session;

pub use controls::{
    active_theme, calibration_counts, is_calibrated, last_movement_ms, particle_count,
    reset_calibration, ripple_count, set_cursors_visible, set_playing, set_theme,
    status_overlay_text,
};
pub use pose::update_pose;

#[allow(unused_imports)]
pub use session::reset as reset_session;
