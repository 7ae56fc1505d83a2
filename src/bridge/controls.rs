//! Control and status boundary
//!
//! Everything the surrounding UI can set or read: theme selection,
//! play/pause, cursor visibility, calibration reset, and live counters
//! for the status panel.

use wasm_bindgen::prelude::*;

use crate::animation::{self, Theme};
use crate::gesture::REQUIRED_RAISE_COUNT;

// ============================================================================
// CONTROLS
// ============================================================================

/// Switch the draw strategy. Unknown names warn and keep the current theme.
/// Switching clears live particles and ripples so themes never bleed into
/// each other.
#[wasm_bindgen]
pub fn set_theme(name: &str) {
    match Theme::from_name(name) {
        Some(theme) => animation::with_engine(|engine| engine.set_theme(theme)),
        None => {
            web_sys::console::warn_1(&format!("Unknown animation theme: {:?}", name).into());
        }
    }
}

/// Gate whether movement updates reach the simulation. Entities already
/// alive keep animating while paused.
#[wasm_bindgen]
pub fn set_playing(playing: bool) {
    super::session::with(|session| session.playing = playing);
}

/// Toggle the wrist cursor overlay. Affects drawing only; smoothing state
/// keeps tracking underneath.
#[wasm_bindgen]
pub fn set_cursors_visible(visible: bool) {
    animation::with_engine(|engine| engine.set_cursors_visible(visible));
}

/// Zero both raise counters and clear the calibration-complete flag
#[wasm_bindgen]
pub fn reset_calibration() {
    super::session::with(|session| session.calibration.reset());
}

// ============================================================================
// STATUS
// ============================================================================

/// Current live particle count
#[wasm_bindgen]
pub fn particle_count() -> u32 {
    animation::with_engine(|engine| engine.particle_count() as u32)
}

/// Current live ripple count
#[wasm_bindgen]
pub fn ripple_count() -> u32 {
    animation::with_engine(|engine| engine.ripple_count() as u32)
}

/// Name of the active theme
#[wasm_bindgen]
pub fn active_theme() -> String {
    animation::with_engine(|engine| engine.theme().name().to_string())
}

/// Raise counts as [left, right, required]
#[wasm_bindgen]
pub fn calibration_counts() -> Vec<u32> {
    super::session::with(|session| {
        let (left, right) = session.calibration.counts();
        vec![left, right, REQUIRED_RAISE_COUNT]
    })
}

/// Whether both sides have reached the required raise count
#[wasm_bindgen]
pub fn is_calibrated() -> bool {
    super::session::with(|session| session.calibration.is_calibrated())
}

/// Timestamp of the last raised-hand detection, or None before the first
#[wasm_bindgen]
pub fn last_movement_ms() -> Option<f64> {
    super::session::with(|session| session.last_movement_ms)
}

/// Formatted status text for the host panel (called from JS to update HTML)
#[wasm_bindgen]
pub fn status_overlay_text() -> String {
    let (left, right, calibrated, movement) = super::session::with(|session| {
        (
            session.calibration.counts().0,
            session.calibration.counts().1,
            session.calibration.is_calibrated(),
            session.last_movement,
        )
    });
    let (particles, ripples, theme) = animation::with_engine(|engine| {
        (
            engine.particle_count(),
            engine.ripple_count(),
            engine.theme().name(),
        )
    });

    format!(
        "Theme: {} | Particles: {} | Ripples: {}\n\
         Raises L {}/{} R {}/{} {}\n\
         Hands: L {} R {}",
        theme,
        particles,
        ripples,
        left,
        REQUIRED_RAISE_COUNT,
        right,
        REQUIRED_RAISE_COUNT,
        if calibrated { "✓ calibrated" } else { "…" },
        if movement.left_hand_raised { "raised" } else { "-" },
        if movement.right_hand_raised { "raised" } else { "-" },
    )
}
