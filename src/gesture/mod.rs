//! Gesture module - pose classification and temporal debouncing
//!
//! Re-exports only. All logic in submodules.

mod calibration;
mod classifier;
mod cooldown;

pub use calibration::{CalibrationTracker, REQUIRED_RAISE_COUNT};
pub use classifier::{classify, MovementState};
pub use cooldown::{EffectCooldowns, EffectKind};
