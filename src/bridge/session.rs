//! Session state shared across detection ticks
//!
//! Holds the calibration counter, the play flag and the latest movement
//! snapshot for the status boundary. Visual state lives in the animation
//! engine, not here.

use std::cell::RefCell;

use crate::gesture::{CalibrationTracker, MovementState};

pub struct SessionState {
    pub calibration: CalibrationTracker,
    /// Gates whether movement updates reach the simulation
    pub playing: bool,
    /// Timestamp of the most recent raised-hand detection
    pub last_movement_ms: Option<f64>,
    /// Latest classifier output, kept for the status overlay
    pub last_movement: MovementState,
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            calibration: CalibrationTracker::new(),
            playing: true,
            last_movement_ms: None,
            last_movement: MovementState::default(),
        }
    }
}

// Thread-local storage (WASM is single-threaded)
thread_local! {
    static SESSION: RefCell<SessionState> = RefCell::new(SessionState::default());
}

pub fn with<R>(f: impl FnOnce(&mut SessionState) -> R) -> R {
    SESSION.with(|cell| f(&mut cell.borrow_mut()))
}

/// Drop all session state back to its initial configuration
pub fn reset() {
    SESSION.with(|cell| *cell.borrow_mut() = SessionState::default());
}
