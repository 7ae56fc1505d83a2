//! Animation module - simulation core and its entity pools
//!
//! Re-exports plus the thread-local engine instance shared by the bridge
//! and the renderer.

mod cursor;
mod engine;
mod mapper;
pub mod particles;
pub mod ripples;
mod theme;

pub use cursor::WristCursor;
pub use engine::AnimationEngine;
pub use mapper::map_to_surface;
pub use theme::Theme;

use std::cell::RefCell;

// Thread-local storage (WASM is single-threaded)
thread_local! {
    static ENGINE: RefCell<AnimationEngine> = RefCell::new(AnimationEngine::new());
}

pub fn with_engine<R>(f: impl FnOnce(&mut AnimationEngine) -> R) -> R {
    ENGINE.with(|cell| f(&mut cell.borrow_mut()))
}

/// Replace the engine with a fresh one (page teardown)
#[allow(dead_code)]
pub fn reset_engine() {
    ENGINE.with(|cell| *cell.borrow_mut() = AnimationEngine::new());
}
