//! Renderer module - WebGPU rendering for the animation themes
//!
//! Re-exports only. All logic in submodules. Vertex building is pure and
//! testable anywhere; GPU setup and presentation are browser-only.

#[cfg(target_arch = "wasm32")]
mod frame;
mod shapes;
#[cfg(target_arch = "wasm32")]
mod state;
mod themes;

#[cfg(target_arch = "wasm32")]
pub use frame::render_frame;
#[cfg(target_arch = "wasm32")]
pub use state::{initialize_gpu, release_gpu, resize_surface, GpuStateError};

#[allow(unused_imports)]
pub use shapes::Vertex;
#[allow(unused_imports)]
pub use themes::build_frame_vertices;
