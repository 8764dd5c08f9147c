//! The window, and things to handle the rendering loop and events.

mod canvas;
mod frame_clock;
mod wgpu_canvas;
#[allow(clippy::module_inception)]
mod window;

pub use canvas::CanvasSetup;
pub use frame_clock::FrameClock;
pub use wgpu_canvas::WgpuCanvas;
pub use window::{Window, DEFAULT_FRAME_DELAY, DEFAULT_HEIGHT, DEFAULT_WIDTH};
