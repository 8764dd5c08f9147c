//! The wgpu device and queue shared by the window and its renderer.

pub use self::context::Context;

#[allow(clippy::module_inception)]
mod context;
