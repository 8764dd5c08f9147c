//! GPU renderers.

pub use self::blit_renderer::BlitRenderer;

mod blit_renderer;
