//! CPU-side drawing resources: the framebuffer and textures.

pub use crate::resource::framebuffer::Framebuffer;
pub use crate::resource::rect::Rect;
pub use crate::resource::texture_manager::{Texture, TextureManager};

mod framebuffer;
mod rect;
mod texture_manager;
