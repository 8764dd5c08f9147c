//! A resource manager to load textures.

use image::{DynamicImage, GenericImageView};
use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use crate::color::{self, Color};
use crate::error::{Error, Result};

/// A decoded RGBA8 image ready to be copied into a framebuffer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Texture {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl Texture {
    /// Creates a texture from raw RGBA8 pixels, row by row from the top.
    pub fn from_rgba(width: u32, height: u32, pixels: Vec<u8>) -> Result<Texture> {
        let expected = width as usize * height as usize * 4;
        if pixels.len() != expected {
            return Err(Error::TextureSize {
                width,
                height,
                len: pixels.len(),
                expected,
            });
        }

        Ok(Texture {
            width,
            height,
            pixels,
        })
    }

    /// Creates a texture from an already decoded image.
    pub fn from_image(image: DynamicImage) -> Texture {
        let (width, height) = image.dimensions();
        Texture {
            width,
            height,
            pixels: image.to_rgba8().into_raw(),
        }
    }

    /// Decodes a texture from an image file (PNG, JPEG, ...).
    pub fn from_file(path: &Path) -> Result<Texture> {
        let image = image::open(path).map_err(|source| Error::TextureLoad {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Texture::from_image(image))
    }

    /// Decodes a texture from an encoded image held in memory.
    pub fn from_memory(data: &[u8]) -> Result<Texture> {
        let image = image::load_from_memory(data).map_err(Error::TextureDecode)?;
        Ok(Texture::from_image(image))
    }

    /// Texture width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Texture height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Texture dimensions `(width, height)`.
    #[inline]
    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// The texel at `(x, y)`. Coordinates are clamped to the edge; an empty
    /// texture reads as transparent.
    #[inline]
    pub fn pixel(&self, x: u32, y: u32) -> Color {
        if self.width == 0 || self.height == 0 {
            return color::TRANSPARENT;
        }

        let x = x.min(self.width.saturating_sub(1)) as usize;
        let y = y.min(self.height.saturating_sub(1)) as usize;
        let i = (y * self.width as usize + x) * 4;
        let p = &self.pixels[i..i + 4];
        Color::new(p[0], p[1], p[2], p[3])
    }
}

/// The texture manager.
///
/// It keeps a cache of already-loaded textures, and can load new textures.
#[derive(Default)]
pub struct TextureManager {
    textures: HashMap<String, Arc<Texture>>,
}

impl TextureManager {
    /// Creates a new, empty, texture manager.
    pub fn new() -> TextureManager {
        TextureManager::default()
    }

    /// Get a texture with the specified name. Returns `None` if the texture is not registered.
    pub fn get(&self, name: &str) -> Option<Arc<Texture>> {
        self.textures.get(name).cloned()
    }

    /// Number of registered textures.
    pub fn len(&self) -> usize {
        self.textures.len()
    }

    /// Whether no texture is registered.
    pub fn is_empty(&self) -> bool {
        self.textures.is_empty()
    }

    /// Registers an already built texture.
    ///
    /// If a texture with same name exists, nothing is registered and the old texture is returned.
    pub fn add_texture(&mut self, texture: Texture, name: &str) -> Arc<Texture> {
        self.textures
            .entry(name.to_string())
            .or_insert_with(|| Arc::new(texture))
            .clone()
    }

    /// Decodes a texture from bytes and registers it.
    ///
    /// If a texture with same name exists, nothing is decoded and the old texture is returned.
    pub fn add_from_memory(&mut self, data: &[u8], name: &str) -> Result<Arc<Texture>> {
        if let Some(texture) = self.get(name) {
            return Ok(texture);
        }

        let texture = Arc::new(Texture::from_memory(data)?);
        self.textures.insert(name.to_string(), texture.clone());
        Ok(texture)
    }

    /// Loads a texture from a file and registers it.
    ///
    /// If a texture with same name exists, nothing is loaded and the old texture is returned.
    pub fn add(&mut self, path: &Path, name: &str) -> Result<Arc<Texture>> {
        if let Some(texture) = self.get(name) {
            return Ok(texture);
        }

        let texture = Arc::new(Texture::from_file(path)?);
        log::debug!(
            "loaded texture {name} from {} ({}x{})",
            path.display(),
            texture.width(),
            texture.height()
        );
        self.textures.insert(name.to_string(), texture.clone());
        Ok(texture)
    }

    /// Like [`add`](Self::add), but logs a warning and returns `None` on failure.
    ///
    /// Demos use this for optional sprites: a texture that fails to load is
    /// simply not drawn.
    pub fn add_or_warn(&mut self, path: &Path, name: &str) -> Option<Arc<Texture>> {
        match self.add(path, name) {
            Ok(texture) => Some(texture),
            Err(e) => {
                log::warn!("{e}");
                None
            }
        }
    }
}
