//! Error types shared by the demos.

use std::path::PathBuf;

use thiserror::Error;

/// Everything that can go wrong while setting up or running a demo.
#[derive(Debug, Error)]
pub enum Error {
    /// The winit event loop could not be created.
    #[error("failed to create the event loop: {0}")]
    EventLoop(#[from] winit::error::EventLoopError),
    /// The OS refused to open the window.
    #[error("failed to create the window: {0}")]
    WindowCreation(#[from] winit::error::OsError),
    /// No surface could be created for the window.
    #[error("failed to create the rendering surface: {0}")]
    Surface(#[from] wgpu::CreateSurfaceError),
    /// The adapter reports no usable format for the window surface.
    #[error("the graphics adapter cannot present to this window")]
    SurfaceUnsupported,
    /// No GPU adapter is compatible with the window surface.
    #[error("no compatible graphics adapter: {0}")]
    Adapter(#[from] wgpu::RequestAdapterError),
    /// The adapter refused to hand out a device.
    #[error("failed to create the graphics device: {0}")]
    Device(#[from] wgpu::RequestDeviceError),
    /// An image file could not be read or decoded.
    #[error("unable to load image {}: {source}", path.display())]
    TextureLoad {
        /// The file that failed to load.
        path: PathBuf,
        /// The underlying decoder error.
        #[source]
        source: image::ImageError,
    },
    /// An in-memory image could not be decoded.
    #[error("unable to decode image from memory: {0}")]
    TextureDecode(#[source] image::ImageError),
    /// A raw pixel buffer does not match the declared texture size.
    #[error("texture buffer holds {len} bytes, expected {expected} for {width}x{height} RGBA")]
    TextureSize {
        /// Declared width.
        width: u32,
        /// Declared height.
        height: u32,
        /// Actual buffer length.
        len: usize,
        /// Required buffer length.
        expected: usize,
    },
    /// A wireframe edge refers to a point that does not exist.
    #[error("edge {edge} references point {index} but the mesh only has {points} points")]
    InvalidEdge {
        /// Position of the offending edge.
        edge: usize,
        /// The out-of-range point index.
        index: usize,
        /// Number of points in the mesh.
        points: usize,
    },
}

/// Result alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;
