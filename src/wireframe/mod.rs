//! Wireframe geometry: points joined by edges, rotated, scaled and projected
//! orthographically onto the framebuffer.

pub use self::mesh::{Edge, WireMesh};
pub use self::transform::{centroid, project, rotate_about_y, scale_about};

mod mesh;
mod transform;
