//! Built-in wireframe geometry.

pub use self::pyramid::{square_pyramid, tetrahedron, SQUARE_PYRAMID_CENTER};

mod pyramid;
