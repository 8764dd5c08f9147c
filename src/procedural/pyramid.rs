use glamx::Vec3;

use crate::wireframe::{Edge, WireMesh};

/// The point the square pyramid spins around: the middle of its base.
pub const SQUARE_PYRAMID_CENTER: Vec3 = Vec3::new(400.0, 450.0, 0.0);

/// A square-based pyramid laid out in 800x600 screen coordinates.
///
/// The apex sits at `(400, 150, 0)` and the base is a 200x200 square at
/// `y = 450` centered on [`SQUARE_PYRAMID_CENTER`].
///
/// # Example
/// ```
/// # use demoscene::procedural::square_pyramid;
/// let pyramid = square_pyramid();
/// assert_eq!(pyramid.points().len(), 5);
/// assert_eq!(pyramid.edges().len(), 8);
/// ```
pub fn square_pyramid() -> WireMesh {
    let points = vec![
        Vec3::new(400.0, 150.0, 0.0),
        Vec3::new(300.0, 450.0, -100.0),
        Vec3::new(500.0, 450.0, -100.0),
        Vec3::new(300.0, 450.0, 100.0),
        Vec3::new(500.0, 450.0, 100.0),
    ];

    let edges = vec![
        Edge::new(0, 1),
        Edge::new(0, 2),
        Edge::new(0, 3),
        Edge::new(0, 4),
        Edge::new(1, 2),
        Edge::new(2, 4),
        Edge::new(4, 3),
        Edge::new(3, 1),
    ];

    WireMesh::from_parts(points, edges)
}

/// A triangular pyramid (tetrahedron) laid out in 800x600 screen coordinates.
///
/// # Example
/// ```
/// # use demoscene::procedural::tetrahedron;
/// let pyramid = tetrahedron();
/// assert_eq!(pyramid.points().len(), 4);
/// assert_eq!(pyramid.edges().len(), 6);
/// ```
pub fn tetrahedron() -> WireMesh {
    let points = vec![
        Vec3::new(400.0, 100.0, 100.0),
        Vec3::new(200.0, 500.0, -100.0),
        Vec3::new(600.0, 500.0, -100.0),
        Vec3::new(400.0, 500.0, 300.0),
    ];

    let edges = vec![
        Edge::new(0, 1),
        Edge::new(0, 2),
        Edge::new(0, 3),
        Edge::new(1, 2),
        Edge::new(2, 3),
        Edge::new(3, 1),
    ];

    WireMesh::from_parts(points, edges)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn presets_are_valid_meshes() {
        for mesh in [square_pyramid(), tetrahedron()] {
            let checked = WireMesh::new(mesh.points().to_vec(), mesh.edges().to_vec());
            assert!(checked.is_ok());
        }
    }

    #[test]
    fn every_pyramid_point_is_connected() {
        for mesh in [square_pyramid(), tetrahedron()] {
            for i in 0..mesh.points().len() {
                assert!(mesh.edges().iter().any(|e| e.start == i || e.end == i));
            }
        }
    }

    #[test]
    fn square_base_is_centered() {
        let mesh = square_pyramid();
        let base = &mesh.points()[1..];
        let mid = base.iter().copied().sum::<Vec3>() / base.len() as f32;
        assert_eq!(mid, SQUARE_PYRAMID_CENTER);
    }
}
