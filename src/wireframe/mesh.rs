use glamx::Vec3;

use crate::color::Color;
use crate::error::{Error, Result};
use crate::resource::Framebuffer;
use crate::wireframe::project;

/// A segment joining two points of a [`WireMesh`], by index.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Edge {
    /// Index of the first endpoint.
    pub start: usize,
    /// Index of the second endpoint.
    pub end: usize,
}

impl Edge {
    /// Creates a new edge.
    #[inline]
    pub const fn new(start: usize, end: usize) -> Edge {
        Edge { start, end }
    }
}

impl From<(usize, usize)> for Edge {
    #[inline]
    fn from((start, end): (usize, usize)) -> Self {
        Edge::new(start, end)
    }
}

/// A flat list of points and the edges joining them.
#[derive(Clone, Debug, PartialEq)]
pub struct WireMesh {
    points: Vec<Vec3>,
    edges: Vec<Edge>,
}

impl WireMesh {
    /// Creates a mesh, checking that every edge refers to an existing point.
    pub fn new(points: Vec<Vec3>, edges: Vec<Edge>) -> Result<WireMesh> {
        for (i, edge) in edges.iter().enumerate() {
            for index in [edge.start, edge.end] {
                if index >= points.len() {
                    return Err(Error::InvalidEdge {
                        edge: i,
                        index,
                        points: points.len(),
                    });
                }
            }
        }

        Ok(WireMesh { points, edges })
    }

    /// Builds a mesh from geometry known to be consistent.
    pub(crate) fn from_parts(points: Vec<Vec3>, edges: Vec<Edge>) -> WireMesh {
        debug_assert!(edges
            .iter()
            .all(|e| e.start < points.len() && e.end < points.len()));
        WireMesh { points, edges }
    }

    /// The mesh points.
    #[inline]
    pub fn points(&self) -> &[Vec3] {
        &self.points
    }

    /// Mutable access to the points. Edges cannot be changed, so indices stay valid.
    #[inline]
    pub fn points_mut(&mut self) -> &mut [Vec3] {
        &mut self.points
    }

    /// The mesh edges.
    #[inline]
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Draws every edge as a line between its projected endpoints.
    pub fn draw(&self, fb: &mut Framebuffer, color: Color) {
        fb.set_draw_color(color);

        for edge in &self.edges {
            let (x0, y0) = project(self.points[edge.start]);
            let (x1, y1) = project(self.points[edge.end]);
            fb.draw_line(x0, y0, x1, y1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::{BLACK, WHITE};

    #[test]
    fn rejects_out_of_range_edges() {
        let points = vec![Vec3::ZERO, Vec3::X];
        let err = WireMesh::new(points, vec![Edge::new(0, 1), Edge::new(1, 2)]).unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidEdge {
                edge: 1,
                index: 2,
                points: 2
            }
        ));
    }

    #[test]
    fn draw_projects_and_connects() {
        let mesh = WireMesh::new(
            vec![Vec3::new(1.9, 1.2, 50.0), Vec3::new(5.7, 1.0, -50.0)],
            vec![(0, 1).into()],
        )
        .unwrap();

        let mut fb = Framebuffer::new(8, 4);
        mesh.draw(&mut fb, WHITE);

        for x in 1..=5 {
            assert_eq!(fb.pixel(x, 1), Some(WHITE));
        }
        assert_eq!(fb.pixel(0, 1), Some(BLACK));
        assert_eq!(fb.pixel(6, 1), Some(BLACK));
    }

    #[test]
    fn far_away_point_draws_only_the_visible_part() {
        let mesh = WireMesh::new(
            vec![Vec3::new(10.0, 10.0, 0.0), Vec3::new(1e10, 10.0, 0.0)],
            vec![(0, 1).into()],
        )
        .unwrap();

        let mut fb = Framebuffer::new(800, 600);
        mesh.draw(&mut fb, WHITE);

        assert_eq!(fb.pixel(9, 10), Some(BLACK));
        assert_eq!(fb.pixel(10, 10), Some(WHITE));
        assert_eq!(fb.pixel(799, 10), Some(WHITE));
        assert_eq!(fb.pixel(400, 11), Some(BLACK));
    }
}
