//! The two wireframe pyramid scenes.

use std::f32::consts::TAU;

use glamx::Vec3;

use crate::color::{self, Color};
use crate::procedural::{square_pyramid, tetrahedron, SQUARE_PYRAMID_CENTER};
use crate::resource::Framebuffer;
use crate::wireframe::{centroid, rotate_about_y, scale_about, WireMesh};

/// Radians the square pyramid turns each frame.
pub const ROTATION_SPEED: f32 = 0.01;

/// Angular frequency of the pulse, in radians per millisecond.
pub const PULSE_SPEED: f32 = 0.005;

/// Relative size change at the top of a pulse.
pub const PULSE_AMPLITUDE: f32 = 0.2;

/// A wireframe mesh spinning about a vertical axis.
///
/// The orientation is kept as an accumulated angle and the drawn points are
/// recomputed from the rest geometry each frame, so no error builds up.
pub struct RotatingPyramid {
    rest: Vec<Vec3>,
    mesh: WireMesh,
    center: Vec3,
    angle: f32,
    speed: f32,
    background: Color,
    line_color: Color,
}

impl Default for RotatingPyramid {
    fn default() -> Self {
        Self::new(square_pyramid(), SQUARE_PYRAMID_CENTER, ROTATION_SPEED)
    }
}

impl RotatingPyramid {
    /// Spins `mesh` about the vertical axis through `center` by `speed` radians per frame.
    pub fn new(mesh: WireMesh, center: Vec3, speed: f32) -> RotatingPyramid {
        RotatingPyramid {
            rest: mesh.points().to_vec(),
            mesh,
            center,
            angle: 0.0,
            speed,
            background: color::BLACK,
            line_color: color::WHITE,
        }
    }

    /// The current rotation angle, in `[0, 2π)`.
    pub fn angle(&self) -> f32 {
        self.angle
    }

    /// The mesh in its current orientation.
    pub fn mesh(&self) -> &WireMesh {
        &self.mesh
    }

    /// Advances the rotation by one frame.
    pub fn update(&mut self) {
        self.angle = (self.angle + self.speed).rem_euclid(TAU);

        let points = self.mesh.points_mut();
        points.copy_from_slice(&self.rest);
        rotate_about_y(points, self.angle, self.center);
    }

    /// Clears the framebuffer and draws the edges.
    pub fn draw(&self, fb: &mut Framebuffer) {
        fb.set_draw_color(self.background);
        fb.clear();
        self.mesh.draw(fb, self.line_color);
    }
}

/// The scale factor of a pulse after `ticks_ms` milliseconds.
///
/// Oscillates in `[1 - PULSE_AMPLITUDE, 1 + PULSE_AMPLITUDE]`.
#[inline]
pub fn pulse_scale(ticks_ms: u64) -> f32 {
    1.0 + PULSE_AMPLITUDE * (ticks_ms as f32 * PULSE_SPEED).sin()
}

/// A wireframe mesh that grows and shrinks with time about its centroid.
pub struct PulsingPyramid {
    rest: Vec<Vec3>,
    mesh: WireMesh,
    center: Vec3,
    scale: f32,
    background: Color,
    line_color: Color,
}

impl Default for PulsingPyramid {
    fn default() -> Self {
        Self::new(tetrahedron())
    }
}

impl PulsingPyramid {
    /// Pulses `mesh` about the centroid of its points.
    pub fn new(mesh: WireMesh) -> PulsingPyramid {
        let rest = mesh.points().to_vec();
        PulsingPyramid {
            center: centroid(&rest),
            rest,
            mesh,
            scale: 1.0,
            background: color::BLACK,
            line_color: color::WHITE,
        }
    }

    /// The scale applied by the last update.
    pub fn scale(&self) -> f32 {
        self.scale
    }

    /// The point the mesh is scaled about.
    pub fn center(&self) -> Vec3 {
        self.center
    }

    /// The mesh at its current size.
    pub fn mesh(&self) -> &WireMesh {
        &self.mesh
    }

    /// Resizes the mesh for the time `ticks_ms` elapsed since start.
    pub fn update(&mut self, ticks_ms: u64) {
        self.scale = pulse_scale(ticks_ms);

        let points = self.mesh.points_mut();
        points.copy_from_slice(&self.rest);
        scale_about(points, self.scale, self.center);
    }

    /// Clears the framebuffer and draws the edges.
    pub fn draw(&self, fb: &mut Framebuffer) {
        fb.set_draw_color(self.background);
        fb.clear();
        self.mesh.draw(fb, self.line_color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: Vec3, b: Vec3) -> bool {
        (a - b).abs().max_element() < 1.0e-2
    }

    #[test]
    fn rotation_accumulates_per_frame() {
        let mut pyramid = RotatingPyramid::default();
        for _ in 0..10 {
            pyramid.update();
        }
        assert!((pyramid.angle() - 0.1).abs() < 1.0e-5);
    }

    #[test]
    fn full_turn_returns_to_rest() {
        let mut pyramid = RotatingPyramid::new(square_pyramid(), SQUARE_PYRAMID_CENTER, TAU / 8.0);
        for _ in 0..8 {
            pyramid.update();
        }

        let rest = square_pyramid();
        for (p, q) in pyramid.mesh().points().iter().zip(rest.points()) {
            assert!(close(*p, *q), "{p:?} != {q:?}");
        }
    }

    #[test]
    fn apex_stays_on_axis() {
        let mut pyramid = RotatingPyramid::default();
        for _ in 0..100 {
            pyramid.update();
        }
        let apex = pyramid.mesh().points()[0];
        assert!(close(apex, Vec3::new(400.0, 150.0, 0.0)));
    }

    #[test]
    fn rotating_pyramid_draws_white_on_black() {
        let mut fb = Framebuffer::new(800, 600);
        let mut pyramid = RotatingPyramid::default();
        pyramid.update();
        pyramid.draw(&mut fb);

        assert_eq!(fb.pixel(400, 150), Some(color::WHITE));
        assert_eq!(fb.pixel(10, 10), Some(color::BLACK));
    }

    #[test]
    fn pulse_scale_bounds() {
        assert_eq!(pulse_scale(0), 1.0);
        for t in (0..5000).step_by(7) {
            let s = pulse_scale(t);
            assert!((0.8 - 1.0e-4..=1.2 + 1.0e-4).contains(&s));
        }
        // sin peaks at t * 0.005 = pi / 2
        let peak = pulse_scale(314);
        assert!((peak - 1.2).abs() < 1.0e-3);
    }

    #[test]
    fn pulse_is_not_cumulative() {
        let mut pyramid = PulsingPyramid::default();
        pyramid.update(314);
        pyramid.update(314);
        pyramid.update(0);

        let rest = tetrahedron();
        for (p, q) in pyramid.mesh().points().iter().zip(rest.points()) {
            assert!(close(*p, *q));
        }
    }

    #[test]
    fn pulse_scales_about_centroid() {
        let mut pyramid = PulsingPyramid::default();
        let center = pyramid.center();
        pyramid.update(314);

        let apex = pyramid.mesh().points()[0];
        let rest_apex = tetrahedron().points()[0];
        let expected = center.y + (rest_apex.y - center.y) * pyramid.scale();
        assert!((apex.y - expected).abs() < 1.0e-3);
        assert!(apex.y < rest_apex.y);
    }
}
