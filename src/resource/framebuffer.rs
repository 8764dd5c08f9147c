//! CPU-side render target the demos draw into.

use crate::color::{self, Color};
use crate::resource::{Rect, Texture};

/// An RGBA8 pixel buffer with a current draw color.
///
/// Drawing follows the conventions of a simple 2D renderer: integer
/// coordinates with the origin at the top-left corner, lines that include
/// both endpoints, and textures stretched into destination rectangles with
/// nearest-neighbour sampling. Everything outside the buffer is clipped.
#[derive(Clone, Debug)]
pub struct Framebuffer {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
    draw_color: Color,
}

impl Framebuffer {
    /// Creates a framebuffer filled with opaque black.
    pub fn new(width: u32, height: u32) -> Framebuffer {
        let mut fb = Framebuffer {
            width,
            height,
            pixels: vec![0; width as usize * height as usize * 4],
            draw_color: color::BLACK,
        };
        fb.clear();
        fb
    }

    /// The framebuffer width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// The framebuffer height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// The raw RGBA8 bytes, row by row from the top.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.pixels
    }

    /// The color used by [`clear`](Self::clear), [`draw_point`](Self::draw_point)
    /// and [`draw_line`](Self::draw_line).
    #[inline]
    pub fn draw_color(&self) -> Color {
        self.draw_color
    }

    /// Sets the color used by the primitive drawing operations.
    #[inline]
    pub fn set_draw_color(&mut self, color: Color) {
        self.draw_color = color;
    }

    /// Reads back one pixel. Returns `None` outside the framebuffer.
    pub fn pixel(&self, x: i32, y: i32) -> Option<Color> {
        let i = self.index(x as i64, y as i64)?;
        let p = &self.pixels[i..i + 4];
        Some(Color::new(p[0], p[1], p[2], p[3]))
    }

    /// Fills the whole framebuffer with the draw color.
    pub fn clear(&mut self) {
        let c = self.draw_color;
        for p in self.pixels.chunks_exact_mut(4) {
            p.copy_from_slice(&[c.r, c.g, c.b, c.a]);
        }
    }

    /// Sets one pixel to the draw color. Points outside are ignored.
    #[inline]
    pub fn draw_point(&mut self, x: i32, y: i32) {
        self.put(x as i64, y as i64, self.draw_color);
    }

    /// Draws a one-pixel wide line from `(x0, y0)` to `(x1, y1)`, both
    /// endpoints included.
    ///
    /// The segment is clipped to the framebuffer first, so only visible
    /// pixels are walked.
    pub fn draw_line(&mut self, x0: i32, y0: i32, x1: i32, y1: i32) {
        let color = self.draw_color;
        let start = (x0 as i64, y0 as i64);
        let end = (x1 as i64, y1 as i64);
        let Some(((mut x, mut y), (x1, y1))) = clip_line(start, end, self.width, self.height)
        else {
            return;
        };

        let dx = (x1 - x).abs();
        let dy = -(y1 - y).abs();
        let sx = if x < x1 { 1 } else { -1 };
        let sy = if y < y1 { 1 } else { -1 };
        let mut err = dx + dy;

        loop {
            self.put(x, y, color);

            if x == x1 && y == y1 {
                break;
            }

            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x += sx;
            }
            if e2 <= dx {
                err += dx;
                y += sy;
            }
        }
    }

    /// Stretches `texture` into `dest`, or over the whole framebuffer when
    /// `dest` is `None`, blending by the texture's alpha.
    pub fn copy(&mut self, texture: &Texture, dest: Option<Rect>) {
        let dest = dest.unwrap_or(Rect::new(0, 0, self.width, self.height));

        if texture.width() == 0 || texture.height() == 0 {
            return;
        }

        let Some((x0, x1, y0, y1)) = dest.clip_to(self.width, self.height) else {
            return;
        };

        let tw = texture.width() as i64;
        let th = texture.height() as i64;

        for py in y0..y1 {
            let sy = (py as i64 - dest.y as i64) * th / dest.h as i64;

            for px in x0..x1 {
                let sx = (px as i64 - dest.x as i64) * tw / dest.w as i64;
                let src = texture.pixel(sx as u32, sy as u32);
                let i = (py as usize * self.width as usize + px as usize) * 4;
                let dst = Color::new(
                    self.pixels[i],
                    self.pixels[i + 1],
                    self.pixels[i + 2],
                    self.pixels[i + 3],
                );
                let out = color::blend_over(src, dst);
                self.pixels[i..i + 4].copy_from_slice(&[out.r, out.g, out.b, out.a]);
            }
        }
    }

    #[inline]
    fn index(&self, x: i64, y: i64) -> Option<usize> {
        if x < 0 || y < 0 || x >= self.width as i64 || y >= self.height as i64 {
            None
        } else {
            Some((y as usize * self.width as usize + x as usize) * 4)
        }
    }

    #[inline]
    fn put(&mut self, x: i64, y: i64, c: Color) {
        if let Some(i) = self.index(x, y) {
            self.pixels[i..i + 4].copy_from_slice(&[c.r, c.g, c.b, c.a]);
        }
    }
}

const INSIDE: u8 = 0;
const LEFT: u8 = 1;
const RIGHT: u8 = 2;
const TOP: u8 = 4;
const BOTTOM: u8 = 8;

fn outcode(x: i64, y: i64, xmax: i64, ymax: i64) -> u8 {
    let mut code = INSIDE;
    if x < 0 {
        code |= LEFT;
    } else if x > xmax {
        code |= RIGHT;
    }
    if y < 0 {
        code |= TOP;
    } else if y > ymax {
        code |= BOTTOM;
    }
    code
}

/// Cohen-Sutherland clipping of a segment to `[0, width) x [0, height)`.
///
/// Intersections are computed in `i128` and truncated toward zero, so any
/// pair of `i32` endpoints is safe.
fn clip_line(
    mut p0: (i64, i64),
    mut p1: (i64, i64),
    width: u32,
    height: u32,
) -> Option<((i64, i64), (i64, i64))> {
    if width == 0 || height == 0 {
        return None;
    }

    let xmax = width as i64 - 1;
    let ymax = height as i64 - 1;
    let mut c0 = outcode(p0.0, p0.1, xmax, ymax);
    let mut c1 = outcode(p1.0, p1.1, xmax, ymax);

    // Each pass pins one endpoint to a border. The bound stops rounding from cycling at a corner.
    for _ in 0..8 {
        if c0 | c1 == INSIDE {
            return Some((p0, p1));
        }
        if c0 & c1 != INSIDE {
            return None;
        }

        let code = if c0 != INSIDE { c0 } else { c1 };
        let (x0, y0) = (p0.0 as i128, p0.1 as i128);
        let (dx, dy) = ((p1.0 - p0.0) as i128, (p1.1 - p0.1) as i128);

        let p = if code & TOP != 0 {
            ((x0 + dx * (0 - y0) / dy) as i64, 0)
        } else if code & BOTTOM != 0 {
            ((x0 + dx * (ymax as i128 - y0) / dy) as i64, ymax)
        } else if code & LEFT != 0 {
            (0, (y0 + dy * (0 - x0) / dx) as i64)
        } else {
            (xmax, (y0 + dy * (xmax as i128 - x0) / dx) as i64)
        };

        if code == c0 {
            p0 = p;
            c0 = outcode(p.0, p.1, xmax, ymax);
        } else {
            p1 = p;
            c1 = outcode(p.0, p.1, xmax, ymax);
        }
    }

    None
}
