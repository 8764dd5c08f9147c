/// An axis-aligned destination rectangle in framebuffer pixels.
///
/// The origin is the top-left corner and `y` grows downward. The origin may
/// be negative: anything falling outside the framebuffer is clipped when
/// drawn.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rect {
    /// Left edge.
    pub x: i32,
    /// Top edge.
    pub y: i32,
    /// Width in pixels.
    pub w: u32,
    /// Height in pixels.
    pub h: u32,
}

impl Rect {
    /// Creates a new rectangle.
    #[inline]
    pub const fn new(x: i32, y: i32, w: u32, h: u32) -> Rect {
        Rect { x, y, w, h }
    }

    /// Whether this rectangle covers no pixel at all.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.w == 0 || self.h == 0
    }

    /// One past the right edge.
    #[inline]
    pub fn right(&self) -> i64 {
        self.x as i64 + self.w as i64
    }

    /// One past the bottom edge.
    #[inline]
    pub fn bottom(&self) -> i64 {
        self.y as i64 + self.h as i64
    }

    /// The part of `self` that lies inside `[0, width) x [0, height)`, as
    /// half-open pixel ranges `(x0, x1, y0, y1)`.
    ///
    /// Returns `None` when nothing is left after clipping.
    pub fn clip_to(&self, width: u32, height: u32) -> Option<(u32, u32, u32, u32)> {
        if self.is_empty() {
            return None;
        }

        let x0 = (self.x as i64).max(0);
        let y0 = (self.y as i64).max(0);
        let x1 = self.right().min(width as i64);
        let y1 = self.bottom().min(height as i64);

        if x0 >= x1 || y0 >= y1 {
            None
        } else {
            Some((x0 as u32, x1 as u32, y0 as u32, y1 as u32))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clip_inside_is_unchanged() {
        let r = Rect::new(10, 20, 30, 40);
        assert_eq!(r.clip_to(800, 600), Some((10, 40, 20, 60)));
    }

    #[test]
    fn clip_negative_origin() {
        // Sky placement from the forest scene.
        let r = Rect::new(0, -400, 800, 810);
        assert_eq!(r.clip_to(800, 600), Some((0, 800, 0, 410)));
    }

    #[test]
    fn clip_fully_outside() {
        assert_eq!(Rect::new(-50, 0, 40, 40).clip_to(800, 600), None);
        assert_eq!(Rect::new(800, 0, 40, 40).clip_to(800, 600), None);
    }

    #[test]
    fn empty_rect_clips_to_nothing() {
        assert!(Rect::new(0, 0, 0, 10).is_empty());
        assert_eq!(Rect::new(0, 0, 0, 10).clip_to(800, 600), None);
    }
}
