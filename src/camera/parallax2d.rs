/// A horizontal camera sweeping back and forth over a backdrop wider than the screen.
///
/// The pan position stays in `[0, max_offset]`; each update moves it by the
/// pan speed and reverses direction at either end.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ParallaxCamera2d {
    x: f32,
    max_offset: f32,
    speed: f32,
    direction: f32,
}

impl ParallaxCamera2d {
    /// Creates a camera at `x` (clamped into `[0, max_offset]`) moving right
    /// at `speed` pixels per frame.
    pub fn new(x: f32, max_offset: f32, speed: f32) -> ParallaxCamera2d {
        let max_offset = max_offset.max(0.0);
        ParallaxCamera2d {
            x: x.clamp(0.0, max_offset),
            max_offset,
            speed: speed.abs(),
            direction: 1.0,
        }
    }

    /// The current pan position.
    #[inline]
    pub fn x(&self) -> f32 {
        self.x
    }

    /// The largest pan position.
    #[inline]
    pub fn max_offset(&self) -> f32 {
        self.max_offset
    }

    /// Pixels moved per update.
    #[inline]
    pub fn speed(&self) -> f32 {
        self.speed
    }

    /// Moves the camera by one frame.
    pub fn update(&mut self) {
        if self.speed == 0.0 || self.max_offset == 0.0 {
            return;
        }

        self.x += self.speed * self.direction;

        if self.x >= self.max_offset {
            self.x = self.max_offset - (self.x - self.max_offset);
            self.direction = -1.0;
        } else if self.x <= 0.0 {
            self.x = -self.x;
            self.direction = 1.0;
        }

        self.x = self.x.clamp(0.0, self.max_offset);
    }

    /// Horizontal offset of layer `layer` out of `count`, in whole pixels.
    ///
    /// Layer 0 is the farthest away and moves the least; the last layer moves
    /// with the camera. Offsets are never positive and never below
    /// `-max_offset`, so a layer `max_offset` pixels wider than the screen
    /// always covers it.
    pub fn layer_offset(&self, layer: usize, count: usize) -> i32 {
        if count == 0 {
            return 0;
        }

        let depth = (layer.min(count - 1) + 1) as f32 / count as f32;
        -(self.x * depth).round() as i32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn still_camera_does_not_move() {
        let mut cam = ParallaxCamera2d::new(140.0, 300.0, 0.0);
        for _ in 0..1000 {
            cam.update();
        }
        assert_eq!(cam.x(), 140.0);
    }

    #[test]
    fn start_is_clamped() {
        assert_eq!(ParallaxCamera2d::new(-5.0, 300.0, 1.0).x(), 0.0);
        assert_eq!(ParallaxCamera2d::new(500.0, 300.0, 1.0).x(), 300.0);
    }

    #[test]
    fn camera_bounces_between_ends() {
        let mut cam = ParallaxCamera2d::new(298.0, 300.0, 3.0);
        cam.update();
        assert_eq!(cam.x(), 299.0);
        cam.update();
        assert_eq!(cam.x(), 296.0);

        let mut cam = ParallaxCamera2d::new(2.0, 300.0, 3.0);
        cam.direction = -1.0;
        cam.update();
        assert_eq!(cam.x(), 1.0);
        cam.update();
        assert_eq!(cam.x(), 4.0);
    }

    #[test]
    fn camera_stays_in_range() {
        let mut cam = ParallaxCamera2d::new(0.0, 300.0, 7.5);
        for _ in 0..10_000 {
            cam.update();
            assert!((0.0..=300.0).contains(&cam.x()));
        }
    }

    #[test]
    fn near_layers_move_more() {
        let cam = ParallaxCamera2d::new(150.0, 300.0, 0.0);
        assert_eq!(cam.layer_offset(0, 3), -50);
        assert_eq!(cam.layer_offset(1, 3), -100);
        assert_eq!(cam.layer_offset(2, 3), -150);
        assert_eq!(cam.layer_offset(0, 0), 0);
    }

    #[test]
    fn layer_offsets_keep_the_screen_covered() {
        let mut cam = ParallaxCamera2d::new(0.0, 300.0, 1.3);
        for _ in 0..2000 {
            cam.update();
            for layer in 0..3 {
                let off = cam.layer_offset(layer, 3);
                assert!((-300..=0).contains(&off));
            }
        }
    }
}
