//! Moving sprites of the forest scene.

/// A snowflake falling straight down, wrapping to the top when it leaves the screen.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Snowflake {
    /// Left edge, in pixels.
    pub x: i32,
    /// Top edge, in pixels.
    pub y: i32,
    /// Pixels fallen per frame.
    pub speed: i32,
}

impl Snowflake {
    /// Creates a new snowflake.
    pub fn new(x: i32, y: i32, speed: i32) -> Snowflake {
        Snowflake { x, y, speed }
    }

    /// Moves one frame down. Past the bottom of a screen `screen_height`
    /// pixels high, the flake restarts at the top.
    #[inline]
    pub fn update(&mut self, screen_height: i32) {
        self.y += self.speed;
        if self.y > screen_height {
            self.y = 0;
        }
    }
}

/// A ball rolling to the right, reappearing on the left once fully off-screen.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Ball {
    /// Left edge, in pixels.
    pub x: i32,
    /// Top edge, in pixels.
    pub y: i32,
    /// Pixels moved per frame.
    pub velocity: i32,
}

impl Ball {
    /// How far past either screen edge the ball travels before wrapping.
    pub const WRAP_MARGIN: i32 = 50;

    /// Creates a new ball.
    pub fn new(x: i32, y: i32, velocity: i32) -> Ball {
        Ball { x, y, velocity }
    }

    /// Moves one frame to the right, wrapping around a screen `screen_width` pixels wide.
    #[inline]
    pub fn update(&mut self, screen_width: i32) {
        self.x += self.velocity;
        if self.x > screen_width + Self::WRAP_MARGIN {
            self.x = -Self::WRAP_MARGIN;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snowflake_falls_by_speed() {
        let mut flake = Snowflake::new(10, 20, 3);
        flake.update(600);
        assert_eq!(flake, Snowflake::new(10, 23, 3));
    }

    #[test]
    fn snowflake_wraps_only_past_bottom() {
        let mut flake = Snowflake::new(0, 598, 2);
        flake.update(600);
        assert_eq!(flake.y, 600);
        flake.update(600);
        assert_eq!(flake.y, 0);
    }

    #[test]
    fn ball_rolls_and_wraps() {
        let mut ball = Ball::new(800, 445, 4);
        ball.update(800);
        assert_eq!(ball.x, 804);

        ball.x = 848;
        ball.update(800);
        assert_eq!(ball.x, -50);
        assert_eq!(ball.y, 445);
    }

    #[test]
    fn ball_at_margin_does_not_wrap() {
        let mut ball = Ball::new(846, 0, 4);
        ball.update(800);
        assert_eq!(ball.x, 850);
    }
}
