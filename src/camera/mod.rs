//! Cameras for the 2D scenes.

pub use self::parallax2d::ParallaxCamera2d;

mod parallax2d;
