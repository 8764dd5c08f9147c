//! The demo scenes: per-frame state updates and drawing into a framebuffer.

pub use self::forest::{ForestAssets, ForestConfig, ForestScene};
pub use self::pyramid::{pulse_scale, PulsingPyramid, RotatingPyramid};
pub use self::sprite::{Ball, Snowflake};

mod forest;
pub mod pyramid;
mod sprite;
