//! Color constants used by the demos.
//!
//! Colors are 8-bit RGBA, the same layout the [`Framebuffer`](crate::resource::Framebuffer)
//! stores, so they can be written to pixels without conversion.
//!
//! # Example
//! ```
//! use demoscene::color;
//! use demoscene::resource::Framebuffer;
//!
//! let mut fb = Framebuffer::new(4, 4);
//! fb.set_draw_color(color::WHITE);
//! fb.clear();
//! assert_eq!(fb.pixel(0, 0), Some(color::WHITE));
//! ```

pub use rgb::Rgba;

/// The color type used throughout the demos. RGBA with u8 components.
pub type Color = Rgba<u8>;

/// <div style="margin:2px 0"><span style="background-color:rgb(0, 0, 0);padding:0 0.7em;margin-right:0.5em;border:1px solid"></span>Black (0, 0, 0)</div>
pub const BLACK: Color = Color::new(0, 0, 0, 255);

/// <div style="margin:2px 0"><span style="background-color:rgb(255, 255, 255);padding:0 0.7em;margin-right:0.5em;border:1px solid"></span>White (255, 255, 255)</div>
pub const WHITE: Color = Color::new(255, 255, 255, 255);

/// <div style="margin:2px 0"><span style="background-color:rgb(255, 0, 0);padding:0 0.7em;margin-right:0.5em;border:1px solid"></span>Red (255, 0, 0)</div>
pub const RED: Color = Color::new(255, 0, 0, 255);

/// <div style="margin:2px 0"><span style="background-color:rgb(0, 255, 0);padding:0 0.7em;margin-right:0.5em;border:1px solid"></span>Lime (0, 255, 0) - CSS "lime", pure green</div>
pub const LIME: Color = Color::new(0, 255, 0, 255);

/// <div style="margin:2px 0"><span style="background-color:rgb(0, 0, 255);padding:0 0.7em;margin-right:0.5em;border:1px solid"></span>Blue (0, 0, 255)</div>
pub const BLUE: Color = Color::new(0, 0, 255, 255);

/// <div style="margin:2px 0"><span style="background-color:rgb(135, 206, 235);padding:0 0.7em;margin-right:0.5em;border:1px solid"></span>Sky blue (135, 206, 235)</div>
pub const SKY_BLUE: Color = Color::new(135, 206, 235, 255);

/// Transparent color (0, 0, 0, 0).
pub const TRANSPARENT: Color = Color::new(0, 0, 0, 0);

/// Blends `src` over `dst` using the source alpha.
///
/// The result is always opaque when `dst` is opaque.
#[inline]
pub fn blend_over(src: Color, dst: Color) -> Color {
    match src.a {
        255 => src,
        0 => dst,
        a => {
            let a = a as u32;
            let inv = 255 - a;
            let mix = |s: u8, d: u8| ((s as u32 * a + d as u32 * inv + 127) / 255) as u8;
            Color::new(
                mix(src.r, dst.r),
                mix(src.g, dst.g),
                mix(src.b, dst.b),
                (a + (dst.a as u32 * inv + 127) / 255).min(255) as u8,
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opaque_source_replaces_destination() {
        assert_eq!(blend_over(RED, BLUE), RED);
    }

    #[test]
    fn transparent_source_keeps_destination() {
        assert_eq!(blend_over(TRANSPARENT, BLUE), BLUE);
    }

    #[test]
    fn half_alpha_mixes_channels() {
        let half_red = Color::new(255, 0, 0, 128);
        let out = blend_over(half_red, BLACK);
        assert_eq!(out.r, 128);
        assert_eq!(out.g, 0);
        assert_eq!(out.b, 0);
        assert_eq!(out.a, 255);
    }
}
