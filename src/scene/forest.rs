//! The snowy forest: a sky, a floor, parallax tree layers, falling snow and a rolling ball.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use rand::Rng;

use crate::camera::ParallaxCamera2d;
use crate::color;
use crate::resource::{Framebuffer, Rect, Texture, TextureManager};
use crate::scene::{Ball, Snowflake};

/// Layout and animation parameters of the forest scene.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ForestConfig {
    /// Screen width in pixels.
    pub screen_width: u32,
    /// Screen height in pixels.
    pub screen_height: u32,
    /// How much wider than the screen the tree layers are.
    pub layer_overscan: u32,
    /// Where the sky texture is stretched to.
    pub sky: Rect,
    /// Number of snowflakes.
    pub snowflake_count: usize,
    /// Slowest snowflake, in pixels per frame.
    pub snowflake_min_speed: i32,
    /// Fastest snowflake, in pixels per frame.
    pub snowflake_max_speed: i32,
    /// Side of a snowflake sprite.
    pub snowflake_size: u32,
    /// Side of the ball sprite.
    pub ball_size: u32,
    /// Where the ball starts.
    pub ball_start: (i32, i32),
    /// Pixels the ball rolls per frame.
    pub ball_velocity: i32,
    /// Camera pan position at start.
    pub initial_pan: f32,
    /// Pixels the camera pans per frame.
    pub pan_speed: f32,
}

impl Default for ForestConfig {
    fn default() -> Self {
        Self::for_screen(800, 600)
    }
}

impl ForestConfig {
    /// The default layout for a screen of the given size.
    ///
    /// At 800x600 the sky covers `{0, -400, 800, 810}` and the ball rolls
    /// 155 pixels above the bottom edge.
    pub fn for_screen(screen_width: u32, screen_height: u32) -> ForestConfig {
        let h = screen_height as i32;
        ForestConfig {
            screen_width,
            screen_height,
            layer_overscan: 300,
            sky: Rect::new(0, -(h * 2 / 3), screen_width, screen_height * 27 / 20),
            snowflake_count: 100,
            snowflake_min_speed: 1,
            snowflake_max_speed: 3,
            snowflake_size: 7,
            ball_size: 40,
            ball_start: (screen_width as i32, h - 155),
            ball_velocity: 4,
            initial_pan: 140.0,
            pan_speed: 0.25,
        }
    }

    /// Width of the tree layer images once stretched.
    #[inline]
    pub fn layer_width(&self) -> u32 {
        self.screen_width + self.layer_overscan
    }
}

/// The sprites of the forest scene. Missing ones are not drawn.
#[derive(Clone, Debug, Default)]
pub struct ForestAssets {
    /// Background sky.
    pub sky: Option<Arc<Texture>>,
    /// Ground, stretched over the whole screen.
    pub floor: Option<Arc<Texture>>,
    /// Tree layers, farthest first.
    pub layers: Vec<Arc<Texture>>,
    /// One snowflake.
    pub snowflake: Option<Arc<Texture>>,
    /// The ball.
    pub ball: Option<Arc<Texture>>,
}

impl ForestAssets {
    /// Layer image paths relative to the asset directory, farthest first.
    pub const LAYERS: [&'static str; 3] = [
        "Pixel_Forest/layer101.png",
        "Pixel_Forest/layer102.png",
        "Pixel_Forest/layer103.png",
    ];
    /// Sky image path relative to the asset directory.
    pub const SKY: &'static str = "skytoon.jpg";
    /// Floor image path relative to the asset directory.
    pub const FLOOR: &'static str = "grassfloor.png";
    /// Snowflake image path relative to the asset directory.
    pub const SNOWFLAKE: &'static str = "snowflake.png";
    /// Ball image path relative to the asset directory.
    pub const BALL: &'static str = "ball.png";

    /// Loads every sprite from `dir`. Files that fail to load are logged and skipped.
    pub fn load(dir: &Path, textures: &mut TextureManager) -> ForestAssets {
        let mut load = |file: &str| -> Option<Arc<Texture>> {
            let path: PathBuf = dir.join(file);
            textures.add_or_warn(&path, file)
        };

        let layers = Self::LAYERS.iter().filter_map(|file| load(*file)).collect();

        ForestAssets {
            sky: load(Self::SKY),
            floor: load(Self::FLOOR),
            layers,
            snowflake: load(Self::SNOWFLAKE),
            ball: load(Self::BALL),
        }
    }
}

/// The animated forest scene.
pub struct ForestScene {
    config: ForestConfig,
    assets: ForestAssets,
    camera: ParallaxCamera2d,
    snowflakes: Vec<Snowflake>,
    balls: Vec<Ball>,
}

impl ForestScene {
    /// Builds the scene, scattering the snowflakes over the screen with `rng`.
    pub fn new(config: ForestConfig, assets: ForestAssets, rng: &mut impl Rng) -> ForestScene {
        let w = config.screen_width.max(1) as i32;
        let h = config.screen_height.max(1) as i32;
        let min_speed = config.snowflake_min_speed.min(config.snowflake_max_speed);
        let max_speed = config.snowflake_max_speed.max(config.snowflake_min_speed);

        let snowflakes = (0..config.snowflake_count)
            .map(|_| {
                Snowflake::new(
                    rng.random_range(0..w),
                    rng.random_range(0..h),
                    rng.random_range(min_speed..=max_speed),
                )
            })
            .collect();

        let (bx, by) = config.ball_start;
        let balls = vec![Ball::new(bx, by, config.ball_velocity)];

        let camera = ParallaxCamera2d::new(
            config.initial_pan,
            config.layer_overscan as f32,
            config.pan_speed,
        );

        log::debug!(
            "forest scene: {} snowflakes, {} layers",
            config.snowflake_count,
            assets.layers.len()
        );

        ForestScene {
            config,
            assets,
            camera,
            snowflakes,
            balls,
        }
    }

    /// The scene configuration.
    pub fn config(&self) -> &ForestConfig {
        &self.config
    }

    /// The parallax camera.
    pub fn camera(&self) -> &ParallaxCamera2d {
        &self.camera
    }

    /// The snowflakes.
    pub fn snowflakes(&self) -> &[Snowflake] {
        &self.snowflakes
    }

    /// The balls.
    pub fn balls(&self) -> &[Ball] {
        &self.balls
    }

    /// Horizontal position of tree layer `layer` for the current camera.
    pub fn layer_offset(&self, layer: usize) -> i32 {
        self.camera
            .layer_offset(layer, self.assets.layers.len().max(1))
    }

    /// Advances the camera and every sprite by one frame.
    pub fn update(&mut self) {
        let w = self.config.screen_width as i32;
        let h = self.config.screen_height as i32;

        self.camera.update();

        for flake in &mut self.snowflakes {
            flake.update(h);
        }

        for ball in &mut self.balls {
            ball.update(w);
        }
    }

    /// Draws the scene back to front.
    pub fn draw(&self, fb: &mut Framebuffer) {
        fb.set_draw_color(color::WHITE);
        fb.clear();

        if let Some(sky) = &self.assets.sky {
            fb.copy(sky, Some(self.config.sky));
        }

        if let Some(floor) = &self.assets.floor {
            fb.copy(floor, None);
        }

        for (i, layer) in self.assets.layers.iter().enumerate() {
            let dest = Rect::new(
                self.layer_offset(i),
                0,
                self.config.layer_width(),
                self.config.screen_height,
            );
            fb.copy(layer, Some(dest));
        }

        if let Some(snowflake) = &self.assets.snowflake {
            let size = self.config.snowflake_size;
            for flake in &self.snowflakes {
                fb.copy(snowflake, Some(Rect::new(flake.x, flake.y, size, size)));
            }
        }

        if let Some(ball) = &self.assets.ball {
            let size = self.config.ball_size;
            for b in &self.balls {
                fb.copy(ball, Some(Rect::new(b.x, b.y, size, size)));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::{Color, BLUE, LIME, RED, SKY_BLUE, WHITE};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn solid(c: Color) -> Arc<Texture> {
        Arc::new(Texture::from_rgba(1, 1, vec![c.r, c.g, c.b, c.a]).unwrap())
    }

    /// A 2x1 texture: `c` on the left, transparent on the right.
    fn left_half(c: Color) -> Arc<Texture> {
        Arc::new(Texture::from_rgba(2, 1, vec![c.r, c.g, c.b, c.a, 0, 0, 0, 0]).unwrap())
    }

    fn rng() -> StdRng {
        StdRng::seed_from_u64(7)
    }

    #[test]
    fn default_layout_matches_800x600() {
        let config = ForestConfig::default();
        assert_eq!(config.sky, Rect::new(0, -400, 800, 810));
        assert_eq!(config.layer_width(), 1100);
        assert_eq!(config.ball_start, (800, 445));
    }

    #[test]
    fn snowflakes_spawn_on_screen() {
        let scene = ForestScene::new(ForestConfig::default(), ForestAssets::default(), &mut rng());
        assert_eq!(scene.snowflakes().len(), 100);
        for flake in scene.snowflakes() {
            assert!((0..800).contains(&flake.x));
            assert!((0..600).contains(&flake.y));
            assert!((1..=3).contains(&flake.speed));
        }
    }

    #[test]
    fn seeded_scenes_are_identical() {
        let a = ForestScene::new(ForestConfig::default(), ForestAssets::default(), &mut rng());
        let b = ForestScene::new(ForestConfig::default(), ForestAssets::default(), &mut rng());
        assert_eq!(a.snowflakes(), b.snowflakes());
    }

    #[test]
    fn update_moves_every_sprite() {
        let mut scene =
            ForestScene::new(ForestConfig::default(), ForestAssets::default(), &mut rng());
        let before = scene.snowflakes().to_vec();
        scene.update();

        for (old, new) in before.iter().zip(scene.snowflakes()) {
            assert_eq!(new.x, old.x);
            assert!(new.y == old.y + old.speed || new.y == 0);
        }
        assert_eq!(scene.balls()[0].x, 804);
        assert_eq!(scene.camera().x(), 140.25);
    }

    #[test]
    fn still_camera_keeps_front_layer_at_start_offset() {
        let config = ForestConfig {
            pan_speed: 0.0,
            ..ForestConfig::default()
        };
        let assets = ForestAssets {
            layers: vec![solid(RED), solid(RED), solid(RED)],
            ..ForestAssets::default()
        };
        let mut scene = ForestScene::new(config, assets, &mut rng());
        scene.update();
        assert_eq!(scene.layer_offset(2), -140);
        assert!(scene.layer_offset(0) > scene.layer_offset(2));
    }

    #[test]
    fn missing_sprites_leave_a_white_screen() {
        let scene = ForestScene::new(
            ForestConfig {
                snowflake_count: 0,
                ..ForestConfig::default()
            },
            ForestAssets::default(),
            &mut rng(),
        );
        let mut fb = Framebuffer::new(800, 600);
        scene.draw(&mut fb);
        assert_eq!(fb.pixel(0, 0), Some(WHITE));
        assert_eq!(fb.pixel(799, 599), Some(WHITE));
    }

    #[test]
    fn sprites_draw_over_background() {
        let config = ForestConfig {
            snowflake_count: 0,
            ..ForestConfig::default()
        };
        let assets = ForestAssets {
            floor: Some(solid(BLUE)),
            ball: Some(solid(RED)),
            ..ForestAssets::default()
        };
        let mut scene = ForestScene::new(config, assets, &mut rng());

        // Roll the ball fully onto the screen.
        for _ in 0..40 {
            scene.update();
        }
        let ball = scene.balls()[0];
        assert_eq!(ball.x, -50 + 4 * 27);

        let mut fb = Framebuffer::new(800, 600);
        scene.draw(&mut fb);
        assert_eq!(fb.pixel(ball.x + 20, ball.y + 20), Some(RED));
        assert_eq!(fb.pixel(ball.x + 40, ball.y + 20), Some(BLUE));
        assert_eq!(fb.pixel(0, 0), Some(BLUE));
    }

    #[test]
    fn snowflake_sprites_are_seven_pixels() {
        let config = ForestConfig {
            snowflake_count: 1,
            ..ForestConfig::default()
        };
        let assets = ForestAssets {
            snowflake: Some(solid(RED)),
            ..ForestAssets::default()
        };
        let scene = ForestScene::new(config, assets, &mut rng());
        let flake = scene.snowflakes()[0];

        let mut fb = Framebuffer::new(820, 620);
        scene.draw(&mut fb);
        assert_eq!(fb.pixel(flake.x + 6, flake.y + 6), Some(RED));
        assert_eq!(fb.pixel(flake.x + 7, flake.y), Some(WHITE));
        assert_eq!(fb.pixel(flake.x, flake.y + 7), Some(WHITE));
    }

    #[test]
    fn sky_is_stretched_over_its_rect() {
        // Top texel red, bottom texel blue.
        let sky = Arc::new(Texture::from_rgba(1, 2, vec![255, 0, 0, 255, 0, 0, 255, 255]).unwrap());
        let config = ForestConfig {
            snowflake_count: 0,
            ..ForestConfig::default()
        };
        let assets = ForestAssets {
            sky: Some(sky),
            ..ForestAssets::default()
        };
        let scene = ForestScene::new(config, assets, &mut rng());

        let mut fb = Framebuffer::new(800, 600);
        scene.draw(&mut fb);

        // Rows -400..=4 sample the top texel, 5..=409 the bottom one.
        assert_eq!(fb.pixel(0, 4), Some(RED));
        assert_eq!(fb.pixel(0, 5), Some(BLUE));
        assert_eq!(fb.pixel(799, 409), Some(BLUE));
        assert_eq!(fb.pixel(0, 410), Some(WHITE));
        assert_eq!(fb.pixel(799, 599), Some(WHITE));
    }

    #[test]
    fn layers_cover_floor_nearest_on_top() {
        let config = ForestConfig {
            snowflake_count: 0,
            pan_speed: 0.0,
            ..ForestConfig::default()
        };
        let assets = ForestAssets {
            floor: Some(solid(SKY_BLUE)),
            layers: vec![left_half(RED), left_half(LIME), left_half(BLUE)],
            ..ForestAssets::default()
        };
        let scene = ForestScene::new(config, assets, &mut rng());
        assert_eq!(
            [0, 1, 2].map(|i| scene.layer_offset(i)),
            [-47, -93, -140]
        );

        let mut fb = Framebuffer::new(800, 600);
        scene.draw(&mut fb);

        // Each layer is 1100 wide, so its opaque half ends 550 pixels past its offset.
        for y in [0, 300, 599] {
            assert_eq!(fb.pixel(0, y), Some(BLUE));
            assert_eq!(fb.pixel(409, y), Some(BLUE));
            assert_eq!(fb.pixel(410, y), Some(LIME));
            assert_eq!(fb.pixel(456, y), Some(LIME));
            assert_eq!(fb.pixel(457, y), Some(RED));
            assert_eq!(fb.pixel(502, y), Some(RED));
            assert_eq!(fb.pixel(503, y), Some(SKY_BLUE));
            assert_eq!(fb.pixel(799, y), Some(SKY_BLUE));
        }
    }
}
