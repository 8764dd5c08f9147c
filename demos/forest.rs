//! A snowy forest: parallax tree layers, falling snowflakes and a rolling ball.
//!
//! Images are read from the asset directory (`--assets`, `Assets/` by default):
//! `skytoon.jpg`, `grassfloor.png`, `snowflake.png`, `ball.png` and
//! `Pixel_Forest/layer10{1,2,3}.png`. Missing images are reported and skipped.

use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use clap::Parser;
use demoscene::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

const FRAME_DELAY: Duration = Duration::from_millis(10);
const VSYNC: bool = true;

#[derive(Parser)]
#[command(name = "forest", about = "Parallax snowy forest")]
struct Cli {
    #[command(flatten)]
    window: WindowArgs,

    /// Directory holding the forest images
    #[arg(long, default_value = "Assets")]
    assets: PathBuf,

    /// Number of snowflakes
    #[arg(long, default_value_t = 100)]
    snowflakes: usize,

    /// Seed for the snowflake placement (random when absent)
    #[arg(long)]
    seed: Option<u64>,

    /// Camera pan speed in pixels per frame (0 keeps the layers still)
    #[arg(long, default_value_t = 0.25)]
    pan_speed: f32,
}

fn main() -> ExitCode {
    init_logging();
    let cli = Cli::parse();

    match pollster::block_on(run(cli)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> demoscene::Result<()> {
    let (width, height) = (cli.window.width, cli.window.height);
    let setup = cli.window.canvas_setup(VSYNC);
    let mut window = Window::new_with_setup("2D Rendering", width, height, setup).await?;
    window.set_frame_delay(cli.window.frame_delay(FRAME_DELAY));

    let mut textures = TextureManager::new();
    let assets = ForestAssets::load(&cli.assets, &mut textures);
    log::info!("loaded {} forest images", textures.len());

    let config = ForestConfig {
        snowflake_count: cli.snowflakes,
        pan_speed: cli.pan_speed,
        ..ForestConfig::for_screen(width, height)
    };
    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let mut scene = ForestScene::new(config, assets, &mut rng);
    let mut fb = Framebuffer::new(width, height);

    loop {
        scene.update();
        scene.draw(&mut fb);

        if !window.render(&fb) {
            break;
        }
    }

    log::info!("closed after {} frames", window.frames());
    Ok(())
}
