//! A square-based wireframe pyramid spinning about its vertical axis.

use std::process::ExitCode;
use std::time::Duration;

use clap::Parser;
use demoscene::prelude::*;

const FRAME_DELAY: Duration = Duration::from_millis(16);
const VSYNC: bool = false;

#[derive(Parser)]
#[command(name = "pyramid", about = "Rotating wireframe pyramid")]
struct Cli {
    #[command(flatten)]
    window: WindowArgs,

    /// Radians turned per frame
    #[arg(long, default_value_t = demoscene::scene::pyramid::ROTATION_SPEED)]
    speed: f32,
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
    let mut window = Window::new_with_setup("3D Pyramid Renderer", width, height, setup).await?;
    window.set_frame_delay(cli.window.frame_delay(FRAME_DELAY));

    let mut pyramid = RotatingPyramid::new(square_pyramid(), SQUARE_PYRAMID_CENTER, cli.speed);
    let mut fb = Framebuffer::new(width, height);

    loop {
        pyramid.update();
        pyramid.draw(&mut fb);

        if !window.render(&fb) {
            break;
        }
    }

    log::info!("closed after {} frames", window.frames());
    Ok(())
}
