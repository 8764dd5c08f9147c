//! Command line options shared by the demo binaries.

use std::time::Duration;

use clap::Args;

use crate::window::{CanvasSetup, DEFAULT_HEIGHT, DEFAULT_WIDTH};

/// Window options every demo accepts.
#[derive(Debug, Clone, PartialEq, Eq, Args)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WindowArgs {
    /// Window width in pixels
    #[arg(long, default_value_t = DEFAULT_WIDTH)]
    pub width: u32,

    /// Window height in pixels
    #[arg(long, default_value_t = DEFAULT_HEIGHT)]
    pub height: u32,

    /// Pause after each frame, in milliseconds (demo-specific default)
    #[arg(long)]
    pub frame_delay_ms: Option<u64>,

    /// Wait for vsync before presenting each frame
    #[arg(long, overrides_with = "no_vsync")]
    pub vsync: bool,

    /// Present frames as soon as they are ready instead of waiting for vsync
    #[arg(long, overrides_with = "vsync")]
    pub no_vsync: bool,

    /// Let the user resize the window
    #[arg(long)]
    pub resizable: bool,
}

impl Default for WindowArgs {
    fn default() -> Self {
        WindowArgs {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            frame_delay_ms: None,
            vsync: false,
            no_vsync: false,
            resizable: false,
        }
    }
}

impl WindowArgs {
    /// The canvas options selected on the command line. Vsync follows
    /// `vsync_by_default` unless `--vsync` or `--no-vsync` was given.
    pub fn canvas_setup(&self, vsync_by_default: bool) -> CanvasSetup {
        let vsync = if self.vsync {
            true
        } else if self.no_vsync {
            false
        } else {
            vsync_by_default
        };

        CanvasSetup {
            vsync,
            resizable: self.resizable,
        }
    }

    /// The frame delay, falling back to `default` when none was given.
    pub fn frame_delay(&self, default: Duration) -> Duration {
        self.frame_delay_ms
            .map(Duration::from_millis)
            .unwrap_or(default)
    }
}

/// Installs the `env_logger` backend, showing `info` and above unless
/// `RUST_LOG` says otherwise.
pub fn init_logging() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[derive(Parser)]
    struct Cli {
        #[command(flatten)]
        window: WindowArgs,
    }

    #[test]
    fn defaults() {
        let cli = Cli::parse_from(["demo"]);
        assert_eq!(cli.window, WindowArgs::default());
        assert_eq!(
            cli.window.frame_delay(Duration::from_millis(10)),
            Duration::from_millis(10)
        );
        assert_eq!(cli.window.canvas_setup(true), CanvasSetup::default());
        assert!(!cli.window.canvas_setup(false).vsync);
    }

    #[test]
    fn vsync_flags_override_the_demo_default() {
        let on = Cli::parse_from(["demo", "--vsync"]);
        assert!(on.window.canvas_setup(false).vsync);

        let off = Cli::parse_from(["demo", "--no-vsync"]);
        assert!(!off.window.canvas_setup(true).vsync);

        let last_wins = Cli::parse_from(["demo", "--no-vsync", "--vsync"]);
        assert!(last_wins.window.canvas_setup(false).vsync);
    }

    #[test]
    fn overrides() {
        let cli = Cli::parse_from([
            "demo",
            "--width",
            "1024",
            "--height",
            "768",
            "--frame-delay-ms",
            "33",
            "--no-vsync",
            "--resizable",
        ]);
        assert_eq!(cli.window.width, 1024);
        assert_eq!(cli.window.height, 768);
        assert_eq!(
            cli.window.frame_delay(Duration::from_millis(10)),
            Duration::from_millis(33)
        );
        let setup = cli.window.canvas_setup(true);
        assert!(!setup.vsync);
        assert!(setup.resizable);
    }
}
