//! The demo window.

use std::sync::mpsc::{self, Receiver};
use std::time::Duration;

use crate::error::Result;
use crate::event::WindowEvent;
use crate::resource::Framebuffer;
use crate::window::{CanvasSetup, FrameClock, WgpuCanvas};

/// Default window width.
pub const DEFAULT_WIDTH: u32 = 800;
/// Default window height.
pub const DEFAULT_HEIGHT: u32 = 600;
/// Default pause after each presented frame.
pub const DEFAULT_FRAME_DELAY: Duration = Duration::from_millis(16);

/// A window presenting a [`Framebuffer`] at a fixed pace.
///
/// # Example
/// ```no_run
/// use demoscene::prelude::*;
///
/// # fn main() -> demoscene::Result<()> {
/// let mut window = pollster::block_on(Window::new("demo"))?;
/// let mut fb = Framebuffer::new(window.width(), window.height());
///
/// while window.render(&fb) {
///     fb.set_draw_color(color::WHITE);
///     fb.draw_line(0, 0, 100, 100);
/// }
/// # Ok(())
/// # }
/// ```
pub struct Window {
    canvas: WgpuCanvas,
    events: Receiver<WindowEvent>,
    clock: FrameClock,
    should_close: bool,
}

impl Window {
    /// Opens a window with the default size.
    pub async fn new(title: &str) -> Result<Window> {
        Window::new_with_size(title, DEFAULT_WIDTH, DEFAULT_HEIGHT).await
    }

    /// Opens a window with a custom size.
    pub async fn new_with_size(title: &str, width: u32, height: u32) -> Result<Window> {
        Window::new_with_setup(title, width, height, CanvasSetup::default()).await
    }

    /// Opens a window with a custom size and canvas options.
    pub async fn new_with_setup(
        title: &str,
        width: u32,
        height: u32,
        setup: CanvasSetup,
    ) -> Result<Window> {
        let (event_send, event_receive) = mpsc::channel();
        let canvas = WgpuCanvas::open(title, width, height, setup, event_send).await?;

        Ok(Window {
            canvas,
            events: event_receive,
            clock: FrameClock::new(DEFAULT_FRAME_DELAY),
            should_close: false,
        })
    }

    /// Indicates whether this window should be closed.
    #[inline]
    pub fn should_close(&self) -> bool {
        self.should_close
    }

    /// Closes the window: the next call to [`render`](Self::render) returns `false`.
    #[inline]
    pub fn close(&mut self) {
        self.should_close = true;
    }

    /// The window width, in physical pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.canvas.size().0
    }

    /// The window height, in physical pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.canvas.size().1
    }

    /// The scale factor of the monitor the window is on.
    #[inline]
    pub fn scale_factor(&self) -> f64 {
        self.canvas.scale_factor()
    }

    /// Sets the window title.
    pub fn set_title(&mut self, title: &str) {
        self.canvas.set_title(title);
    }

    /// Sets the pause after each presented frame.
    #[inline]
    pub fn set_frame_delay(&mut self, delay: Duration) {
        self.clock.set_frame_delay(delay);
    }

    /// The pause after each presented frame.
    #[inline]
    pub fn frame_delay(&self) -> Duration {
        self.clock.frame_delay()
    }

    /// Milliseconds elapsed since the window was opened.
    #[inline]
    pub fn ticks(&self) -> u64 {
        self.clock.ticks()
    }

    /// Number of frames presented so far.
    #[inline]
    pub fn frames(&self) -> u64 {
        self.clock.frames()
    }

    /// Handles pending events, then presents `fb` and waits for the frame delay.
    ///
    /// Returns `false`, without presenting, once the window should close.
    pub fn render(&mut self, fb: &Framebuffer) -> bool {
        self.handle_events();

        if self.should_close() {
            return false;
        }

        self.canvas.present(fb);
        self.clock.end_frame();

        !self.should_close()
    }

    fn handle_events(&mut self) {
        self.canvas.poll_events();

        let events: Vec<WindowEvent> = self.events.try_iter().collect();
        for event in events {
            self.handle_event(event);
        }
    }

    fn handle_event(&mut self, event: WindowEvent) {
        if event.is_close_request() {
            log::debug!("close requested");
            self.close();
        }

        if let WindowEvent::FramebufferSize(w, h) = event {
            log::debug!("window resized to {w}x{h}");
        }
    }
}
