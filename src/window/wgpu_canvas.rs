//! A winit window with a wgpu surface.

use std::cell::RefCell;
use std::sync::mpsc::Sender;
use std::sync::Arc;

use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::{ElementState, WindowEvent as WinitWindowEvent};
use winit::event_loop::{ActiveEventLoop, EventLoop};
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::platform::pump_events::{EventLoopExtPumpEvents, PumpStatus};
use winit::window::{Window, WindowAttributes, WindowId};

use crate::context::Context;
use crate::error::{Error, Result};
use crate::event::{Action, Key, WindowEvent};
use crate::renderer::BlitRenderer;
use crate::resource::Framebuffer;
use crate::window::CanvasSetup;

// winit only allows one EventLoop per program, so it lives in thread-local
// storage and is reused by every window opened on this thread.
thread_local! {
    static EVENT_LOOP: RefCell<Option<EventLoop<()>>> = const { RefCell::new(None) };
}

/// Gathers the events of one `pump_app_events` call.
#[derive(Default)]
struct EventCollector {
    events: Vec<(WindowId, PendingEvent)>,
}

enum PendingEvent {
    WindowEvent(WindowEvent),
    Resize { width: u32, height: u32 },
}

impl ApplicationHandler for EventCollector {
    fn resumed(&mut self, _event_loop: &ActiveEventLoop) {}

    fn window_event(
        &mut self,
        _event_loop: &ActiveEventLoop,
        window_id: WindowId,
        event: WinitWindowEvent,
    ) {
        match event {
            WinitWindowEvent::CloseRequested => {
                self.events
                    .push((window_id, PendingEvent::WindowEvent(WindowEvent::Close)));
            }
            WinitWindowEvent::Resized(size) if size.width > 0 && size.height > 0 => {
                self.events.push((
                    window_id,
                    PendingEvent::Resize {
                        width: size.width,
                        height: size.height,
                    },
                ));
            }
            WinitWindowEvent::KeyboardInput { event, .. } => {
                let action = translate_action(event.state);
                let key = translate_key(event.physical_key);
                self.events.push((
                    window_id,
                    PendingEvent::WindowEvent(WindowEvent::Key(key, action)),
                ));
            }
            _ => {}
        }
    }
}

/// A window and the wgpu surface frames are presented to.
pub struct WgpuCanvas {
    window: Arc<Window>,
    window_id: WindowId,
    ctxt: Context,
    surface: wgpu::Surface<'static>,
    surface_config: wgpu::SurfaceConfiguration,
    blit: BlitRenderer,
    out_events: Sender<WindowEvent>,
}

impl WgpuCanvas {
    /// Opens a new window and initializes the wgpu context.
    pub async fn open(
        title: &str,
        width: u32,
        height: u32,
        setup: CanvasSetup,
        out_events: Sender<WindowEvent>,
    ) -> Result<WgpuCanvas> {
        let window_attrs = WindowAttributes::default()
            .with_title(title)
            .with_inner_size(LogicalSize::new(width as f64, height as f64))
            .with_resizable(setup.resizable);

        let window = EVENT_LOOP.with(|cell| -> Result<Window> {
            let mut slot = cell.borrow_mut();
            let event_loop = match slot.take() {
                Some(event_loop) => event_loop,
                None => EventLoop::new()?,
            };
            #[allow(deprecated)]
            let window = event_loop.create_window(window_attrs);
            *slot = Some(event_loop);
            Ok(window?)
        })?;
        let window = Arc::new(window);

        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::all(),
            ..Default::default()
        });
        let surface = instance.create_surface(window.clone())?;
        let ctxt = Context::new(instance, &surface).await?;

        // Prefer a non-sRGB format: the framebuffer already holds display-ready values.
        let surface_caps = surface.get_capabilities(&ctxt.adapter);
        let surface_format = surface_caps
            .formats
            .iter()
            .find(|f| !f.is_srgb())
            .or_else(|| surface_caps.formats.first())
            .copied()
            .ok_or(Error::SurfaceUnsupported)?;
        let alpha_mode = surface_caps
            .alpha_modes
            .first()
            .copied()
            .unwrap_or(wgpu::CompositeAlphaMode::Auto);

        let size = window.inner_size();
        let surface_config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format: surface_format,
            width: size.width.max(1),
            height: size.height.max(1),
            present_mode: setup.present_mode(),
            alpha_mode,
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&ctxt.device, &surface_config);

        let blit = BlitRenderer::new(&ctxt, surface_format);

        log::info!(
            "opened window \"{title}\" ({}x{}, {:?})",
            surface_config.width,
            surface_config.height,
            surface_format
        );

        Ok(WgpuCanvas {
            window_id: window.id(),
            window,
            ctxt,
            surface,
            surface_config,
            blit,
            out_events,
        })
    }

    /// The size of the window surface, in physical pixels.
    pub fn size(&self) -> (u32, u32) {
        (self.surface_config.width, self.surface_config.height)
    }

    /// The scale factor of the monitor the window is on.
    pub fn scale_factor(&self) -> f64 {
        self.window.scale_factor()
    }

    /// Sets the window title.
    pub fn set_title(&self, title: &str) {
        self.window.set_title(title);
    }

    /// Polls events from the window system and forwards them to the event channel.
    pub fn poll_events(&mut self) {
        let mut collector = EventCollector::default();

        let timeout = Some(std::time::Duration::ZERO);
        let status = EVENT_LOOP.with(|cell| {
            cell.borrow_mut()
                .as_mut()
                .map(|event_loop| event_loop.pump_app_events(timeout, &mut collector))
        });

        if let Some(PumpStatus::Exit(code)) = status {
            log::debug!("event loop exited with code {code}");
            let _ = self.out_events.send(WindowEvent::Close);
        }

        for (window_id, event) in collector.events {
            if window_id != self.window_id {
                continue;
            }

            match event {
                PendingEvent::WindowEvent(we) => {
                    let _ = self.out_events.send(we);
                }
                PendingEvent::Resize { width, height } => {
                    self.resize(width, height);
                    let _ = self
                        .out_events
                        .send(WindowEvent::FramebufferSize(width, height));
                }
            }
        }
    }

    fn resize(&mut self, width: u32, height: u32) {
        self.surface_config.width = width.max(1);
        self.surface_config.height = height.max(1);
        self.surface.configure(&self.ctxt.device, &self.surface_config);
    }

    /// Draws `fb` over the whole window and presents it.
    ///
    /// A frame that cannot be acquired is skipped; lost or outdated surfaces
    /// are reconfigured for the next frame.
    pub fn present(&mut self, fb: &Framebuffer) {
        let frame = match self.surface.get_current_texture() {
            Ok(frame) => frame,
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                log::debug!("surface lost or outdated, reconfiguring");
                self.surface.configure(&self.ctxt.device, &self.surface_config);
                return;
            }
            Err(e) => {
                log::warn!("failed to acquire surface texture: {e}");
                return;
            }
        };

        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        self.blit.render(&self.ctxt, fb, &view);

        self.window.pre_present_notify();
        frame.present();
    }
}

fn translate_action(state: ElementState) -> Action {
    match state {
        ElementState::Pressed => Action::Press,
        ElementState::Released => Action::Release,
    }
}

fn translate_key(physical_key: PhysicalKey) -> Key {
    match physical_key {
        PhysicalKey::Code(KeyCode::Escape) => Key::Escape,
        PhysicalKey::Code(KeyCode::Space) => Key::Space,
        _ => Key::Unknown,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_translation() {
        assert_eq!(translate_key(PhysicalKey::Code(KeyCode::Escape)), Key::Escape);
        assert_eq!(translate_key(PhysicalKey::Code(KeyCode::Space)), Key::Space);
        assert_eq!(translate_key(PhysicalKey::Code(KeyCode::KeyA)), Key::Unknown);
        assert_eq!(translate_action(ElementState::Pressed), Action::Press);
        assert_eq!(translate_action(ElementState::Released), Action::Release);
    }
}
