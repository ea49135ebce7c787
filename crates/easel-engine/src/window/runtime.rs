use anyhow::{Context, Result};
use ouroboros::self_referencing;

use winit::application::ApplicationHandler;
use winit::dpi::PhysicalSize;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::window::{Window, WindowId};

use crate::coords::Size;
use crate::device::{GpuInit, GpuSurface};
use crate::display::{Control, Display, DisplayConfig, Event};
use crate::primitives::Element;

/// Entry point for a windowed display.
pub struct Runtime;

impl Runtime {
    /// Opens one window per `config`, registers `elements` in order, and runs
    /// until the window is closed.
    ///
    /// The physical window size starts at the logical display size, so the
    /// initial scale is `(1, 1)`. Returns the first fatal frame error.
    pub fn run(config: DisplayConfig, gpu_init: GpuInit, elements: Vec<Element>) -> Result<()> {
        let event_loop = EventLoop::new().context("failed to create winit EventLoop")?;
        let mut state = AppState::new(config, gpu_init, elements);

        event_loop
            .run_app(&mut state)
            .context("winit event loop terminated with error")?;

        match state.failure.take() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

#[self_referencing]
struct WindowEntry {
    window: Window,

    #[borrows(window)]
    #[covariant]
    display: Display<GpuSurface<'this>>,
}

struct AppState {
    config: DisplayConfig,
    gpu_init: GpuInit,
    /// Taken when the window is created.
    pending: Option<Vec<Element>>,

    entry: Option<WindowEntry>,
    failure: Option<anyhow::Error>,
}

impl AppState {
    fn new(config: DisplayConfig, gpu_init: GpuInit, elements: Vec<Element>) -> Self {
        Self {
            config,
            gpu_init,
            pending: Some(elements),
            entry: None,
            failure: None,
        }
    }

    fn fail(&mut self, event_loop: &ActiveEventLoop, err: anyhow::Error) {
        log::error!("{err:#}");
        if self.failure.is_none() {
            self.failure = Some(err);
        }
        event_loop.exit();
    }

    fn create_window_entry(&mut self, event_loop: &ActiveEventLoop) -> Result<WindowEntry> {
        let size = self.config.size;
        let attrs = Window::default_attributes()
            .with_title(self.config.caption.clone())
            .with_inner_size(PhysicalSize::new(size.width, size.height))
            .with_resizable(self.config.resizable);

        let window = event_loop
            .create_window(attrs)
            .context("failed to create window")?;

        let config = self.config.clone();
        let gpu_init = self.gpu_init.clone();
        let elements = self.pending.take().unwrap_or_default();

        WindowEntryTryBuilder {
            window,
            display_builder: |window| {
                let surface = pollster::block_on(GpuSurface::new(window, gpu_init))?;
                let mut display = Display::new(config, surface)?;
                for element in elements {
                    display.add(element)?;
                }
                Ok(display)
            },
        }
        .try_build()
    }
}

impl ApplicationHandler for AppState {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.entry.is_some() {
            return;
        }
        event_loop.set_control_flow(ControlFlow::Wait);

        match self.create_window_entry(event_loop) {
            Ok(entry) => self.entry = Some(entry),
            Err(err) => self.fail(event_loop, err.context("failed to open display")),
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _window_id: WindowId, event: WindowEvent) {
        let Some(entry) = self.entry.as_mut() else {
            return;
        };

        let result = match event {
            WindowEvent::CloseRequested => {
                entry.with_display_mut(|display| display.handle_event(Event::Quit))
            }
            WindowEvent::Resized(new_size) => {
                let size = Size::new(new_size.width, new_size.height);
                // Sizes matching the current surface carry no new scale.
                if entry.with_display(|display| display.surface().size()) == size {
                    Ok(Control::Continue)
                } else {
                    entry.with_display_mut(|display| display.handle_event(Event::Resize(size)))
                }
            }
            WindowEvent::RedrawRequested => {
                entry.with_display_mut(|display| display.present().map(|()| Control::Continue))
            }
            _ => Ok(Control::Continue),
        };

        match result {
            Ok(Control::Continue) => {}
            Ok(Control::Exit) => {
                self.entry = None;
                event_loop.exit();
            }
            Err(err) => {
                self.entry = None;
                self.fail(event_loop, err);
            }
        }
    }
}
