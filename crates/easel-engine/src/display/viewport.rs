use anyhow::{Context, Result};

use crate::coords::{ScaleFactor, Size};
use crate::error::Error;
use crate::primitives::{Drawable, Element};
use crate::surface::Surface;

use super::{Control, DisplayConfig, Event, EventSource};

/// Lifecycle state of a [`Display`].
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum DisplayState {
    Created,
    Active,
    /// A new raw scale was stored and the surface has not been redrawn yet.
    Resizing,
    Closed,
}

/// Resizable 2D display.
///
/// Owns the raw scale, the element registry and the surface. Registered
/// elements are never modified; projected coordinates are recomputed on every
/// draw. Registration order is draw order (back-to-front).
pub struct Display<S: Surface> {
    config: DisplayConfig,
    raw_scale: ScaleFactor,
    elements: Vec<Element>,
    state: DisplayState,
    surface: S,
}

impl<S: Surface> Display<S> {
    /// Binds a display to a surface already opened at `config.size`.
    ///
    /// Sets the caption, starts at identity scale with an empty registry.
    pub fn new(config: DisplayConfig, surface: S) -> Result<Self> {
        if config.size.is_empty() {
            return Err(Error::InvalidSize {
                width: config.size.width,
                height: config.size.height,
            }
            .into());
        }

        let mut display = Self {
            config,
            raw_scale: ScaleFactor::IDENTITY,
            elements: Vec::new(),
            state: DisplayState::Created,
            surface,
        };

        display
            .surface
            .set_caption(&display.config.caption)
            .context("failed to set display caption")?;
        display.state = DisplayState::Active;

        log::debug!(
            "display {:?} initialized at {}x{} (resizable={}, keep_aspect={})",
            display.config.caption,
            display.config.size.width,
            display.config.size.height,
            display.config.resizable,
            display.config.maintain_aspect_ratio,
        );

        Ok(display)
    }

    /// Registers `element`, draws it once at the current effective scale and
    /// presents. Earlier drawing is kept.
    pub fn add(&mut self, element: impl Into<Element>) -> Result<()> {
        self.ensure_open()?;
        let element = element.into();
        log::debug!("registering {} {:?}", element.kind(), element.id());

        // A failed draw leaves the registry unchanged.
        let scale = self.effective_scale();
        element.draw(&mut self.surface, scale)?;
        self.elements.push(element);
        self.surface.present().context("failed to present display")
    }

    /// Stores the raw scale for a new physical size.
    ///
    /// Zero-sized reports (e.g. a minimized window) are ignored and the
    /// previous scale is kept.
    pub fn on_resize(&mut self, new_size: Size) -> Result<()> {
        self.ensure_open()?;

        if new_size.is_empty() {
            log::debug!("ignoring empty resize to {}x{}", new_size.width, new_size.height);
            return Ok(());
        }
        if !self.config.resizable {
            log::warn!("resize routed to a non-resizable display {:?}", self.config.caption);
        }

        self.raw_scale = ScaleFactor::between(self.config.size, new_size)?;
        self.state = DisplayState::Resizing;

        log::debug!(
            "resized to {}x{}: raw scale ({}, {})",
            new_size.width,
            new_size.height,
            self.raw_scale.x(),
            self.raw_scale.y()
        );
        Ok(())
    }

    /// Scale used to project primitives.
    pub fn effective_scale(&self) -> ScaleFactor {
        if self.config.maintain_aspect_ratio {
            self.raw_scale.uniform()
        } else {
            self.raw_scale
        }
    }

    /// Resizes the surface to `logical size * raw scale`, redraws every
    /// element in registration order at the effective scale, and presents.
    pub fn redraw(&mut self) -> Result<()> {
        self.ensure_open()?;

        let physical = self.raw_scale.apply_to(self.config.size);
        self.surface
            .resize(physical.width, physical.height)
            .context("failed to resize display surface")?;

        let scale = self.effective_scale();
        for element in &self.elements {
            element.draw(&mut self.surface, scale)?;
        }
        self.surface.present().context("failed to present display")?;

        self.state = DisplayState::Active;
        Ok(())
    }

    /// Presents the surface again without redrawing.
    pub fn present(&mut self) -> Result<()> {
        self.ensure_open()?;
        self.surface.present().context("failed to present display")
    }

    /// Applies one environment event.
    pub fn handle_event(&mut self, event: Event) -> Result<Control> {
        match event {
            Event::Resize(size) => {
                self.on_resize(size)?;
                self.redraw()?;
                Ok(Control::Continue)
            }
            Event::Quit => {
                self.close();
                Ok(Control::Exit)
            }
        }
    }

    /// Drives the display from `events` until a quit or the source runs dry.
    pub fn run(&mut self, mut events: impl EventSource) -> Result<()> {
        while let Some(event) = events.next_event() {
            if self.handle_event(event)? == Control::Exit {
                break;
            }
        }
        Ok(())
    }

    pub fn close(&mut self) {
        if self.state != DisplayState::Closed {
            log::debug!("display {:?} closed", self.config.caption);
            self.state = DisplayState::Closed;
        }
    }

    #[inline]
    pub fn state(&self) -> DisplayState {
        self.state
    }

    #[inline]
    pub fn raw_scale(&self) -> ScaleFactor {
        self.raw_scale
    }

    #[inline]
    pub fn logical_size(&self) -> Size {
        self.config.size
    }

    #[inline]
    pub fn caption(&self) -> &str {
        &self.config.caption
    }

    /// Registered elements in draw order.
    #[inline]
    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    #[inline]
    pub fn surface(&self) -> &S {
        &self.surface
    }

    #[inline]
    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    fn ensure_open(&self) -> Result<(), Error> {
        if self.state == DisplayState::Closed {
            Err(Error::DisplayClosed)
        } else {
            Ok(())
        }
    }
}
