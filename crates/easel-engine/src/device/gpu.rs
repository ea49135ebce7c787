use anyhow::{bail, Context, Result};
use winit::dpi::PhysicalSize;
use winit::window::Window;

use crate::coords::Size;
use crate::paint::Rgb;
use crate::render::{DrawList, RenderCtx, RenderTarget, SolidRenderer};
use crate::surface::Surface;

use super::GpuInit;

/// Window surface drawn with wgpu.
///
/// Draw calls accumulate in a [`DrawList`]; `present` renders the whole list
/// into a fresh swapchain texture, so everything drawn since the last resize
/// stays visible. A resize starts from an empty list, mirroring a freshly
/// created surface.
///
/// The surface borrows the window; the window must outlive it.
pub struct GpuSurface<'w> {
    window: &'w Window,
    surface: wgpu::Surface<'w>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,

    /// Current drawable size in physical pixels.
    size: PhysicalSize<u32>,
    clear: wgpu::Color,

    draw_list: DrawList,
    renderer: SolidRenderer,
}

impl<'w> GpuSurface<'w> {
    /// Creates a GPU surface bound to `window`.
    ///
    /// Adapter/device acquisition is asynchronous under wgpu.
    pub async fn new(window: &'w Window, init: GpuInit) -> Result<Self> {
        let size = window.inner_size();
        anyhow::ensure!(size.width > 0 && size.height > 0, "window has zero size");

        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::all(),
            ..Default::default()
        });

        let surface = instance
            .create_surface(window)
            .context("failed to create wgpu surface")?;

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::LowPower,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .context("failed to find a suitable GPU adapter")?;

        let (device, queue) = adapter
            .request_device(&wgpu::DeviceDescriptor {
                label: Some("easel device"),
                required_features: init.required_features,
                required_limits: init.required_limits.clone(),
                experimental_features: wgpu::ExperimentalFeatures::disabled(),
                memory_hints: wgpu::MemoryHints::MemoryUsage,
                trace: wgpu::Trace::Off,
            })
            .await
            .context("failed to create wgpu device/queue")?;

        let caps = surface.get_capabilities(&adapter);
        let format = choose_surface_format(&caps, init.prefer_srgb)
            .context("no supported surface formats")?;
        let alpha_mode = init
            .alpha_mode
            .filter(|m| caps.alpha_modes.contains(m))
            .or_else(|| caps.alpha_modes.first().copied())
            .unwrap_or(wgpu::CompositeAlphaMode::Auto);

        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width: size.width,
            height: size.height,
            present_mode: init.present_mode,
            alpha_mode,
            view_formats: vec![],
            desired_maximum_frame_latency: init.desired_maximum_frame_latency,
        };
        surface.configure(&device, &config);

        log::info!(
            "gpu surface ready: {:?} via {:?}, {}x{}",
            format,
            adapter.get_info().backend,
            size.width,
            size.height
        );

        Ok(Self {
            window,
            surface,
            device,
            queue,
            config,
            size,
            clear: clear_color(init.clear_color, format.is_srgb()),
            draw_list: DrawList::new(),
            renderer: SolidRenderer::new(),
        })
    }

    /// Current drawable size in physical pixels.
    pub fn size(&self) -> Size {
        Size::new(self.size.width, self.size.height)
    }

    /// Maps an acquisition failure to "skip this frame" or a fatal error.
    fn handle_surface_error(&mut self, err: wgpu::SurfaceError) -> Result<()> {
        match err {
            wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated => {
                if self.size.width > 0 && self.size.height > 0 {
                    self.surface.configure(&self.device, &self.config);
                }
                log::debug!("surface {err:?}; reconfigured, frame skipped");
                self.window.request_redraw();
                Ok(())
            }
            wgpu::SurfaceError::Timeout | wgpu::SurfaceError::Other => {
                log::debug!("surface {err:?}; frame skipped");
                Ok(())
            }
            wgpu::SurfaceError::OutOfMemory => bail!("surface out of memory"),
        }
    }
}

impl Surface for GpuSurface<'_> {
    fn set_caption(&mut self, caption: &str) -> Result<()> {
        self.window.set_title(caption);
        Ok(())
    }

    /// Reconfigures the swapchain and drops accumulated drawing.
    ///
    /// wgpu cannot configure a 0x0 surface; in that case only the stored size
    /// changes and configuration waits for a non-empty size.
    fn resize(&mut self, width: u32, height: u32) -> Result<()> {
        let requested = PhysicalSize::new(width, height);
        self.draw_list.clear();

        let new_size = if self.window.inner_size() != requested {
            settled_size(requested, self.window.request_inner_size(requested))
        } else {
            requested
        };

        self.size = new_size;
        if new_size.width == 0 || new_size.height == 0 {
            return Ok(());
        }

        self.config.width = new_size.width;
        self.config.height = new_size.height;
        self.surface.configure(&self.device, &self.config);
        Ok(())
    }

    fn draw_line(&mut self, color: Rgb, p1: [f32; 2], p2: [f32; 2], width: u32) -> Result<()> {
        self.draw_list.push_line(color, p1, p2, width);
        Ok(())
    }

    fn draw_polygon(&mut self, color: Rgb, vertices: &[[f32; 2]], outline_width: u32) -> Result<()> {
        self.draw_list.push_polygon(color, vertices, outline_width);
        Ok(())
    }

    fn present(&mut self) -> Result<()> {
        if self.size.width == 0 || self.size.height == 0 {
            return Ok(());
        }

        let frame = match self.surface.get_current_texture() {
            Ok(frame) => frame,
            Err(err) => return self.handle_surface_error(err),
        };
        let view = frame.texture.create_view(&wgpu::TextureViewDescriptor::default());
        let mut encoder = self.device.create_command_encoder(&wgpu::CommandEncoderDescriptor {
            label: Some("easel frame encoder"),
        });

        {
            let ctx = RenderCtx::new(&self.device, &self.queue, self.config.format, self.size());
            let mut target = RenderTarget::new(&mut encoder, &view, self.clear);
            self.renderer.render(&ctx, &mut target, &self.draw_list);
        }

        self.window.pre_present_notify();
        self.queue.submit(std::iter::once(encoder.finish()));
        frame.present();
        Ok(())
    }
}

/// Size to configure after asking the window for `requested`.
///
/// `Some` means the platform applied a size immediately, which may differ
/// from the request. `None` means the change arrives later as a `Resized`
/// event, so the requested size is used until then.
fn settled_size(requested: PhysicalSize<u32>, applied: Option<PhysicalSize<u32>>) -> PhysicalSize<u32> {
    match applied {
        Some(actual) if actual != requested => {
            log::debug!(
                "window settled at {}x{} instead of {}x{}",
                actual.width,
                actual.height,
                requested.width,
                requested.height
            );
            actual
        }
        Some(actual) => actual,
        None => requested,
    }
}

fn clear_color(color: Rgb, linear: bool) -> wgpu::Color {
    let [r, g, b, a] = if linear { color.to_linear_f32() } else { color.to_srgb_f32() };
    wgpu::Color { r: r as f64, g: g as f64, b: b as f64, a: a as f64 }
}

fn choose_surface_format(
    caps: &wgpu::SurfaceCapabilities,
    prefer_srgb: bool,
) -> Option<wgpu::TextureFormat> {
    if prefer_srgb {
        if let Some(f) = caps.formats.iter().copied().find(|f| f.is_srgb()) {
            return Some(f);
        }
    }
    caps.formats.first().copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn settled_size_prefers_what_the_window_applied() {
        let requested = PhysicalSize::new(1000, 500);
        assert_eq!(settled_size(requested, None), requested);
        assert_eq!(settled_size(requested, Some(requested)), requested);
        assert_eq!(
            settled_size(requested, Some(PhysicalSize::new(990, 480))),
            PhysicalSize::new(990, 480)
        );
    }

    #[test]
    fn clear_color_matches_target_encoding() {
        let black = clear_color(Rgb::new(0, 0, 0), true);
        assert_eq!((black.r, black.g, black.b, black.a), (0.0, 0.0, 0.0, 1.0));

        let white = clear_color(Rgb::new(255, 255, 255), false);
        assert_eq!((white.r, white.g, white.b, white.a), (1.0, 1.0, 1.0, 1.0));
    }
}
