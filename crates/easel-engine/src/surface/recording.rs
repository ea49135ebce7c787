use anyhow::{bail, Result};

use crate::paint::Rgb;

use super::Surface;

/// One call received by a [`RecordingSurface`].
#[derive(Debug, Clone, PartialEq)]
pub enum SurfaceCall {
    SetCaption(String),
    Resize { width: u32, height: u32 },
    Line { color: Rgb, p1: [f32; 2], p2: [f32; 2], width: u32 },
    Polygon { color: Rgb, vertices: Vec<[f32; 2]>, outline_width: u32 },
    Present,
}

/// Headless surface that records every call in order.
///
/// Draw calls can be made to fail on demand to exercise frame-error paths.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    calls: Vec<SurfaceCall>,
    fail_draws: bool,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Calls received since creation or the last [`take_calls`](Self::take_calls).
    pub fn calls(&self) -> &[SurfaceCall] {
        &self.calls
    }

    pub fn take_calls(&mut self) -> Vec<SurfaceCall> {
        std::mem::take(&mut self.calls)
    }

    /// When set, `draw_line` and `draw_polygon` return an error without recording.
    pub fn set_fail_draws(&mut self, fail: bool) {
        self.fail_draws = fail;
    }

    /// Recorded polygon vertex lists, in call order.
    pub fn polygons(&self) -> impl Iterator<Item = &[[f32; 2]]> {
        self.calls.iter().filter_map(|c| match c {
            SurfaceCall::Polygon { vertices, .. } => Some(vertices.as_slice()),
            _ => None,
        })
    }

    fn check_draw(&self) -> Result<()> {
        if self.fail_draws {
            bail!("recording surface: draw rejected");
        }
        Ok(())
    }
}

impl Surface for RecordingSurface {
    fn set_caption(&mut self, caption: &str) -> Result<()> {
        self.calls.push(SurfaceCall::SetCaption(caption.to_owned()));
        Ok(())
    }

    fn resize(&mut self, width: u32, height: u32) -> Result<()> {
        self.calls.push(SurfaceCall::Resize { width, height });
        Ok(())
    }

    fn draw_line(&mut self, color: Rgb, p1: [f32; 2], p2: [f32; 2], width: u32) -> Result<()> {
        self.check_draw()?;
        self.calls.push(SurfaceCall::Line { color, p1, p2, width });
        Ok(())
    }

    fn draw_polygon(&mut self, color: Rgb, vertices: &[[f32; 2]], outline_width: u32) -> Result<()> {
        self.check_draw()?;
        self.calls.push(SurfaceCall::Polygon {
            color,
            vertices: vertices.to_vec(),
            outline_width,
        });
        Ok(())
    }

    fn present(&mut self) -> Result<()> {
        self.calls.push(SurfaceCall::Present);
        Ok(())
    }
}
