//! Backend boundary.
//!
//! A [`Surface`] is the drawable target a `Display` owns. Opening the surface
//! and polling environment events are the backend's job; the display only
//! issues the calls below. Every call is synchronous and any error is fatal
//! to the current frame.

mod recording;

pub use recording::{RecordingSurface, SurfaceCall};

use anyhow::Result;

use crate::paint::Rgb;

/// Primitive drawing target.
///
/// Coordinates are surface pixels, already projected by the caller.
pub trait Surface {
    fn set_caption(&mut self, caption: &str) -> Result<()>;

    /// Resizes the drawable area. Contents after a resize are unspecified
    /// until the next full redraw.
    fn resize(&mut self, width: u32, height: u32) -> Result<()>;

    /// Strokes a segment `width` pixels wide.
    fn draw_line(&mut self, color: Rgb, p1: [f32; 2], p2: [f32; 2], width: u32) -> Result<()>;

    /// Draws a closed polygon. `outline_width == 0` fills it; otherwise only the
    /// edges are stroked with that width.
    fn draw_polygon(&mut self, color: Rgb, vertices: &[[f32; 2]], outline_width: u32) -> Result<()>;

    /// Makes everything drawn so far visible.
    fn present(&mut self) -> Result<()>;
}
