//! Drawable primitives.
//!
//! Primitives keep logical coordinates. `draw` projects them through the
//! scale it is given and issues backend calls; it never mutates the primitive,
//! so drawing the same primitive twice issues the same calls twice.
//!
//! Adding a primitive:
//! - add a module with the shape and its `Drawable` impl
//! - add a variant to [`Element`] and its `From` impl

mod element;
mod line;
mod polygon;
mod quadrilateral;

pub use element::Element;
pub use line::Line;
pub use polygon::Polygon;
pub use quadrilateral::Quadrilateral;

use anyhow::Result;

use crate::coords::ScaleFactor;
use crate::paint::Rgb;
use crate::surface::Surface;

/// Default stroke width for lines and polygon outlines.
pub const DEFAULT_STROKE_WIDTH: u32 = 5;

/// Shared capability of every primitive.
pub trait Drawable {
    fn id(&self) -> &str;

    fn color(&self) -> Rgb;

    /// Projects the primitive through `scale` and issues its draw call.
    fn draw(&self, surface: &mut dyn Surface, scale: ScaleFactor) -> Result<()>;
}
