//! Coordinate and geometry types.
//!
//! Canonical space:
//! - logical pixels, origin top-left
//! - +X right, +Y down
//!
//! Primitives store logical coordinates; the display projects them into
//! surface pixels by multiplying with a [`ScaleFactor`] at draw time.

mod axis;
mod point;
mod scale;
mod size;
mod vec2;

pub use axis::Axis;
pub use point::Point;
pub use scale::ScaleFactor;
pub use size::Size;
pub use vec2::Vec2;
