//! easel engine crate.
//!
//! A small 2D drawing layer: primitives stored in logical coordinates, a
//! display that turns resize events into a scale and redraws through it, and
//! a winit/wgpu surface to draw on.

pub mod coords;
pub mod device;
pub mod display;
pub mod error;
pub mod logging;
pub mod paint;
pub mod primitives;
pub mod render;
pub mod surface;
pub mod window;

pub use error::Error;
