//! Color model.
//!
//! Primitives carry straight 8-bit sRGB colors; GPU surfaces convert to
//! linear RGBA when building vertex data.

mod color;
pub mod palette;

pub use color::Rgb;
