use thiserror::Error;

use crate::coords::Axis;

/// Errors raised by geometry, primitive construction and the display lifecycle.
///
/// Backend failures are not represented here; surfaces report them through
/// `anyhow::Error` and they are fatal to the frame that produced them.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// A fixed-arity shape received the wrong number of vertices.
    #[error("shape requires exactly {expected} vertices, got {found}")]
    InvalidArity { expected: usize, found: usize },

    /// A per-axis division hit a zero divisor.
    #[error("division by zero on the {axis} axis")]
    DivideByZero { axis: Axis },

    /// Scale factors must be positive and finite on both axes.
    #[error("scale factor must be positive and finite, got ({x}, {y})")]
    InvalidScale { x: f32, y: f32 },

    /// Logical display sizes must be non-zero on both axes.
    #[error("display size must be non-zero, got {width}x{height}")]
    InvalidSize { width: u32, height: u32 },

    #[error("display is closed")]
    DisplayClosed,
}
