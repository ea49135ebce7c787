//! GPU rendering for surfaces backed by wgpu.
//!
//! Convention:
//! - draw commands are in surface pixels (top-left origin, +Y down)
//! - commands are tessellated on the CPU into one triangle list
//! - the vertex shader converts to NDC using a viewport uniform

mod ctx;
mod list;
mod solid;
pub mod tessellate;

pub use ctx::{RenderCtx, RenderTarget};
pub use list::{DrawCmd, DrawList, LineCmd, PolygonCmd};
pub use solid::SolidRenderer;
pub use tessellate::SolidVertex;
