//! Display: scale model + element registry over an owned surface.
//!
//! Lifecycle: `Created → Active → (Resizing → Active)* → Closed`.
//!
//! Two scales are tracked:
//! - raw scale: physical size / logical size, per axis; sizes the surface
//! - effective scale: what primitives are projected with; equals the raw scale,
//!   or its uniform minimum when aspect ratio is preserved

mod config;
mod event;
mod viewport;

pub use config::DisplayConfig;
pub use event::{Control, Event, EventSource};
pub use viewport::{Display, DisplayState};
