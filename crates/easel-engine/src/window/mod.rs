//! Windowed runtime.
//!
//! Owns the `winit` EventLoop and the single window, binds a [`GpuSurface`]
//! to it, and routes close/resize events to the [`Display`].
//!
//! [`GpuSurface`]: crate::device::GpuSurface
//! [`Display`]: crate::display::Display

mod runtime;

pub use runtime::Runtime;
