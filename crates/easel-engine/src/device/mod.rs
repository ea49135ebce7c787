//! wgpu-backed [`Surface`](crate::surface::Surface).
//!
//! This module is responsible for:
//! - creating the wgpu Instance/Adapter/Device/Queue for a window
//! - configuring the swapchain and reconfiguring it on resize
//! - accumulating draw calls and presenting them as one frame

mod gpu;
mod init;

pub use gpu::GpuSurface;
pub use init::GpuInit;
