//! GPU rendering subsystem.
//!
//! Renderers draw into a caller-owned wgpu encoder and color view. Each
//! renderer owns its GPU resources (pipelines, buffers) and creates them
//! lazily on first use.
//!
//! Convention:
//! - effect geometry is in UV (`[0, 1]`, top-left origin, +Y down)
//! - vertex shaders map UV to NDC directly

mod ctx;
mod quad;
pub mod shield;

pub use ctx::{RenderCtx, RenderTarget};
pub use shield::{ShieldInstance, ShieldRenderer};
