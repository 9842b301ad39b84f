//! Starwake engine crate.
//!
//! Visual effects for the starwake tech demo, and the two pipelines that
//! evaluate them: a CPU raster path and a wgpu renderer.

pub mod coords;
pub mod effects;
pub mod error;
pub mod logging;
pub mod paint;
pub mod raster;
pub mod render;
pub mod time;
