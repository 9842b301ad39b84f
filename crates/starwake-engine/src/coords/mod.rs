//! Coordinate types shared by effects and renderers.
//!
//! Canonical effect space is UV:
//! - `[0, 1] x [0, 1]` across the target surface
//! - origin top-left, +X right, +Y down
//!
//! Pixel indices are converted to UV through `Viewport`.

mod vec2;
mod viewport;

pub use vec2::Vec2;
pub use viewport::Viewport;
