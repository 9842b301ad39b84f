//! Paint model shared between effects and renderers.
//!
//! Colors are linear and straight-alpha. Effects derive alpha on their own and
//! pass RGB through, so premultiplication only happens at composite or upload
//! time.

pub mod color;

pub use color::{charge_tint, Color};
