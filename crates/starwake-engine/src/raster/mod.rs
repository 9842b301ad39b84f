//! CPU evaluation of effects.
//!
//! A `Canvas` is a straight-alpha pixel buffer. Passes evaluate an effect once
//! per pixel center and composite the result over what is already there.

mod canvas;
mod pass;

pub use canvas::Canvas;
pub use pass::ShieldPass;
