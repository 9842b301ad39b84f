//! Per-fragment visual effects.
//!
//! Effects are pure functions of a fragment UV and a per-frame parameter block.
//! They keep no state, so any number of threads (or GPU invocations) may
//! evaluate them at once against the same parameters.

pub mod shield;

pub use shield::{falloff, pulse, shield_fragment, ShieldParams};
