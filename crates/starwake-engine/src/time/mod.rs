//! Time subsystem.
//!
//! Supplies the monotonically increasing `time` that effects animate against.
//! - `FrameClock::new()` follows the wall clock (interactive use)
//! - `FrameClock::fixed(hz)` advances by a constant step (offline rendering, tests)

mod frame_clock;

pub use frame_clock::{FrameClock, FrameTime, DEFAULT_TICKS_PER_SECOND};
