//! Error types for effect parameters and raster targets.

use thiserror::Error;

/// Rejected effect parameters or render targets.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ShieldError {
    /// Radius must be finite and strictly positive.
    #[error("shield radius must be > 0, got {radius}")]
    InvalidRadius { radius: f32 },

    /// Center has a NaN or infinite component.
    #[error("shield center is not finite")]
    NonFiniteCenter,

    /// Time is NaN or infinite.
    #[error("shield time must be finite, got {time}")]
    NonFiniteTime { time: f32 },

    /// Canvas with a zero dimension.
    #[error("canvas must not be empty, got {width}x{height}")]
    EmptyCanvas { width: u32, height: u32 },

    /// Raster worker pool could not be started.
    #[error("raster thread pool: {message}")]
    ThreadPool { message: String },
}
