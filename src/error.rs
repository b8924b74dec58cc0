//! Error types for sparkfield.
//!
//! The simulation core has no recoverable errors of its own. Errors only
//! come from drawing backends and from loading configuration.

use thiserror::Error;

/// Errors a [`Canvas`](crate::canvas::Canvas) backend can report.
///
/// Particles never propagate these: a failed draw is downgraded to a
/// single fallback circle.
#[derive(Debug, Error)]
pub enum DrawError {
    /// A pixel write landed outside the drawing surface.
    #[error("pixel ({x}, {y}) lies outside the canvas")]
    OutOfBounds {
        /// Horizontal screen coordinate.
        x: i32,
        /// Vertical screen coordinate.
        y: i32,
    },
    /// Circle radius was negative.
    #[error("invalid circle radius {0}")]
    InvalidRadius(i32),
    /// Any other failure reported by a rendering backend.
    #[error("drawing backend failed: {0}")]
    Backend(String),
}

/// Errors that can occur while loading or saving a [`SystemConfig`](crate::SystemConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read or write the config file.
    #[error("failed to access config file: {0}")]
    Io(#[from] std::io::Error),
    /// The file is not valid config JSON.
    #[error("failed to parse config: {0}")]
    Json(#[from] serde_json::Error),
    /// The config parsed but holds unusable values.
    #[error("invalid config: {0}")]
    Invalid(String),
}
