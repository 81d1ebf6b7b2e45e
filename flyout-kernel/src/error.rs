//! Kernel error types.

use thiserror::Error;

/// Why the overlay could not be measured.
///
/// Not user-visible: the controller logs it and leaves its state untouched.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum MeasureError {
    #[error("overlay node is not mounted")]
    NotMounted,

    #[error("overlay has no extent ({width}x{height})")]
    ZeroExtent { width: f32, height: f32 },
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid config: {0}")]
    Invalid(String),
}
