//! Error types and result aliases.
//!
//! Defines the core `ViewError` enumeration and common `Result` type.

use thiserror::Error;

/// Verification view errors.
#[derive(Debug, Error)]
pub enum ViewError {
    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),

    /// Text size was zero, negative or not finite.
    #[error("invalid text size: {0}")]
    InvalidTextSize(f32),

    /// Surface dimensions must both be non-zero.
    #[error("invalid surface dimensions: {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    /// Font data could not be parsed.
    #[error("font error: {0}")]
    Font(String),

    /// Image encoding failed.
    #[error("encode error: {0}")]
    Encode(String),

    /// Writing the rendered image failed.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// No surface has been allocated yet.
    #[error("no surface allocated, resize first")]
    NoSurface,
}

/// Result type alias for `ViewError`.
pub type Result<T> = std::result::Result<T, ViewError>;
