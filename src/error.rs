//! # Error Types
//!
//! This module defines error types used throughout the memeforge library.

use thiserror::Error;

/// Main error type for memeforge operations
#[derive(Debug, Error)]
pub enum MemeError {
    /// Background image could not be fetched or decoded.
    /// Surfaced once to the caller; never retried internally.
    #[error("Image unavailable: {0}")]
    ImageUnavailable(String),

    /// Caller supplied non-positive or non-finite dimensions.
    /// A contract violation: fail fast rather than clamp to a silently
    /// wrong image.
    #[error("Invalid geometry: {0}")]
    InvalidGeometry(String),

    /// Font file missing or unparseable
    #[error("Font error: {0}")]
    Font(String),

    /// Image encoding error
    #[error("Image error: {0}")]
    Image(String),

    /// Unknown template id
    #[error("Unknown template: {0}")]
    UnknownTemplate(String),

    /// I/O error wrapper
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
