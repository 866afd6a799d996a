//! Error types for the world crate

use thiserror::Error;

/// Result type alias for world operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised when building world data
#[derive(Debug, Error, PartialEq)]
pub enum Error {
    /// Interactive object ids must be non-empty
    #[error("Interactive object id must not be empty")]
    EmptyId,

    /// Trigger radius must be a positive, finite number
    #[error("Invalid radius for '{id}': {radius}")]
    InvalidRadius { id: String, radius: f32 },

    /// Positions and look-at points must be finite
    #[error("Non-finite vector for '{0}'")]
    NonFinite(String),

    /// Section ids must be non-empty
    #[error("Section id must not be empty")]
    EmptySection,
}
