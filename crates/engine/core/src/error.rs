//! Error types for the core crate

use thiserror::Error;

/// Result type alias for core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while interpreting input descriptions
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// A key code or key name that no binding understands
    #[error("Unknown key: {0}")]
    UnknownKey(String),

    /// An action name that is not one of the six named intents
    #[error("Unknown action: {0}")]
    UnknownAction(String),
}
