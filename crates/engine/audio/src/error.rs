use thiserror::Error;

/// Result type alias for audio operations
pub type Result<T> = std::result::Result<T, Error>;

/// Audio signalling errors
#[derive(Debug, Error, PartialEq)]
pub enum Error {
    /// Volume outside [0, 1] or not a number
    #[error("Invalid volume: {0}")]
    InvalidVolume(f32),

    /// The platform side refused a cue
    #[error("Cue sink error: {0}")]
    Sink(String),
}
