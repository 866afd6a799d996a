//! Kinematic avatar movement for the portfolio world
//!
//! There is no collision geometry: the avatar walks on a flat ground plane
//! inside a square boundary, jumps with a fixed impulse and falls under a
//! constant per-frame gravity.

pub mod avatar_controller;

pub use avatar_controller::{AvatarController, AvatarControllerConfig, MoveOutcome};

// Re-export glam for convenience
pub use glam;
