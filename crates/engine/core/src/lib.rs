//! Core library for Folio - generic pieces shared by every runtime crate
//!
//! This crate holds the small vocabulary the rest of the workspace speaks and
//! compiles both natively and to WebAssembly.
//!
//! # Modules
//!
//! - [`input`]: Keyboard keys, bindings and per-frame movement intents
//! - [`math`]: Distance, radius and interpolation helpers
//! - [`object`]: The [`Object`] trait for things with a transform
//! - [`timing`]: How per-frame quantities relate to elapsed time

mod error;
pub mod input;
pub mod math;
pub mod object;
pub mod timing;

pub use error::{Error, Result};
pub use input::{Action, EdgeDetector, Key, KeyBindings, KeyboardState, MovementIntent};
pub use object::Object;
pub use timing::FrameTiming;

// Re-export glam for convenience
pub use glam;
