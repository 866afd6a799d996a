//! Application framework for Folio
//!
//! This crate provides the pieces an application shell builds on:
//!
//! - [`App`] trait: The main interface for application logic
//! - [`camera`]: Camera and the section/follow camera rig
//! - [`easing`] and [`tween`]: Time-based animation
//! - [`cli`]: Command line arguments shared by every binary
//!
//! With the `lua` feature enabled (the default), [`lua_config`] provides the
//! base Lua configuration engine.

pub mod camera;
pub mod cli;
pub mod easing;
pub mod tween;

#[cfg(feature = "lua")]
pub mod lua_config;

pub use camera::{Camera, CameraRig, CameraRigConfig, CameraTransition};
pub use easing::Ease;
pub use folio_core::Object;
pub use tween::{Interpolate, Tween};

use folio_core::Key;

/// Application trait driven by a platform runner
///
/// The browser bridge and the headless binary both feed key events and
/// frame ticks through this interface.
pub trait App {
    /// Called once before the first frame
    fn init(&mut self) {}

    /// Handle a key press or release
    fn key_event(&mut self, key: Key, pressed: bool);

    /// Window lost focus; held keys should be released
    fn focus_lost(&mut self) {}

    /// Update application logic
    ///
    /// # Arguments
    /// * `delta_time` - Time elapsed since last update in seconds
    fn update(&mut self, delta_time: f32);
}

/// Run `frames` fixed-step updates without a window
pub fn run_headless<A: App + ?Sized>(app: &mut A, frames: u64, delta_time: f32) {
    app.init();
    for frame in 0..frames {
        tracing::trace!(frame, "headless frame");
        app.update(delta_time);
    }
}
