//! Navigable 3D portfolio world
//!
//! Ties the engine crates into a session: the built-in [`Scene`] registers
//! section framings and hotspots, [`Portfolio`] runs loading, movement,
//! interactions, camera and overlay state frame by frame, and [`Script`]
//! drives a session from a text timeline for headless runs.
//!
//! With the `lua` feature, scenes can also be loaded from Lua files through
//! [`PortfolioConfig`]. The `wasm` feature exposes the session to the browser
//! (build with `--no-default-features --features wasm`).

pub mod content;
mod error;
pub mod feedback;
pub mod scene;
pub mod script;
pub mod session;
pub mod settings;

#[cfg(feature = "lua")]
pub mod config;

#[cfg(feature = "wasm")]
pub mod wasm;

pub use error::{PortfolioError, Result};
pub use feedback::{FeedbackAnimation, FeedbackPose};
pub use scene::{Feedback, HotspotSpec, MountReport, Scene, SceneCommand};
pub use script::{Script, ScriptOutcome, Step};
pub use session::{FrameReport, InfoPanel, NavEntry, Portfolio, PortfolioSnapshot};
pub use settings::SessionConfig;

#[cfg(feature = "lua")]
pub use config::PortfolioConfig;
