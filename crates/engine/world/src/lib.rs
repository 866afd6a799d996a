//! Shared world state for the portfolio runtime
//!
//! Holds the avatar position, per-section camera framings, the registry of
//! interactive hotspots and the interaction callback slot, plus the proximity
//! check that connects them.

mod error;
mod interaction;
mod phase;
pub mod section;
mod state;
mod types;

pub use error::{Error, Result};
pub use interaction::find_nearest;
pub use phase::GamePhase;
pub use section::{NAV_SECTIONS, SectionId, SectionInfo, WORLD_SECTIONS};
pub use state::{
    DEFAULT_HOME_TARGET, InteractionCallback, Registration, SPAWN_POSITION, WorldEvent,
    WorldSnapshot, WorldState,
};
pub use types::{CameraTarget, InteractiveObject};

pub use glam;
