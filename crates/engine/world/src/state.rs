//! The shared world store
//!
//! [`WorldState`] is the single owner of everything the runtime components
//! share: avatar position, per-section camera framings, the interactive
//! object registry, the follow flag, and the interaction callback slot.
//! Components read and write through accessors; changes are recorded as
//! [`WorldEvent`]s that collaborators drain once per frame.

use crate::interaction::find_nearest;
use crate::{CameraTarget, Error, InteractiveObject, Result, SectionId};
use glam::Vec3;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Handler invoked with the object the avatar interacted with
pub type InteractionCallback = Box<dyn FnMut(&InteractiveObject)>;

/// Avatar spawn point
pub const SPAWN_POSITION: Vec3 = Vec3::new(0.0, 0.5, 0.0);

/// Camera framing for the landing section before any scene is mounted
pub const DEFAULT_HOME_TARGET: CameraTarget = CameraTarget {
    position: Vec3::new(0.0, 3.0, 10.0),
    look_at: Vec3::new(0.0, 1.0, 0.0),
};

// ============================================================================
// Events
// ============================================================================

/// Change recorded by the world state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum WorldEvent {
    AvatarMoved { position: Vec3 },
    CameraTargetSet { section: SectionId },
    ObjectRegistered { id: String },
    FollowChanged { enabled: bool },
    Interacted { id: String },
}

/// Result of registering an interactive object
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Registration {
    Added,
    /// An object with the same id exists; the registry is unchanged
    AlreadyRegistered,
}

// ============================================================================
// World state
// ============================================================================

pub struct WorldState {
    avatar_position: Vec3,
    camera_targets: BTreeMap<SectionId, CameraTarget>,
    objects: Vec<InteractiveObject>,
    follow_player: bool,
    callback: Option<InteractionCallback>,
    events: Vec<WorldEvent>,
}

impl Default for WorldState {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for WorldState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WorldState")
            .field("avatar_position", &self.avatar_position)
            .field("camera_targets", &self.camera_targets)
            .field("objects", &self.objects.len())
            .field("follow_player", &self.follow_player)
            .field("has_callback", &self.callback.is_some())
            .field("pending_events", &self.events.len())
            .finish()
    }
}

impl WorldState {
    /// Avatar at spawn, home framing set, follow off, no objects
    pub fn new() -> Self {
        let mut camera_targets = BTreeMap::new();
        camera_targets.insert(SectionId::home(), DEFAULT_HOME_TARGET);

        Self {
            avatar_position: SPAWN_POSITION,
            camera_targets,
            objects: Vec::new(),
            follow_player: false,
            callback: None,
            events: Vec::new(),
        }
    }

    // --- avatar -------------------------------------------------------------

    pub fn avatar_position(&self) -> Vec3 {
        self.avatar_position
    }

    /// Store the avatar position; an unchanged value records no event
    pub fn set_avatar_position(&mut self, position: Vec3) -> bool {
        if position == self.avatar_position {
            return false;
        }
        self.avatar_position = position;
        self.events.push(WorldEvent::AvatarMoved { position });
        true
    }

    // --- camera targets -----------------------------------------------------

    /// Insert or replace the framing for a section
    pub fn set_camera_target(
        &mut self,
        section: impl Into<SectionId>,
        position: Vec3,
        look_at: Vec3,
    ) -> Result<()> {
        let section = section.into();
        if section.is_empty() {
            return Err(Error::EmptySection);
        }
        let target = CameraTarget::new(position, look_at);
        if !target.is_finite() {
            return Err(Error::NonFinite(section.to_string()));
        }

        tracing::debug!(%section, ?position, ?look_at, "camera target set");
        self.camera_targets.insert(section.clone(), target);
        self.events.push(WorldEvent::CameraTargetSet { section });
        Ok(())
    }

    pub fn camera_target(&self, section: &str) -> Option<CameraTarget> {
        self.camera_targets.get(section).copied()
    }

    pub fn camera_targets(&self) -> impl Iterator<Item = (&SectionId, &CameraTarget)> {
        self.camera_targets.iter()
    }

    // --- interactive objects ------------------------------------------------

    /// Append an object to the registry unless its id is already taken
    pub fn register_interactive_object(&mut self, object: InteractiveObject) -> Registration {
        if self.objects.iter().any(|o| o.id() == object.id()) {
            tracing::debug!(id = object.id(), "duplicate interactive object ignored");
            return Registration::AlreadyRegistered;
        }

        self.events.push(WorldEvent::ObjectRegistered {
            id: object.id().to_string(),
        });
        self.objects.push(object);
        Registration::Added
    }

    /// Registered objects in registration order
    pub fn interactive_objects(&self) -> &[InteractiveObject] {
        &self.objects
    }

    pub fn interactive_object(&self, id: &str) -> Option<&InteractiveObject> {
        self.objects.iter().find(|o| o.id() == id)
    }

    // --- follow flag --------------------------------------------------------

    pub fn follow_player(&self) -> bool {
        self.follow_player
    }

    pub fn set_follow_player(&mut self, enabled: bool) {
        if self.follow_player != enabled {
            self.follow_player = enabled;
            self.events.push(WorldEvent::FollowChanged { enabled });
        }
    }

    // --- interaction --------------------------------------------------------

    /// Install the interaction handler, replacing any previous one
    pub fn set_interaction_callback<F>(&mut self, callback: F)
    where
        F: FnMut(&InteractiveObject) + 'static,
    {
        self.callback = Some(Box::new(callback));
    }

    pub fn clear_interaction_callback(&mut self) {
        self.callback = None;
    }

    pub fn has_interaction_callback(&self) -> bool {
        self.callback.is_some()
    }

    /// Run the proximity check against the current avatar position
    pub fn check_interactions(&mut self) -> Option<InteractiveObject> {
        let point = self.avatar_position;
        self.check_interactions_at(point)
    }

    /// Run the proximity check at `point`
    ///
    /// No-op without a callback. On a hit the callback is invoked
    /// synchronously and the hit is returned; a miss is silent.
    pub fn check_interactions_at(&mut self, point: Vec3) -> Option<InteractiveObject> {
        let callback = self.callback.as_mut()?;
        let hit = find_nearest(&self.objects, point)?;

        tracing::info!(id = hit.id(), title = hit.title(), "interaction");
        callback(hit);

        let hit = hit.clone();
        self.events.push(WorldEvent::Interacted {
            id: hit.id().to_string(),
        });
        Some(hit)
    }

    // --- events -------------------------------------------------------------

    /// Take every event recorded since the last drain
    pub fn drain_events(&mut self) -> Vec<WorldEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn snapshot(&self) -> WorldSnapshot {
        WorldSnapshot {
            avatar_position: self.avatar_position,
            follow_player: self.follow_player,
            camera_targets: self
                .camera_targets
                .iter()
                .map(|(id, target)| (id.clone(), *target))
                .collect(),
            objects: self.objects.iter().map(|o| o.id().to_string()).collect(),
        }
    }
}

/// Serializable view of the world state
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WorldSnapshot {
    pub avatar_position: Vec3,
    pub follow_player: bool,
    pub camera_targets: Vec<(SectionId, CameraTarget)>,
    pub objects: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let world = WorldState::new();
        assert_eq!(world.avatar_position(), SPAWN_POSITION);
        assert!(!world.follow_player());
        assert_eq!(world.camera_target("home"), Some(DEFAULT_HOME_TARGET));
        assert!(world.interactive_objects().is_empty());
    }

    #[test]
    fn test_unchanged_position_records_no_event() {
        let mut world = WorldState::new();
        assert!(!world.set_avatar_position(SPAWN_POSITION));
        assert!(world.drain_events().is_empty());

        assert!(world.set_avatar_position(Vec3::ONE));
        assert_eq!(
            world.drain_events(),
            vec![WorldEvent::AvatarMoved {
                position: Vec3::ONE
            }]
        );
    }

    #[test]
    fn test_camera_target_rejects_bad_input() {
        let mut world = WorldState::new();
        assert_eq!(
            world.set_camera_target("", Vec3::ZERO, Vec3::ZERO),
            Err(Error::EmptySection)
        );
        assert!(
            world
                .set_camera_target("about", Vec3::splat(f32::NAN), Vec3::ZERO)
                .is_err()
        );
        assert!(world.camera_target("about").is_none());
    }

    #[test]
    fn test_follow_toggle_event_only_on_change() {
        let mut world = WorldState::new();
        world.set_follow_player(false);
        assert!(world.drain_events().is_empty());
        world.set_follow_player(true);
        assert_eq!(
            world.drain_events(),
            vec![WorldEvent::FollowChanged { enabled: true }]
        );
    }

    #[test]
    fn test_debug_omits_callback_body() {
        let mut world = WorldState::new();
        world.set_interaction_callback(|_| {});
        let text = format!("{world:?}");
        assert!(text.contains("has_callback: true"));
    }
}
