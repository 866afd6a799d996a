use folio_core::{FrameTiming, MovementIntent, Object};
use folio_world::WorldState;
use glam::{Quat, Vec3};
use serde::{Deserialize, Serialize};

/// Configuration for the avatar controller
///
/// Speeds, impulse and gravity are per-frame quantities; see [`FrameTiming`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AvatarControllerConfig {
    /// Horizontal displacement per frame
    pub speed: f32,
    /// Horizontal displacement per frame while the run intent is held
    pub run_speed: f32,
    /// Vertical velocity set when a jump starts
    pub jump_impulse: f32,
    /// Vertical velocity lost per airborne frame (positive, applied downward)
    pub gravity: f32,
    /// Height the avatar rests at
    pub ground_height: f32,
    /// Half-extent of the square walkable area on X and Z
    pub boundary: f32,
    /// Starting position
    pub spawn: Vec3,
    /// How per-frame constants are scaled by the frame interval
    pub timing: FrameTiming,
}

impl Default for AvatarControllerConfig {
    fn default() -> Self {
        Self {
            speed: 0.15,
            run_speed: 0.3,
            jump_impulse: 0.5,
            gravity: 0.02,
            ground_height: 0.5,
            boundary: 40.0,
            spawn: Vec3::new(0.0, 0.5, 0.0),
            timing: FrameTiming::PerFrame,
        }
    }
}

/// What happened during one tick
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MoveOutcome {
    /// Position after the tick
    pub position: Vec3,
    /// Position differs from the previous tick
    pub moved: bool,
    /// A jump started this tick
    pub jumped: bool,
    /// The avatar touched down this tick
    pub landed: bool,
}

/// Kinematic avatar controller
///
/// Owns the transient movement state (velocity, grounded flag, facing);
/// only the position is shared with the rest of the runtime.
#[derive(Debug, Clone)]
pub struct AvatarController {
    config: AvatarControllerConfig,

    // State
    position: Vec3,
    velocity: Vec3,
    is_grounded: bool,
    facing: f32,
}

impl Default for AvatarController {
    fn default() -> Self {
        Self::new(AvatarControllerConfig::default())
    }
}

impl AvatarController {
    /// Create a grounded controller at the configured spawn point
    pub fn new(config: AvatarControllerConfig) -> Self {
        Self {
            config,
            position: config.spawn,
            velocity: Vec3::ZERO,
            is_grounded: true,
            facing: 0.0,
        }
    }

    /// Planar unit direction for an intent, or zero when nothing is held
    ///
    /// Forward is -Z, leftward is -X. Opposing inputs cancel.
    pub fn direction(intent: &MovementIntent) -> Vec3 {
        let mut direction = Vec3::ZERO;
        if intent.forward {
            direction.z -= 1.0;
        }
        if intent.backward {
            direction.z += 1.0;
        }
        if intent.leftward {
            direction.x -= 1.0;
        }
        if intent.rightward {
            direction.x += 1.0;
        }
        direction.normalize_or_zero()
    }

    /// Advance the avatar by one frame
    pub fn tick(&mut self, intent: &MovementIntent, dt: f32) -> MoveOutcome {
        let scale = self.config.timing.frame_scale(dt);
        let previous = self.position;
        let was_grounded = self.is_grounded;

        let direction = Self::direction(intent);
        let speed = if intent.run {
            self.config.run_speed
        } else {
            self.config.speed
        };
        self.velocity.x = direction.x * speed;
        self.velocity.z = direction.z * speed;

        let mut jumped = false;
        if intent.jump && self.is_grounded {
            self.velocity.y = self.config.jump_impulse;
            self.is_grounded = false;
            jumped = true;
            tracing::debug!(y = self.position.y, "jump");
        }

        if !self.is_grounded {
            self.velocity.y -= self.config.gravity * scale;
        }

        self.position += self.velocity * scale;

        if self.position.y < self.config.ground_height {
            self.position.y = self.config.ground_height;
            self.velocity.y = 0.0;
            self.is_grounded = true;
        }

        let boundary = self.config.boundary;
        self.position.x = self.position.x.clamp(-boundary, boundary);
        self.position.z = self.position.z.clamp(-boundary, boundary);

        if direction != Vec3::ZERO {
            self.facing = folio_core::math::heading(direction);
        }

        MoveOutcome {
            position: self.position,
            moved: self.position != previous,
            jumped,
            landed: !was_grounded && self.is_grounded,
        }
    }

    /// Tick and publish the new position to the world if it changed
    pub fn step(
        &mut self,
        world: &mut WorldState,
        intent: &MovementIntent,
        dt: f32,
    ) -> MoveOutcome {
        let outcome = self.tick(intent, dt);
        if outcome.position != world.avatar_position() {
            world.set_avatar_position(outcome.position);
        }
        outcome
    }

    /// Move the avatar directly, e.g. back to spawn
    pub fn teleport(&mut self, position: Vec3) {
        self.position = position;
        self.velocity = Vec3::ZERO;
        self.is_grounded = position.y <= self.config.ground_height;
    }

    /// Back to spawn, grounded, facing +Z
    pub fn reset(&mut self) {
        *self = Self::new(self.config);
    }

    pub fn is_grounded(&self) -> bool {
        self.is_grounded
    }

    pub fn vertical_velocity(&self) -> f32 {
        self.velocity.y
    }

    /// Current velocity (per frame)
    pub fn velocity(&self) -> Vec3 {
        self.velocity
    }

    /// Heading around Y in radians, `atan2(dx, dz)` of the last movement
    pub fn facing(&self) -> f32 {
        self.facing
    }

    pub fn config(&self) -> &AvatarControllerConfig {
        &self.config
    }
}

impl Object for AvatarController {
    fn position(&self) -> Vec3 {
        self.position
    }

    fn rotation(&self) -> Quat {
        Quat::from_rotation_y(self.facing)
    }

    fn set_position(&mut self, position: Vec3) {
        self.teleport(position);
    }

    fn set_rotation(&mut self, rotation: Quat) {
        let forward = rotation * Vec3::Z;
        self.facing = forward.x.atan2(forward.z);
    }
}
