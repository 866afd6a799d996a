//! Camera and the section/follow camera rig
//!
//! # Components
//!
//! - [`Camera`]: position, rotation (quaternion), look-at target and fov
//! - [`CameraRigConfig`]: offsets, smoothing and transition timing
//! - [`CameraRig`]: drives a [`Camera`] from the world state, either by
//!   tweening to a section's framing or by trailing the avatar

use crate::easing::Ease;
use crate::tween::Tween;
use folio_core::{FrameTiming, Object};
use folio_world::{CameraTarget, SectionId, WorldState};
use glam::{Quat, Vec3};
use serde::{Deserialize, Serialize};

// ============================================================================
// Camera
// ============================================================================

/// Default vertical field of view: 75 degrees
pub const DEFAULT_VFOV: f32 = 75.0 * std::f32::consts::PI / 180.0;

/// Camera for 3D rendering
///
/// # Coordinate System
///
/// Uses OpenGL convention:
/// - +X is right
/// - +Y is up
/// - -Z is forward (into the screen)
///
/// # Examples
///
/// ```
/// use app::camera::Camera;
/// use glam::Vec3;
///
/// let camera = Camera::look_at(Vec3::new(0.0, 3.0, 10.0), Vec3::ZERO, Vec3::Y);
/// assert!(camera.forward().z < 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Camera {
    /// Camera position in world space
    pub position: Vec3,
    /// Camera rotation (orientation) as quaternion
    pub rotation: Quat,
    /// Vertical field of view in radians
    pub vfov: f32,
    /// Point the camera was last aimed at
    pub target_position: Option<Vec3>,
}

impl Default for Camera {
    fn default() -> Self {
        Self::look_at(Vec3::new(0.0, 3.0, 10.0), Vec3::ZERO, Vec3::Y)
    }
}

impl Camera {
    /// Create a camera at `position` with identity rotation
    pub fn new(position: Vec3) -> Self {
        Self {
            position,
            rotation: Quat::IDENTITY,
            vfov: DEFAULT_VFOV,
            target_position: None,
        }
    }

    /// Create camera with position looking at target
    pub fn look_at(position: Vec3, target: Vec3, up: Vec3) -> Self {
        let mut camera = Self::new(position);
        camera.aim(target, up);
        camera
    }

    /// Turn the camera toward `target` using world up
    pub fn set_look_at(&mut self, target: Vec3) {
        self.aim(target, Vec3::Y);
    }

    fn aim(&mut self, target: Vec3, up: Vec3) {
        let Some(forward) = (target - self.position).try_normalize() else {
            self.target_position = Some(target);
            return;
        };
        let Some(right) = forward.cross(up).try_normalize() else {
            // Looking straight along `up`; keep roll, only turn
            self.rotation = Quat::from_rotation_arc(Vec3::NEG_Z, forward);
            self.target_position = Some(target);
            return;
        };
        let cam_up = right.cross(forward);

        // In camera space: right=+X, up=+Y, forward=-Z
        let rotation_matrix = glam::Mat3::from_cols(right, cam_up, -forward);
        self.rotation = Quat::from_mat3(&rotation_matrix);
        self.target_position = Some(target);
    }

    /// Get the forward direction vector
    pub fn forward(&self) -> Vec3 {
        self.rotation * Vec3::NEG_Z
    }

    /// Get the right direction vector
    pub fn right(&self) -> Vec3 {
        self.rotation * Vec3::X
    }

    /// Get the up direction vector
    pub fn up(&self) -> Vec3 {
        self.rotation * Vec3::Y
    }

    /// Field of view in degrees
    pub fn fov_degrees(&self) -> f32 {
        self.vfov.to_degrees()
    }
}

impl Object for Camera {
    fn position(&self) -> Vec3 {
        self.position
    }

    fn rotation(&self) -> Quat {
        self.rotation
    }

    fn set_position(&mut self, position: Vec3) {
        self.position = position;
    }

    fn set_rotation(&mut self, rotation: Quat) {
        self.rotation = rotation;
    }
}

// ============================================================================
// Camera Rig
// ============================================================================

/// Configuration for the camera rig
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraRigConfig {
    /// Camera position before the first transition
    pub initial_position: Vec3,
    /// Orbit target before the first transition
    pub initial_target: Vec3,
    /// Camera offset from the avatar in follow mode
    pub follow_offset: Vec3,
    /// Look-at offset from the avatar in follow mode
    pub look_offset: Vec3,
    /// Fraction of the remaining distance closed per frame in follow mode
    pub follow_factor: f32,
    /// Section transition length in seconds
    pub transition_duration: f32,
    /// Section transition curve
    pub transition_ease: Ease,
    /// Vertical field of view in degrees
    pub fov: f32,
    /// How the follow factor scales with the frame interval
    pub timing: FrameTiming,
}

impl Default for CameraRigConfig {
    fn default() -> Self {
        Self {
            initial_position: Vec3::new(0.0, 3.0, 10.0),
            initial_target: Vec3::ZERO,
            follow_offset: Vec3::new(0.0, 3.0, 5.0),
            look_offset: Vec3::new(0.0, 1.0, 0.0),
            follow_factor: 0.05,
            transition_duration: 2.0,
            transition_ease: Ease::Power2InOut,
            fov: 75.0,
            timing: FrameTiming::PerFrame,
        }
    }
}

/// In-flight section transition
#[derive(Debug, Clone, PartialEq)]
pub struct CameraTransition {
    pub section: SectionId,
    position: Tween<Vec3>,
    target: Tween<Vec3>,
}

impl CameraTransition {
    pub fn is_finished(&self) -> bool {
        self.position.is_finished() && self.target.is_finished()
    }

    pub fn destination(&self) -> CameraTarget {
        CameraTarget::new(self.position.to(), self.target.to())
    }
}

/// Drives a [`Camera`] from the world state
///
/// Section transitions tween position and orbit target to the section's
/// framing. Follow mode trails the avatar every frame. When both are active
/// the transition is applied first and follow second.
#[derive(Debug, Clone)]
pub struct CameraRig {
    config: CameraRigConfig,
    camera: Camera,
    orbit_target: Vec3,
    transition: Option<CameraTransition>,
}

impl Default for CameraRig {
    fn default() -> Self {
        Self::new(CameraRigConfig::default())
    }
}

impl CameraRig {
    pub fn new(config: CameraRigConfig) -> Self {
        let mut camera = Camera::look_at(config.initial_position, config.initial_target, Vec3::Y);
        camera.vfov = config.fov.to_radians();
        Self {
            config,
            camera,
            orbit_target: config.initial_target,
            transition: None,
        }
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    /// Point orbit controls revolve around
    pub fn orbit_target(&self) -> Vec3 {
        self.orbit_target
    }

    pub fn transition(&self) -> Option<&CameraTransition> {
        self.transition.as_ref()
    }

    pub fn is_transitioning(&self) -> bool {
        self.transition.is_some()
    }

    pub fn config(&self) -> &CameraRigConfig {
        &self.config
    }

    /// Start a transition to the framing registered for `section`
    ///
    /// Starts from the current camera values, so a transition already in
    /// flight is superseded without a jump. Returns false and leaves the
    /// camera untouched when the section has no framing.
    pub fn transition_to(&mut self, world: &WorldState, section: &str) -> bool {
        let Some(target) = world.camera_target(section) else {
            tracing::debug!(section, "no camera target; transition skipped");
            return false;
        };

        let duration = self.config.transition_duration;
        let ease = self.config.transition_ease;
        self.transition = Some(CameraTransition {
            section: SectionId::new(section),
            position: Tween::new(self.camera.position, target.position, duration, ease),
            target: Tween::new(self.orbit_target, target.look_at, duration, ease),
        });
        tracing::info!(section, position = ?target.position, "camera transition");
        true
    }

    /// Advance by one frame
    pub fn update(&mut self, world: &WorldState, dt: f32) {
        if let Some(transition) = self.transition.as_mut() {
            self.camera.position = transition.position.update(dt);
            self.orbit_target = transition.target.update(dt);
            self.camera.set_look_at(self.orbit_target);

            if transition.is_finished() {
                tracing::debug!(section = %transition.section, "camera transition finished");
                self.transition = None;
            }
        }

        if world.follow_player() {
            let avatar = world.avatar_position();
            let desired = avatar + self.config.follow_offset;
            let factor = self.config.timing.smoothing(self.config.follow_factor, dt);
            self.camera.position =
                folio_core::math::lerp_points(self.camera.position, desired, factor);
            self.camera.set_look_at(avatar + self.config.look_offset);
        }
    }

    /// Jump straight to a framing without animating
    pub fn snap_to(&mut self, target: CameraTarget) {
        self.transition = None;
        self.camera.position = target.position;
        self.orbit_target = target.look_at;
        self.camera.set_look_at(target.look_at);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_camera_default() {
        let camera = Camera::default();
        assert!((camera.fov_degrees() - 75.0).abs() < 0.001);
        assert_eq!(camera.position, Vec3::new(0.0, 3.0, 10.0));
    }

    #[test]
    fn test_camera_look_at() {
        let camera = Camera::look_at(Vec3::new(0.0, 0.0, 5.0), Vec3::ZERO, Vec3::Y);
        let forward = camera.forward();
        assert!((forward - Vec3::NEG_Z).length() < 1e-5);
        assert!((camera.right() - Vec3::X).length() < 1e-5);
        assert!((camera.up() - Vec3::Y).length() < 1e-5);
    }

    #[test]
    fn test_look_at_self_keeps_rotation() {
        let mut camera = Camera::new(Vec3::ONE);
        camera.set_look_at(Vec3::ONE);
        assert_eq!(camera.rotation, Quat::IDENTITY);
    }

    #[test]
    fn test_look_straight_down() {
        let camera = Camera::look_at(Vec3::new(0.0, 5.0, 0.0), Vec3::ZERO, Vec3::Y);
        assert!((camera.forward() - Vec3::NEG_Y).length() < 1e-5);
    }

    #[test]
    fn test_rig_starts_at_initial_framing() {
        let rig = CameraRig::default();
        assert_eq!(rig.camera().position, Vec3::new(0.0, 3.0, 10.0));
        assert_eq!(rig.orbit_target(), Vec3::ZERO);
        assert!(!rig.is_transitioning());
    }
}
