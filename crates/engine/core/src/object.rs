//! Object trait for types with position and rotation in 3D space

use glam::{Quat, Vec3};

/// Base trait for any object with position and rotation in 3D space.
///
/// Implemented by:
/// - `Camera` in the app crate
/// - `AvatarController` in the physics crate
pub trait Object {
    /// Get the current position
    fn position(&self) -> Vec3;

    /// Get the current rotation as a quaternion
    fn rotation(&self) -> Quat;

    /// Set the position
    fn set_position(&mut self, position: Vec3);

    /// Set the rotation
    fn set_rotation(&mut self, rotation: Quat);
}
