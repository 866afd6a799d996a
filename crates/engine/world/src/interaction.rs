//! Proximity interaction lookup

use crate::InteractiveObject;
use glam::Vec3;

/// Find the registered object the `point` is interacting with
///
/// An object qualifies when `point` is strictly inside its radius. Among
/// qualifying objects the nearest wins; equal distances keep the one
/// registered first.
pub fn find_nearest(objects: &[InteractiveObject], point: Vec3) -> Option<&InteractiveObject> {
    let mut best: Option<(&InteractiveObject, f32)> = None;

    for object in objects {
        let distance = object.distance_to(point);
        if distance >= object.radius() {
            continue;
        }
        match best {
            Some((_, best_distance)) if distance >= best_distance => {}
            _ => best = Some((object, distance)),
        }
    }

    best.map(|(object, _)| object)
}
