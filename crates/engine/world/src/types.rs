//! Data carried by the world state: camera framings and interactive hotspots

use crate::{Error, Result};
use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Camera framing for a section
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CameraTarget {
    /// Where the camera sits
    pub position: Vec3,
    /// The point the camera looks at
    pub look_at: Vec3,
}

impl CameraTarget {
    pub fn new(position: Vec3, look_at: Vec3) -> Self {
        Self { position, look_at }
    }

    pub fn is_finite(&self) -> bool {
        self.position.is_finite() && self.look_at.is_finite()
    }
}

/// A registered point of interest with a trigger radius and display text
///
/// Constructed through [`InteractiveObject::new`], which rejects empty ids,
/// non-positive radii and non-finite positions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InteractiveObject {
    id: String,
    position: Vec3,
    radius: f32,
    title: String,
    content: String,
}

impl InteractiveObject {
    pub fn new(
        id: impl Into<String>,
        position: Vec3,
        radius: f32,
        title: impl Into<String>,
        content: impl Into<String>,
    ) -> Result<Self> {
        let id = id.into();
        if id.is_empty() {
            return Err(Error::EmptyId);
        }
        if !(radius.is_finite() && radius > 0.0) {
            return Err(Error::InvalidRadius { id, radius });
        }
        if !position.is_finite() {
            return Err(Error::NonFinite(id));
        }

        Ok(Self {
            id,
            position,
            radius,
            title: title.into(),
            content: content.into(),
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    /// Distance from this object's center to `point`
    pub fn distance_to(&self, point: Vec3) -> f32 {
        self.position.distance(point)
    }

    /// Whether `point` is strictly inside the trigger radius
    pub fn contains(&self, point: Vec3) -> bool {
        folio_core::math::is_within_radius(self.position, point, self.radius)
    }
}
