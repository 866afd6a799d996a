//! Short animations played on a hotspot after it is interacted with

use crate::scene::Feedback;
use app::{Ease, Tween};
use serde::Serialize;
use std::f32::consts::TAU;

/// Current animated value of one hotspot
///
/// `value` is the Y rotation in radians for [`Feedback::Spin`], the vertical
/// offset for [`Feedback::Bob`] and the uniform scale for [`Feedback::Pulse`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FeedbackPose {
    pub id: String,
    pub kind: Feedback,
    pub value: f32,
}

#[derive(Debug, Clone)]
pub struct FeedbackAnimation {
    id: String,
    kind: Feedback,
    tween: Tween<f32>,
}

impl FeedbackAnimation {
    pub fn new(id: impl Into<String>, kind: Feedback) -> Self {
        let tween = match kind {
            Feedback::Spin => Tween::new(0.0, TAU, 1.0, Ease::Power2InOut),
            Feedback::Bob => Tween::new(0.0, 0.5, 0.5, Ease::Power2InOut)
                .with_yoyo(true)
                .with_repeat(1),
            Feedback::Pulse => Tween::new(1.0, 1.2, 0.5, Ease::elastic())
                .with_yoyo(true)
                .with_repeat(1),
        };
        Self {
            id: id.into(),
            kind,
            tween,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn kind(&self) -> Feedback {
        self.kind
    }

    pub fn update(&mut self, dt: f32) -> f32 {
        self.tween.update(dt)
    }

    pub fn is_finished(&self) -> bool {
        self.tween.is_finished()
    }

    pub fn pose(&self) -> FeedbackPose {
        FeedbackPose {
            id: self.id.clone(),
            kind: self.kind,
            value: self.tween.value(),
        }
    }
}
