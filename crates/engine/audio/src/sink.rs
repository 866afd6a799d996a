//! Destinations for audio cues

use crate::{AudioCue, Result};
use std::cell::RefCell;
use std::rc::Rc;

/// Receiver of audio cues, implemented by the platform layer
pub trait CueSink {
    fn emit(&mut self, cue: AudioCue) -> Result<()>;
}

/// Sink that logs cues and never fails
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl CueSink for TracingSink {
    fn emit(&mut self, cue: AudioCue) -> Result<()> {
        match cue {
            AudioCue::Muted { muted } => tracing::info!(muted, "audio mute changed"),
            AudioCue::StartMusic { volume, muted } => {
                tracing::info!(volume = volume.value(), muted, "background music started")
            }
            AudioCue::Play { channel, volume } => {
                tracing::debug!(?channel, volume = volume.value(), "cue")
            }
        }
        Ok(())
    }
}

/// Sink that keeps every cue, for tests and headless inspection
///
/// Clones share the same buffer, so a handle kept by the caller sees cues
/// emitted through the clone given to the mixer.
#[derive(Debug, Default, Clone)]
pub struct RecordingSink {
    cues: Rc<RefCell<Vec<AudioCue>>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of every cue received so far
    pub fn cues(&self) -> Vec<AudioCue> {
        self.cues.borrow().clone()
    }

    /// Remove and return every cue received so far
    pub fn take(&self) -> Vec<AudioCue> {
        std::mem::take(&mut *self.cues.borrow_mut())
    }
}

impl CueSink for RecordingSink {
    fn emit(&mut self, cue: AudioCue) -> Result<()> {
        self.cues.borrow_mut().push(cue);
        Ok(())
    }
}
