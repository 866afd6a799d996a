//! Mute state and per-channel volumes

use crate::{CueSink, Result, Volume};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Logical audio channel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AudioChannel {
    /// Looping background music
    Music,
    /// Short confirmation sound for navigation and info panels
    Hit,
    /// Chime played when exploration begins
    Success,
}

/// Instruction for the platform audio layer
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "cue", rename_all = "snake_case")]
pub enum AudioCue {
    /// Begin looping background music; `muted` tells the player to start silent
    StartMusic { volume: Volume, muted: bool },
    /// One-shot sound on a channel
    Play { channel: AudioChannel, volume: Volume },
    /// Global mute flag changed
    Muted { muted: bool },
}

/// Volumes and initial mute state
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MixerConfig {
    pub music: Volume,
    pub hit: Volume,
    pub success: Volume,
    pub muted: bool,
}

impl Default for MixerConfig {
    fn default() -> Self {
        Self {
            music: Volume::new(0.4),
            hit: Volume::new(0.6),
            success: Volume::new(0.7),
            muted: false,
        }
    }
}

impl MixerConfig {
    pub fn volume(&self, channel: AudioChannel) -> Volume {
        match channel {
            AudioChannel::Music => self.music,
            AudioChannel::Hit => self.hit,
            AudioChannel::Success => self.success,
        }
    }
}

/// Decides which cues reach the sink
///
/// One-shot cues are dropped while muted. Music start and mute changes are
/// always forwarded so the player can keep the loop running silently.
pub struct AudioMixer {
    config: MixerConfig,
    muted: bool,
    music_started: bool,
    sink: Box<dyn CueSink>,
}

impl fmt::Debug for AudioMixer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AudioMixer")
            .field("config", &self.config)
            .field("muted", &self.muted)
            .field("music_started", &self.music_started)
            .finish_non_exhaustive()
    }
}

impl AudioMixer {
    pub fn new(config: MixerConfig, sink: Box<dyn CueSink>) -> Self {
        Self {
            config,
            muted: config.muted,
            music_started: false,
            sink,
        }
    }

    pub fn is_muted(&self) -> bool {
        self.muted
    }

    pub fn music_started(&self) -> bool {
        self.music_started
    }

    pub fn config(&self) -> &MixerConfig {
        &self.config
    }

    /// Flip the mute flag and return the new value
    pub fn toggle_mute(&mut self) -> Result<bool> {
        let muted = !self.muted;
        self.set_muted(muted)?;
        Ok(muted)
    }

    /// Set the mute flag; emits only when it changes
    pub fn set_muted(&mut self, muted: bool) -> Result<()> {
        if self.muted == muted {
            return Ok(());
        }
        self.muted = muted;
        self.sink.emit(AudioCue::Muted { muted })
    }

    /// Start background music (idempotent)
    pub fn start_music(&mut self) -> Result<()> {
        if self.music_started {
            return Ok(());
        }
        self.music_started = true;
        self.sink.emit(AudioCue::StartMusic {
            volume: self.config.music,
            muted: self.muted,
        })
    }

    /// Play the hit sound; returns whether a cue was emitted
    pub fn play_hit(&mut self) -> Result<bool> {
        self.play(AudioChannel::Hit)
    }

    /// Play the success sound; returns whether a cue was emitted
    pub fn play_success(&mut self) -> Result<bool> {
        self.play(AudioChannel::Success)
    }

    fn play(&mut self, channel: AudioChannel) -> Result<bool> {
        if self.muted {
            tracing::trace!(?channel, "skipped while muted");
            return Ok(false);
        }
        self.sink.emit(AudioCue::Play {
            channel,
            volume: self.config.volume(channel),
        })?;
        Ok(true)
    }
}
