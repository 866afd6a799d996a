//! Audio signalling for Folio
//!
//! The runtime never plays audio itself. It decides *when* a cue should
//! sound and at what volume, and hands [`AudioCue`]s to a [`CueSink`]
//! supplied by the platform (the browser bridge, a logger, or a test
//! recorder).
//!
//! # Example
//!
//! ```
//! use folio_audio::{AudioCue, AudioMixer, MixerConfig, RecordingSink};
//!
//! let sink = RecordingSink::new();
//! let mut mixer = AudioMixer::new(MixerConfig::default(), Box::new(sink.clone()));
//!
//! mixer.play_hit().unwrap();
//! mixer.toggle_mute().unwrap();
//! mixer.play_hit().unwrap(); // muted, nothing emitted
//!
//! assert_eq!(sink.cues().len(), 2);
//! assert_eq!(sink.cues()[1], AudioCue::Muted { muted: true });
//! ```

mod error;
mod mixer;
mod sink;
mod volume;

pub use error::{Error, Result};
pub use mixer::{AudioChannel, AudioCue, AudioMixer, MixerConfig};
pub use sink::{CueSink, RecordingSink, TracingSink};
pub use volume::Volume;
