//! Mixer behaviour through the public API

use folio_audio::{
    AudioChannel, AudioCue, AudioMixer, CueSink, Error, MixerConfig, RecordingSink, Result,
    TracingSink, Volume,
};

/// Sink that rejects everything
struct ClosedSink;

impl CueSink for ClosedSink {
    fn emit(&mut self, _cue: AudioCue) -> Result<()> {
        Err(Error::Sink("closed".into()))
    }
}

#[test]
fn test_toggle_mute_round_trip() {
    let sink = RecordingSink::new();
    let mut mixer = AudioMixer::new(MixerConfig::default(), Box::new(sink.clone()));

    assert!(mixer.toggle_mute().unwrap());
    assert!(!mixer.toggle_mute().unwrap());
    assert!(mixer.play_hit().unwrap(), "hit plays once unmuted");

    assert_eq!(
        sink.cues(),
        vec![
            AudioCue::Muted { muted: true },
            AudioCue::Muted { muted: false },
            AudioCue::Play {
                channel: AudioChannel::Hit,
                volume: Volume::new(0.6)
            },
        ]
    );
}

#[test]
fn test_start_muted_from_config() {
    let config = MixerConfig {
        muted: true,
        ..Default::default()
    };
    let sink = RecordingSink::new();
    let mut mixer = AudioMixer::new(config, Box::new(sink.clone()));

    assert!(mixer.is_muted());
    assert!(!mixer.play_success().unwrap());
    assert!(sink.cues().is_empty());
}

#[test]
fn test_sink_errors_propagate() {
    let mut mixer = AudioMixer::new(MixerConfig::default(), Box::new(ClosedSink));
    assert_eq!(mixer.play_hit(), Err(Error::Sink("closed".into())));
    // Muted one-shots never reach the sink
    mixer.set_muted(true).ok();
    assert_eq!(mixer.play_hit(), Ok(false));
}

#[test]
fn test_tracing_sink_accepts_everything() {
    let mut mixer = AudioMixer::new(MixerConfig::default(), Box::new(TracingSink));
    assert!(mixer.start_music().is_ok());
    assert!(mixer.play_success().unwrap());
    assert!(mixer.toggle_mute().unwrap());
}

#[test]
fn test_cue_json_shape() {
    let cue = AudioCue::Play {
        channel: AudioChannel::Success,
        volume: Volume::new(0.7),
    };
    let json = serde_json::to_value(cue).unwrap();
    assert_eq!(json["cue"], "play");
    assert_eq!(json["channel"], "success");
    assert!((json["volume"].as_f64().unwrap() - 0.7).abs() < 1e-6);
}
