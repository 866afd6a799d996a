//! Tunables for a portfolio session

use app::CameraRigConfig;
use folio_audio::MixerConfig;
use folio_physics::AvatarControllerConfig;
use folio_world::SectionId;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    pub movement: AvatarControllerConfig,
    pub camera: CameraRigConfig,
    pub audio: MixerConfig,
    /// Seconds the loading screen stays up
    pub loading_duration: f32,
    /// Seconds the info panel takes to fade out
    pub info_fade: f32,
    /// Section framed once loading ends
    pub initial_section: SectionId,
    /// Navigation bar visible at start
    pub show_controls: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            movement: AvatarControllerConfig::default(),
            camera: CameraRigConfig::default(),
            audio: MixerConfig::default(),
            loading_duration: 3.0,
            info_fade: 0.3,
            initial_section: SectionId::home(),
            show_controls: true,
        }
    }
}

impl SessionConfig {
    /// Config with the loading screen disabled
    pub fn without_loading(mut self) -> Self {
        self.loading_duration = 0.0;
        self
    }
}
