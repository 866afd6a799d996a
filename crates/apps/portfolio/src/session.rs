//! A portfolio session: world, avatar, camera, audio and overlay state
//!
//! [`Portfolio`] is the application shell. It runs the loading screen,
//! mounts the scene, turns key input into avatar movement and interactions,
//! and keeps the info panel and navigation state the UI layer renders.

use crate::feedback::{FeedbackAnimation, FeedbackPose};
use crate::scene::{MountReport, Scene};
use crate::settings::SessionConfig;
use crate::{PortfolioError, Result};
use app::{App, CameraRig};
use folio_audio::{AudioMixer, CueSink, TracingSink};
use folio_core::{EdgeDetector, Key, KeyboardState, Object};
use folio_physics::{AvatarController, MoveOutcome};
use folio_world::{
    GamePhase, InteractiveObject, NAV_SECTIONS, SectionId, WorldEvent, WorldSnapshot, WorldState,
};
use glam::Vec3;
use serde::Serialize;
use std::cell::RefCell;
use std::rc::Rc;

// ============================================================================
// UI state
// ============================================================================

/// Overlay describing the hotspot the user last interacted with
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InfoPanel {
    pub title: String,
    pub content: String,
    /// Hotspot that opened the panel, if any
    pub source: Option<String>,
    /// Seconds of fade-out left once closing
    pub fade_remaining: Option<f32>,
}

impl InfoPanel {
    pub fn is_closing(&self) -> bool {
        self.fade_remaining.is_some()
    }
}

/// One entry of the navigation bar
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NavEntry {
    pub id: &'static str,
    pub label: &'static str,
    pub icon: &'static str,
    pub active: bool,
}

/// What a single frame did
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FrameReport {
    pub frame: u64,
    pub phase: GamePhase,
    pub avatar: Vec3,
    pub camera: Vec3,
    pub orbit_target: Vec3,
    pub moved: bool,
    pub jumped: bool,
    pub landed: bool,
    /// Hotspot reached by the interact key this frame
    pub interacted: Option<String>,
    pub feedback: Vec<FeedbackPose>,
    pub events: Vec<WorldEvent>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PortfolioSnapshot {
    pub phase: GamePhase,
    pub frame: u64,
    pub elapsed: f32,
    pub active_section: SectionId,
    pub camera: Vec3,
    pub orbit_target: Vec3,
    pub info: Option<InfoPanel>,
    pub show_controls: bool,
    pub muted: bool,
    pub world: WorldSnapshot,
}

// ============================================================================
// Portfolio
// ============================================================================

pub struct Portfolio {
    config: SessionConfig,
    scene: Scene,
    phase: GamePhase,

    world: WorldState,
    avatar: AvatarController,
    rig: CameraRig,
    audio: AudioMixer,

    keyboard: KeyboardState,
    interact_edge: EdgeDetector,
    /// Filled by the world's interaction callback, drained every frame
    inbox: Rc<RefCell<Vec<InteractiveObject>>>,
    feedback: Vec<FeedbackAnimation>,

    active_section: SectionId,
    info: Option<InfoPanel>,
    show_controls: bool,
    loading_remaining: f32,
    mount_report: Option<MountReport>,

    frame: u64,
    elapsed: f32,
}

impl std::fmt::Debug for Portfolio {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Portfolio")
            .field("phase", &self.phase)
            .field("frame", &self.frame)
            .field("active_section", &self.active_section)
            .field("avatar", &self.world.avatar_position())
            .field("info", &self.info)
            .finish_non_exhaustive()
    }
}

impl Default for Portfolio {
    fn default() -> Self {
        Self::new(Scene::portfolio(), SessionConfig::default())
    }
}

impl Portfolio {
    /// Session whose audio cues go to the log
    pub fn new(scene: Scene, config: SessionConfig) -> Self {
        Self::with_sink(scene, config, Box::new(TracingSink))
    }

    pub fn with_sink(scene: Scene, config: SessionConfig, sink: Box<dyn CueSink>) -> Self {
        let avatar = AvatarController::new(config.movement);
        let rig = CameraRig::new(config.camera);
        let audio = AudioMixer::new(config.audio, sink);

        let mut world = WorldState::new();
        world.set_avatar_position(avatar.position());
        world.drain_events();

        Self {
            active_section: config.initial_section.clone(),
            show_controls: config.show_controls,
            loading_remaining: config.loading_duration.max(0.0),
            config,
            scene,
            phase: GamePhase::Ready,
            world,
            avatar,
            rig,
            audio,
            keyboard: KeyboardState::new(),
            interact_edge: EdgeDetector::new(),
            inbox: Rc::new(RefCell::new(Vec::new())),
            feedback: Vec::new(),
            info: None,
            mount_report: None,
            frame: 0,
            elapsed: 0.0,
        }
    }

    // ------------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------------

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn is_loading(&self) -> bool {
        self.phase == GamePhase::Ready
    }

    pub fn world(&self) -> &WorldState {
        &self.world
    }

    pub fn avatar(&self) -> &AvatarController {
        &self.avatar
    }

    pub fn rig(&self) -> &CameraRig {
        &self.rig
    }

    pub fn audio(&self) -> &AudioMixer {
        &self.audio
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn active_section(&self) -> &SectionId {
        &self.active_section
    }

    pub fn info(&self) -> Option<&InfoPanel> {
        self.info.as_ref()
    }

    pub fn show_controls(&self) -> bool {
        self.show_controls
    }

    pub fn frame_count(&self) -> u64 {
        self.frame
    }

    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    pub fn mount_report(&self) -> Option<&MountReport> {
        self.mount_report.as_ref()
    }

    pub fn feedback(&self) -> Vec<FeedbackPose> {
        self.feedback.iter().map(FeedbackAnimation::pose).collect()
    }

    /// The navigation bar, in display order
    pub fn navigation(&self) -> Vec<NavEntry> {
        NAV_SECTIONS
            .iter()
            .map(|info| NavEntry {
                id: info.id,
                label: info.label,
                icon: info.icon,
                active: self.active_section.as_str() == info.id,
            })
            .collect()
    }

    // ------------------------------------------------------------------------
    // Lifecycle
    // ------------------------------------------------------------------------

    /// End the loading screen now: mount the scene and frame the active section
    ///
    /// Does nothing outside the loading phase.
    pub fn finish_loading(&mut self) {
        if self.phase != GamePhase::Ready {
            return;
        }
        self.loading_remaining = 0.0;

        let report = self.scene.mount(&mut self.world);
        let inbox = Rc::clone(&self.inbox);
        self.world
            .set_interaction_callback(move |object| inbox.borrow_mut().push(object.clone()));
        self.mount_report = Some(report);

        self.phase.start();
        self.interact_edge.reset();
        let section = self.active_section.clone();
        self.rig.transition_to(&self.world, section.as_str());
        tracing::info!(section = %section, "exploration started");
    }

    /// Close the session; frames keep counting but the avatar, camera,
    /// feedback animations and info fade all freeze
    pub fn end(&mut self) {
        self.phase.end();
        self.keyboard.clear();
        tracing::info!(frames = self.frame, "session ended");
    }

    // ------------------------------------------------------------------------
    // Shell actions
    // ------------------------------------------------------------------------

    /// "Start exploring" on the loading screen: music on, unmuted, success chime
    pub fn start_exploring(&mut self) {
        if let Err(e) = self.audio.start_music() {
            tracing::warn!(error = %e, "failed to start music");
        }
        if self.audio.is_muted() {
            if let Err(e) = self.audio.toggle_mute() {
                tracing::warn!(error = %e, "failed to unmute");
            }
        }
        self.success_cue();
    }

    /// Select a section from the navigation bar
    ///
    /// The hit cue always plays. The camera moves only once the scene is
    /// mounted and only if the section has a framing.
    pub fn change_section(&mut self, section: impl Into<SectionId>) {
        let section = section.into();
        self.hit_cue();
        tracing::info!(%section, "section changed");
        self.active_section = section;

        if self.phase.is_playing() {
            let section = self.active_section.clone();
            self.rig.transition_to(&self.world, section.as_str());
        }
    }

    /// Open the info panel with a hit cue
    pub fn show_info(&mut self, title: impl Into<String>, content: impl Into<String>) {
        self.open_info(title.into(), content.into(), None);
    }

    /// Interact with a hotspot directly, regardless of distance
    pub fn click_hotspot(&mut self, id: &str) -> Result<()> {
        let object = self
            .world
            .interactive_object(id)
            .cloned()
            .ok_or_else(|| PortfolioError::UnknownHotspot(id.to_string()))?;
        self.handle_interaction(&object);
        Ok(())
    }

    /// Start fading the info panel out
    pub fn close_info(&mut self) {
        if let Some(panel) = self.info.as_mut() {
            if panel.fade_remaining.is_none() {
                panel.fade_remaining = Some(self.config.info_fade);
            }
        }
        if self.config.info_fade <= 0.0 {
            self.info = None;
        }
    }

    pub fn toggle_controls(&mut self) -> bool {
        self.show_controls = !self.show_controls;
        self.show_controls
    }

    pub fn toggle_mute(&mut self) -> bool {
        match self.audio.toggle_mute() {
            Ok(muted) => muted,
            Err(e) => {
                tracing::warn!(error = %e, "failed to toggle mute");
                self.audio.is_muted()
            }
        }
    }

    pub fn set_follow(&mut self, enabled: bool) {
        self.world.set_follow_player(enabled);
    }

    pub fn toggle_follow(&mut self) -> bool {
        let enabled = !self.world.follow_player();
        self.world.set_follow_player(enabled);
        enabled
    }

    // ------------------------------------------------------------------------
    // Input
    // ------------------------------------------------------------------------

    pub fn press(&mut self, key: Key) {
        self.keyboard.press(key);
    }

    pub fn release(&mut self, key: Key) {
        self.keyboard.release(key);
    }

    /// Replace the held key set
    pub fn set_keys(&mut self, keys: impl IntoIterator<Item = Key>) {
        self.keyboard.set_pressed(keys);
    }

    pub fn release_all(&mut self) {
        self.keyboard.clear();
    }

    // ------------------------------------------------------------------------
    // Frame
    // ------------------------------------------------------------------------

    /// Advance the session by `dt` seconds
    pub fn frame(&mut self, dt: f32) -> FrameReport {
        self.frame += 1;
        self.elapsed += dt.max(0.0);

        let mut outcome = MoveOutcome {
            position: self.avatar.position(),
            moved: false,
            jumped: false,
            landed: false,
        };
        let mut interacted = None;

        match self.phase {
            GamePhase::Ready => {
                self.loading_remaining -= dt.max(0.0);
                if self.loading_remaining <= 0.0 {
                    self.finish_loading();
                }
            }
            GamePhase::Playing => {
                let intent = self.keyboard.intent();
                outcome = self.avatar.step(&mut self.world, &intent, dt);

                if self.interact_edge.update(self.keyboard.interact()) {
                    self.world.check_interactions();
                }

                let pending: Vec<InteractiveObject> = self.inbox.borrow_mut().drain(..).collect();
                for object in &pending {
                    self.handle_interaction(object);
                    interacted = Some(object.id().to_string());
                }
            }
            GamePhase::Ended => {}
        }

        if self.phase != GamePhase::Ended {
            self.rig.update(&self.world, dt);
            self.update_feedback(dt);
            self.update_info(dt);
        }

        tracing::debug!(frame = self.frame, avatar = ?outcome.position, "frame");

        FrameReport {
            frame: self.frame,
            phase: self.phase,
            avatar: outcome.position,
            camera: self.rig.camera().position,
            orbit_target: self.rig.orbit_target(),
            moved: outcome.moved,
            jumped: outcome.jumped,
            landed: outcome.landed,
            interacted,
            feedback: self.feedback(),
            events: self.world.drain_events(),
        }
    }

    pub fn snapshot(&self) -> PortfolioSnapshot {
        PortfolioSnapshot {
            phase: self.phase,
            frame: self.frame,
            elapsed: self.elapsed,
            active_section: self.active_section.clone(),
            camera: self.rig.camera().position,
            orbit_target: self.rig.orbit_target(),
            info: self.info.clone(),
            show_controls: self.show_controls,
            muted: self.audio.is_muted(),
            world: self.world.snapshot(),
        }
    }

    // ------------------------------------------------------------------------
    // Internals
    // ------------------------------------------------------------------------

    fn handle_interaction(&mut self, object: &InteractiveObject) {
        if let Some(kind) = self.scene.feedback_for(object.id()) {
            self.feedback.retain(|anim| anim.id() != object.id());
            self.feedback.push(FeedbackAnimation::new(object.id(), kind));
        }
        self.open_info(
            object.title().to_string(),
            object.content().to_string(),
            Some(object.id().to_string()),
        );
    }

    fn open_info(&mut self, title: String, content: String, source: Option<String>) {
        self.hit_cue();
        tracing::info!(%title, "info panel opened");
        self.info = Some(InfoPanel {
            title,
            content,
            source,
            fade_remaining: None,
        });
    }

    fn update_feedback(&mut self, dt: f32) {
        for anim in &mut self.feedback {
            anim.update(dt);
        }
        self.feedback.retain(|anim| !anim.is_finished());
    }

    fn update_info(&mut self, dt: f32) {
        let faded = match self.info.as_mut().and_then(|p| p.fade_remaining.as_mut()) {
            Some(remaining) => {
                *remaining -= dt.max(0.0);
                *remaining <= 0.0
            }
            None => false,
        };
        if faded {
            self.info = None;
        }
    }

    fn hit_cue(&mut self) {
        if let Err(e) = self.audio.play_hit() {
            tracing::warn!(error = %e, "hit cue failed");
        }
    }

    fn success_cue(&mut self) {
        if let Err(e) = self.audio.play_success() {
            tracing::warn!(error = %e, "success cue failed");
        }
    }
}

impl App for Portfolio {
    fn key_event(&mut self, key: Key, pressed: bool) {
        if pressed {
            self.press(key);
        } else {
            self.release(key);
        }
    }

    fn focus_lost(&mut self) {
        self.release_all();
    }

    fn update(&mut self, delta_time: f32) {
        self.frame(delta_time);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn playing() -> Portfolio {
        let mut portfolio = Portfolio::default();
        portfolio.finish_loading();
        portfolio
    }

    #[test]
    fn test_loading_ends_after_duration() {
        let mut portfolio = Portfolio::default();
        for _ in 0..2 {
            portfolio.frame(1.0);
        }
        assert!(portfolio.is_loading());
        portfolio.frame(1.0);
        assert!(portfolio.phase().is_playing());
        assert!(portfolio.mount_report().is_some());
    }

    #[test]
    fn test_no_movement_while_loading() {
        let mut portfolio = Portfolio::default();
        portfolio.press(Key::KeyW);
        portfolio.frame(0.5);
        assert_eq!(portfolio.world().avatar_position(), Vec3::new(0.0, 0.5, 0.0));
    }

    #[test]
    fn test_navigation_marks_active_section() {
        let mut portfolio = playing();
        portfolio.change_section("projects");
        let active: Vec<&str> = portfolio
            .navigation()
            .iter()
            .filter(|e| e.active)
            .map(|e| e.id)
            .collect();
        assert_eq!(active, vec!["projects"]);
    }

    #[test]
    fn test_close_info_fades_then_clears() {
        let mut portfolio = playing();
        portfolio.show_info("Title", "Body");
        portfolio.close_info();
        assert!(portfolio.info().is_some_and(InfoPanel::is_closing));
        portfolio.frame(0.2);
        assert!(portfolio.info().is_some());
        portfolio.frame(0.2);
        assert!(portfolio.info().is_none());
    }

    #[test]
    fn test_toggle_controls() {
        let mut portfolio = Portfolio::default();
        assert!(portfolio.show_controls());
        assert!(!portfolio.toggle_controls());
        assert!(portfolio.toggle_controls());
    }

    #[test]
    fn test_click_unknown_hotspot() {
        let mut portfolio = playing();
        let err = portfolio.click_hotspot("nope").unwrap_err();
        assert!(matches!(err, PortfolioError::UnknownHotspot(id) if id == "nope"));
    }
}
