//! Lua scene files
//!
//! A scene file composes the world with a handful of functions on top of the
//! base `vec3` helper:
//!
//! ```lua
//! default_scene()                      -- start from the built-in layout
//! camera_target("home", vec3(0, 4, 12), vec3(0, 1, 0))
//! hotspot{ id = "resume", position = vec3(3, 1, 2), radius = 2,
//!          title = "Resume", content = "...", feedback = "pulse" }
//! follow_player(true)
//!
//! movement = { speed = 0.2 }
//! camera = { follow_factor = 0.08, transition_ease = "sine.inOut" }
//! timing = { reference_rate = 60 }     -- or "per_frame"
//! audio = { music = 0.3, muted = true }
//! session = { loading_duration = 0, initial_section = "projects" }
//! ```
//!
//! Commands are recorded in call order; the optional tables are read once
//! the file has finished evaluating.

use crate::scene::{Feedback, HotspotSpec, Scene};
use crate::settings::SessionConfig;
use app::lua_config::{mlua, opt_f32, opt_vec3, parse_vec3, ConfigError, LuaConfig};
use app::Ease;
use folio_audio::Volume;
use folio_core::FrameTiming;
use folio_world::SectionId;
use mlua::prelude::*;
use std::cell::RefCell;
use std::path::Path;
use std::rc::Rc;

const DEFAULT_HOTSPOT_RADIUS: f32 = 2.0;

/// Scene plus session tunables loaded from Lua
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PortfolioConfig {
    pub scene: Scene,
    pub session: SessionConfig,
}

impl PortfolioConfig {
    /// The built-in layout with default tunables
    pub fn builtin() -> Self {
        Self {
            scene: Scene::portfolio(),
            session: SessionConfig::default(),
        }
    }

    /// Load configuration from a Lua file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let config = Self::evaluate(|lua_config| lua_config.load_file(path))?;
        tracing::info!(
            path = %path.display(),
            commands = config.scene.commands.len(),
            "scene file loaded"
        );
        Ok(config)
    }

    /// Load configuration from Lua source
    pub fn from_source(source: &str) -> Result<Self, ConfigError> {
        Self::evaluate(|lua_config| lua_config.load_string(source))
    }

    fn evaluate<F>(load: F) -> Result<Self, ConfigError>
    where
        F: FnOnce(&mut LuaConfig) -> Result<(), ConfigError>,
    {
        let mut lua_config = LuaConfig::new()?;
        let scene = Rc::new(RefCell::new(Scene::new()));
        register_scene_api(lua_config.lua(), &scene)?;

        load(&mut lua_config)?;

        let session = extract_session_config(lua_config.lua())?;
        let scene = scene.borrow().clone();
        Ok(Self { scene, session })
    }
}

// ============================================================================
// Scene functions
// ============================================================================

fn register_scene_api(lua: &Lua, scene: &Rc<RefCell<Scene>>) -> Result<(), ConfigError> {
    let globals = lua.globals();

    let target_scene = Rc::clone(scene);
    let camera_target = lua.create_function(
        move |_, (section, position, look_at): (String, LuaTable, LuaTable)| {
            let position = parse_vec3(&position)?;
            let look_at = parse_vec3(&look_at)?;
            target_scene
                .borrow_mut()
                .camera_target(section, position, look_at);
            Ok(())
        },
    )?;
    globals.set("camera_target", camera_target)?;

    let hotspot_scene = Rc::clone(scene);
    let hotspot = lua.create_function(move |_, table: LuaTable| {
        let spec = parse_hotspot(&table)?;
        hotspot_scene.borrow_mut().hotspot(spec);
        Ok(())
    })?;
    globals.set("hotspot", hotspot)?;

    let follow_scene = Rc::clone(scene);
    let follow_player = lua.create_function(move |_, enabled: bool| {
        follow_scene.borrow_mut().follow_player(enabled);
        Ok(())
    })?;
    globals.set("follow_player", follow_player)?;

    let default_scene = Rc::clone(scene);
    let builtin = lua.create_function(move |_, ()| {
        default_scene.borrow_mut().extend(Scene::portfolio());
        Ok(())
    })?;
    globals.set("default_scene", builtin)?;

    Ok(())
}

fn parse_hotspot(table: &LuaTable) -> LuaResult<HotspotSpec> {
    let id: String = table.get("id")?;
    let position: LuaTable = table.get("position")?;
    let position = parse_vec3(&position)?;
    let radius = match table.get::<LuaValue>("radius")? {
        LuaValue::Nil => DEFAULT_HOTSPOT_RADIUS,
        value => app::lua_config::lua_val_to_f64(&value)? as f32,
    };
    let title: String = table.get("title")?;
    let content: Option<String> = table.get("content")?;

    let mut spec = HotspotSpec::new(id, position, radius, title, content.unwrap_or_default());
    if let Some(name) = table.get::<Option<String>>("feedback")? {
        let feedback: Feedback = name.parse().map_err(LuaError::RuntimeError)?;
        spec = spec.with_feedback(feedback);
    }
    Ok(spec)
}

// ============================================================================
// Tunables
// ============================================================================

fn extract_session_config(lua: &Lua) -> Result<SessionConfig, ConfigError> {
    let globals = lua.globals();
    let mut config = SessionConfig::default();

    if let Some(table) = globals.get::<Option<LuaTable>>("movement")? {
        let movement = &mut config.movement;
        set_f32(&table, "speed", &mut movement.speed)?;
        set_f32(&table, "run_speed", &mut movement.run_speed)?;
        set_f32(&table, "jump_impulse", &mut movement.jump_impulse)?;
        set_f32(&table, "gravity", &mut movement.gravity)?;
        set_f32(&table, "ground_height", &mut movement.ground_height)?;
        set_f32(&table, "boundary", &mut movement.boundary)?;
        if let Some(spawn) = opt_vec3(&table, "spawn")? {
            movement.spawn = spawn;
        }
        if movement.boundary <= 0.0 {
            return Err(ConfigError::invalid("movement.boundary", "must be positive"));
        }
    }

    if let Some(table) = globals.get::<Option<LuaTable>>("camera")? {
        let camera = &mut config.camera;
        for (field, slot) in [
            ("initial_position", &mut camera.initial_position),
            ("initial_target", &mut camera.initial_target),
            ("follow_offset", &mut camera.follow_offset),
            ("look_offset", &mut camera.look_offset),
        ] {
            if let Some(v) = opt_vec3(&table, field)? {
                *slot = v;
            }
        }
        set_f32(&table, "follow_factor", &mut camera.follow_factor)?;
        set_f32(&table, "transition_duration", &mut camera.transition_duration)?;
        set_f32(&table, "fov", &mut camera.fov)?;
        if let Some(name) = table.get::<Option<String>>("transition_ease")? {
            camera.transition_ease = name
                .parse::<Ease>()
                .map_err(|e| ConfigError::invalid("camera.transition_ease", e))?;
        }
        if !(0.0..=1.0).contains(&camera.follow_factor) {
            return Err(ConfigError::invalid("camera.follow_factor", "must be within [0, 1]"));
        }
    }

    if let Some(timing) = extract_timing(&globals)? {
        config.movement.timing = timing;
        config.camera.timing = timing;
    }

    if let Some(table) = globals.get::<Option<LuaTable>>("audio")? {
        let audio = &mut config.audio;
        for (field, slot) in [
            ("music", &mut audio.music),
            ("hit", &mut audio.hit),
            ("success", &mut audio.success),
        ] {
            if let Some(value) = opt_f32(&table, field)? {
                *slot = Volume::try_new(value)
                    .map_err(|e| ConfigError::invalid(format!("audio.{}", field), e.to_string()))?;
            }
        }
        if let Some(muted) = table.get::<Option<bool>>("muted")? {
            audio.muted = muted;
        }
    }

    if let Some(table) = globals.get::<Option<LuaTable>>("session")? {
        set_f32(&table, "loading_duration", &mut config.loading_duration)?;
        set_f32(&table, "info_fade", &mut config.info_fade)?;
        if let Some(section) = table.get::<Option<String>>("initial_section")? {
            config.initial_section = SectionId::new(section);
        }
        if let Some(show) = table.get::<Option<bool>>("show_controls")? {
            config.show_controls = show;
        }
    }

    Ok(config)
}

fn extract_timing(globals: &LuaTable) -> Result<Option<FrameTiming>, ConfigError> {
    match globals.get::<LuaValue>("timing")? {
        LuaValue::Nil => Ok(None),
        LuaValue::String(s) if s.to_string_lossy() == "per_frame" => {
            Ok(Some(FrameTiming::PerFrame))
        }
        LuaValue::Table(table) => {
            let rate = opt_f32(&table, "reference_rate")?.unwrap_or(60.0);
            if rate <= 0.0 {
                return Err(ConfigError::invalid("timing.reference_rate", "must be positive"));
            }
            Ok(Some(FrameTiming::Scaled { reference_rate: rate }))
        }
        other => Err(ConfigError::invalid(
            "timing",
            format!("expected \"per_frame\" or a table, got {}", other.type_name()),
        )),
    }
}

fn set_f32(table: &LuaTable, field: &str, slot: &mut f32) -> Result<(), ConfigError> {
    if let Some(value) = opt_f32(table, field)? {
        *slot = value;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::SceneCommand;
    use glam::Vec3;

    #[test]
    fn test_empty_source_is_empty_scene() {
        let config = PortfolioConfig::from_source("").unwrap();
        assert!(config.scene.is_empty());
        assert_eq!(config.session, SessionConfig::default());
    }

    #[test]
    fn test_commands_recorded_in_order() {
        let config = PortfolioConfig::from_source(
            r#"
            camera_target("home", vec3(0, 3, 10), vec3(0, 1, 0))
            hotspot{ id = "a", position = vec3(1, 1, 1), title = "A" }
            follow_player(true)
            "#,
        )
        .unwrap();

        let commands = &config.scene.commands;
        assert_eq!(commands.len(), 3);
        assert!(matches!(
            &commands[0],
            SceneCommand::CameraTarget { section, .. } if section.as_str() == "home"
        ));
        match &commands[1] {
            SceneCommand::Hotspot(spec) => {
                assert_eq!(spec.radius, DEFAULT_HOTSPOT_RADIUS);
                assert_eq!(spec.position, Vec3::ONE);
                assert!(spec.content.is_empty());
            }
            other => panic!("expected hotspot, got {other:?}"),
        }
        assert_eq!(commands[2], SceneCommand::FollowPlayer { enabled: true });
    }

    #[test]
    fn test_default_scene_appends_builtin() {
        let config = PortfolioConfig::from_source("default_scene()").unwrap();
        assert_eq!(config.scene, Scene::portfolio());
    }

    #[test]
    fn test_unknown_feedback_rejected() {
        let err = PortfolioConfig::from_source(
            r#"hotspot{ id = "a", position = vec3(0, 0, 0), title = "A", feedback = "wobble" }"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("wobble"), "got {err}");
    }

    #[test]
    fn test_timing_string_and_table() {
        let config = PortfolioConfig::from_source(r#"timing = "per_frame""#).unwrap();
        assert_eq!(config.session.movement.timing, FrameTiming::PerFrame);

        let config = PortfolioConfig::from_source("timing = { reference_rate = 30 }").unwrap();
        assert_eq!(
            config.session.camera.timing,
            FrameTiming::Scaled { reference_rate: 30.0 }
        );

        assert!(PortfolioConfig::from_source("timing = 5").is_err());
    }
}
