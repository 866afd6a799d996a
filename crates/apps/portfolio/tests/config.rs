#![cfg(feature = "lua")]

use folio_core::FrameTiming;
use folio_world::WorldState;
use glam::Vec3;
use portfolio::{Feedback, PortfolioConfig, Scene};
use std::path::Path;

#[test]
fn test_sample_scene_file() {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("scenes/portfolio.lua");
    let config = PortfolioConfig::from_file(&path).unwrap();

    let mut world = WorldState::new();
    let report = config.scene.mount(&mut world);
    assert!(report.rejected.is_empty(), "rejected: {:?}", report.rejected);

    let home = world.camera_target("home").unwrap();
    assert_eq!(home.position, Vec3::new(0.0, 4.0, 12.0));
    assert!(world.interactive_object("resume").is_some());
    assert!(world.interactive_object("laptop").is_some());
    assert!(world.follow_player());
    assert_eq!(config.scene.feedback_for("resume"), Some(Feedback::Pulse));
    assert_eq!(config.session.movement.timing, FrameTiming::PerFrame);
}

#[test]
fn test_tunables_override_defaults() {
    let config = PortfolioConfig::from_source(
        r#"
        movement = { speed = 0.25, spawn = vec3(1, 0.5, 1) }
        camera = { follow_factor = 0.1, fov = 60 }
        audio = { hit = 0.5, muted = true }
        session = { loading_duration = 0, initial_section = "projects", show_controls = false }
        "#,
    )
    .unwrap();

    let session = &config.session;
    assert_eq!(session.movement.speed, 0.25);
    assert_eq!(session.movement.spawn, Vec3::new(1.0, 0.5, 1.0));
    assert_eq!(session.movement.gravity, 0.02, "untouched fields keep defaults");
    assert_eq!(session.camera.follow_factor, 0.1);
    assert_eq!(session.camera.fov, 60.0);
    assert_eq!(session.audio.hit.value(), 0.5);
    assert!(session.audio.muted);
    assert_eq!(session.loading_duration, 0.0);
    assert_eq!(session.initial_section.as_str(), "projects");
    assert!(!session.show_controls);
}

#[test]
fn test_invalid_values_rejected() {
    assert!(PortfolioConfig::from_source("audio = { music = 2 }").is_err());
    assert!(PortfolioConfig::from_source("camera = { follow_factor = 3 }").is_err());
    assert!(PortfolioConfig::from_source("movement = { boundary = -1 }").is_err());
    assert!(PortfolioConfig::from_source("camera = { transition_ease = 'bounce' }").is_err());
    assert!(PortfolioConfig::from_source("hotspot{ title = 'no id' }").is_err());
}

#[test]
fn test_builtin_matches_rust_scene() {
    assert_eq!(PortfolioConfig::builtin().scene, Scene::portfolio());
}

#[test]
fn test_config_errors_carry_context() {
    use anyhow::Context;

    let result = PortfolioConfig::from_source("x = = 1").context("loading scene");
    let err = result.unwrap_err();
    let message = format!("{err:#}");
    assert!(message.starts_with("loading scene: Failed to evaluate config"), "got {message}");

    let nested: anyhow::Result<()> = Err(portfolio::PortfolioError::from(
        PortfolioConfig::from_source("timing = 5").unwrap_err(),
    )
    .into());
    assert!(nested.unwrap_err().to_string().contains("timing"));
}
