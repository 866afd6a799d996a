//! Camera rig behaviour against a live world state

use app::camera::{CameraRig, CameraRigConfig};
use app::Ease;
use folio_core::FrameTiming;
use folio_world::WorldState;
use glam::Vec3;

const FRAME: f32 = 1.0 / 60.0;

fn run(rig: &mut CameraRig, world: &WorldState, seconds: f32) {
    let frames = (seconds / FRAME).ceil() as usize;
    for _ in 0..frames {
        rig.update(world, FRAME);
    }
}

#[test]
fn test_unknown_section_leaves_camera_unchanged() {
    let world = WorldState::new();
    let mut rig = CameraRig::default();
    let before = *rig.camera();
    let target_before = rig.orbit_target();

    assert!(!rig.transition_to(&world, "nowhere"));
    run(&mut rig, &world, 2.5);

    assert_eq!(*rig.camera(), before, "camera must not move");
    assert_eq!(rig.orbit_target(), target_before);
}

#[test]
fn test_transition_reaches_section_framing() {
    let mut world = WorldState::new();
    world
        .set_camera_target("about", Vec3::new(-10.0, 3.0, 5.0), Vec3::new(-10.0, 1.0, -5.0))
        .unwrap();
    let mut rig = CameraRig::default();

    assert!(rig.transition_to(&world, "about"));
    run(&mut rig, &world, 1.0);
    let halfway = rig.camera().position;
    assert!(halfway.x < 0.0 && halfway.x > -10.0, "mid-flight at {halfway}");

    run(&mut rig, &world, 1.1);
    assert!(!rig.is_transitioning(), "transition lasts 2 seconds");
    assert!((rig.camera().position - Vec3::new(-10.0, 3.0, 5.0)).length() < 1e-4);
    assert!((rig.orbit_target() - Vec3::new(-10.0, 1.0, -5.0)).length() < 1e-4);
    assert_eq!(rig.camera().target_position, Some(rig.orbit_target()));
}

#[test]
fn test_new_transition_starts_from_current_values() {
    let mut world = WorldState::new();
    world
        .set_camera_target("skills", Vec3::new(10.0, 3.0, 10.0), Vec3::ZERO)
        .unwrap();
    world
        .set_camera_target("contact", Vec3::new(0.0, 3.0, -5.0), Vec3::new(0.0, 1.0, -15.0))
        .unwrap();
    let mut rig = CameraRig::default();

    rig.transition_to(&world, "skills");
    run(&mut rig, &world, 1.0);
    let mid = rig.camera().position;

    rig.transition_to(&world, "contact");
    rig.update(&world, 0.0);
    assert!((rig.camera().position - mid).length() < 1e-5, "no jump on restart");

    run(&mut rig, &world, 2.1);
    assert!((rig.camera().position - Vec3::new(0.0, 3.0, -5.0)).length() < 1e-4);
}

#[test]
fn test_follow_closes_five_percent_per_frame() {
    let mut world = WorldState::new();
    world.set_follow_player(true);
    let mut rig = CameraRig::default();

    let start = rig.camera().position;
    let desired = world.avatar_position() + Vec3::new(0.0, 3.0, 5.0);
    rig.update(&world, 1.0);

    let expected = start + (desired - start) * 0.05;
    assert!((rig.camera().position - expected).length() < 1e-5);
    assert_eq!(
        rig.camera().target_position,
        Some(world.avatar_position() + Vec3::Y)
    );
}

#[test]
fn test_follow_off_keeps_camera_still() {
    let world = WorldState::new();
    let mut rig = CameraRig::default();
    let before = *rig.camera();
    rig.update(&world, FRAME);
    assert_eq!(*rig.camera(), before);
}

#[test]
fn test_follow_and_transition_both_apply() {
    let mut world = WorldState::new();
    world
        .set_camera_target("projects", Vec3::new(0.0, 5.0, 5.0), Vec3::new(0.0, 2.0, -15.0))
        .unwrap();
    world.set_follow_player(true);
    let mut rig = CameraRig::default();

    rig.transition_to(&world, "projects");
    run(&mut rig, &world, 2.1);

    // Follow ran after the transition, so the camera aims at the avatar
    assert_eq!(
        rig.camera().target_position,
        Some(world.avatar_position() + Vec3::Y)
    );
    // The orbit target still reflects the transition
    assert!((rig.orbit_target() - Vec3::new(0.0, 2.0, -15.0)).length() < 1e-4);
}

#[test]
fn test_scaled_follow_is_frame_rate_independent() {
    let mut world = WorldState::new();
    world.set_follow_player(true);
    let config = CameraRigConfig {
        timing: FrameTiming::Scaled {
            reference_rate: 60.0,
        },
        transition_ease: Ease::Linear,
        ..Default::default()
    };

    let mut fast = CameraRig::new(config);
    let mut slow = CameraRig::new(config);
    for _ in 0..120 {
        fast.update(&world, 1.0 / 120.0);
    }
    for _ in 0..30 {
        slow.update(&world, 1.0 / 30.0);
    }

    let diff = (fast.camera().position - slow.camera().position).length();
    assert!(diff < 1e-3, "one second at 120 fps vs 30 fps differs by {diff}");
}
