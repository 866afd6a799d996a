use folio_world::{WorldState, WORLD_SECTIONS};
use glam::Vec3;
use portfolio::{HotspotSpec, Scene};
use std::f32::consts::PI;

fn mounted() -> WorldState {
    let mut world = WorldState::new();
    let report = Scene::portfolio().mount(&mut world);
    assert!(report.rejected.is_empty(), "rejected: {:?}", report.rejected);
    assert!(report.duplicates.is_empty(), "duplicates: {:?}", report.duplicates);
    world
}

#[test]
fn test_all_sections_framed_after_mount() {
    let world = mounted();
    for section in WORLD_SECTIONS {
        let target = world.camera_target(section);
        assert!(target.is_some(), "missing framing for {section}");
        assert!(target.unwrap().is_finite());
    }
}

#[test]
fn test_final_framings_follow_mount_order() {
    let world = mounted();
    let expect = [
        ("home", Vec3::new(0.0, 3.0, 10.0), Vec3::new(0.0, 1.0, 0.0)),
        ("about", Vec3::new(-10.0, 3.0, 5.0), Vec3::new(-10.0, 1.0, -5.0)),
        ("projects", Vec3::new(0.0, 5.0, 5.0), Vec3::new(0.0, 2.0, -15.0)),
        ("skills", Vec3::new(0.0, 3.0, 10.0), Vec3::new(0.0, 1.0, 0.0)),
        ("contact", Vec3::new(0.0, 3.0, -5.0), Vec3::new(0.0, 1.0, -15.0)),
        ("blog", Vec3::new(0.0, 4.0, 10.0), Vec3::new(0.0, 2.0, 0.0)),
    ];
    for (section, position, look_at) in expect {
        let target = world.camera_target(section).unwrap();
        assert_eq!(target.position, position, "{section} position");
        assert_eq!(target.look_at, look_at, "{section} look_at");
    }
}

#[test]
fn test_hotspot_inventory() {
    let world = mounted();
    let ids: Vec<&str> = world.interactive_objects().iter().map(|o| o.id()).collect();

    for id in [
        "laptop", "server", "codeBlock", "aboutMe", "email", "github", "linkedin", "twitter",
    ] {
        assert!(ids.contains(&id), "missing {id}");
    }
    assert_eq!(ids.iter().filter(|id| id.starts_with("experience-")).count(), 3);
    assert_eq!(ids.iter().filter(|id| id.starts_with("education-")).count(), 2);
    assert_eq!(ids.iter().filter(|id| id.starts_with("gallery-")).count(), 4);
    assert_eq!(ids.iter().filter(|id| id.starts_with("blog-")).count(), 6);
}

#[test]
fn test_project_cards_on_arc() {
    let scene = Scene::portfolio();
    let cards: Vec<&HotspotSpec> = scene
        .hotspots()
        .filter(|h| portfolio::content::PROJECTS.iter().any(|p| p.id == h.id))
        .collect();
    assert_eq!(cards.len(), 3);

    for (i, card) in cards.iter().enumerate() {
        let angle = (i as f32 - 1.0) * PI / 4.0;
        let expected = Vec3::new(angle.sin() * 8.0, 2.0, -15.0 + angle.cos() * 4.0);
        assert!(card.position.distance(expected) < 1e-5, "card {i} at {:?}", card.position);
        assert_eq!(card.radius, 3.0);
    }
}

#[test]
fn test_blog_grid_layout() {
    let scene = Scene::portfolio();
    let posts: Vec<&HotspotSpec> = scene.hotspots().filter(|h| h.id.starts_with("blog-")).collect();
    assert_eq!(posts[0].position, Vec3::new(-4.0, 2.0, 0.0));
    assert_eq!(posts[2].position, Vec3::new(4.0, 2.0, 0.0));
    assert_eq!(posts[3].position, Vec3::new(-4.0, -0.5, 0.0));
    assert!(posts[0].content.contains(" - "), "content was {}", posts[0].content);
}

#[test]
fn test_experience_entries_formatted() {
    let scene = Scene::portfolio();
    let first = scene.hotspots().find(|h| h.id.starts_with("experience-")).unwrap();
    let job = &portfolio::content::EXPERIENCE[0];
    assert_eq!(first.title, format!("{} at {}", job.title, job.company));
    assert!(first.content.contains("Technologies: "));
    assert_eq!(first.position, Vec3::new(0.0, 3.0, -10.0));
}

#[test]
fn test_remount_reports_duplicates() {
    let mut world = WorldState::new();
    let scene = Scene::portfolio();
    let first = scene.mount(&mut world);
    let second = scene.mount(&mut world);

    assert_eq!(second.hotspots, 0);
    assert_eq!(second.duplicates.len(), first.hotspots);
    assert_eq!(world.interactive_objects().len(), first.hotspots);
}

#[test]
fn test_mount_applies_follow_command() {
    let mut scene = Scene::new();
    scene.follow_player(true);
    let mut world = WorldState::new();
    scene.mount(&mut world);
    assert!(world.follow_player());
}
