//! Scene composition: section framings and hotspots
//!
//! A [`Scene`] is an ordered list of commands applied to the world state
//! when the session mounts. Order matters: later camera targets replace
//! earlier ones for the same section and the first hotspot with a given id
//! wins.

use crate::content;
use folio_world::section::{
    ABOUT, BLOG, CONTACT, EDUCATION, EXPERIENCE, GALLERY, HOME, PROJECTS, SKILLS,
};
use folio_world::{InteractiveObject, Registration, SectionId, WorldState};
use glam::Vec3;
use serde::{Deserialize, Serialize};
use std::f32::consts::PI;
use std::str::FromStr;

// ============================================================================
// Commands
// ============================================================================

/// Animation played on a hotspot when it is interacted with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Feedback {
    /// One full turn around Y
    Spin,
    /// Rise and settle back
    Bob,
    /// Grow and shrink back with a spring
    Pulse,
}

impl FromStr for Feedback {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "spin" => Ok(Feedback::Spin),
            "bob" => Ok(Feedback::Bob),
            "pulse" => Ok(Feedback::Pulse),
            other => Err(format!("unknown feedback '{}'", other)),
        }
    }
}

/// Hotspot as authored in a scene
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HotspotSpec {
    pub id: String,
    pub position: Vec3,
    pub radius: f32,
    pub title: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub feedback: Option<Feedback>,
}

impl HotspotSpec {
    pub fn new(
        id: impl Into<String>,
        position: Vec3,
        radius: f32,
        title: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            position,
            radius,
            title: title.into(),
            content: content.into(),
            feedback: None,
        }
    }

    pub fn with_feedback(mut self, feedback: Feedback) -> Self {
        self.feedback = Some(feedback);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SceneCommand {
    CameraTarget {
        section: SectionId,
        position: Vec3,
        look_at: Vec3,
    },
    Hotspot(HotspotSpec),
    FollowPlayer {
        enabled: bool,
    },
}

/// Outcome of mounting a scene
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MountReport {
    pub camera_targets: usize,
    pub hotspots: usize,
    /// Hotspot ids skipped because the id was already registered
    pub duplicates: Vec<String>,
    /// Commands refused by the world, with the reason
    pub rejected: Vec<String>,
}

// ============================================================================
// Scene
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    pub commands: Vec<SceneCommand>,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn camera_target(
        &mut self,
        section: impl Into<SectionId>,
        position: Vec3,
        look_at: Vec3,
    ) -> &mut Self {
        self.commands.push(SceneCommand::CameraTarget {
            section: section.into(),
            position,
            look_at,
        });
        self
    }

    pub fn hotspot(&mut self, spec: HotspotSpec) -> &mut Self {
        self.commands.push(SceneCommand::Hotspot(spec));
        self
    }

    pub fn follow_player(&mut self, enabled: bool) -> &mut Self {
        self.commands.push(SceneCommand::FollowPlayer { enabled });
        self
    }

    /// Append every command of `other`
    pub fn extend(&mut self, other: Scene) -> &mut Self {
        self.commands.extend(other.commands);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Feedback authored for a hotspot (first matching spec wins)
    pub fn feedback_for(&self, id: &str) -> Option<Feedback> {
        self.hotspots().find(|h| h.id == id).and_then(|h| h.feedback)
    }

    pub fn hotspots(&self) -> impl Iterator<Item = &HotspotSpec> {
        self.commands.iter().filter_map(|c| match c {
            SceneCommand::Hotspot(spec) => Some(spec),
            _ => None,
        })
    }

    /// Apply every command to the world in order
    ///
    /// Invalid commands are logged and skipped; mounting never fails.
    pub fn mount(&self, world: &mut WorldState) -> MountReport {
        let mut report = MountReport::default();

        for command in &self.commands {
            match command {
                SceneCommand::CameraTarget {
                    section,
                    position,
                    look_at,
                } => match world.set_camera_target(section, *position, *look_at) {
                    Ok(()) => report.camera_targets += 1,
                    Err(e) => {
                        tracing::warn!(%section, error = %e, "camera target rejected");
                        report.rejected.push(format!("camera target '{}': {}", section, e));
                    }
                },
                SceneCommand::Hotspot(spec) => {
                    let object = InteractiveObject::new(
                        spec.id.as_str(),
                        spec.position,
                        spec.radius,
                        spec.title.as_str(),
                        spec.content.as_str(),
                    );
                    match object {
                        Ok(object) => match world.register_interactive_object(object) {
                            Registration::Added => report.hotspots += 1,
                            Registration::AlreadyRegistered => {
                                report.duplicates.push(spec.id.clone())
                            }
                        },
                        Err(e) => {
                            tracing::warn!(id = %spec.id, error = %e, "hotspot rejected");
                            report.rejected.push(format!("hotspot '{}': {}", spec.id, e));
                        }
                    }
                }
                SceneCommand::FollowPlayer { enabled } => world.set_follow_player(*enabled),
            }
        }

        tracing::info!(
            camera_targets = report.camera_targets,
            hotspots = report.hotspots,
            duplicates = report.duplicates.len(),
            rejected = report.rejected.len(),
            "scene mounted"
        );
        report
    }

    /// The portfolio layout, section by section in mount order
    pub fn portfolio() -> Self {
        let mut scene = Scene::new();
        dev_desk(&mut scene);
        home(&mut scene);
        projects(&mut scene);
        about(&mut scene);
        skills(&mut scene);
        contact(&mut scene);
        experience(&mut scene);
        education(&mut scene);
        gallery(&mut scene);
        blog(&mut scene);
        scene
    }
}

// ============================================================================
// Sections
// ============================================================================

fn v(p: [f32; 3]) -> Vec3 {
    Vec3::from_array(p)
}

/// Laptop, server and code block, plus the desk-centred framings
fn dev_desk(scene: &mut Scene) {
    let feedback = [Feedback::Spin, Feedback::Bob, Feedback::Pulse];
    for (object, feedback) in content::DEV_DESK.iter().zip(feedback) {
        scene.hotspot(
            HotspotSpec::new(object.id, v(object.position), 2.0, object.title, object.content)
                .with_feedback(feedback),
        );
    }

    scene
        .camera_target(ABOUT, Vec3::new(-5.0, 3.0, 0.0), Vec3::new(-5.0, 1.0, -7.0))
        .camera_target(SKILLS, Vec3::new(5.0, 3.0, 0.0), Vec3::new(5.0, 1.0, -7.0))
        .camera_target(HOME, Vec3::new(0.0, 3.0, 5.0), Vec3::new(0.0, 1.0, -5.0));
}

fn home(scene: &mut Scene) {
    scene.camera_target(HOME, Vec3::new(0.0, 3.0, 10.0), Vec3::new(0.0, 1.0, 0.0));
}

/// Project cards on an arc in front of the showcase
fn projects(scene: &mut Scene) {
    scene.camera_target(PROJECTS, Vec3::new(0.0, 5.0, 5.0), Vec3::new(0.0, 2.0, -15.0));

    for (i, project) in content::PROJECTS.iter().enumerate() {
        let angle = (i as f32 - 1.0) * PI / 4.0;
        let position = Vec3::new(angle.sin() * 8.0, 2.0, -15.0 + angle.cos() * 4.0);
        scene.hotspot(HotspotSpec::new(
            project.id,
            position,
            3.0,
            project.title,
            project.description,
        ));
    }
}

fn about(scene: &mut Scene) {
    scene.camera_target(ABOUT, Vec3::new(-10.0, 3.0, 5.0), Vec3::new(-10.0, 1.0, -5.0));
    scene.hotspot(HotspotSpec::new(
        "aboutMe",
        Vec3::new(-10.0, 1.0, -5.0),
        3.0,
        content::ABOUT_TITLE,
        content::ABOUT_CONTENT,
    ));
}

/// Skill orbs on a circle around the origin
fn skills(scene: &mut Scene) {
    scene.camera_target(SKILLS, Vec3::new(0.0, 3.0, 10.0), Vec3::new(0.0, 1.0, 0.0));

    for (i, skill) in content::SKILLS.iter().enumerate() {
        let angle = (i as f32 - 1.0) * PI / 2.0;
        let position = Vec3::new(angle.sin() * 5.0, 1.0, angle.cos() * 5.0);
        scene.hotspot(HotspotSpec::new(skill.id, position, 2.0, skill.title, skill.description));
    }
}

/// Contact cards on a shallow arc near the back of the world
fn contact(scene: &mut Scene) {
    scene.camera_target(CONTACT, Vec3::new(0.0, 3.0, -5.0), Vec3::new(0.0, 1.0, -15.0));

    for (i, link) in content::CONTACTS.iter().enumerate() {
        let angle = (i as f32 - 2.0 + 0.5) * PI / 3.0;
        let position = Vec3::new(angle.sin() * 5.0, 1.0, -15.0 + angle.cos() * 2.0);
        scene.hotspot(HotspotSpec::new(link.id, position, 2.0, link.label, link.description));
    }
}

/// Timeline entries stacked vertically
fn experience(scene: &mut Scene) {
    scene.camera_target(EXPERIENCE, Vec3::new(-10.0, 5.0, 5.0), Vec3::new(0.0, 2.0, -10.0));

    for (i, job) in content::EXPERIENCE.iter().enumerate() {
        let position = Vec3::new(0.0, 3.0 - i as f32 * 2.0, -10.0);
        scene.hotspot(HotspotSpec::new(
            format!("experience-{}", job.id),
            position,
            2.0,
            format!("{} at {}", job.title, job.company),
            format!(
                "{} ({})\n\nTechnologies: {}",
                job.description,
                job.duration,
                job.technologies.join(", ")
            ),
        ));
    }
}

fn education(scene: &mut Scene) {
    scene.camera_target(EDUCATION, Vec3::new(10.0, 5.0, 5.0), Vec3::new(0.0, 2.0, -10.0));

    for (i, entry) in content::EDUCATION.iter().enumerate() {
        let position = Vec3::new(0.0, 3.0 - i as f32 * 2.5, -12.0);
        scene.hotspot(HotspotSpec::new(
            format!("education-{}", entry.id),
            position,
            2.5,
            entry.degree,
            format!(
                "{} ({})\n\n{}\n\nAchievements: {}",
                entry.institution,
                entry.duration,
                entry.description,
                entry.achievements.join(", ")
            ),
        ));
    }
}

fn gallery(scene: &mut Scene) {
    scene.camera_target(GALLERY, Vec3::new(0.0, 3.0, 0.0), Vec3::new(0.0, 1.0, -15.0));

    for item in &content::GALLERY {
        scene.hotspot(HotspotSpec::new(
            format!("gallery-{}", item.id),
            v(item.position),
            3.0,
            item.title,
            item.description,
        ));
    }
}

/// Posts in a three-column grid
fn blog(scene: &mut Scene) {
    scene.camera_target(BLOG, Vec3::new(0.0, 4.0, 10.0), Vec3::new(0.0, 2.0, 0.0));

    for (i, post) in content::BLOG_POSTS.iter().enumerate() {
        let col = (i % 3) as f32;
        let row = (i / 3) as f32;
        scene.hotspot(HotspotSpec::new(
            format!("blog-{}", post.id),
            Vec3::new((col - 1.0) * 4.0, 2.0 - row * 2.5, 0.0),
            2.0,
            post.title,
            format!("{} - {}\n\n{}", post.date, post.category, post.excerpt),
        ));
    }
}
