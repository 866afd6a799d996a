//! Section identifiers and the navigation list

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

/// Identifier of a named thematic region of the world
///
/// Any string is a valid id; ids without a registered camera target are
/// simply ignored by the camera controller.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SectionId(String);

impl SectionId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The landing section
    pub fn home() -> Self {
        Self::new(HOME)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for SectionId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for SectionId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&SectionId> for SectionId {
    fn from(value: &SectionId) -> Self {
        value.clone()
    }
}

impl Borrow<str> for SectionId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for SectionId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

pub const HOME: &str = "home";
pub const ABOUT: &str = "about";
pub const PROJECTS: &str = "projects";
pub const SKILLS: &str = "skills";
pub const CONTACT: &str = "contact";
pub const EXPERIENCE: &str = "experience";
pub const EDUCATION: &str = "education";
pub const GALLERY: &str = "gallery";
pub const BLOG: &str = "blog";

/// Every section laid out in the world
pub const WORLD_SECTIONS: [&str; 9] = [
    HOME, ABOUT, PROJECTS, SKILLS, CONTACT, EXPERIENCE, EDUCATION, GALLERY, BLOG,
];

/// Entry in the navigation bar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SectionInfo {
    pub id: &'static str,
    pub label: &'static str,
    pub icon: &'static str,
}

/// Sections reachable from the navigation bar, in display order
pub const NAV_SECTIONS: [SectionInfo; 5] = [
    SectionInfo {
        id: HOME,
        label: "Home",
        icon: "🏠",
    },
    SectionInfo {
        id: ABOUT,
        label: "About",
        icon: "👨‍💻",
    },
    SectionInfo {
        id: PROJECTS,
        label: "Projects",
        icon: "🚀",
    },
    SectionInfo {
        id: SKILLS,
        label: "Skills",
        icon: "🧠",
    },
    SectionInfo {
        id: CONTACT,
        label: "Contact",
        icon: "📧",
    },
];

/// Look up navigation info for a section id
pub fn nav_info(id: &str) -> Option<&'static SectionInfo> {
    NAV_SECTIONS.iter().find(|s| s.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nav_sections_are_world_sections() {
        for info in NAV_SECTIONS {
            assert!(WORLD_SECTIONS.contains(&info.id), "{} missing", info.id);
        }
    }

    #[test]
    fn test_nav_info_lookup() {
        assert_eq!(nav_info("skills").map(|s| s.label), Some("Skills"));
        assert!(nav_info("gallery").is_none());
    }

    #[test]
    fn test_section_id_serializes_as_string() {
        let json = serde_json::to_string(&SectionId::home()).unwrap();
        assert_eq!(json, "\"home\"");
    }
}
