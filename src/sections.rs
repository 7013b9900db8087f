use serde::Serialize;

pub const HERO_ID: &str = "hero";
pub const ABOUT_ID: &str = "about";
pub const SKILLS_ID: &str = "skills";
pub const PROJECTS_ID: &str = "projects";
pub const CONTACT_ID: &str = "contact";

/// A named, anchorable region of the single-page layout.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Section {
    pub id: &'static str,
    pub label: &'static str,
}

impl Section {
    /// Anchor target the matching navbar link points at.
    pub fn anchor(&self) -> String {
        format!("#{}", self.id)
    }
}

/// Fixed page order. The navbar iterates this once to render its links,
/// and every view renders its region with the matching id constant, so
/// the two cannot drift apart.
pub const SECTIONS: [Section; 5] = [
    Section { id: HERO_ID, label: "Home" },
    Section { id: ABOUT_ID, label: "About" },
    Section { id: SKILLS_ID, label: "Skills" },
    Section { id: PROJECTS_ID, label: "Projects" },
    Section { id: CONTACT_ID, label: "Contact" },
];
