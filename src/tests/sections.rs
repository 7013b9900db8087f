use std::collections::HashSet;

use crate::configs::{CONTACT_LINKS, PROJECTS, SKILLS};
use crate::sections::{ABOUT_ID, CONTACT_ID, HERO_ID, PROJECTS_ID, SECTIONS, SKILLS_ID};

#[test]
fn registry_holds_five_sections_in_page_order() {
    let labels: Vec<_> = SECTIONS.iter().map(|s| s.label).collect();
    assert_eq!(labels, ["Home", "About", "Skills", "Projects", "Contact"]);
}

#[test]
fn section_ids_are_unique() {
    let ids: HashSet<_> = SECTIONS.iter().map(|s| s.id).collect();
    assert_eq!(ids.len(), SECTIONS.len());
}

#[test]
fn registry_ids_match_the_rendered_anchors() {
    let ids: Vec<_> = SECTIONS.iter().map(|s| s.id).collect();
    assert_eq!(ids, [HERO_ID, ABOUT_ID, SKILLS_ID, PROJECTS_ID, CONTACT_ID]);
}

#[test]
fn nav_links_target_their_own_section() {
    for section in &SECTIONS {
        assert_eq!(section.anchor(), format!("#{}", section.id));
    }
}

#[test]
fn registry_serializes_with_stable_shape() {
    let json = serde_json::to_value(SECTIONS).expect("registry serializes");

    let entries = json.as_array().expect("registry is an array");
    assert_eq!(entries.len(), 5);
    assert_eq!(entries[0], serde_json::json!({ "id": "hero", "label": "Home" }));
}

#[test]
fn skill_grid_has_eight_entries() {
    assert_eq!(SKILLS.len(), 8);
}

#[test]
fn project_images_follow_positional_naming() {
    for (idx, project) in PROJECTS.iter().enumerate() {
        assert_eq!(project.image, format!("/images/project{}.png", idx + 1));
    }
}

#[test]
fn contact_links_cover_email_and_both_profiles() {
    assert_eq!(CONTACT_LINKS.len(), 3);
    assert!(CONTACT_LINKS[0].href.starts_with("mailto:"));
    assert!(CONTACT_LINKS[1].href.contains("github"));
    assert!(CONTACT_LINKS[2].href.contains("linkedin"));
}
