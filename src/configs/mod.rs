mod profile;

pub use profile::{ContactLink, Project, CONTACT_LINKS, OWNER_NAME, PROJECTS, SKILLS, TAGLINE};
