use serde::Serialize;

pub const OWNER_NAME: &str = "Ezekiel";
pub const TAGLINE: &str = "A passionate Web Developer crafting stunning UIs ✨";

pub const SKILLS: [&str; 8] = [
    "HTML",
    "CSS",
    "JavaScript",
    "Rust",
    "Dioxus",
    "Tailwind",
    "GitHub",
    "Vercel",
];

/// One showcase card. Images follow the positional naming convention
/// `/images/project{n}.png`; nothing checks they exist on disk.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Project {
    pub title: &'static str,
    pub blurb: &'static str,
    pub image: &'static str,
}

pub const PROJECTS: [Project; 3] = [
    Project {
        title: "Project 1",
        blurb: "Interactive project showcase 1",
        image: "/images/project1.png",
    },
    Project {
        title: "Project 2",
        blurb: "Interactive project showcase 2",
        image: "/images/project2.png",
    },
    Project {
        title: "Project 3",
        blurb: "Interactive project showcase 3",
        image: "/images/project3.png",
    },
];

/// Outbound links rendered in the contact section. The hrefs are opaque
/// strings passed straight through to the anchor elements.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct ContactLink {
    pub label: &'static str,
    pub href: &'static str,
}

pub const CONTACT_LINKS: [ContactLink; 3] = [
    ContactLink {
        label: "Email",
        href: "mailto:kamauezekiel53@gmail.com",
    },
    ContactLink {
        label: "GitHub",
        href: "https://github.com/kamauezekiel53-maker",
    },
    ContactLink {
        label: "LinkedIn",
        href: "https://linkedin.com",
    },
];
