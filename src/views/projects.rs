use crate::configs::{Project, PROJECTS};
use crate::sections::PROJECTS_ID;
use dioxus::prelude::*;

#[component]
fn ProjectCard(project: Project) -> Element {
    rsx! {
        div {
            class: "bg-purple-500/10 border border-purple-400/20 rounded-xl overflow-hidden shadow-lg project-card",
            img {
                src: project.image,
                alt: project.title,
            }
            div {
                class: "p-4",
                h3 {
                    class: "font-bold text-purple-300",
                    {project.title}
                }
                p {
                    class: "text-sm text-gray-400",
                    {project.blurb}
                }
            }
        }
    }
}

#[component]
pub fn Projects() -> Element {
    rsx! {
        section {
            id: PROJECTS_ID,
            class: "min-h-screen flex flex-col justify-center items-center",
            h2 {
                class: "text-3xl font-semibold mb-8 fade-up",
                "Projects"
            }
            div {
                class: "grid md:grid-cols-3 gap-8 px-8",
                {PROJECTS.iter().map(|project| rsx! {
                    ProjectCard {
                        key: "{project.title}",
                        project: *project,
                    }
                })}
            }
        }
    }
}
