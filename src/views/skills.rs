use crate::configs::SKILLS;
use crate::sections::SKILLS_ID;
use dioxus::prelude::*;

#[component]
pub fn Skills() -> Element {
    rsx! {
        section {
            id: SKILLS_ID,
            class: "min-h-screen flex flex-col justify-center items-center",
            h2 {
                class: "text-3xl font-semibold mb-8 fade-up",
                "Skills"
            }
            div {
                class: "grid grid-cols-2 md:grid-cols-4 gap-8",
                {SKILLS.iter().map(|skill| rsx! {
                    div {
                        key: "{skill}",
                        class: "px-6 py-4 bg-purple-500/10 rounded-xl border border-purple-400/30 text-center skill-tile",
                        {*skill}
                    }
                })}
            }
        }
    }
}
