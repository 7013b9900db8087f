use crate::sections::ABOUT_ID;
use dioxus::prelude::*;

#[component]
pub fn About() -> Element {
    rsx! {
        section {
            id: ABOUT_ID,
            class: "min-h-screen flex flex-col justify-center items-center",
            h2 {
                class: "text-3xl font-semibold mb-4 fade-up",
                "About Me"
            }
            p {
                class: "max-w-2xl text-center text-gray-400",
                "I’m Ezekiel, a front-end developer who loves creating interactive and visually appealing digital experiences using Rust, Dioxus, and Tailwind."
            }
        }
    }
}
