use crate::configs::{OWNER_NAME, TAGLINE};
use crate::sections::HERO_ID;
use dioxus::prelude::*;

#[component]
pub fn Hero() -> Element {
    rsx! {
        section {
            id: HERO_ID,
            class: "min-h-screen flex flex-col justify-center items-center",
            h1 {
                class: "text-5xl font-bold fade-up",
                "Hi, I’m "
                span { class: "text-purple-400", {OWNER_NAME} }
            }
            p {
                class: "mt-4 text-lg text-gray-400 fade-up-late",
                {TAGLINE}
            }
        }
    }
}
