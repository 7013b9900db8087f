use crate::configs::OWNER_NAME;
use crate::sections::SECTIONS;
use crate::utils::ThemeState;
use dioxus::prelude::*;

const NAVBAR_CSS: Asset = asset!("/assets/styling/navbar.css");

#[component]
pub fn Navbar() -> Element {
    let mut theme = use_context::<Signal<ThemeState>>();

    rsx! {
        document::Link { rel: "stylesheet", href: NAVBAR_CSS }

        nav {
            class: "fixed top-0 w-full flex justify-between items-center px-8 py-4 bg-black/40 backdrop-blur-md z-50",
            h1 {
                class: "text-2xl font-bold text-purple-400",
                {OWNER_NAME}
            }
            div {
                class: "flex items-center gap-6",
                {SECTIONS.iter().map(|section| rsx! {
                    a {
                        key: "{section.id}",
                        href: section.anchor(),
                        class: "hover:text-purple-400 transition",
                        {section.label}
                    }
                })}
                button {
                    class: "text-xl",
                    onclick: move |_| {
                        theme.with_mut(|t| t.toggle());
                        log::debug!("theme toggled to {}", theme.read().class());
                    },
                    {theme.read().toggle_icon()}
                }
            }
        }
    }
}
