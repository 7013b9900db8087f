use crate::configs::CONTACT_LINKS;
use crate::sections::CONTACT_ID;
use dioxus::prelude::*;

#[component]
pub fn Contact() -> Element {
    rsx! {
        section {
            id: CONTACT_ID,
            class: "min-h-screen flex flex-col justify-center items-center",
            h2 {
                class: "text-3xl font-semibold mb-8 fade-up",
                "Contact"
            }
            div {
                class: "flex gap-8 text-3xl text-purple-400",
                {CONTACT_LINKS.iter().map(|link| rsx! {
                    a {
                        key: "{link.label}",
                        href: link.href,
                        class: "hover:text-purple-300 transition",
                        {link.label}
                    }
                })}
            }
            p {
                class: "mt-4 text-gray-400",
                "Let’s create something amazing together!"
            }
        }
    }
}
