use crate::configs::OWNER_NAME;
use chrono::{Datelike, Local};
use dioxus::prelude::*;

#[component]
pub fn Footer() -> Element {
    let year = Local::now().year();

    rsx! {
        footer {
            class: "text-center py-4 text-sm text-gray-500",
            "© {year} {OWNER_NAME} — Built with ❤️ Rust & Dioxus"
        }
    }
}
