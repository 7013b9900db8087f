use dioxus::prelude::*;
use portfolio::components::FloatingShapes;
use portfolio::utils::{apply_theme, ThemeState};
use portfolio::views::{About, Contact, Footer, Hero, Navbar, Projects, Skills};

const FAVICON: Asset = asset!("/assets/favicon.ico");
const MAIN_CSS: Asset = asset!("/assets/styling/main.css");
const TAILWIND_CSS: Asset = asset!("/assets/tailwind.css");

fn main() {
    #[cfg(not(target_arch = "wasm32"))]
    {
        if std::env::var("RUST_LOG").is_err() {
            std::env::set_var("RUST_LOG", "info");
        }
        env_logger::init();
    }

    #[cfg(target_arch = "wasm32")]
    {
        console_log::init_with_level(log::Level::Info).unwrap();
    }

    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let theme = use_signal(|| ThemeState::default());
    use_context_provider(|| theme);

    // The document body lives outside our render output, so restyle it
    // from one place whenever the theme flips.
    use_effect(move || {
        let theme = theme();
        if let Err(e) = apply_theme(&theme) {
            log::warn!("could not restyle document for {} theme: {}", theme.class(), e);
        }
    });

    let root_class = format!("relative min-h-screen overflow-hidden {}", theme().class());

    rsx! {
        div {
            class: root_class,
            document::Link { rel: "icon", href: FAVICON }
            document::Link { rel: "stylesheet", href: MAIN_CSS }
            document::Link { rel: "stylesheet", href: TAILWIND_CSS }
            Navbar {}
            FloatingShapes {}
            Hero {}
            About {}
            Skills {}
            Projects {}
            Contact {}
            Footer {}
        }
    }
}
