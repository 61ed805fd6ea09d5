use dioxus::prelude::*;
use ui::services::PageConfig;
use ui::SignUpPage;

const MAIN_CSS: Asset = asset!("/assets/main.css");
/// Deployment overrides for branding, validation and animations
const PAGE_CONFIG_JSON: &str = include_str!("../page_config.json");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        document::Title { "Inscreva-se" }

        Router::<Route> {}
    }
}

#[derive(Clone, Routable, Debug, PartialEq)]
enum Route {
    #[route("/")]
    SignUp {},
}

#[component]
fn SignUp() -> Element {
    let navigator = use_navigator();
    let config = use_hook(|| PageConfig::load_or_default(Some(PAGE_CONFIG_JSON)));

    rsx! {
        SignUpPage {
            on_back: move |_| navigator.go_back(),
            config
        }
    }
}
