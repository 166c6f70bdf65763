#![allow(non_snake_case)]
use dioxus::prelude::*;
use dioxus_router::prelude::*;

use tracing::Level;

mod components;
use components::toast::Toaster;

mod content;

mod home;
use home::{PageNotFound, Portfolio};

mod sections;

mod web;
use web::{dom, storage};

fn main() {
    dioxus_logger::init(Level::DEBUG).expect("failed to init logger");
    launch(App);
}

#[derive(Clone, PartialEq, Routable)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Portfolio {},
    #[route("/:..segments")]
    PageNotFound { segments: Vec<String> },
}

#[component]
pub fn App() -> Element {
    use_context_provider(web::site_config);
    let prefs = use_context_provider(|| Signal::new(storage::load_preferences()));

    // theme and language live on the document element, so that the stylesheet
    // and text direction follow them
    use_effect(move || {
        let prefs = prefs.read();
        dom::apply_preferences(prefs.theme(), prefs.language());
    });

    rsx! {
        style { "{web::style::PORTFOLIO_STYLES}" }
        Router::<Route> {}
        Toaster {}
    }
}
