use dioxus::prelude::*;
use dioxus_router::prelude::*;

use crate::{
    components::navigation::NavBar,
    sections::{
        about::About, contact::Contact, experience::Experience, footer::Footer, hero::Hero,
        projects::Projects, skills::Skills,
    },
    Route,
};

// the whole site is this one page; navigation scrolls between its sections
#[component]
pub fn Portfolio() -> Element {
    rsx! {
        NavBar {}
        main {
            Hero {}
            About {}
            Skills {}
            Projects {}
            Experience {}
            Contact {}
        }
        Footer {}
    }
}

#[component]
pub fn PageNotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");

    rsx! {
        div { class: "not-found",
            h1 { class: "gradient-text", "404" }
            p { "Nothing lives at /{path}" }
            Link { to: Route::Portfolio {}, class: "btn btn-solid", "Back home" }
        }
    }
}
