pub mod about;
pub mod contact;
pub mod experience;
pub mod footer;
pub mod hero;
pub mod projects;
pub mod skills;

use dioxus::prelude::*;

#[derive(Clone, PartialEq, Props)]
struct SectionHeaderProps {
    title: &'static str,
    description: Option<&'static str>,
}

// centered title block shared by every section below the hero
#[component]
fn SectionHeader(props: SectionHeaderProps) -> Element {
    rsx! {
        div { class: "section-header",
            h2 { class: "section-title gradient-text", "{props.title}" }
            if let Some(description) = props.description {
                p { class: "section-desc", "{description}" }
            }
        }
    }
}
