use dioxus::prelude::*;

use super::SectionHeader;
use crate::{components::reveal::Reveal, content::PROJECTS, web::use_preferences};
use common::{i18n::strings, section::Section};

const SECTION: Section = Section::Projects;

// projects
//
// a vertical list of cards, alternating the visual from side to side on wide
// screens
#[component]
pub fn Projects() -> Element {
    let prefs = use_preferences();
    let t = strings(prefs.read().language());

    rsx! {
        section { id: SECTION.id(), class: "page-section",
            div { class: "container",
                Reveal { section: SECTION, index: 0,
                    SectionHeader { title: t.projects.title }
                }

                div { class: "projects-list",
                    for (i, project) in PROJECTS.iter().enumerate() {
                        Reveal { key: "{project.name}", section: SECTION, index: 1 + i, step: 0.15, from_side: true,
                            article { class: "project-card glass",
                                div { class: "project-visual",
                                    span { style: "font-size: 4rem;", "{project.icon}" }
                                }
                                div {
                                    span { class: "project-index gradient-text", {format!("{:02}", i + 1)} }
                                    h3 { class: "project-name", "{project.name}" }
                                    p { class: "project-desc", "{project.description}" }
                                    div { class: "tag-list",
                                        for tech in project.tech_stack.iter() {
                                            span { key: "{tech}", class: "tag tag-accent", "{tech}" }
                                        }
                                    }
                                    div { class: "project-links",
                                        a {
                                            class: "btn btn-solid",
                                            href: project.live,
                                            target: "_blank",
                                            rel: "noopener noreferrer",
                                            "{t.projects.view}"
                                        }
                                        a {
                                            class: "btn",
                                            href: project.repo,
                                            target: "_blank",
                                            rel: "noopener noreferrer",
                                            "{t.projects.repo}"
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
