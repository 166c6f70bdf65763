use dioxus::prelude::*;

use super::SectionHeader;
use crate::{components::reveal::Reveal, web::use_preferences};
use common::{i18n::strings, section::Section};

const SECTION: Section = Section::Experience;

#[component]
pub fn Experience() -> Element {
    let prefs = use_preferences();
    let t = strings(prefs.read().language());

    rsx! {
        section { id: SECTION.id(), class: "page-section alt",
            div { class: "container",
                Reveal { section: SECTION, index: 0,
                    SectionHeader { title: t.experience.title }
                }

                div { class: "timeline",
                    for (i, item) in t.experience.items.iter().enumerate() {
                        Reveal { key: "{item.role}-{item.company}", section: SECTION, index: 1 + i, step: 0.2, from_side: true,
                            div { class: "timeline-item",
                                span { class: "timeline-dot" }
                                div { class: "experience-card glass",
                                    div { class: "experience-head",
                                        div {
                                            h3 { class: "experience-role", "{item.role}" }
                                            span { class: "experience-company gradient-text", "{item.company}" }
                                        }
                                        span { class: "tag", "{item.duration}" }
                                    }
                                    p { class: "experience-desc", "{item.description}" }
                                    ul { class: "achievements",
                                        for achievement in item.achievements.iter() {
                                            li { key: "{achievement}", "{achievement}" }
                                        }
                                    }
                                    div { class: "tag-list experience-skills",
                                        for skill in item.skills.iter() {
                                            span { key: "{skill}", class: "tag tag-accent", "{skill}" }
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
