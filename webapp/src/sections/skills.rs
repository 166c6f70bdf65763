use dioxus::prelude::*;

use super::SectionHeader;
use crate::{components::reveal::Reveal, content::SKILLS, web::use_preferences};
use common::{i18n::strings, section::Section};

const SECTION: Section = Section::Skills;

#[component]
pub fn Skills() -> Element {
    let prefs = use_preferences();
    let t = strings(prefs.read().language());

    rsx! {
        section { id: SECTION.id(), class: "page-section alt",
            div { class: "glow", style: "width: 400px; height: 400px; top: 10%; right: -10%;" }

            div { class: "container",
                Reveal { section: SECTION, index: 0,
                    SectionHeader { title: t.skills.title, description: t.skills.description }
                }

                div { class: "skills-grid",
                    for (i, skill) in SKILLS.iter().enumerate() {
                        Reveal { key: "{skill.name}", section: SECTION, index: 1 + i,
                            div { class: "skill-card glass",
                                div { class: "skill-icon", "{skill.icon}" }
                                h3 { class: "skill-name", "{skill.name}" }
                                p { class: "skill-desc", "{skill.description}" }
                                div { class: "tag-list",
                                    for tag in skill.tags.iter() {
                                        span { key: "{tag}", class: "tag", "{tag}" }
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
