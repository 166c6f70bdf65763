use dioxus::prelude::*;

use super::SectionHeader;
use crate::{
    components::reveal::Reveal,
    content::{EXPERIENCE_YEARS, HIGHLIGHTS, PROJECT_COUNT, TECHNOLOGY_COUNT},
    web::use_preferences,
};
use common::{i18n::strings, section::Section};

const SECTION: Section = Section::About;

#[component]
pub fn About() -> Element {
    let prefs = use_preferences();
    let t = strings(prefs.read().language());

    let stats = [
        (EXPERIENCE_YEARS, t.stats.experience_years),
        (PROJECT_COUNT, t.stats.projects),
        (TECHNOLOGY_COUNT, t.stats.technologies),
    ];

    rsx! {
        section { id: SECTION.id(), class: "page-section",
            div { class: "container",
                Reveal { section: SECTION, index: 0,
                    SectionHeader { title: t.about.title }
                }

                div { class: "about-grid",
                    Reveal { section: SECTION, index: 1, from_side: true,
                        div { class: "avatar glass", span { class: "gradient-text", "</>" } }
                    }

                    div {
                        Reveal { section: SECTION, index: 2,
                            p { class: "about-text", "{t.about.description}" }
                        }

                        div { class: "stats-grid",
                            for (i, (value, label)) in stats.into_iter().enumerate() {
                                Reveal { key: "{label}", section: SECTION, index: 3 + i,
                                    div { class: "stat-card glass",
                                        span { class: "stat-value gradient-text", "{value}" }
                                        span { class: "stat-label", "{label}" }
                                    }
                                }
                            }
                        }

                        div { class: "highlights",
                            for (i, (icon, label)) in HIGHLIGHTS.iter().enumerate() {
                                Reveal { key: "{label}", section: SECTION, index: 6 + i, step: 0.05,
                                    div { class: "highlight",
                                        span { "{icon}" }
                                        span { "{label}" }
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
