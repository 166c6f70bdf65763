use chrono::{Datelike, Local};
use dioxus::prelude::*;

use crate::web::{use_preferences, use_site_config};
use common::i18n::strings;

#[component]
pub fn Footer() -> Element {
    let prefs = use_preferences();
    let config = use_site_config();
    let t = strings(prefs.read().language());

    let year = Local::now().year();
    let socials = [
        ("GitHub", config.links.github),
        ("LinkedIn", config.links.linkedin),
        ("Email", config.links.email),
    ];

    rsx! {
        footer { class: "footer",
            div { class: "container footer-row",
                p { class: "footer-copy", "© {year} {config.owner}. {t.footer.rights}" }
                div { class: "social-links",
                    for (label, href) in socials.into_iter().filter_map(|(l, h)| Some((l, h?))) {
                        a {
                            key: "{label}",
                            class: "social-link",
                            href: "{href}",
                            target: "_blank",
                            rel: "noopener noreferrer",
                            aria_label: label,
                            "{label}"
                        }
                    }
                }
            }
        }
    }
}
