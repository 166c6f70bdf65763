use dioxus::prelude::*;
use gloo_timers::future::TimeoutFuture;

use crate::web::{dom, use_preferences};
use common::{
    animation::{hero_duration, hero_frame, HeroTexts},
    i18n::strings,
    section::Section,
};

// roughly 30 samples a second is plenty for typed text
const SAMPLE_MS: u32 = 33;

#[component]
pub fn Hero() -> Element {
    let prefs = use_preferences();
    let mut started = use_signal(dom::now_ms);
    let mut elapsed = use_signal(|| 0.0);

    let language = prefs.read().language();
    let t = strings(language);

    // switching language types the new copy out from the beginning
    use_effect(move || {
        let _ = prefs.read().language();
        started.set(dom::now_ms());
        elapsed.set(0.0);
    });

    use_future(move || async move {
        loop {
            TimeoutFuture::new(SAMPLE_MS).await;

            if *elapsed.peek() > hero_duration() {
                continue;
            }
            elapsed.set((dom::now_ms() - *started.peek()) / 1000.0);
        }
    });

    let texts = HeroTexts {
        greeting: t.hero.greeting,
        name: t.hero.name,
        title: t.hero.title,
        bio: t.hero.bio,
    };
    let frame = hero_frame(&texts, elapsed());
    let typing = elapsed() < hero_duration();
    let [orb_one, orb_two] = frame.orbs;

    rsx! {
        section { id: Section::Home.id(), class: "hero",
            div {
                class: "hero-orb one",
                style: "--orb-in: {orb_one};",
            }
            div {
                class: "hero-orb two",
                style: "--orb-in: {orb_two};",
            }

            div { class: "container hero-content",
                p { class: "hero-greeting", "{frame.greeting}" }
                h1 { class: "hero-name gradient-text", "{frame.name}" }
                h2 { class: "hero-title",
                    "{frame.title}"
                    span {
                        class: "hero-underline",
                        style: "transform: scaleX({frame.underline});",
                    }
                }
                p { class: if typing { "hero-bio hero-caret" } else { "hero-bio" }, "{frame.bio}" }
            }

            a {
                class: "scroll-indicator",
                href: Section::About.href(),
                style: "opacity: {frame.scroll_indicator};",
                onclick: move |evt| {
                    evt.prevent_default();
                    dom::scroll_to_section(Section::About);
                },
                span { "{t.hero.scroll}" }
                span { class: "scroll-arrow", "↓" }
            }
        }
    }
}
