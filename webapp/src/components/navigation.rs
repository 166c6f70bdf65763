use std::rc::Rc;

use dioxus::prelude::*;
use futures::StreamExt;
use gloo_timers::callback::Timeout;
use tracing::debug;

use crate::{
    components::reveal::REVEALED,
    web::{dom, use_preferences},
};
use common::{
    animation::{entrance_start, entrance_triggered},
    i18n::strings,
    preferences::Theme,
    section::{Section, SECTIONS},
    tracker::{ScrollTracker, Viewport, COOL_DOWN_MS},
};

#[derive(Clone, Copy, Debug, PartialEq)]
enum Tick {
    // a coalesced scroll/resize frame
    Frame,
    // the post-click freeze is over
    CoolDown,
}

// mark every section whose top has crossed its entrance line
fn reveal_sections(viewport: &Viewport, tops: &[Option<f64>]) {
    for (section, top) in SECTIONS.iter().zip(tops) {
        let Some(top) = *top else { continue };

        if entrance_triggered(top, viewport.height, entrance_start(*section))
            && !REVEALED.peek().contains(section)
        {
            debug!("revealing {section}");
            REVEALED.with_mut(|v| v.insert(*section));
        }
    }
}

#[derive(Clone, PartialEq, Props)]
struct NavLinkProps {
    section: Section,
    label: String,
    active: bool,
    on_select: EventHandler<Section>,
}

#[component]
fn NavLink(props: NavLinkProps) -> Element {
    let section = props.section;
    let on_select = props.on_select;

    rsx! {
        li {
            a {
                class: if props.active { "nav-link active" } else { "nav-link" },
                href: section.href(),
                onclick: move |evt| {
                    evt.prevent_default();
                    on_select.call(section);
                },
                "{props.label}"
            }
        }
    }
}

#[derive(Clone, PartialEq, Props)]
struct NavLinksProps {
    active: Section,
    on_select: EventHandler<Section>,
}

#[component]
fn NavLinks(props: NavLinksProps) -> Element {
    let prefs = use_preferences();
    let t = strings(prefs.read().language());

    rsx! {
        ul { class: "nav-links",
            for section in SECTIONS {
                NavLink {
                    key: "{section}",
                    section,
                    label: t.nav.label(section).to_owned(),
                    active: props.active == section,
                    on_select: props.on_select,
                }
            }
        }
    }
}

// NavBar
//
// besides the links and toggles, this owns the scroll tracking for the page: a
// window listener feeds coalesced frames into a coroutine that measures the
// sections and updates the active section, scrolled flag and entrance reveals
#[component]
pub fn NavBar() -> Element {
    let mut prefs = use_preferences();
    let mut tracker = use_signal(|| ScrollTracker::new(&SECTIONS));
    let mut cool_down = use_signal(|| None::<Timeout>);

    let frames = use_coroutine(move |mut rx: UnboundedReceiver<Tick>| async move {
        while let Some(tick) = rx.next().await {
            if tick == Tick::CoolDown {
                tracker.write().resume();
            }

            let Some(viewport) = dom::viewport() else {
                continue;
            };
            let tops = dom::section_tops(tracker.peek().registry());

            let active = tracker.write().on_frame(&viewport, &tops, dom::now_ms());

            if prefs.peek().active_section() != active {
                prefs.write().set_active_section(active);
            }
            if prefs.peek().scrolled() != viewport.scrolled() {
                prefs.write().set_scrolled(viewport.scrolled());
            }

            reveal_sections(&viewport, &tops);
        }
    });

    // the listener lives as long as the navbar; dropping it detaches from the window
    use_hook(move || {
        let tx = frames.tx();
        let listener = dom::FrameListener::attach(move || {
            let _ = tx.unbounded_send(Tick::Frame);
        });

        // sections already on screen at load should not wait for a scroll
        frames.send(Tick::Frame);
        Rc::new(listener)
    });

    // click on a link: scroll there, show it as active right away, and keep the
    // tracker from second-guessing until the smooth scroll has had time to land
    let mut go_to = move |section: Section| {
        if !dom::scroll_to_section(section) {
            return;
        }

        {
            let mut prefs = prefs.write();
            prefs.set_menu_open(false);
            prefs.set_active_section(section);
        }
        tracker.write().suspend(section, dom::now_ms());

        let tx = frames.tx();
        cool_down.set(Some(Timeout::new(COOL_DOWN_MS as u32, move || {
            let _ = tx.unbounded_send(Tick::CoolDown);
        })));
    };

    let (active, theme, language, menu_open, scrolled) = {
        let p = prefs.read();
        (p.active_section(), p.theme(), p.language(), p.menu_open(), p.scrolled())
    };
    let t = strings(language);

    rsx! {
        nav { class: if scrolled { "navbar scrolled" } else { "navbar" },
            div { class: "nav-pill glass",
                a {
                    class: "nav-logo gradient-text",
                    href: Section::Home.href(),
                    onclick: move |evt| {
                        evt.prevent_default();
                        go_to(Section::Home);
                    },
                    "◆"
                }

                NavLinks { active, on_select: move |section| go_to(section) }

                div { class: "nav-actions",
                    button {
                        class: "icon-btn",
                        aria_label: t.nav.toggle_language,
                        onclick: move |_| {
                            prefs.write().toggle_language();
                        },
                        "{language.toggle_label()}"
                    }
                    button {
                        class: "icon-btn",
                        aria_label: t.nav.toggle_theme,
                        onclick: move |_| {
                            prefs.write().toggle_theme();
                        },
                        if theme == Theme::Dark {
                            "☀"
                        } else {
                            "☾"
                        }
                    }
                    button {
                        class: "icon-btn menu-toggle",
                        aria_label: t.nav.toggle_menu,
                        onclick: move |_| {
                            prefs.write().toggle_menu();
                        },
                        if menu_open {
                            "✕"
                        } else {
                            "☰"
                        }
                    }
                }
            }
        }

        if menu_open {
            div { class: "mobile-menu glass",
                NavLinks { active, on_select: move |section| go_to(section) }
            }
        }
    }
}
