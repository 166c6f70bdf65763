use std::collections::HashSet;

use dioxus::prelude::*;

use common::{animation::stagger_delay, section::Section};

// sections whose entrance has fired; filled in by the navigation frame loop and
// never emptied, so a section animates in exactly once
pub static REVEALED: GlobalSignal<HashSet<Section>> = Signal::global(|| HashSet::new());

#[derive(Clone, PartialEq, Props)]
pub struct RevealProps {
    section: Section,
    index: usize,
    #[props(default = 0.1)]
    step: f64,
    #[props(default)]
    from_side: bool,
    children: Element,
}

// wrapper for one staggered child of a section
#[component]
pub fn Reveal(props: RevealProps) -> Element {
    let shown = REVEALED.read().contains(&props.section);
    let delay = stagger_delay(props.index, props.step);

    let class = match (shown, props.from_side) {
        (true, _) => "reveal revealed",
        (false, true) => "reveal from-side",
        (false, false) => "reveal",
    };

    rsx! {
        div { class, style: "transition-delay: {delay}s;", {props.children} }
    }
}
