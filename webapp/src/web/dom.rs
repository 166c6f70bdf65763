use std::{
    cell::{Cell, RefCell},
    rc::Rc,
};

use tracing::debug;
use wasm_bindgen::{closure::Closure, JsCast};
use web_sys::{ScrollBehavior, ScrollToOptions, Window};

use common::{
    preferences::{Language, Theme},
    section::Section,
    tracker::{scroll_target, FrameGate, Viewport},
};

// browser glue
//
// thin wrappers over web-sys for the handful of things the page needs from the
// document.  lookups that fail (no window, element not rendered yet) come back as
// None and the caller skips whatever it was going to do

pub fn viewport() -> Option<Viewport> {
    let window = web_sys::window()?;

    Some(Viewport {
        scroll_y: window.scroll_y().ok()?,
        height: window.inner_height().ok()?.as_f64()?,
        document_height: window.document()?.body()?.offset_height() as f64,
    })
}

// viewport-relative top edge of the element with this id
pub fn element_top(id: &str) -> Option<f64> {
    let element = web_sys::window()?.document()?.get_element_by_id(id)?;

    Some(element.get_bounding_client_rect().top())
}

pub fn section_tops(registry: &[Section]) -> Vec<Option<f64>> {
    registry.iter().map(|s| element_top(s.id())).collect()
}

// milliseconds on the page's monotonic clock
pub fn now_ms() -> f64 {
    web_sys::window()
        .and_then(|w| w.performance())
        .map(|p| p.now())
        .unwrap_or_default()
}

pub fn smooth_scroll_to(top: f64) {
    if let Some(window) = web_sys::window() {
        let options = ScrollToOptions::new();
        options.set_top(top);
        options.set_behavior(ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);
    }
}

// start a smooth scroll that leaves the section just below the navbar
//
// returns false without scrolling if the section is not in the document
pub fn scroll_to_section(section: Section) -> bool {
    let (Some(top), Some(viewport)) = (element_top(section.id()), viewport()) else {
        debug!("no element for section {section}");
        return false;
    };

    smooth_scroll_to(scroll_target(top, viewport.scroll_y));
    true
}

// reflect the preferences on the document root: data-theme, lang and dir
pub fn apply_preferences(theme: Theme, language: Language) {
    let Some(root) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    else {
        return;
    };

    let _ = root.set_attribute("data-theme", theme.as_str());
    let _ = root.set_attribute("lang", language.code());
    let _ = root.set_attribute("dir", language.dir());
}

const FRAME_EVENTS: [&str; 2] = ["scroll", "resize"];

// FrameListener
//
// listens for scroll and resize on the window and calls on_frame at most once per
// animation frame, no matter how many events arrived in between.  dropping the
// listener detaches it and cancels a frame that is still queued
pub struct FrameListener {
    window: Window,
    on_event: Closure<dyn FnMut()>,
    frame_id: Rc<Cell<Option<i32>>>,
    _on_frame: Rc<Closure<dyn FnMut()>>,
}

impl FrameListener {
    pub fn attach(mut on_frame: impl FnMut() + 'static) -> Option<Self> {
        let window = web_sys::window()?;
        let gate = Rc::new(RefCell::new(FrameGate::default()));
        let frame_id = Rc::new(Cell::new(None));

        let frame = Rc::new(Closure::<dyn FnMut()>::new({
            let gate = gate.clone();
            let frame_id = frame_id.clone();
            move || {
                frame_id.set(None);
                gate.borrow_mut().complete();
                on_frame();
            }
        }));

        let on_event = Closure::<dyn FnMut()>::new({
            let window = window.clone();
            let frame = frame.clone();
            let frame_id = frame_id.clone();
            move || {
                if !gate.borrow_mut().request() {
                    return;
                }

                let callback: &Closure<dyn FnMut()> = &frame;
                match window.request_animation_frame(callback.as_ref().unchecked_ref()) {
                    Ok(id) => frame_id.set(Some(id)),
                    Err(_) => gate.borrow_mut().complete(),
                }
            }
        });

        for event in FRAME_EVENTS {
            let _ = window.add_event_listener_with_callback(event, on_event.as_ref().unchecked_ref());
        }

        Some(FrameListener {
            window,
            on_event,
            frame_id,
            _on_frame: frame,
        })
    }
}

impl Drop for FrameListener {
    fn drop(&mut self) {
        for event in FRAME_EVENTS {
            let _ = self
                .window
                .remove_event_listener_with_callback(event, self.on_event.as_ref().unchecked_ref());
        }

        if let Some(id) = self.frame_id.take() {
            let _ = self.window.cancel_animation_frame(id);
        }
    }
}
