use std::sync::atomic::{AtomicU64, Ordering};

use dioxus::prelude::*;
use gloo_timers::callback::Timeout;

// how long a notification stays up, in milliseconds
const TOAST_LIFETIME: u32 = 4000;

static NEXT_TOAST: AtomicU64 = AtomicU64::new(0);

pub static TOASTS: GlobalSignal<Vec<Toast>> = Signal::global(|| Vec::new());

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ToastKind {
    Success,
    Error,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    id: u64,
    kind: ToastKind,
    message: String,
}

fn dismiss(id: u64) {
    TOASTS.with_mut(|v| v.retain(|t| t.id != id));
}

// show a transient notification
//
// toasts never block the page; each one removes itself after TOAST_LIFETIME or
// when clicked, whichever comes first
pub fn notify(kind: ToastKind, message: impl Into<String>) {
    let id = NEXT_TOAST.fetch_add(1, Ordering::Relaxed);

    TOASTS.with_mut(|v| {
        v.push(Toast {
            id,
            kind,
            message: message.into(),
        })
    });

    Timeout::new(TOAST_LIFETIME, move || dismiss(id)).forget();
}

#[component]
pub fn Toaster() -> Element {
    rsx! {
        div { class: "toaster", role: "status",
            for toast in TOASTS.read().iter() {
                div {
                    key: "{toast.id}",
                    class: match toast.kind {
                        ToastKind::Success => "toast",
                        ToastKind::Error => "toast error",
                    },
                    onclick: {
                        let id = toast.id;
                        move |_| dismiss(id)
                    },
                    "{toast.message}"
                }
            }
        }
    }
}
