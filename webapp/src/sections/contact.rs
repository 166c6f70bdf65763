use dioxus::prelude::*;

use super::SectionHeader;
use crate::{
    components::{
        reveal::Reveal,
        toast::{notify, ToastKind},
    },
    web::{dom, use_preferences, use_site_config},
};
use api::relay::EmailJsRelay;
use common::{
    contact::{submit, ContactError, ContactForm, Field},
    i18n::{strings, ContactStrings},
    section::Section,
};

const SECTION: Section = Section::Contact;

fn alert_for(t: &ContactStrings, result: &Result<(), ContactError>) -> (ToastKind, &'static str) {
    match result {
        Ok(()) => (ToastKind::Success, t.alert_success),
        Err(ContactError::MissingField(_)) => (ToastKind::Error, t.alert_missing),
        Err(ContactError::Configuration) => (ToastKind::Error, t.alert_config),
        Err(ContactError::Submission(_)) => (ToastKind::Error, t.alert_failure),
    }
}

#[derive(Clone, PartialEq, Props)]
struct FormFieldProps {
    field: Field,
    label: &'static str,
    placeholder: &'static str,
    value: String,
    on_change: EventHandler<(Field, String)>,
}

#[component]
fn FormField(props: FormFieldProps) -> Element {
    let field = props.field;
    let on_change = props.on_change;
    let id = format!("contact-{field}");

    rsx! {
        div { class: "form-group",
            label { class: "form-label", r#for: "{id}", "{props.label}" }
            if field == Field::Message {
                textarea {
                    id: "{id}",
                    class: "form-input",
                    rows: 5,
                    required: true,
                    placeholder: props.placeholder,
                    value: "{props.value}",
                    oninput: move |evt| on_change.call((field, evt.value())),
                }
            } else {
                input {
                    id: "{id}",
                    class: "form-input",
                    r#type: if field == Field::Email { "email" } else { "text" },
                    required: true,
                    placeholder: props.placeholder,
                    value: "{props.value}",
                    oninput: move |evt| on_change.call((field, evt.value())),
                }
            }
        }
    }
}

// contact
//
// the form is relayed straight from the browser; the outcome of every attempt is
// reported with a toast, and the fields survive anything short of success
#[component]
pub fn Contact() -> Element {
    let prefs = use_preferences();
    let config = use_site_config();
    let mut form = use_signal(ContactForm::default);
    let mut sending = use_signal(|| false);

    let t = strings(prefs.read().language());
    let links = config.links.clone();

    let relay_config = config.relay;
    let submit_form = move |evt: FormEvent| {
        evt.prevent_default();
        if *sending.peek() {
            return;
        }

        let relay_config = relay_config.clone();
        spawn(async move {
            sending.set(true);

            let mut draft = form();
            let relay = EmailJsRelay::new(relay_config.endpoint.as_str());
            let result = submit(&mut draft, &relay_config, &relay).await;

            sending.set(false);
            if result.is_ok() {
                form.set(draft);
            }

            let (kind, message) = alert_for(&strings(prefs.peek().language()).contact, &result);
            notify(kind, message);
        });
    };

    let on_change = move |(field, value): (Field, String)| form.write().set(field, value);
    let busy = sending();
    let (name, email, message) = {
        let form = form.read();
        (form.name.clone(), form.email.clone(), form.message.clone())
    };

    rsx! {
        section { id: SECTION.id(), class: "page-section",
            div { class: "glow", style: "width: 500px; height: 500px; bottom: 0; left: -15%;" }

            div { class: "container",
                Reveal { section: SECTION, index: 0,
                    SectionHeader { title: t.contact.title, description: t.contact.description }
                }

                div { class: "contact-grid",
                    Reveal { section: SECTION, index: 1, from_side: true,
                        div { class: "contact-links",
                            if let Some(href) = links.email.clone() {
                                ContactLink { label: t.contact.email, href }
                            }
                            if let Some(href) = links.linkedin.clone() {
                                ContactLink { label: t.contact.linkedin, href }
                            }
                            if let Some(href) = links.github.clone() {
                                ContactLink { label: t.contact.github, href }
                            }
                        }
                    }

                    Reveal { section: SECTION, index: 2,
                        form { class: "glass", onsubmit: submit_form,
                            FormField {
                                field: Field::Name,
                                label: t.contact.name_label,
                                placeholder: t.contact.name_placeholder,
                                value: name,
                                on_change,
                            }
                            FormField {
                                field: Field::Email,
                                label: t.contact.email_label,
                                placeholder: t.contact.email_placeholder,
                                value: email,
                                on_change,
                            }
                            FormField {
                                field: Field::Message,
                                label: t.contact.message_label,
                                placeholder: t.contact.message_placeholder,
                                value: message,
                                on_change,
                            }
                            button {
                                class: "btn btn-solid",
                                r#type: "submit",
                                disabled: busy,
                                if busy {
                                    "{t.contact.sending}"
                                } else {
                                    "{t.contact.send}"
                                }
                            }
                        }
                    }
                }

                div { style: "display: flex; justify-content: center;",
                    button {
                        class: "icon-btn back-to-top",
                        aria_label: t.contact.back_to_top,
                        onclick: move |_| dom::smooth_scroll_to(0.0),
                        "↑"
                    }
                }
            }
        }
    }
}

#[derive(Clone, PartialEq, Props)]
struct ContactLinkProps {
    label: &'static str,
    href: String,
}

#[component]
fn ContactLink(props: ContactLinkProps) -> Element {
    // mailto links should not open a blank tab
    let external = !props.href.starts_with("mailto:");
    let value = props.href.trim_start_matches("mailto:").to_owned();

    rsx! {
        a {
            class: "contact-link glass",
            href: "{props.href}",
            target: if external { "_blank" } else { "_self" },
            rel: "noopener noreferrer",
            span { class: "contact-link-label", "{props.label}" }
            span { class: "contact-link-value", "{value}" }
        }
    }
}

#[cfg(test)]
mod tests {
    use common::preferences::Language;

    use super::*;

    #[test]
    fn every_outcome_has_its_own_alert() {
        let t = &strings(Language::En).contact;

        assert_eq!(alert_for(t, &Ok(())), (ToastKind::Success, t.alert_success));
        assert_eq!(
            alert_for(t, &Err(ContactError::MissingField(Field::Email))),
            (ToastKind::Error, t.alert_missing)
        );
        assert_eq!(
            alert_for(t, &Err(ContactError::Configuration)),
            (ToastKind::Error, t.alert_config)
        );
        assert_eq!(
            alert_for(t, &Err(ContactError::Submission("timeout".into()))),
            (ToastKind::Error, t.alert_failure)
        );
    }
}
