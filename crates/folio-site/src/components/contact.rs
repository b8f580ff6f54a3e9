//! Contact form.

use std::time::Duration;

use dioxus::prelude::*;
use folio_core::{ContactForm, Field, MailRelay, Motion, SubmitError};
use tracing::debug;

use crate::state::Services;

use super::use_entered;

#[component]
pub fn Contact() -> Element {
    let services = use_context::<Services>();
    let entered = use_entered();
    let mut form = use_signal(ContactForm::new);

    let onsubmit = move |evt: FormEvent| {
        evt.prevent_default();
        let draft = match form.write().begin_submit() {
            Ok(draft) => draft,
            Err(e) => {
                debug!(error = %e, "Submission refused");
                return;
            }
        };
        let relay = services.relay.clone();
        spawn(async move {
            let outcome = match relay {
                Ok(relay) => relay.send(&draft).await,
                Err(reason) => Err(SubmitError::NotConfigured(reason)),
            };
            form.write().finish(outcome);
        });
    };

    let sending = form.read().is_sending();
    let notice = form.read().notice();

    rsx! {
        section {
            id: "contact",
            class: "section contact",
            h2 {
                class: "section-title",
                style: Motion::title().style(entered()),
                "Get In Touch"
            }

            form {
                class: "contact-form card",
                style: Motion::panel().style(entered()),
                onsubmit: onsubmit,

                for (i, (field, kind, placeholder)) in FIELDS.into_iter().enumerate() {
                    div {
                        key: "{field}",
                        class: "form-row",
                        style: Motion::slide_in(i).style(entered()),
                        if kind == "textarea" {
                            textarea {
                                name: field.key(),
                                class: "form-input",
                                rows: "5",
                                required: true,
                                placeholder,
                                value: "{form.read().draft().get(field)}",
                                oninput: move |evt| form.write().update(field, evt.value()),
                            }
                        } else {
                            input {
                                r#type: kind,
                                name: field.key(),
                                class: "form-input",
                                required: true,
                                placeholder,
                                value: "{form.read().draft().get(field)}",
                                oninput: move |evt| form.write().update(field, evt.value()),
                            }
                        }
                    }
                }

                button {
                    r#type: "submit",
                    class: if sending { "primary-button sending pulse" } else { "primary-button" },
                    style: Motion::button(Duration::from_millis(500)).style(entered()),
                    disabled: sending,
                    if sending { "Sending..." } else { "Send Message" }
                }
            }

            if let Some(notice) = notice {
                div {
                    class: "notice",
                    role: "status",
                    span { "{notice.message()}" }
                    button {
                        class: "notice-dismiss",
                        onclick: move |_| form.write().dismiss_notice(),
                        "✕"
                    }
                }
            }
        }
    }
}

/// Field, input type and placeholder, in form order.
const FIELDS: [(Field, &str, &str); 3] = [
    (Field::Name, "text", "Name..."),
    (Field::Email, "email", "example@gmail.com"),
    (Field::Message, "textarea", "Your Message..."),
];
