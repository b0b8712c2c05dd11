use dioxus::logger::tracing;
use dioxus::prelude::*;

use super::use_language_marker;
use crate::core::timing::{sleep_ms, FLASH_MS};
use crate::t;

#[derive(Debug, Clone, Default, PartialEq)]
struct ContactForm {
    name: String,
    email: String,
    subject: String,
    message: String,
}

#[component]
pub fn Contact() -> Element {
    let _lang = use_language_marker();

    let mut form = use_signal(ContactForm::default);
    let mut show_success = use_signal(|| false);
    // Bumped per submit so an older timer can't hide a newer confirmation.
    let mut flash_id = use_signal(|| 0u32);

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        tracing::info!("contact form submitted");
        form.set(ContactForm::default());
        show_success.set(true);
        let id = flash_id() + 1;
        flash_id.set(id);
        spawn(async move {
            sleep_ms(FLASH_MS).await;
            if flash_id() == id {
                show_success.set(false);
            }
        });
    };

    let current = form();

    rsx! {
        section { class: "page page-contact",
            h1 { {t!("contact-title")} }
            p { class: "page__lead", {t!("contact-intro")} }

            form { id: "contactForm", class: "contact-form", onsubmit: on_submit,
                label {
                    span { {t!("contact-name")} }
                    input {
                        r#type: "text",
                        required: true,
                        value: "{current.name}",
                        oninput: move |evt: FormEvent| form.with_mut(|f| f.name = evt.value()),
                    }
                }
                label {
                    span { {t!("contact-email")} }
                    input {
                        r#type: "email",
                        required: true,
                        value: "{current.email}",
                        oninput: move |evt: FormEvent| form.with_mut(|f| f.email = evt.value()),
                    }
                }
                label {
                    span { {t!("contact-subject")} }
                    input {
                        r#type: "text",
                        value: "{current.subject}",
                        oninput: move |evt: FormEvent| form.with_mut(|f| f.subject = evt.value()),
                    }
                }
                label {
                    span { {t!("contact-message")} }
                    textarea {
                        required: true,
                        rows: "5",
                        value: "{current.message}",
                        oninput: move |evt: FormEvent| form.with_mut(|f| f.message = evt.value()),
                    }
                }
                button { r#type: "submit", class: "btn btn--primary", {t!("contact-send")} }
            }

            if show_success() {
                div { id: "successMessage", class: "contact-success", role: "status",
                    {t!("contact-success")}
                }
            }
        }
    }
}
