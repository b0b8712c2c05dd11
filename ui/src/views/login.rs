use dioxus::logger::tracing;
use dioxus::prelude::*;

use crate::auth::{AuthError, AuthService, LoginForm};
use crate::core::timing::{sleep_ms, TRANSITION_MS};
use crate::t;

#[component]
pub fn Login() -> Element {
    let nav = navigator();
    let mut form = use_signal(LoginForm::default);
    let mut errors = use_signal(Vec::<String>::new);
    let mut busy = use_signal(|| false);
    let mut fading = use_signal(|| false);

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        if busy() {
            return;
        }
        busy.set(true);
        errors.set(Vec::new());
        let submitted = form();
        spawn(async move {
            let outcome = match api::connect() {
                Ok(store) => AuthService::new(store).login(&submitted).await,
                Err(err) => Err(AuthError::from(err)),
            };
            match outcome {
                Ok(_) => {
                    nav.push("/dashboard");
                }
                Err(err) => {
                    tracing::info!("login failed: {err}");
                    errors.set(err.messages());
                    busy.set(false);
                }
            }
        });
    };

    let to_signup = move |evt: MouseEvent| {
        evt.prevent_default();
        evt.stop_propagation();
        fading.set(true);
        spawn(async move {
            sleep_ms(TRANSITION_MS).await;
            nav.push("/signup");
        });
    };

    let current = form();
    let card_class = if fading() {
        "auth-card login-card fade-out"
    } else {
        "auth-card login-card"
    };

    rsx! {
        div { class: "overlay", onclick: move |_| { nav.push("/"); },
            div {
                class: "auth-container login-container",
                onclick: move |evt: MouseEvent| evt.stop_propagation(),
                div { class: card_class,
                    div { class: "auth-header login-header",
                        h1 { {t!("login-title")} }
                        p { {t!("login-subtitle")} }
                    }
                    form { id: "loginForm", onsubmit: on_submit,
                        div { class: "form-group",
                            label { r#for: "mobile", {t!("form-mobile")} }
                            input {
                                id: "mobile",
                                r#type: "tel",
                                inputmode: "numeric",
                                placeholder: "9876543210",
                                disabled: busy(),
                                value: "{current.mobile}",
                                oninput: move |evt: FormEvent| form.with_mut(|f| f.mobile = evt.value()),
                            }
                        }
                        div { class: "form-group",
                            label { r#for: "password", {t!("form-password")} }
                            input {
                                id: "password",
                                r#type: "password",
                                disabled: busy(),
                                value: "{current.password}",
                                oninput: move |evt: FormEvent| form.with_mut(|f| f.password = evt.value()),
                            }
                        }
                        if !errors().is_empty() {
                            div { id: "errorDisplay", class: "form-error",
                                for message in errors().into_iter() {
                                    p { "{message}" }
                                }
                            }
                        }
                        button { r#type: "submit", class: "btn btn--primary", disabled: busy(),
                            if busy() {
                                {t!("login-busy")}
                            } else {
                                {t!("login-submit")}
                            }
                        }
                    }
                    p { class: "auth-switch",
                        {t!("login-no-account")}
                        " "
                        a { class: "page-transition", href: "/signup", onclick: to_signup,
                            {t!("login-signup-link")}
                        }
                    }
                }
            }
        }
    }
}
