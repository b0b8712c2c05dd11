use dioxus::logger::tracing;
use dioxus::prelude::*;

use crate::auth::{AuthError, AuthService, SignupForm};
use crate::core::timing::{sleep_ms, TRANSITION_MS};
use crate::cropdata::load_production_records;
use crate::data::RegionDirectory;
use crate::t;

#[component]
pub fn Signup() -> Element {
    let nav = navigator();
    let mut form = use_signal(SignupForm::default);
    let mut errors = use_signal(Vec::<String>::new);
    let mut busy = use_signal(|| false);
    let mut created = use_signal(|| false);
    let mut fading = use_signal(|| false);

    let regions = use_resource(|| async move {
        load_production_records()
            .await
            .map(|records| RegionDirectory::from_records(&records))
    });

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        if busy() {
            return;
        }
        let submitted = form();
        let problems = submitted.errors();
        if !problems.is_empty() {
            errors.set(problems);
            return;
        }
        busy.set(true);
        errors.set(Vec::new());
        spawn(async move {
            let outcome = match api::connect() {
                Ok(store) => AuthService::new(store).signup(&submitted).await,
                Err(err) => Err(AuthError::from(err)),
            };
            match outcome {
                Ok(()) => {
                    created.set(true);
                    sleep_ms(TRANSITION_MS).await;
                    nav.push("/login");
                }
                Err(err) => {
                    tracing::info!("signup failed: {err}");
                    errors.set(err.messages());
                    busy.set(false);
                }
            }
        });
    };

    let to_login = move |evt: MouseEvent| {
        evt.prevent_default();
        evt.stop_propagation();
        fading.set(true);
        spawn(async move {
            sleep_ms(TRANSITION_MS).await;
            nav.push("/login");
        });
    };

    let current = form();
    let (state_options, district_options, region_error) = match &*regions.read() {
        Some(Ok(directory)) => (
            directory.states().map(str::to_string).collect::<Vec<_>>(),
            directory.districts(&current.state),
            None,
        ),
        Some(Err(err)) => (Vec::new(), Vec::new(), Some(err.to_string())),
        None => (Vec::new(), Vec::new(), None),
    };
    let card_class = if fading() {
        "auth-card signup-card fade-out"
    } else {
        "auth-card signup-card"
    };

    rsx! {
        div { class: "overlay", onclick: move |_| { nav.push("/"); },
            div {
                class: "auth-container signup-container",
                onclick: move |evt: MouseEvent| evt.stop_propagation(),
                div { class: card_class,
                    div { class: "auth-header signup-header",
                        h1 { {t!("signup-title")} }
                        p { {t!("signup-subtitle")} }
                    }
                    form { id: "signupForm", onsubmit: on_submit,
                        div { class: "form-row",
                            div { class: "form-group",
                                label { r#for: "firstName", {t!("form-first-name")} }
                                input {
                                    id: "firstName",
                                    disabled: busy(),
                                    value: "{current.first_name}",
                                    oninput: move |evt: FormEvent| form.with_mut(|f| f.first_name = evt.value()),
                                }
                            }
                            div { class: "form-group",
                                label { r#for: "lastName", {t!("form-last-name")} }
                                input {
                                    id: "lastName",
                                    disabled: busy(),
                                    value: "{current.last_name}",
                                    oninput: move |evt: FormEvent| form.with_mut(|f| f.last_name = evt.value()),
                                }
                            }
                        }
                        div { class: "form-group",
                            label { r#for: "mobile", {t!("form-mobile")} }
                            input {
                                id: "mobile",
                                r#type: "tel",
                                inputmode: "numeric",
                                disabled: busy(),
                                value: "{current.mobile}",
                                oninput: move |evt: FormEvent| form.with_mut(|f| f.mobile = evt.value()),
                            }
                        }
                        div { class: "form-row",
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
                            div { class: "form-group",
                                label { r#for: "confirmPassword", {t!("form-confirm-password")} }
                                input {
                                    id: "confirmPassword",
                                    r#type: "password",
                                    disabled: busy(),
                                    value: "{current.confirm_password}",
                                    oninput: move |evt: FormEvent| form.with_mut(|f| f.confirm_password = evt.value()),
                                }
                            }
                        }
                        div { class: "form-row",
                            div { class: "form-group",
                                label { r#for: "state", {t!("form-state")} }
                                select {
                                    id: "state",
                                    disabled: busy(),
                                    value: "{current.state}",
                                    onchange: move |evt: FormEvent| form.with_mut(|f| {
                                        f.state = evt.value();
                                        f.district.clear();
                                    }),
                                    option { value: "", {t!("form-state-placeholder")} }
                                    for state in state_options.into_iter() {
                                        option { key: "{state}", value: "{state}", "{state}" }
                                    }
                                }
                            }
                            div { class: "form-group",
                                label { r#for: "district", {t!("form-district")} }
                                select {
                                    id: "district",
                                    disabled: busy() || current.state.is_empty(),
                                    value: "{current.district}",
                                    onchange: move |evt: FormEvent| form.with_mut(|f| f.district = evt.value()),
                                    option { value: "", {t!("form-district-placeholder")} }
                                    for district in district_options.into_iter() {
                                        option { key: "{district}", value: "{district}", "{district}" }
                                    }
                                }
                            }
                        }
                        if let Some(message) = region_error {
                            p { class: "form-error", "{message}" }
                        }
                        if !errors().is_empty() {
                            div { id: "errorDisplay", class: "form-error",
                                for message in errors().into_iter() {
                                    p { "{message}" }
                                }
                            }
                        }
                        if created() {
                            p { class: "form-success", {t!("signup-created")} }
                        }
                        button { r#type: "submit", class: "btn btn--primary", disabled: busy(),
                            if busy() {
                                {t!("signup-busy")}
                            } else {
                                {t!("signup-submit")}
                            }
                        }
                    }
                    p { class: "auth-switch",
                        {t!("signup-have-account")}
                        " "
                        a { class: "page-transition", href: "/login", onclick: to_login,
                            {t!("signup-login-link")}
                        }
                    }
                }
            }
        }
    }
}
