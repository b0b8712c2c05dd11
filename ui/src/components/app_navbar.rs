use crate::core::session;
use crate::core::theme::ThemePreference;
use crate::i18n;
use crate::t;
use dioxus::logger::tracing;
use dioxus::prelude::*;
use once_cell::sync::OnceCell;

const NAVBAR_CSS: Asset = asset!("/assets/styling/navbar.css");

/// Platform-supplied links.
///
/// `ui` has no access to the platform's `Route` enum, so the platform crate
/// registers one constructor per destination. Each receives the localized
/// label and returns a `Link` containing exactly that label:
///
/// ```ignore
/// use ui::components::{register_nav, NavBuilder};
/// fn install_nav() {
///     register_nav(NavBuilder {
///         home: |label| rsx!( Link { class: "navbar__link", to: Route::Home {}, "{label}" } ),
///         // ...
///     });
/// }
/// ```
///
/// Without a registered builder the navbar renders whatever `children` it is given.
pub struct NavBuilder {
    pub home: fn(label: &str) -> Element,
    pub about: fn(label: &str) -> Element,
    pub learn_more: fn(label: &str) -> Element,
    pub crop_data: fn(label: &str) -> Element,
    pub contact: fn(label: &str) -> Element,
    pub login: fn(label: &str) -> Element,
    pub dashboard: fn(label: &str) -> Element,
}

static NAV_BUILDER: OnceCell<NavBuilder> = OnceCell::new();

pub fn register_nav(builder: NavBuilder) {
    let _ = NAV_BUILDER.set(builder);
}

#[component]
pub fn AppNavbar(mut theme: Signal<ThemePreference>, children: Element) -> Element {
    i18n::init();

    let mut menu_open = use_signal(|| false);
    let mut current_lang = use_signal(|| "en-US".to_string());
    let langs = use_signal(i18n::available_languages);
    let show_switcher = langs().len() > 1;
    // Re-render when the platform's global language code changes.
    let lang_code_ctx: Option<Signal<String>> = try_use_context::<Signal<String>>();
    let _lang_marker = lang_code_ctx.as_ref().map(|c| c()).unwrap_or_default();

    let on_change = move |evt: FormEvent| {
        let val = evt.value();
        match i18n::set_language(&val) {
            Ok(()) => {
                current_lang.set(val.clone());
                if let Some(mut code) = lang_code_ctx {
                    code.set(val);
                }
            }
            Err(err) => tracing::warn!("language switch to {val} failed: {err}"),
        }
    };

    let logged_in = session::load().is_some();
    let internal_nav: Option<Element> = NAV_BUILDER.get().map(|b| {
        let account = if logged_in {
            (b.dashboard)(&t!("nav-dashboard"))
        } else {
            (b.login)(&t!("nav-login"))
        };
        rsx! {
            {(b.home)(&t!("nav-home"))}
            {(b.about)(&t!("nav-about"))}
            {(b.learn_more)(&t!("nav-learn-more"))}
            {(b.crop_data)(&t!("nav-crop-data"))}
            {(b.contact)(&t!("nav-contact"))}
            {account}
        }
    });

    let pref = theme();
    let links_class = if menu_open() {
        "navbar__links nav-links active"
    } else {
        "navbar__links nav-links"
    };
    let hamburger_class = if menu_open() {
        "hamburger-menu active"
    } else {
        "hamburger-menu"
    };

    rsx! {
        document::Link { rel: "stylesheet", href: NAVBAR_CSS }

        if menu_open() {
            div {
                class: "navbar__backdrop",
                onclick: move |_| menu_open.set(false),
            }
        }

        header {
            id: "navbar",
            class: "navbar",
            div { style: "display:none", "{_lang_marker}" }
            div { class: "navbar__inner",
                div { class: "navbar__brand",
                    span { class: "navbar__brand-link",
                        span { class: "navbar__brand-spark", aria_hidden: "true" }
                        span { class: "navbar__brand-mark", "Agridata" }
                    }
                    span { class: "navbar__brand-subtitle", {t!("tagline")} }
                }

                button {
                    r#type: "button",
                    class: hamburger_class,
                    aria_label: t!("nav-menu-label"),
                    aria_expanded: "{menu_open()}",
                    onclick: move |_| menu_open.toggle(),
                    span {}
                    span {}
                    span {}
                }

                // Clicks on any link bubble up here and close the menu.
                nav {
                    class: links_class,
                    onclick: move |_| menu_open.set(false),
                    if let Some(nav) = internal_nav {
                        {nav}
                    } else {
                        {children}
                    }
                }

                button {
                    r#type: "button",
                    class: "dark-mode-toggle",
                    aria_label: t!("nav-dark-mode-label"),
                    onclick: move |_| {
                        let next = theme().toggled();
                        theme.set(next);
                    },
                    "{pref.toggle_icon()}"
                }

                if show_switcher {
                    div { class: "navbar__locale",
                        label {
                            class: "visually-hidden",
                            r#for: "locale-select",
                            {t!("nav-language-label")}
                        }
                        select {
                            id: "locale-select",
                            value: "{current_lang()}",
                            oninput: on_change,
                            for code in langs().into_iter() {
                                option { key: "{code}", value: "{code}", "{code}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
