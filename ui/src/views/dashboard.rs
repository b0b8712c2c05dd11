use dioxus::logger::tracing;
use dioxus::prelude::*;

use super::use_language_marker;
use crate::core::session::{self, Session};
use crate::t;

#[component]
pub fn Dashboard() -> Element {
    let _lang = use_language_marker();
    let nav = navigator();
    let mut current = use_signal(session::load);
    let mut error = use_signal(|| Option::<String>::None);

    let on_logout = move |_| match session::clear() {
        Ok(()) => {
            tracing::info!("logged out");
            current.set(None);
            nav.push("/login");
        }
        Err(err) => error.set(Some(err.to_string())),
    };

    let body = match current() {
        Some(user) => render_profile(&user),
        None => rsx! {
            div { class: "dashboard__prompt",
                p { {t!("dashboard-logged-out")} }
                Link { class: "btn btn--primary", to: "/login", {t!("nav-login")} }
            }
        },
    };

    rsx! {
        section { class: "page page-dashboard",
            h1 { {t!("dashboard-title")} }
            {body}
            if current().is_some() {
                button { r#type: "button", class: "btn btn--ghost", onclick: on_logout,
                    {t!("dashboard-logout")}
                }
            }
            if let Some(message) = error() {
                p { class: "form-error", "{message}" }
            }
        }
    }
}

fn render_profile(user: &Session) -> Element {
    let name = user.display_name();
    let mobile = user.display_mobile();
    let location = user.location();
    let since = user.login_time.clone();

    rsx! {
        div { class: "dashboard__card",
            h2 { {t!("dashboard-welcome", name = name.clone())} }
            dl { class: "dashboard__details",
                dt { {t!("dashboard-mobile")} }
                dd { "{mobile}" }
                dt { {t!("dashboard-location")} }
                dd { "{location}" }
                dt { {t!("dashboard-login-time")} }
                dd { "{since}" }
            }
            div { class: "dashboard__actions",
                Link { class: "btn btn--primary", to: "/crop-data", {t!("home-cta-explore")} }
            }
        }
    }
}
