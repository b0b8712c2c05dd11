use dioxus::prelude::*;

use super::use_language_marker;
use crate::t;

#[component]
pub fn Home() -> Element {
    let _lang = use_language_marker();

    rsx! {
        section { class: "page page-home",
            div { class: "hero",
                h1 { {t!("home-title")} }
                p { class: "hero__tagline", {t!("home-tagline")} }
                div { class: "hero__actions",
                    Link { class: "btn btn--primary", to: "/crop-data", {t!("home-cta-explore")} }
                    Link { class: "btn btn--ghost", to: "/signup", {t!("home-cta-join")} }
                }
            }

            ul { class: "page-home__features",
                li {
                    h3 { {t!("home-feature-map-title")} }
                    p { {t!("home-feature-map")} }
                }
                li {
                    h3 { {t!("home-feature-districts-title")} }
                    p { {t!("home-feature-districts")} }
                }
                li {
                    h3 { {t!("home-feature-account-title")} }
                    p { {t!("home-feature-account")} }
                }
            }
            p { class: "page-home__cta",
                Link { to: "/learn-more", {t!("home-cta-learn")} }
            }
        }
    }
}
