use dioxus::prelude::*;

use super::use_language_marker;
use crate::t;

#[component]
pub fn LearnMore() -> Element {
    let _lang = use_language_marker();

    rsx! {
        section { class: "page page-learn-more",
            h1 { {t!("learn-more-title")} }
            p { class: "page__lead", {t!("learn-more-intro")} }
            ol { class: "steps",
                li {
                    h3 { {t!("learn-more-step-data-title")} }
                    p { {t!("learn-more-step-data")} }
                }
                li {
                    h3 { {t!("learn-more-step-map-title")} }
                    p { {t!("learn-more-step-map")} }
                }
                li {
                    h3 { {t!("learn-more-step-charts-title")} }
                    p { {t!("learn-more-step-charts")} }
                }
                li {
                    h3 { {t!("learn-more-step-account-title")} }
                    p { {t!("learn-more-step-account")} }
                }
            }
            h2 { {t!("learn-more-seasons-title")} }
            p { {t!("learn-more-seasons")} }
            p { class: "page__cta",
                Link { class: "btn btn--primary", to: "/crop-data", {t!("home-cta-explore")} }
            }
        }
    }
}
