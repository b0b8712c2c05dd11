use dioxus::prelude::*;

use super::use_language_marker;
use crate::t;

#[component]
pub fn About() -> Element {
    let _lang = use_language_marker();

    rsx! {
        section { class: "page page-about",
            h1 { {t!("about-title")} }
            p { class: "page__lead", {t!("about-mission")} }

            h2 { {t!("about-features-title")} }
            div { class: "card-grid",
                div { class: "feature-card",
                    h3 { {t!("about-feature-data-title")} }
                    p { {t!("about-feature-data")} }
                }
                div { class: "feature-card",
                    h3 { {t!("about-feature-visual-title")} }
                    p { {t!("about-feature-visual")} }
                }
                div { class: "feature-card",
                    h3 { {t!("about-feature-access-title")} }
                    p { {t!("about-feature-access")} }
                }
            }

            h2 { {t!("about-team-title")} }
            div { class: "card-grid",
                div { class: "team-card",
                    h3 { {t!("about-team-data")} }
                    p { {t!("about-team-data-body")} }
                }
                div { class: "team-card",
                    h3 { {t!("about-team-field")} }
                    p { {t!("about-team-field-body")} }
                }
            }

            h2 { {t!("about-impact-title")} }
            div { class: "card-grid",
                div { class: "impact-card",
                    strong { "36" }
                    span { {t!("about-impact-states")} }
                }
                div { class: "impact-card",
                    strong { "600+" }
                    span { {t!("about-impact-districts")} }
                }
                div { class: "impact-card",
                    strong { "5" }
                    span { {t!("about-impact-seasons")} }
                }
            }
        }
    }
}
