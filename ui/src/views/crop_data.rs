use dioxus::prelude::*;

use super::use_language_marker;
use crate::cropdata::{CropsList, DistrictAnalysis, IndiaMap};
use crate::t;

#[component]
pub fn CropData() -> Element {
    let _lang = use_language_marker();

    rsx! {
        section { class: "page page-crop-data",
            h1 { {t!("crop-data-title")} }
            p { class: "page__lead", {t!("crop-data-intro")} }
            div { class: "crop-data__grid",
                IndiaMap {}
                CropsList {}
            }
            DistrictAnalysis {}
        }
    }
}
