use dioxus::logger::tracing;
use dioxus::prelude::*;

use crate::core::fetch::fetch_text;
use crate::data::{parse_crop_names, CROPS_CSV};
use crate::t;

#[component]
pub fn CropsList() -> Element {
    let crops = use_resource(|| async move {
        let text = fetch_text(&CROPS_CSV).await?;
        let names = parse_crop_names(&text);
        tracing::info!(crops = names.len(), "crop list loaded");
        Ok::<_, crate::core::fetch::FetchError>(names)
    });

    let body = match &*crops.read() {
        None => rsx! { li { class: "crops-items__loading", {t!("crop-data-loading")} } },
        Some(Err(err)) => {
            tracing::error!("crop list failed: {err}");
            rsx! { li { class: "crop-data__error", {t!("crop-data-crops-error")} } }
        }
        Some(Ok(names)) => rsx! {
            for name in names.iter() {
                li { key: "{name}", "{name}" }
            }
        },
    };

    rsx! {
        section { class: "crop-data__card crops-list",
            h2 { {t!("crop-data-crops-title")} }
            ul { class: "crops-items", {body} }
        }
    }
}
