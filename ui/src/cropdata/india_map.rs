use dioxus::logger::tracing;
use dioxus::prelude::*;

use super::CropDataError;
use crate::core::fetch::fetch_text;
use crate::core::platform::is_wide_viewport;
use crate::data::{parse_state_shares, StateShares, INDIA_GEOJSON, STATE_PRODUCTION_CSV};
use crate::map::{
    parse_feature_collection, tooltip_text, ChoroplethModel, FeatureCollection, RegionShape,
    HOVER_FILL, STROKE_WIDTH, STROKE_WIDTH_HOVER,
};
use crate::t;

/// Size assumed until the container reports its own.
const DEFAULT_SIZE: (f64, f64) = (800.0, 600.0);

#[derive(Debug, Clone, PartialEq)]
struct Hover {
    name: String,
    value: Option<f64>,
    x: f64,
    y: f64,
}

async fn load_map_data() -> Result<(FeatureCollection, StateShares), CropDataError> {
    let (geo, shares) = futures::join!(
        fetch_text(&INDIA_GEOJSON),
        fetch_text(&STATE_PRODUCTION_CSV)
    );
    let collection = parse_feature_collection(&geo?)?;
    let parsed = parse_state_shares(&shares?);
    tracing::info!(
        features = collection.features.len(),
        states = parsed.rows.len(),
        skipped = parsed.skipped,
        "map data loaded"
    );
    Ok((collection, parsed.into_shares()))
}

#[component]
pub fn IndiaMap() -> Element {
    let data = use_resource(load_map_data);
    let mut size = use_signal(|| DEFAULT_SIZE);
    let mut hover = use_signal(|| Option::<Hover>::None);

    // Rebuilt from the cached data whenever the container size changes.
    let model = use_memo(move || {
        let (width, height) = size();
        data.read()
            .as_ref()
            .and_then(|result| result.as_ref().ok())
            .map(|(collection, shares)| {
                ChoroplethModel::build(collection, shares, width, height, is_wide_viewport())
            })
    });

    let on_resize = move |evt: Event<ResizeData>| {
        if let Ok(box_size) = evt.get_content_box_size() {
            if box_size.width > 0.0 && box_size.height > 0.0 {
                size.set((box_size.width, box_size.height));
            }
        }
    };

    let error = data
        .read()
        .as_ref()
        .and_then(|result| result.as_ref().err().cloned());
    if let Some(err) = error {
        tracing::error!("map failed: {err}");
        return rsx! {
            section { class: "crop-data__card india-map",
                h2 { {t!("crop-data-map-title")} }
                div { class: "crop-data__error",
                    {t!("crop-data-map-error")}
                    br {}
                    "{err}"
                }
            }
        };
    }

    let hovered_name = hover().map(|h| h.name);
    let tooltip = hover().map(|h| {
        let (title, line) = tooltip_text(&h.name, h.value);
        (title, line, h.x, h.y)
    });

    let canvas = match model() {
        None => rsx! { p { class: "crop-data__loading", {t!("crop-data-loading")} } },
        Some(model) => rsx! {
            svg {
                width: "{model.width}",
                height: "{model.height}",
                view_box: "0 0 {model.width} {model.height}",
                onmouseleave: move |_| hover.set(None),
                for region in model.regions.into_iter() {
                    {render_region(region, hovered_name.as_deref(), hover)}
                }
            }
        },
    };

    rsx! {
        section { class: "crop-data__card india-map",
            h2 { {t!("crop-data-map-title")} }
            div { class: "india-map__canvas", onresize: on_resize,
                {canvas}
                if let Some((title, line, x, y)) = tooltip {
                    div {
                        class: "india-map__tooltip",
                        style: "position:fixed;left:{x + 10.0}px;top:{y - 28.0}px;",
                        strong { "{title}" }
                        br {}
                        "{line}"
                    }
                }
            }
        }
    }
}

fn render_region(
    region: RegionShape,
    hovered: Option<&str>,
    mut hover: Signal<Option<Hover>>,
) -> Element {
    let active = hovered == Some(region.name.as_str());
    let stroke_width = if active { STROKE_WIDTH_HOVER } else { STROKE_WIDTH };
    let RegionShape {
        name,
        path,
        value,
        fill,
    } = region;
    let fill = if active { HOVER_FILL.to_string() } else { fill };
    let hover_name = name.clone();

    rsx! {
        path {
            key: "{name}",
            d: "{path}",
            fill: "{fill}",
            stroke: "#fff",
            stroke_width: stroke_width,
            onmousemove: move |evt: MouseEvent| {
                let point = evt.client_coordinates();
                hover.set(Some(Hover {
                    name: hover_name.clone(),
                    value,
                    x: point.x,
                    y: point.y,
                }));
            },
        }
    }
}
