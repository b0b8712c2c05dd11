use dioxus::logger::tracing;
use dioxus::prelude::*;

use super::ChartView;
use crate::core::fetch::{fetch_text, FetchError};
use crate::data::{
    build_chart, parse_production_records, states, ChartKind, ChartQuery, ProductionRecord,
    SeasonFilter, DISTRICT_PRODUCTION_CSV,
};
use crate::t;

pub(crate) async fn load_production_records() -> Result<Vec<ProductionRecord>, FetchError> {
    let text = fetch_text(&DISTRICT_PRODUCTION_CSV).await?;
    let parsed = parse_production_records(&text);
    tracing::info!(
        rows = parsed.rows.len(),
        skipped = parsed.skipped,
        "district production loaded"
    );
    Ok(parsed.rows)
}

fn season_text(season: SeasonFilter) -> String {
    match season {
        SeasonFilter::WholeYear => t!("season-whole-year"),
        SeasonFilter::Kharif => t!("season-kharif"),
        SeasonFilter::Rabi => t!("season-rabi"),
        SeasonFilter::Summer => t!("season-summer"),
        SeasonFilter::Autumn => t!("season-autumn"),
        SeasonFilter::Winter => t!("season-winter"),
    }
}

fn kind_text(kind: ChartKind) -> String {
    match kind {
        ChartKind::Pie => t!("chart-kind-pie"),
        ChartKind::Bar => t!("chart-kind-bar"),
        ChartKind::Sunburst => t!("chart-kind-sunburst"),
    }
}

#[component]
pub fn DistrictAnalysis() -> Element {
    let records = use_resource(load_production_records);
    let mut query = use_signal(ChartQuery::default);

    let state_options = use_memo(move || {
        records
            .read()
            .as_ref()
            .and_then(|result| result.as_ref().ok())
            .map(|rows| states(rows.as_slice()))
            .unwrap_or_default()
    });

    let chart = use_memo(move || {
        let query = query();
        records
            .read()
            .as_ref()
            .and_then(|result| result.as_ref().ok())
            .and_then(|rows| build_chart(rows, &query))
    });

    let error = records
        .read()
        .as_ref()
        .and_then(|result| result.as_ref().err().cloned());
    let loading = records.read().is_none();
    let current = query();

    let body = if let Some(err) = error {
        tracing::error!("district analysis failed: {err}");
        rsx! {
            div { class: "crop-data__error",
                {t!("crop-data-analysis-error")}
                br {}
                "{err}"
            }
        }
    } else if loading {
        rsx! { p { class: "crop-data__loading", {t!("crop-data-loading")} } }
    } else if let Some(spec) = chart() {
        rsx! { ChartView { spec } }
    } else {
        rsx! { p { class: "crop-data__placeholder", {t!("crop-data-select-state")} } }
    };

    rsx! {
        section { class: "crop-data__card district-analysis",
            h2 { {t!("crop-data-analysis-title")} }
            div { class: "district-analysis__controls",
                label {
                    span { {t!("crop-data-state-label")} }
                    select {
                        id: "stateSelect",
                        value: "{current.state}",
                        onchange: move |evt: FormEvent| query.with_mut(|q| q.state = evt.value()),
                        option { value: "", {t!("crop-data-state-placeholder")} }
                        for state in state_options().into_iter() {
                            option { key: "{state}", value: "{state}", "{state}" }
                        }
                    }
                }
                label {
                    span { {t!("crop-data-season-label")} }
                    select {
                        id: "seasonSelect",
                        value: "{current.season.label()}",
                        onchange: move |evt: FormEvent| {
                            if let Some(season) = SeasonFilter::from_label(&evt.value()) {
                                query.with_mut(|q| q.season = season);
                            }
                        },
                        for season in SeasonFilter::ALL {
                            option { key: "{season.label()}", value: "{season.label()}", {season_text(season)} }
                        }
                    }
                }
                label {
                    span { {t!("crop-data-chart-label")} }
                    select {
                        id: "graphSelect",
                        value: "{current.kind.value()}",
                        onchange: move |evt: FormEvent| {
                            if let Some(kind) = ChartKind::from_value(&evt.value()) {
                                query.with_mut(|q| q.kind = kind);
                            }
                        },
                        for kind in ChartKind::ALL {
                            option { key: "{kind.value()}", value: "{kind.value()}", {kind_text(kind)} }
                        }
                    }
                }
            }
            div { id: "districtChart", class: "district-analysis__chart", {body} }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use super::*;

    #[test]
    fn select_options_come_from_the_bundle() {
        crate::i18n::init();
        let seasons: BTreeSet<String> = SeasonFilter::ALL.into_iter().map(season_text).collect();
        assert_eq!(seasons.len(), SeasonFilter::ALL.len());
        assert_eq!(season_text(SeasonFilter::WholeYear), "Whole Year");

        let kinds: BTreeSet<String> = ChartKind::ALL.into_iter().map(kind_text).collect();
        assert_eq!(kinds.len(), ChartKind::ALL.len());
        assert_eq!(kind_text(ChartKind::Sunburst), "Sunburst Chart");
    }
}
