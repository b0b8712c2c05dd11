//! End-to-end checks over the bundled data files.

use std::fs;
use std::path::PathBuf;

use ui::data::{
    build_chart, parse_crop_names, parse_production_records, parse_state_shares, states,
    ChartData, ChartKind, ChartQuery, RegionDirectory, SeasonFilter, OTHERS_LABEL,
};
use ui::map::{parse_feature_collection, ChoroplethModel, NEUTRAL_FILL};

fn read(name: &str) -> String {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("assets/data")
        .join(name);
    fs::read_to_string(&path).unwrap_or_else(|err| panic!("reading {path:?}: {err}"))
}

#[test]
fn district_file_parses_with_malformed_rows_skipped() {
    let parsed = parse_production_records(&read("graphdata2013.csv"));
    assert_eq!(parsed.skipped, 4);
    assert_eq!(parsed.rows.len(), 700);
    assert!(parsed.rows.iter().all(|r| !r.season.ends_with(' ')));

    let all_states = states(&parsed.rows);
    assert!(all_states.contains(&"Bihar".to_string()));
    assert!(all_states.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn bihar_pie_groups_the_tail_into_others() {
    let records = parse_production_records(&read("graphdata2013.csv")).rows;
    let spec = build_chart(
        &records,
        &ChartQuery {
            state: "Bihar".into(),
            season: SeasonFilter::WholeYear,
            kind: ChartKind::Pie,
        },
    )
    .expect("chart for a selected state");

    assert_eq!(spec.title, "Top Districts by Annual Production in Bihar");
    let ChartData::Pie(slices) = spec.data else {
        panic!("expected pie data");
    };
    // 21 districts: ten named plus the bucket.
    assert_eq!(slices.len(), 11);
    assert_eq!(slices[10].label, OTHERS_LABEL);
    assert!(slices[..10].windows(2).all(|w| w[0].value >= w[1].value));
}

#[test]
fn goa_bar_chart_has_both_districts() {
    let records = parse_production_records(&read("graphdata2013.csv")).rows;
    let spec = build_chart(
        &records,
        &ChartQuery {
            state: "Goa".into(),
            season: SeasonFilter::Kharif,
            kind: ChartKind::Bar,
        },
    )
    .expect("chart");
    let ChartData::Bar(bars) = spec.data else {
        panic!("expected bar data");
    };
    assert_eq!(bars.len(), 2);
}

#[test]
fn crop_list_is_sorted_and_unique() {
    let crops = parse_crop_names(&read("df2013.csv"));
    assert_eq!(crops.len(), 19);
    assert_eq!(crops.first().map(String::as_str), Some("Arhar/Tur"));
    assert!(crops.contains(&"Coconut".to_string()));
}

#[test]
fn every_share_has_a_region_on_the_map() {
    let collection = parse_feature_collection(&read("india.json")).expect("valid GeoJSON");
    let shares = parse_state_shares(&read("state_crop_production.csv"));
    assert_eq!(shares.skipped, 0);
    let shares = shares.into_shares();

    let model = ChoroplethModel::build(&collection, &shares, 800.0, 600.0, false);
    assert_eq!(model.regions.len(), collection.features.len());
    for state in shares.keys() {
        let region = model
            .region(state)
            .unwrap_or_else(|| panic!("{state} missing from map"));
        assert_ne!(region.fill, NEUTRAL_FILL);
    }
    let lakshadweep = model.region("Lakshadweep").expect("island territory drawn");
    assert_eq!(lakshadweep.fill, NEUTRAL_FILL);
}

#[test]
fn signup_directory_covers_every_state() {
    let records = parse_production_records(&read("graphdata2013.csv")).rows;
    let directory = RegionDirectory::from_records(&records);
    assert_eq!(directory.states().count(), states(&records).len());
    assert!(directory.districts("Kerala").iter().any(|d| d == "WAYANAD"));
    assert_eq!(directory.districts("Goa"), ["NORTH GOA", "SOUTH GOA"]);
}
