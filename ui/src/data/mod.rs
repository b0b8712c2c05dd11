//! Crop production data: typed CSV parsing, season filters, per-district
//! aggregation and chart shaping.
//!
//! Everything here is pure; the crop-data page feeds it text from the bundled
//! files and renders whatever comes back.

mod aggregate;
mod chart;
mod parse;
mod regions;
mod season;

pub use aggregate::{district_totals, sort_descending, states, DistrictTotal};
pub use chart::{
    bar_slices, build_chart, chart_title, pie_slices, sunburst_nodes, ChartData, ChartKind,
    ChartQuery, ChartSpec, Slice, SunburstNode, BAR_TOP, OTHERS_LABEL, PIE_TOP, SUNBURST_ROOT,
};
pub use parse::{
    parse_crop_names, parse_production_records, parse_state_shares, Parsed, ProductionRecord,
    StateShares,
};
pub use regions::RegionDirectory;
pub use season::SeasonFilter;

use dioxus::prelude::*;

use crate::core::fetch::DataAsset;

pub const INDIA_GEOJSON: DataAsset = DataAsset {
    name: "india.json",
    web: asset!("/assets/data/india.json"),
    native_path: concat!(env!("CARGO_MANIFEST_DIR"), "/assets/data/india.json"),
};

pub const CROPS_CSV: DataAsset = DataAsset {
    name: "df2013.csv",
    web: asset!("/assets/data/df2013.csv"),
    native_path: concat!(env!("CARGO_MANIFEST_DIR"), "/assets/data/df2013.csv"),
};

pub const STATE_PRODUCTION_CSV: DataAsset = DataAsset {
    name: "state_crop_production.csv",
    web: asset!("/assets/data/state_crop_production.csv"),
    native_path: concat!(
        env!("CARGO_MANIFEST_DIR"),
        "/assets/data/state_crop_production.csv"
    ),
};

pub const DISTRICT_PRODUCTION_CSV: DataAsset = DataAsset {
    name: "graphdata2013.csv",
    web: asset!("/assets/data/graphdata2013.csv"),
    native_path: concat!(env!("CARGO_MANIFEST_DIR"), "/assets/data/graphdata2013.csv"),
};
