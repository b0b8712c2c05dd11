//! Crop-data page widgets: crop list, state choropleth and district analysis.

mod charts;
mod crops_list;
mod district_analysis;
mod india_map;

pub(crate) use district_analysis::load_production_records;

pub use charts::{arc_path, bar_layout, nice_ticks, pie_layout, sunburst_layout, ChartView};
pub use crops_list::CropsList;
pub use district_analysis::DistrictAnalysis;
pub use india_map::IndiaMap;

use thiserror::Error;

use crate::core::fetch::FetchError;
use crate::map::MapError;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CropDataError {
    #[error(transparent)]
    Fetch(#[from] FetchError),
    #[error(transparent)]
    Map(#[from] MapError),
}
