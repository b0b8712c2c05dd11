//! Choropleth model for the state production map.
//!
//! The page hands in the boundary collection, the state shares and the
//! current container size; [`ChoroplethModel::build`] returns ready-to-draw
//! SVG paths with their fills. Nothing here touches the DOM.

mod choropleth;
mod color;
mod geo;
mod projection;

pub use choropleth::{tooltip_text, ChoroplethModel, RegionShape};
pub use color::{
    sequential_color, HOVER_FILL, NEUTRAL_FILL, SCALE_DOMAIN, STROKE_WIDTH, STROKE_WIDTH_HOVER,
};
pub use geo::{parse_feature_collection, Feature, FeatureCollection, Geometry, Properties};
pub use projection::{Mercator, MAP_CENTER};

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MapError {
    #[error("Invalid boundary data: {0}")]
    Geometry(String),
}
