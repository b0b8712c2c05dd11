use serde::Deserialize;

use super::MapError;

/// `[longitude, latitude, ...]`; extra ordinates are ignored.
pub type Position = Vec<f64>;
pub type Ring = Vec<Position>;

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct FeatureCollection {
    pub features: Vec<Feature>,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Feature {
    #[serde(default)]
    pub properties: Properties,
    pub geometry: Option<Geometry>,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct Properties {
    /// State name; the join key against the production shares.
    #[serde(default)]
    pub st_nm: String,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(tag = "type", content = "coordinates")]
pub enum Geometry {
    Polygon(Vec<Ring>),
    MultiPolygon(Vec<Vec<Ring>>),
}

impl Geometry {
    /// Every ring of every polygon, outer and holes alike.
    pub fn rings(&self) -> Vec<&Ring> {
        match self {
            Self::Polygon(rings) => rings.iter().collect(),
            Self::MultiPolygon(polygons) => polygons.iter().flatten().collect(),
        }
    }
}

impl Feature {
    pub fn name(&self) -> &str {
        &self.properties.st_nm
    }
}

pub fn parse_feature_collection(text: &str) -> Result<FeatureCollection, MapError> {
    serde_json::from_str(text).map_err(|err| MapError::Geometry(err.to_string()))
}
