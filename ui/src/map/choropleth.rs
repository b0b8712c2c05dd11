use crate::core::format::format_share;
use crate::data::StateShares;

use super::color::{sequential_color, NEUTRAL_FILL};
use super::geo::FeatureCollection;
use super::projection::Mercator;

/// One drawable state outline.
#[derive(Debug, Clone, PartialEq)]
pub struct RegionShape {
    pub name: String,
    pub path: String,
    /// Production share in percent, if the state appears in the share table.
    pub value: Option<f64>,
    pub fill: String,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ChoroplethModel {
    pub width: f64,
    pub height: f64,
    pub regions: Vec<RegionShape>,
}

impl ChoroplethModel {
    /// Project every feature into a `width × height` box and colour it by share.
    /// Features without geometry are dropped.
    pub fn build(
        collection: &FeatureCollection,
        shares: &StateShares,
        width: f64,
        height: f64,
        wide: bool,
    ) -> Self {
        let projection = Mercator::for_viewport(width, height, wide);
        let regions = collection
            .features
            .iter()
            .filter_map(|feature| {
                let geometry = feature.geometry.as_ref()?;
                let name = feature.name().to_string();
                let value = shares.get(&name).copied();
                let fill = match value {
                    Some(value) => sequential_color(value),
                    None => NEUTRAL_FILL.to_string(),
                };
                Some(RegionShape {
                    path: projection.path(geometry),
                    name,
                    value,
                    fill,
                })
            })
            .collect();
        Self {
            width,
            height,
            regions,
        }
    }

    pub fn region(&self, name: &str) -> Option<&RegionShape> {
        self.regions.iter().find(|region| region.name == name)
    }
}

/// Hover text: state name, then `Production: X.X%` or `N/A`.
pub fn tooltip_text(name: &str, value: Option<f64>) -> (String, String) {
    let share = match value {
        Some(_) => format!("Production: {}%", format_share(value)),
        None => format!("Production: {}", format_share(None)),
    };
    (name.to_string(), share)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::map::parse_feature_collection;

    const TWO_STATES: &str = r#"{"type":"FeatureCollection","features":[
        {"type":"Feature","properties":{"st_nm":"Punjab"},
         "geometry":{"type":"Polygon","coordinates":[[[74,30],[76,30],[76,32],[74,30]]]}},
        {"type":"Feature","properties":{"st_nm":"Sikkim"},
         "geometry":{"type":"Polygon","coordinates":[[[88,27],[89,27],[89,28],[88,27]]]}},
        {"type":"Feature","properties":{"st_nm":"Nowhere"},"geometry":null}
    ]}"#;

    #[test]
    fn joins_shares_by_state_name() {
        let collection = parse_feature_collection(TWO_STATES).unwrap();
        let shares = StateShares::from([("Punjab".to_string(), 12.0)]);
        let model = ChoroplethModel::build(&collection, &shares, 800.0, 600.0, false);

        assert_eq!(model.regions.len(), 2);
        let punjab = model.region("Punjab").unwrap();
        assert_eq!(punjab.value, Some(12.0));
        assert_eq!(punjab.fill, "#004529");
        assert!(punjab.path.starts_with('M'));

        let sikkim = model.region("Sikkim").unwrap();
        assert_eq!(sikkim.value, None);
        assert_eq!(sikkim.fill, NEUTRAL_FILL);
    }

    #[test]
    fn tooltip_shows_one_decimal_or_na() {
        assert_eq!(
            tooltip_text("Punjab", Some(10.456)),
            ("Punjab".to_string(), "Production: 10.5%".to_string())
        );
        assert_eq!(tooltip_text("Goa", None).1, "Production: N/A");
    }
}
