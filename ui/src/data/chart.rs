//! Chart shaping for the district analysis.

use super::{district_totals, sort_descending, DistrictTotal, ProductionRecord, SeasonFilter};

pub const PIE_TOP: usize = 10;
pub const BAR_TOP: usize = 15;
pub const OTHERS_LABEL: &str = "Others";
pub const SUNBURST_ROOT: &str = "Total";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ChartKind {
    #[default]
    Pie,
    Bar,
    Sunburst,
}

impl ChartKind {
    pub const ALL: [Self; 3] = [Self::Pie, Self::Bar, Self::Sunburst];

    /// Value used by the chart `<select>`.
    pub fn value(self) -> &'static str {
        match self {
            Self::Pie => "piechart",
            Self::Bar => "barchart",
            Self::Sunburst => "sunburst",
        }
    }

    pub fn from_value(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.value() == value)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Slice {
    pub label: String,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SunburstNode {
    pub label: String,
    /// Empty for the root.
    pub parent: String,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ChartData {
    Pie(Vec<Slice>),
    Bar(Vec<Slice>),
    Sunburst(Vec<SunburstNode>),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChartSpec {
    pub kind: ChartKind,
    pub title: String,
    pub data: ChartData,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ChartQuery {
    pub state: String,
    pub season: SeasonFilter,
    pub kind: ChartKind,
}

fn slice(total: &DistrictTotal) -> Slice {
    Slice {
        label: total.district.clone(),
        value: total.production,
    }
}

/// Top ten plus an `Others` bucket when anything is left over.
pub fn pie_slices(sorted: &[DistrictTotal]) -> Vec<Slice> {
    let split = sorted.len().min(PIE_TOP);
    let (top, rest) = sorted.split_at(split);
    let mut slices: Vec<Slice> = top.iter().map(slice).collect();
    if !rest.is_empty() {
        slices.push(Slice {
            label: OTHERS_LABEL.to_string(),
            value: rest.iter().map(|d| d.production).sum(),
        });
    }
    slices
}

pub fn bar_slices(sorted: &[DistrictTotal]) -> Vec<Slice> {
    sorted.iter().take(BAR_TOP).map(slice).collect()
}

/// Root, one state node, one leaf per district. Branch values are totals.
pub fn sunburst_nodes(sorted: &[DistrictTotal], state: &str) -> Vec<SunburstNode> {
    let total: f64 = sorted.iter().map(|d| d.production).sum();
    let mut nodes = Vec::with_capacity(sorted.len() + 2);
    nodes.push(SunburstNode {
        label: SUNBURST_ROOT.to_string(),
        parent: String::new(),
        value: total,
    });
    nodes.push(SunburstNode {
        label: state.to_string(),
        parent: SUNBURST_ROOT.to_string(),
        value: total,
    });
    nodes.extend(sorted.iter().map(|d| SunburstNode {
        label: d.district.clone(),
        parent: state.to_string(),
        value: d.production,
    }));
    nodes
}

pub fn chart_title(kind: ChartKind, season: SeasonFilter, state: &str) -> String {
    let season_text = season.title_text();
    match kind {
        ChartKind::Pie | ChartKind::Bar => {
            format!("Top Districts by {season_text} Production in {state}")
        }
        ChartKind::Sunburst => {
            format!("{season_text} District Production Distribution in {state}")
        }
    }
}

/// `None` until a state is selected.
pub fn build_chart(records: &[ProductionRecord], query: &ChartQuery) -> Option<ChartSpec> {
    if query.state.is_empty() {
        return None;
    }
    let sorted = sort_descending(district_totals(records, &query.state, query.season));
    let data = match query.kind {
        ChartKind::Pie => ChartData::Pie(pie_slices(&sorted)),
        ChartKind::Bar => ChartData::Bar(bar_slices(&sorted)),
        ChartKind::Sunburst => ChartData::Sunburst(sunburst_nodes(&sorted, &query.state)),
    };
    Some(ChartSpec {
        kind: query.kind,
        title: chart_title(query.kind, query.season, &query.state),
        data,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Districts D1..Dn with values n, n-1, ..., 1 (already descending).
    fn descending(n: usize) -> Vec<DistrictTotal> {
        (0..n)
            .map(|i| DistrictTotal {
                district: format!("D{}", i + 1),
                production: (n - i) as f64,
            })
            .collect()
    }

    #[test]
    fn pie_with_twelve_districts_has_others_bucket() {
        let slices = pie_slices(&descending(12));
        assert_eq!(slices.len(), 11);
        assert!(slices[..10].iter().all(|s| s.label != OTHERS_LABEL));
        let others = slices.last().unwrap();
        assert_eq!(others.label, OTHERS_LABEL);
        assert_eq!(others.value, 2.0 + 1.0);
    }

    #[test]
    fn pie_with_ten_or_fewer_has_no_others() {
        for n in [0, 1, 7, 10] {
            let slices = pie_slices(&descending(n));
            assert_eq!(slices.len(), n);
            assert!(slices.iter().all(|s| s.label != OTHERS_LABEL));
        }
    }

    #[test]
    fn bar_keeps_fifteen_highest_descending() {
        let mut shuffled = descending(20);
        shuffled.rotate_left(7);
        let sorted = sort_descending(shuffled);
        let bars = bar_slices(&sorted);
        assert_eq!(bars.len(), 15);
        let values: Vec<f64> = bars.iter().map(|b| b.value).collect();
        let expected: Vec<f64> = (6..=20).rev().map(f64::from).collect();
        assert_eq!(values, expected);
    }

    #[test]
    fn sunburst_has_root_state_and_leaves() {
        let nodes = sunburst_nodes(&descending(3), "Bihar");
        assert_eq!(nodes.len(), 5);
        assert_eq!(nodes[0].label, SUNBURST_ROOT);
        assert_eq!(nodes[0].parent, "");
        assert_eq!(nodes[0].value, 6.0);
        assert_eq!(nodes[1].label, "Bihar");
        assert_eq!(nodes[1].parent, SUNBURST_ROOT);
        assert_eq!(nodes[1].value, 6.0);
        assert!(nodes[2..].iter().all(|n| n.parent == "Bihar"));
        assert_eq!(nodes[2].value, 3.0);
    }

    #[test]
    fn titles_use_annual_for_whole_year() {
        assert_eq!(
            chart_title(ChartKind::Pie, SeasonFilter::WholeYear, "Kerala"),
            "Top Districts by Annual Production in Kerala"
        );
        assert_eq!(
            chart_title(ChartKind::Sunburst, SeasonFilter::Rabi, "Kerala"),
            "Rabi District Production Distribution in Kerala"
        );
    }

    #[test]
    fn no_chart_without_state() {
        assert!(build_chart(&[], &ChartQuery::default()).is_none());
    }

    #[test]
    fn build_chart_filters_sorts_and_shapes() {
        let records = vec![
            ProductionRecord {
                state: "Kerala".into(),
                district: "Idukki".into(),
                season: "Kharif".into(),
                production: 5.0,
            },
            ProductionRecord {
                state: "Kerala".into(),
                district: "Wayanad".into(),
                season: "Rabi".into(),
                production: 8.0,
            },
            ProductionRecord {
                state: "Kerala".into(),
                district: "Idukki".into(),
                season: "Summer".into(),
                production: 100.0,
            },
        ];
        let spec = build_chart(
            &records,
            &ChartQuery {
                state: "Kerala".into(),
                season: SeasonFilter::WholeYear,
                kind: ChartKind::Bar,
            },
        )
        .unwrap();
        assert_eq!(
            spec.data,
            ChartData::Bar(vec![
                Slice { label: "Wayanad".into(), value: 8.0 },
                Slice { label: "Idukki".into(), value: 5.0 },
            ])
        );
    }

    #[test]
    fn chart_kind_values_round_trip() {
        for kind in ChartKind::ALL {
            assert_eq!(ChartKind::from_value(kind.value()), Some(kind));
        }
    }
}
