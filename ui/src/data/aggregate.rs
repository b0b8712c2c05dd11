use std::collections::{BTreeSet, HashMap};

use super::{ProductionRecord, SeasonFilter};

#[derive(Debug, Clone, PartialEq)]
pub struct DistrictTotal {
    pub district: String,
    pub production: f64,
}

/// Sum production per district for one state and season.
///
/// Output keeps the order in which districts first appear in `records`.
/// Each district's values are added smallest first, so the sums do not
/// depend on row order.
pub fn district_totals(
    records: &[ProductionRecord],
    state: &str,
    season: SeasonFilter,
) -> Vec<DistrictTotal> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut groups: Vec<(&str, Vec<f64>)> = Vec::new();

    for record in records
        .iter()
        .filter(|r| r.state == state && season.matches(&r.season))
    {
        let district = record.district.as_str();
        let slot = *index.entry(district).or_insert_with(|| {
            groups.push((district, Vec::new()));
            groups.len() - 1
        });
        groups[slot].1.push(record.production);
    }

    groups
        .into_iter()
        .map(|(district, mut values)| {
            values.sort_by(f64::total_cmp);
            DistrictTotal {
                district: district.to_string(),
                production: values.iter().sum(),
            }
        })
        .collect()
}

/// Largest first. Ties keep their first-appearance order.
pub fn sort_descending(mut totals: Vec<DistrictTotal>) -> Vec<DistrictTotal> {
    totals.sort_by(|a, b| b.production.total_cmp(&a.production));
    totals
}

/// Distinct state names, sorted.
pub fn states(records: &[ProductionRecord]) -> Vec<String> {
    records
        .iter()
        .map(|r| r.state.as_str())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(state: &str, district: &str, season: &str, production: f64) -> ProductionRecord {
        ProductionRecord {
            state: state.into(),
            district: district.into(),
            season: season.into(),
            production,
        }
    }

    fn sample() -> Vec<ProductionRecord> {
        vec![
            row("Punjab", "Moga", "Kharif", 10.0),
            row("Punjab", "Ludhiana", "Rabi", 40.0),
            row("Haryana", "Karnal", "Kharif", 99.0),
            row("Punjab", "Moga", "Rabi", 35.0),
            row("Punjab", "Ludhiana", "Summer", 500.0),
            row("Punjab", "Patiala", "Kharif", 20.0),
        ]
    }

    fn as_map(totals: &[DistrictTotal]) -> HashMap<String, f64> {
        totals
            .iter()
            .map(|t| (t.district.clone(), t.production))
            .collect()
    }

    #[test]
    fn sums_per_district_in_first_appearance_order() {
        let totals = district_totals(&sample(), "Punjab", SeasonFilter::WholeYear);
        let names: Vec<_> = totals.iter().map(|t| t.district.as_str()).collect();
        assert_eq!(names, ["Moga", "Ludhiana", "Patiala"]);
        assert_eq!(totals[0].production, 45.0);
        assert_eq!(totals[1].production, 40.0);
    }

    #[test]
    fn state_must_match_exactly() {
        let totals = district_totals(&sample(), "punjab", SeasonFilter::WholeYear);
        assert!(totals.is_empty());
    }

    #[test]
    fn permuting_rows_keeps_sums() {
        let rows = sample();
        let forward = as_map(&district_totals(&rows, "Punjab", SeasonFilter::WholeYear));

        let mut reversed = rows.clone();
        reversed.reverse();
        let mut rotated = rows.clone();
        rotated.rotate_left(2);

        for permuted in [reversed, rotated] {
            let other = as_map(&district_totals(&permuted, "Punjab", SeasonFilter::WholeYear));
            assert_eq!(forward, other);
        }
    }

    #[test]
    fn fractional_sums_ignore_row_order() {
        let rows = vec![
            row("Punjab", "Amritsar", "Kharif", 0.1),
            row("Punjab", "Amritsar", "Rabi", 0.2),
            row("Punjab", "Amritsar", "Kharif", 0.3),
            row("Punjab", "Moga", "Rabi", 106892.2),
            row("Punjab", "Moga", "Kharif", 0.7),
        ];
        let forward = district_totals(&rows, "Punjab", SeasonFilter::WholeYear);

        let mut reversed = rows.clone();
        reversed.reverse();
        let backward = as_map(&district_totals(&reversed, "Punjab", SeasonFilter::WholeYear));

        assert_eq!(as_map(&forward), backward);
        for total in &forward {
            assert_eq!(
                total.production.to_bits(),
                backward[&total.district].to_bits()
            );
        }
    }

    #[test]
    fn sorted_descending_is_stable() {
        let totals = vec![
            DistrictTotal { district: "A".into(), production: 5.0 },
            DistrictTotal { district: "B".into(), production: 9.0 },
            DistrictTotal { district: "C".into(), production: 5.0 },
        ];
        let sorted = sort_descending(totals);
        let names: Vec<_> = sorted.iter().map(|t| t.district.as_str()).collect();
        assert_eq!(names, ["B", "A", "C"]);
    }

    #[test]
    fn states_are_unique_and_sorted() {
        assert_eq!(states(&sample()), ["Haryana", "Punjab"]);
    }
}
