//! Typed readers for the bundled CSV files.
//!
//! Skip policy: a row is dropped (and counted in [`Parsed::skipped`]) when it
//! can't be read as CSV, is missing a required column, has an empty
//! state/district, or carries a production value that isn't a finite number.
//! Nothing half-parsed ever reaches the aggregator.

use std::collections::{BTreeMap, BTreeSet};

use csv::{ReaderBuilder, StringRecord, Trim};

// graphdata2013.csv / df2013.csv:
// State_Name,District_Name,Crop_Year,Season,Crop,Area,Production
const COL_STATE: usize = 0;
const COL_DISTRICT: usize = 1;
const COL_SEASON: usize = 3;
const COL_CROP: usize = 4;
const COL_PRODUCTION: usize = 6;

#[derive(Debug, Clone, PartialEq)]
pub struct ProductionRecord {
    pub state: String,
    pub district: String,
    pub season: String,
    pub production: f64,
}

/// Rows that made it through, plus how many were dropped on the way.
#[derive(Debug, Clone, PartialEq)]
pub struct Parsed<T> {
    pub rows: Vec<T>,
    pub skipped: usize,
}

impl<T> Default for Parsed<T> {
    fn default() -> Self {
        Self {
            rows: Vec::new(),
            skipped: 0,
        }
    }
}

/// State name → share of national production, in percent.
pub type StateShares = BTreeMap<String, f64>;

fn records(text: &str) -> impl Iterator<Item = Result<StringRecord, csv::Error>> + '_ {
    ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(text.as_bytes())
        .into_records()
}

fn non_empty(record: &StringRecord, index: usize) -> Option<&str> {
    record.get(index).filter(|field| !field.is_empty())
}

fn number(record: &StringRecord, index: usize) -> Option<f64> {
    non_empty(record, index)?
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
}

pub fn parse_production_records(text: &str) -> Parsed<ProductionRecord> {
    let mut parsed = Parsed::default();
    for record in records(text) {
        let row = record.ok().and_then(|record| {
            Some(ProductionRecord {
                state: non_empty(&record, COL_STATE)?.to_string(),
                district: non_empty(&record, COL_DISTRICT)?.to_string(),
                season: record.get(COL_SEASON).unwrap_or_default().to_string(),
                production: number(&record, COL_PRODUCTION)?,
            })
        });
        match row {
            Some(row) => parsed.rows.push(row),
            None => parsed.skipped += 1,
        }
    }
    parsed
}

/// `state,production` rows. Later duplicates overwrite earlier ones.
pub fn parse_state_shares(text: &str) -> Parsed<(String, f64)> {
    let mut parsed = Parsed::default();
    for record in records(text) {
        let row = record.ok().and_then(|record| {
            let state = non_empty(&record, 0)?.to_string();
            Some((state, number(&record, 1)?))
        });
        match row {
            Some(row) => parsed.rows.push(row),
            None => parsed.skipped += 1,
        }
    }
    parsed
}

impl Parsed<(String, f64)> {
    pub fn into_shares(self) -> StateShares {
        self.rows.into_iter().collect()
    }
}

/// Unique crop names from the crop column, sorted.
pub fn parse_crop_names(text: &str) -> Vec<String> {
    records(text)
        .filter_map(Result::ok)
        .filter_map(|record| non_empty(&record, COL_CROP).map(str::to_string))
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = "State_Name,District_Name,Crop_Year,Season,Crop,Area,Production\n";

    #[test]
    fn reads_and_trims_production_rows() {
        let text = format!(
            "{HEADER}Punjab,LUDHIANA,2013,Kharif     ,Rice,1000,4500.5\n\
             Punjab,AMRITSAR,2013,Rabi       ,Wheat,800,3200\n"
        );
        let parsed = parse_production_records(&text);
        assert_eq!(parsed.skipped, 0);
        assert_eq!(
            parsed.rows[0],
            ProductionRecord {
                state: "Punjab".into(),
                district: "LUDHIANA".into(),
                season: "Kharif".into(),
                production: 4500.5,
            }
        );
        assert_eq!(parsed.rows[1].production, 3200.0);
    }

    #[test]
    fn malformed_rows_are_skipped_and_counted() {
        let text = format!(
            "{HEADER}Punjab,LUDHIANA,2013,Kharif,Rice,1000,\n\
             Punjab,,2013,Kharif,Rice,1000,10\n\
             Punjab,PATIALA,2013,Kharif,Rice,1000,n/a\n\
             Punjab,BATHINDA,2013\n\
             Punjab,MOGA,2013,Kharif,Rice,1000,NaN\n\
             Punjab,SANGRUR,2013,Kharif,Rice,1000,25\n"
        );
        let parsed = parse_production_records(&text);
        assert_eq!(parsed.rows.len(), 1);
        assert_eq!(parsed.rows[0].district, "SANGRUR");
        assert_eq!(parsed.skipped, 5);
    }

    #[test]
    fn quoted_fields_keep_commas() {
        let text = format!("{HEADER}\"Jammu and Kashmir\",\"LEH, LADAKH\",2013,Rabi,Barley,10,42\n");
        let parsed = parse_production_records(&text);
        assert_eq!(parsed.rows[0].district, "LEH, LADAKH");
    }

    #[test]
    fn state_shares_map_names_to_percentages() {
        let parsed = parse_state_shares("state,production\nPunjab, 9.8\nKerala,abc\nBihar,4\n");
        assert_eq!(parsed.skipped, 1);
        let shares = parsed.into_shares();
        assert_eq!(shares.get("Punjab"), Some(&9.8));
        assert_eq!(shares.get("Bihar"), Some(&4.0));
        assert!(!shares.contains_key("Kerala"));
    }

    #[test]
    fn crop_names_are_unique_and_sorted() {
        let text = format!(
            "{HEADER}A,B,2013,Kharif,Rice,1,1\nA,B,2013,Rabi,Wheat,1,1\nA,C,2013,Kharif, Rice ,1,1\nA,C,2013\n"
        );
        assert_eq!(parse_crop_names(&text), vec!["Rice", "Wheat"]);
    }
}
