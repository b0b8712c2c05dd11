use std::collections::{BTreeMap, BTreeSet};

use super::ProductionRecord;

/// State → districts lookup for the signup form's dependent selects.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RegionDirectory {
    regions: BTreeMap<String, BTreeSet<String>>,
}

impl RegionDirectory {
    pub fn from_records(records: &[ProductionRecord]) -> Self {
        let mut regions: BTreeMap<String, BTreeSet<String>> = BTreeMap::new();
        for record in records {
            regions
                .entry(record.state.clone())
                .or_default()
                .insert(record.district.clone());
        }
        Self { regions }
    }

    pub fn states(&self) -> impl Iterator<Item = &str> {
        self.regions.keys().map(String::as_str)
    }

    /// Empty when the state is unknown.
    pub fn districts(&self, state: &str) -> Vec<String> {
        self.regions
            .get(state)
            .map(|districts| districts.iter().cloned().collect())
            .unwrap_or_default()
    }

}
