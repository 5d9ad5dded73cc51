//! Result counts supplied by the listing data layer, used for display only.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};


#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FilterCounts(pub BTreeMap<String, BTreeMap<String, u64>>);

impl FilterCounts {
    pub fn insert(&mut self, filter_id: impl Into<String>, value: impl Into<String>, count: u64) {
        self.0.entry(filter_id.into()).or_default().insert(value.into(), count);
    }

    pub fn count(&self, filter_id: &str, value: &str) -> Option<u64> {
        self.0.get(filter_id).and_then(|counts| counts.get(value)).copied()
    }

    /// Known to match nothing; unknown counts are not exhausted.
    pub fn is_exhausted(&self, filter_id: &str, value: &str) -> bool {
        self.count(filter_id, value) == Some(0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultSummary {
    pub total_count: u64,
    pub filtered_count: u64,
}

impl ResultSummary {
    pub fn is_filtered(&self) -> bool {
        self.filtered_count != self.total_count
    }

    pub fn display_text(&self, noun: &str) -> String {
        if self.is_filtered() {
            format!("Showing {} of {} {noun}", self.filtered_count, self.total_count)
        } else {
            format!("{} {noun}", self.total_count)
        }
    }
}
