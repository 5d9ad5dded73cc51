//! Decoded filter state for one listing page.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};


#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RangeValue {
    pub min: f64,
    pub max: f64,
}

impl RangeValue {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }
}

/// Value held for one filter; the variant follows the filter type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilterValue {
    /// multi-select, search-select and checkbox-group
    Values(Vec<String>),
    /// single-select
    Single(String),
    Toggle(bool),
    Range(RangeValue),
}

impl FilterValue {
    pub fn values<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Values(values.into_iter().map(Into::into).collect())
    }

    /// A value that constrains nothing and should not be kept in the state.
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Values(v) => v.is_empty(),
            Self::Single(s) => s.is_empty(),
            Self::Toggle(on) => !on,
            Self::Range(_) => false,
        }
    }

    /// Number of constraints this value contributes to the active count.
    pub fn active_count(&self) -> usize {
        match self {
            Self::Values(v) => v.len(),
            other if other.is_empty() => 0,
            _ => 1,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FilterState {
    pub filters: BTreeMap<String, FilterValue>,
    /// `None` means the config's default sort.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort: Option<String>,
    /// 1-based; `None` means the first page.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page: Option<u64>,
}

impl FilterState {
    pub fn get(&self, id: &str) -> Option<&FilterValue> {
        self.filters.get(id)
    }

    /// Store `value` under `id`, or drop the key when the value is empty.
    pub fn set(&mut self, id: impl Into<String>, value: FilterValue) {
        let id = id.into();
        if value.is_empty() {
            self.filters.remove(&id);
        } else {
            self.filters.insert(id, value);
        }
    }

    pub fn remove(&mut self, id: &str) -> Option<FilterValue> {
        self.filters.remove(id)
    }

    pub fn page_or_first(&self) -> u64 {
        self.page.unwrap_or(1)
    }

    pub fn with_sort(mut self, sort: impl Into<String>) -> Self {
        self.sort = Some(sort.into());
        self
    }

    pub fn with_page(mut self, page: u64) -> Self {
        self.page = Some(page);
        self
    }

    pub fn with(mut self, id: impl Into<String>, value: FilterValue) -> Self {
        self.set(id, value);
        self
    }
}
