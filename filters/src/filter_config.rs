//! Declarative filter catalog for one listing page.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::quick_filters::{QuickFilter, resolve_quick_filter};
use crate::url_codec::{LIST_SEPARATOR, PAGE_PARAM, SORT_PARAM};


#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FilterType {
    MultiSelect,
    SingleSelect,
    SearchSelect,
    CheckboxGroup,
    Toggle,
    RangeSlider,
}

impl FilterType {
    /// Filters whose state is a set of selected option values.
    pub fn is_multi_valued(self) -> bool {
        matches!(self, Self::MultiSelect | Self::SearchSelect | Self::CheckboxGroup)
    }

    pub fn has_options(self) -> bool {
        self.is_multi_valued() || self == Self::SingleSelect
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterPriority {
    High,
    #[default]
    Medium,
    Low,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterOption {
    pub value: String,
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(default)]
    pub disabled: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl FilterOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self { value: value.into(), label: label.into(), icon: None, disabled: false, description: None }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterDefinition {
    pub id: String,
    #[serde(rename = "type")]
    pub filter_type: FilterType,
    pub label: String,
    #[serde(default)]
    pub options: Vec<FilterOption>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub step: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    #[serde(default)]
    pub priority: FilterPriority,
    #[serde(default)]
    pub show_counts: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
}

impl FilterDefinition {
    pub fn new(id: impl Into<String>, filter_type: FilterType, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            filter_type,
            label: label.into(),
            options: vec![],
            min: None,
            max: None,
            step: None,
            unit: None,
            priority: FilterPriority::default(),
            show_counts: false,
            placeholder: None,
        }
    }

    pub fn with_options(mut self, options: Vec<FilterOption>) -> Self {
        self.options = options;
        self
    }

    pub fn with_range(mut self, min: f64, max: f64, unit: Option<&str>) -> Self {
        self.min = Some(min);
        self.max = Some(max);
        self.unit = unit.map(|u| u.to_string());
        self
    }

    pub fn with_priority(mut self, priority: FilterPriority) -> Self {
        self.priority = priority;
        self
    }

    pub fn option(&self, value: &str) -> Option<&FilterOption> {
        self.options.iter().find(|o| o.value == value)
    }

    /// Display label for one option value, falling back to the raw value
    /// when the option list no longer carries it.
    pub fn option_label<'a>(&'a self, value: &'a str) -> &'a str {
        self.option(value).map(|o| o.label.as_str()).unwrap_or(value)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortOption {
    pub value: String,
    pub label: String,
}

impl SortOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self { value: value.into(), label: label.into() }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterConfig {
    pub filters: Vec<FilterDefinition>,
    pub sort_options: Vec<SortOption>,
    pub default_sort: String,
    #[serde(default)]
    pub quick_filters: Vec<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("filter id `{0}` collides with a reserved query parameter")]
    ReservedFilterId(String),
    #[error("filter id `{0}` is declared more than once")]
    DuplicateFilterId(String),
    #[error("filter `{0}` needs at least one option")]
    MissingOptions(String),
    #[error("option `{value}` of filter `{id}` contains the list separator `,`")]
    SeparatorInOptionValue { id: String, value: String },
    #[error("range filter `{0}` needs both min and max")]
    MissingRangeBounds(String),
    #[error("range filter `{id}` has min {min} greater than max {max}")]
    InvertedRange { id: String, min: f64, max: f64 },
    #[error("default sort `{0}` is not one of the sort options")]
    UnknownDefaultSort(String),
    #[error("quick filter `{0}` does not name a toggle or a filter option")]
    UnresolvedQuickFilter(String),
    #[error("invalid filter config json: {0}")]
    Json(#[from] serde_json::Error),
}

impl FilterConfig {
    /// Parse a JSON filter catalog and validate it.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: FilterConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn definition(&self, id: &str) -> Option<&FilterDefinition> {
        self.filters.iter().find(|f| f.id == id)
    }

    pub fn is_sort_option(&self, value: &str) -> bool {
        self.sort_options.iter().any(|s| s.value == value)
    }

    pub fn filters_with_priority(&self, priority: FilterPriority) -> impl Iterator<Item = &FilterDefinition> {
        self.filters.iter().filter(move |f| f.priority == priority)
    }

    /// Quick filter tokens resolved against this catalog. Tokens that do not
    /// resolve are skipped; `validate` reports them.
    pub fn quick_filters(&self) -> Vec<QuickFilter> {
        self.quick_filters.iter().filter_map(|token| resolve_quick_filter(token, self)).collect()
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut seen = BTreeSet::new();
        for def in &self.filters {
            if def.id == SORT_PARAM || def.id == PAGE_PARAM {
                return Err(ConfigError::ReservedFilterId(def.id.clone()));
            }
            if !seen.insert(def.id.as_str()) {
                return Err(ConfigError::DuplicateFilterId(def.id.clone()));
            }
            if def.filter_type.has_options() && def.options.is_empty() {
                return Err(ConfigError::MissingOptions(def.id.clone()));
            }
            if def.filter_type.is_multi_valued() {
                if let Some(option) = def.options.iter().find(|o| o.value.contains(LIST_SEPARATOR)) {
                    return Err(ConfigError::SeparatorInOptionValue {
                        id: def.id.clone(),
                        value: option.value.clone(),
                    });
                }
            }
            if def.filter_type == FilterType::RangeSlider {
                let (Some(min), Some(max)) = (def.min, def.max) else {
                    return Err(ConfigError::MissingRangeBounds(def.id.clone()));
                };
                if min > max {
                    return Err(ConfigError::InvertedRange { id: def.id.clone(), min, max });
                }
            }
        }
        if !self.is_sort_option(&self.default_sort) {
            return Err(ConfigError::UnknownDefaultSort(self.default_sort.clone()));
        }
        for token in &self.quick_filters {
            if resolve_quick_filter(token, self).is_none() {
                return Err(ConfigError::UnresolvedQuickFilter(token.clone()));
            }
        }
        Ok(())
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> FilterConfig {
        FilterConfig {
            filters: vec![
                FilterDefinition::new("brand", FilterType::MultiSelect, "Brand")
                    .with_options(vec![FilterOption::new("bosch", "Bosch")]),
                FilterDefinition::new("price", FilterType::RangeSlider, "Price").with_range(0.0, 1000.0, Some("£")),
                FilterDefinition::new("verified", FilterType::Toggle, "Verified"),
            ],
            sort_options: vec![SortOption::new("relevance", "Relevance")],
            default_sort: "relevance".to_string(),
            quick_filters: vec!["verified".to_string(), "brand_bosch".to_string()],
        }
    }

    #[test]
    fn valid_config_passes() {
        assert!(sample().validate().is_ok());
    }

    #[test]
    fn default_sort_must_be_listed() {
        let mut config = sample();
        config.default_sort = "newest".to_string();
        assert!(matches!(config.validate(), Err(ConfigError::UnknownDefaultSort(s)) if s == "newest"));
    }

    #[test]
    fn select_filters_need_options() {
        let mut config = sample();
        config.filters[0].options.clear();
        assert!(matches!(config.validate(), Err(ConfigError::MissingOptions(id)) if id == "brand"));
    }

    #[test]
    fn list_option_values_cannot_contain_commas() {
        let mut config = sample();
        config.filters[0].options.push(FilterOption::new("fisher,paykel", "Fisher & Paykel"));
        assert!(matches!(
            config.validate(),
            Err(ConfigError::SeparatorInOptionValue { id, value }) if id == "brand" && value == "fisher,paykel"
        ));
    }

    #[test]
    fn inverted_range_is_rejected() {
        let mut config = sample();
        config.filters[1].min = Some(2000.0);
        assert!(matches!(config.validate(), Err(ConfigError::InvertedRange { .. })));
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let mut config = sample();
        config.filters.push(FilterDefinition::new("verified", FilterType::Toggle, "Again"));
        assert!(matches!(config.validate(), Err(ConfigError::DuplicateFilterId(id)) if id == "verified"));
    }

    #[test]
    fn reserved_ids_are_rejected() {
        let mut config = sample();
        config.filters.push(FilterDefinition::new("page", FilterType::Toggle, "Page"));
        assert!(matches!(config.validate(), Err(ConfigError::ReservedFilterId(id)) if id == "page"));
    }

    #[test]
    fn unresolved_quick_filter_is_rejected() {
        let mut config = sample();
        config.quick_filters.push("brand_miele".to_string());
        assert!(matches!(config.validate(), Err(ConfigError::UnresolvedQuickFilter(t)) if t == "brand_miele"));
    }

    #[test]
    fn parses_camel_case_json() {
        let json = r#"{
            "filters": [
                {"id": "grade", "type": "checkbox-group", "label": "Grade", "showCounts": true, "priority": "high",
                 "options": [{"value": "a", "label": "Grade A"}, {"value": "b", "label": "Grade B", "disabled": true}]},
                {"id": "price", "type": "range-slider", "label": "Price", "min": 0, "max": 800, "step": 10, "unit": "£"}
            ],
            "sortOptions": [{"value": "relevance", "label": "Most relevant"}],
            "defaultSort": "relevance",
            "quickFilters": ["grade_a"]
        }"#;
        let config = FilterConfig::from_json(json).expect("valid config");
        let grade = config.definition("grade").expect("grade filter");
        assert_eq!(grade.filter_type, FilterType::CheckboxGroup);
        assert_eq!(grade.priority, FilterPriority::High);
        assert!(grade.show_counts);
        assert!(grade.options[1].disabled);
        assert_eq!(config.definition("price").and_then(|p| p.step), Some(10.0));
        assert_eq!(config.quick_filters().len(), 1);
    }

    #[test]
    fn malformed_json_is_a_config_error() {
        assert!(matches!(FilterConfig::from_json("{\"filters\": 3}"), Err(ConfigError::Json(_))));
    }

    #[test]
    fn option_label_falls_back_to_raw_value() {
        let config = sample();
        let brand = config.definition("brand").expect("brand filter");
        assert_eq!(brand.option_label("bosch"), "Bosch");
        assert_eq!(brand.option_label("beko"), "beko");
    }
}
