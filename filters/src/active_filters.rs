//! Summaries derived from a [`FilterState`]: whether anything is applied, how
//! many constraints are applied, and one removable tag per constraint.

use serde::{Deserialize, Serialize};

use crate::filter_config::{FilterConfig, FilterDefinition};
use crate::filter_state::{FilterState, FilterValue, RangeValue};
use crate::url_codec::format_range;


#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActiveFilterTag {
    pub filter_id: String,
    pub value: String,
    pub label: String,
}

pub fn has_active_filters(state: &FilterState) -> bool {
    state.filters.values().any(|v| !v.is_empty())
}

/// Arrays count once per selected value; every other active facet counts once.
pub fn active_filter_count(state: &FilterState) -> usize {
    state.filters.values().map(FilterValue::active_count).sum()
}

pub fn is_option_selected(state: &FilterState, filter_id: &str, value: &str) -> bool {
    match state.get(filter_id) {
        Some(FilterValue::Values(values)) => values.iter().any(|v| v == value),
        Some(FilterValue::Single(selected)) => selected == value,
        _ => false,
    }
}

/// Tags in config order, so chips render in the same order as the filter bar.
pub fn active_filter_tags(state: &FilterState, config: &FilterConfig) -> Vec<ActiveFilterTag> {
    let mut tags = Vec::new();
    for def in &config.filters {
        let Some(value) = state.get(&def.id) else { continue };
        match value {
            FilterValue::Values(values) => {
                for v in values {
                    tags.push(option_tag(def, v));
                }
            }
            FilterValue::Single(v) if !v.is_empty() => tags.push(option_tag(def, v)),
            FilterValue::Toggle(true) => tags.push(ActiveFilterTag {
                filter_id: def.id.clone(),
                value: "true".to_string(),
                label: def.label.clone(),
            }),
            FilterValue::Range(range) => tags.push(ActiveFilterTag {
                filter_id: def.id.clone(),
                value: format_range(range),
                label: range_label(range, def.unit.as_deref()),
            }),
            _ => {}
        }
    }
    tags
}

fn option_tag(def: &FilterDefinition, value: &str) -> ActiveFilterTag {
    ActiveFilterTag {
        filter_id: def.id.clone(),
        value: value.to_string(),
        label: def.option_label(value).to_string(),
    }
}

pub fn range_label(range: &RangeValue, unit: Option<&str>) -> String {
    let unit = unit.unwrap_or("");
    format!("{unit}{} - {unit}{}", range.min, range.max)
}


#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::test_support::scenario_config;
    use crate::url_codec::parse_filters_from_url;

    #[test]
    fn count_is_per_value_for_arrays() {
        let state = FilterState::default()
            .with("category", FilterValue::values(["a", "b", "c"]))
            .with("inStock", FilterValue::Toggle(true));
        assert_eq!(active_filter_count(&state), 4);
        assert!(has_active_filters(&state));
    }

    #[test]
    fn false_toggles_and_sort_are_not_active() {
        let mut state = FilterState::default().with_sort("price_desc").with_page(3);
        state.filters.insert("verified".to_string(), FilterValue::Toggle(false));
        assert!(!has_active_filters(&state));
        assert_eq!(active_filter_count(&state), 0);
    }

    #[test]
    fn tags_for_the_documented_scenario() {
        let config = scenario_config();
        let state = parse_filters_from_url("brand=bosch,hotpoint&price=100_500&verified=1&sort=price_asc&page=3", &config);
        let tags = active_filter_tags(&state, &config);
        let expected = vec![
            ActiveFilterTag { filter_id: "brand".into(), value: "bosch".into(), label: "Bosch".into() },
            ActiveFilterTag { filter_id: "brand".into(), value: "hotpoint".into(), label: "Hotpoint".into() },
            ActiveFilterTag { filter_id: "price".into(), value: "100_500".into(), label: "£100 - £500".into() },
            ActiveFilterTag { filter_id: "verified".into(), value: "true".into(), label: "Verified sellers".into() },
        ];
        assert_eq!(tags, expected);
    }

    #[test]
    fn unknown_options_fall_back_to_the_raw_value() {
        let config = scenario_config();
        let state = FilterState::default()
            .with("brand", FilterValue::values(["smeg"]))
            .with("region", FilterValue::Single("london".to_string()));
        let labels: Vec<String> = active_filter_tags(&state, &config).into_iter().map(|t| t.label).collect();
        assert_eq!(labels, vec!["smeg".to_string(), "Greater London".to_string()]);
    }

    #[test]
    fn range_label_without_unit() {
        assert_eq!(range_label(&RangeValue::new(2.5, 10.0), None), "2.5 - 10");
    }

    #[test]
    fn option_selection_lookup() {
        let state = FilterState::default().with("brand", FilterValue::values(["bosch"]));
        assert!(is_option_selected(&state, "brand", "bosch"));
        assert!(!is_option_selected(&state, "brand", "miele"));
        assert!(!is_option_selected(&state, "region", "bosch"));
    }
}
