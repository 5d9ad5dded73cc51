//! Quick filter shortcuts: chips that flip one toggle or one option of a facet.
//!
//! A token is either a bare toggle id (`verified`) or `filterId_value`
//! (`brand_bosch`). Filter ids may contain underscores themselves, so the
//! longest matching id prefix wins.

use serde::{Deserialize, Serialize};

use crate::filter_config::{FilterConfig, FilterType};
use crate::filter_state::{FilterState, FilterValue};


#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuickFilter {
    pub token: String,
    pub filter_id: String,
    /// `None` when the shortcut flips a toggle filter.
    pub value: Option<String>,
    pub label: String,
}

pub fn resolve_quick_filter(token: &str, config: &FilterConfig) -> Option<QuickFilter> {
    if let Some(def) = config.definition(token) {
        if def.filter_type == FilterType::Toggle {
            return Some(QuickFilter {
                token: token.to_string(),
                filter_id: def.id.clone(),
                value: None,
                label: def.label.clone(),
            });
        }
    }

    config
        .filters
        .iter()
        .filter(|def| def.filter_type.has_options())
        .filter_map(|def| {
            let rest = token.strip_prefix(def.id.as_str())?.strip_prefix('_')?;
            def.option(rest).map(|option| (def, option))
        })
        .max_by_key(|(def, _)| def.id.len())
        .map(|(def, option)| QuickFilter {
            token: token.to_string(),
            filter_id: def.id.clone(),
            value: Some(option.value.clone()),
            label: option.label.clone(),
        })
}

pub fn is_quick_filter_active(quick_filter: &QuickFilter, state: &FilterState) -> bool {
    match (&quick_filter.value, state.get(&quick_filter.filter_id)) {
        (None, Some(FilterValue::Toggle(on))) => *on,
        (Some(value), Some(FilterValue::Values(values))) => values.contains(value),
        (Some(value), Some(FilterValue::Single(selected))) => selected == value,
        _ => false,
    }
}
