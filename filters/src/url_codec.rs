//! Translation between [`FilterState`] and the listing page query string.
//!
//! Grammar: one parameter per active filter named by its id. Multi-valued
//! filters are comma-joined (`brand=bosch,samsung`), ranges are
//! underscore-joined (`price=50_200`), toggles are `verified=1` when on and
//! absent otherwise. `sort` is written only when it differs from the default
//! and `page` only past the first page. Decoding never fails: anything it
//! cannot read is treated as absent.

use std::collections::BTreeMap;
use std::fmt::Display;

use url::form_urlencoded;

use crate::filter_config::{FilterConfig, FilterDefinition, FilterType};
use crate::filter_state::{FilterState, FilterValue, RangeValue};

pub const SORT_PARAM: &str = "sort";
pub const PAGE_PARAM: &str = "page";

pub(crate) const LIST_SEPARATOR: &str = ",";
const RANGE_SEPARATOR: &str = "_";


/// A navigation target: path plus encoded query string (without `?`).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterHref {
    pub path: String,
    pub search: String,
}

impl Display for FilterHref {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.path)?;
        if !self.search.is_empty() {
            write!(f, "?{}", self.search)?;
        }
        Ok(())
    }
}

pub fn parse_filters_from_url(search: &str, config: &FilterConfig) -> FilterState {
    let search = search.strip_prefix('?').unwrap_or(search);
    let mut params: BTreeMap<String, String> = BTreeMap::new();
    for (name, value) in form_urlencoded::parse(search.as_bytes()) {
        params.entry(name.into_owned()).or_insert_with(|| value.into_owned());
    }

    let mut state = FilterState::default();
    for def in &config.filters {
        let Some(raw) = params.remove(&def.id) else { continue };
        match decode_value(def, &raw) {
            Some(value) => {
                state.filters.insert(def.id.clone(), value);
            }
            None => tracing::debug!("dropping unreadable value {raw:?} for filter `{}`", def.id),
        }
    }

    if let Some(sort) = params.remove(SORT_PARAM) {
        if config.is_sort_option(&sort) {
            state.sort = Some(sort);
        } else {
            tracing::debug!("ignoring unknown sort {sort:?}");
        }
    }
    if let Some(page) = params.remove(PAGE_PARAM) {
        match page.trim().parse::<u64>() {
            Ok(page) if page > 0 => state.page = Some(page),
            _ => tracing::debug!("ignoring invalid page {page:?}"),
        }
    }
    if !params.is_empty() {
        tracing::trace!("ignoring unknown query parameters: {:?}", params.keys().collect::<Vec<_>>());
    }
    state
}

fn decode_value(def: &FilterDefinition, raw: &str) -> Option<FilterValue> {
    match def.filter_type {
        t if t.is_multi_valued() => {
            let mut values: Vec<String> = Vec::new();
            for token in raw.split(LIST_SEPARATOR) {
                if !token.is_empty() && !values.iter().any(|v| v == token) {
                    values.push(token.to_string());
                }
            }
            if values.is_empty() { None } else { Some(FilterValue::Values(values)) }
        }
        FilterType::RangeSlider => parse_range(raw).map(FilterValue::Range),
        FilterType::Toggle => Some(FilterValue::Toggle(raw == "1" || raw == "true")),
        _ => {
            if raw.is_empty() { None } else { Some(FilterValue::Single(raw.to_string())) }
        }
    }
}

/// Parse `min_max`; both bounds must be finite numbers.
pub fn parse_range(raw: &str) -> Option<RangeValue> {
    let mut parts = raw.split(RANGE_SEPARATOR);
    let (Some(min), Some(max), None) = (parts.next(), parts.next(), parts.next()) else {
        return None;
    };
    Some(RangeValue::new(parse_number(min)?, parse_number(max)?))
}

fn parse_number(token: &str) -> Option<f64> {
    token.trim().parse::<f64>().ok().filter(|n| n.is_finite())
}

pub fn format_range(range: &RangeValue) -> String {
    format!("{}{RANGE_SEPARATOR}{}", range.min, range.max)
}

/// Encode the state into ordered `(name, value)` pairs. Values are not yet
/// percent-encoded; see [`to_query_string`].
pub fn build_search_params(state: &FilterState, config: &FilterConfig) -> Vec<(String, String)> {
    let mut params = Vec::new();
    for def in &config.filters {
        let Some(value) = state.filters.get(&def.id) else { continue };
        if let Some(encoded) = encode_value(def, value) {
            params.push((def.id.clone(), encoded));
        }
    }
    for id in state.filters.keys().filter(|id| config.definition(id).is_none()) {
        tracing::debug!("skipping unknown filter `{id}` while encoding");
    }

    if let Some(sort) = &state.sort {
        if *sort != config.default_sort {
            params.push((SORT_PARAM.to_string(), sort.clone()));
        }
    }
    if let Some(page) = state.page {
        if page > 1 {
            params.push((PAGE_PARAM.to_string(), page.to_string()));
        }
    }
    params
}

fn encode_value(def: &FilterDefinition, value: &FilterValue) -> Option<String> {
    match (def.filter_type, value) {
        (t, FilterValue::Values(values)) if t.is_multi_valued() => {
            let values: Vec<&str> = values.iter().map(String::as_str).filter(|v| !v.is_empty()).collect();
            if values.is_empty() {
                None
            } else {
                Some(values.join(LIST_SEPARATOR))
            }
        }
        (FilterType::RangeSlider, FilterValue::Range(range)) => Some(format_range(range)),
        (FilterType::Toggle, FilterValue::Toggle(on)) => on.then(|| "1".to_string()),
        (FilterType::SingleSelect, FilterValue::Single(s)) if !s.is_empty() => Some(s.clone()),
        (FilterType::SingleSelect, FilterValue::Single(_)) => None,
        (t, other) => {
            tracing::debug!("skipping {other:?} for filter `{}` of type {t:?}", def.id);
            None
        }
    }
}

/// Join encoded pairs into a query string without the leading `?`.
pub fn to_query_string(params: &[(String, String)]) -> String {
    params
        .iter()
        .map(|(name, value)| format!("{}={}", encode_component(name), encode_list(value)))
        .collect::<Vec<_>>()
        .join("&")
}

fn encode_component(text: &str) -> String {
    form_urlencoded::byte_serialize(text.as_bytes()).collect()
}

// The list separator stays literal so multi-valued params read as `a,b`.
fn encode_list(value: &str) -> String {
    value
        .split(LIST_SEPARATOR)
        .map(encode_component)
        .collect::<Vec<_>>()
        .join(LIST_SEPARATOR)
}

pub fn build_query_string(state: &FilterState, config: &FilterConfig) -> String {
    to_query_string(&build_search_params(state, config))
}

pub fn build_filter_href(base_path: &str, state: &FilterState, config: &FilterConfig) -> FilterHref {
    FilterHref { path: base_path.to_string(), search: build_query_string(state, config) }
}

/// Full URL for `state` under `base_path`; the bare path when nothing is set.
pub fn build_filter_url(base_path: &str, state: &FilterState, config: &FilterConfig) -> String {
    build_filter_href(base_path, state, config).to_string()
}
