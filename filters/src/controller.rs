//! Filter controller for one listing page.
//!
//! The URL is the store: the controller decodes the host location on every
//! read and keeps nothing but a single pending write. Mutations that come in
//! bursts (checkbox clicks, sort changes) are debounced. Each one returns a
//! [`DebounceTicket`] and the host calls [`FilterController::flush`] with it
//! once [`FilterController::debounce_delay`] has passed. A newer mutation
//! supersedes the older ticket, which then flushes nothing. Page changes
//! are written immediately.

use std::sync::Arc;
use std::time::Duration;

use crate::active_filters::{self, ActiveFilterTag};
use crate::filter_config::{FilterConfig, FilterType};
use crate::filter_state::{FilterState, FilterValue};
use crate::location::Location;
use crate::quick_filters::{QuickFilter, is_quick_filter_active};
use crate::url_codec::{FilterHref, build_filter_href, parse_filters_from_url};

pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(300);


#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ControllerOptions {
    /// Path the encoded query string is appended to.
    pub base_path: String,
    pub debounce: Duration,
}

impl Default for ControllerOptions {
    fn default() -> Self {
        Self { base_path: "/".to_string(), debounce: DEFAULT_DEBOUNCE }
    }
}

impl ControllerOptions {
    pub fn for_path(base_path: impl Into<String>) -> Self {
        Self { base_path: base_path.into(), ..Self::default() }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DebounceTicket(u64);

#[derive(Debug, Clone)]
struct PendingWrite {
    state: FilterState,
    ticket: DebounceTicket,
    // location the write was computed from; if it moves, the write is stale
    base_search: String,
}

#[derive(Debug)]
pub struct FilterController<L: Location> {
    config: Arc<FilterConfig>,
    location: L,
    options: ControllerOptions,
    pending: Option<PendingWrite>,
    next_ticket: u64,
}

impl<L: Location> FilterController<L> {
    pub fn new(config: impl Into<Arc<FilterConfig>>, location: L, options: ControllerOptions) -> Self {
        Self { config: config.into(), location, options, pending: None, next_ticket: 0 }
    }

    pub fn config(&self) -> &FilterConfig {
        &self.config
    }

    pub fn shared_config(&self) -> Arc<FilterConfig> {
        Arc::clone(&self.config)
    }

    pub fn location(&self) -> &L {
        &self.location
    }

    pub fn location_mut(&mut self) -> &mut L {
        &mut self.location
    }

    pub fn options(&self) -> &ControllerOptions {
        &self.options
    }

    pub fn debounce_delay(&self) -> Duration {
        self.options.debounce
    }

    /// State as committed to the URL, ignoring any pending write.
    pub fn url_state(&self) -> FilterState {
        parse_filters_from_url(&self.location.search(), &self.config)
    }

    /// Current state: the pending write while one is outstanding, otherwise
    /// whatever the URL says. An external URL change wins over a pending write.
    pub fn state(&self) -> FilterState {
        let search = self.location.search();
        match &self.pending {
            Some(pending) if pending.base_search == search => pending.state.clone(),
            _ => parse_filters_from_url(&search, &self.config),
        }
    }

    pub fn filter_value(&self, id: &str) -> Option<FilterValue> {
        self.state().filters.remove(id)
    }

    /// Effective sort, falling back to the config default.
    pub fn sort(&self) -> String {
        self.state().sort.unwrap_or_else(|| self.config.default_sort.clone())
    }

    pub fn page(&self) -> u64 {
        self.state().page_or_first()
    }

    pub fn has_active_filters(&self) -> bool {
        active_filters::has_active_filters(&self.state())
    }

    pub fn active_filter_count(&self) -> usize {
        active_filters::active_filter_count(&self.state())
    }

    pub fn active_filter_tags(&self) -> Vec<ActiveFilterTag> {
        active_filters::active_filter_tags(&self.state(), &self.config)
    }

    pub fn is_option_selected(&self, id: &str, value: &str) -> bool {
        active_filters::is_option_selected(&self.state(), id, value)
    }

    pub fn is_quick_filter_active(&self, quick_filter: &QuickFilter) -> bool {
        is_quick_filter_active(quick_filter, &self.state())
    }

    /// Link for the current state, e.g. for a shareable URL.
    pub fn href(&self) -> FilterHref {
        build_filter_href(&self.options.base_path, &self.state(), &self.config)
    }

    pub fn has_pending_write(&self) -> bool {
        self.pending.is_some()
    }

    /// Replace or clear one filter's value and go back to the first page.
    pub fn set_filter(&mut self, id: &str, value: FilterValue) -> Option<DebounceTicket> {
        let filter_type = self.filter_type(id)?;
        let Some(value) = normalize_value(filter_type, value) else {
            tracing::warn!("rejecting value that does not fit filter `{id}` of type {filter_type:?}");
            return None;
        };
        let mut state = self.state();
        state.set(id, value);
        state.page = None;
        Some(self.schedule(state))
    }

    /// Add or remove one option of a multi-valued filter.
    pub fn toggle_filter(&mut self, id: &str, value: &str) -> Option<DebounceTicket> {
        let filter_type = self.filter_type(id)?;
        if !filter_type.is_multi_valued() {
            tracing::warn!("cannot toggle option {value:?} of filter `{id}` of type {filter_type:?}");
            return None;
        }
        let mut values = match self.state().filters.remove(id) {
            Some(FilterValue::Values(values)) => values,
            _ => vec![],
        };
        match values.iter().position(|v| v == value) {
            Some(index) => {
                values.remove(index);
            }
            None => values.push(value.to_string()),
        }
        self.set_filter(id, FilterValue::Values(values))
    }

    pub fn clear_filter(&mut self, id: &str) -> DebounceTicket {
        let mut state = self.state();
        state.remove(id);
        state.page = None;
        self.schedule(state)
    }

    /// Clear every filter. A non-default sort survives.
    pub fn clear_all_filters(&mut self) -> DebounceTicket {
        let default_sort = &self.config.default_sort;
        let sort = self.state().sort.filter(|sort| sort != default_sort);
        self.schedule(FilterState { sort, ..FilterState::default() })
    }

    pub fn set_sort(&mut self, value: &str) -> Option<DebounceTicket> {
        if !self.config.is_sort_option(value) {
            tracing::warn!("rejecting unknown sort {value:?}");
            return None;
        }
        let mut state = self.state();
        state.sort = (value != self.config.default_sort).then(|| value.to_string());
        state.page = None;
        Some(self.schedule(state))
    }

    /// Written immediately, on top of any pending filter change.
    pub fn set_page(&mut self, page: u64) {
        let mut state = self.state();
        state.page = (page > 1).then_some(page);
        self.pending = None;
        self.write(&state);
    }

    /// Remove the constraint an active filter chip stands for.
    pub fn remove_tag(&mut self, tag: &ActiveFilterTag) -> Option<DebounceTicket> {
        let filter_type = self.filter_type(&tag.filter_id)?;
        if !filter_type.is_multi_valued() {
            return Some(self.clear_filter(&tag.filter_id));
        }
        let remaining: Vec<String> = match self.state().filters.remove(&tag.filter_id) {
            Some(FilterValue::Values(values)) => values.into_iter().filter(|v| *v != tag.value).collect(),
            _ => vec![],
        };
        self.set_filter(&tag.filter_id, FilterValue::Values(remaining))
    }

    pub fn toggle_quick_filter(&mut self, quick_filter: &QuickFilter) -> Option<DebounceTicket> {
        let active = self.is_quick_filter_active(quick_filter);
        let id = quick_filter.filter_id.as_str();
        match &quick_filter.value {
            None => self.set_filter(id, FilterValue::Toggle(!active)),
            Some(value) => match self.filter_type(id)? {
                t if t.is_multi_valued() => self.toggle_filter(id, value),
                _ if active => Some(self.clear_filter(id)),
                _ => self.set_filter(id, FilterValue::Single(value.clone())),
            },
        }
    }

    /// Commit the pending write if `ticket` is still the latest one.
    pub fn flush(&mut self, ticket: DebounceTicket) -> bool {
        if self.pending.as_ref().map(|pending| pending.ticket) != Some(ticket) {
            return false;
        }
        self.flush_pending()
    }

    pub fn flush_pending(&mut self) -> bool {
        let Some(pending) = self.pending.take() else { return false };
        if pending.base_search != self.location.search() {
            tracing::debug!("location changed while a filter write was pending, discarding it");
            return false;
        }
        self.write(&pending.state);
        true
    }

    pub fn cancel_pending(&mut self) -> bool {
        self.pending.take().is_some()
    }

    fn filter_type(&self, id: &str) -> Option<FilterType> {
        let filter_type = self.config.definition(id).map(|def| def.filter_type);
        if filter_type.is_none() {
            tracing::warn!("ignoring change to unknown filter `{id}`");
        }
        filter_type
    }

    fn schedule(&mut self, state: FilterState) -> DebounceTicket {
        self.next_ticket += 1;
        let ticket = DebounceTicket(self.next_ticket);
        if self.pending.is_some() {
            tracing::trace!("superseding pending filter write");
        }
        self.pending = Some(PendingWrite { state, ticket, base_search: self.location.search() });
        ticket
    }

    fn write(&mut self, state: &FilterState) {
        let href = build_filter_href(&self.options.base_path, state, &self.config);
        let current = self.location.search();
        if href.search == current.strip_prefix('?').unwrap_or(&current) {
            tracing::trace!("filter write leaves the url unchanged");
            return;
        }
        tracing::debug!("navigating to {href}");
        self.location.navigate(&href);
    }
}

/// Check the value's shape against the filter type and tidy list values.
fn normalize_value(filter_type: FilterType, value: FilterValue) -> Option<FilterValue> {
    match value {
        FilterValue::Values(values) if filter_type.is_multi_valued() => {
            let mut tidy: Vec<String> = Vec::with_capacity(values.len());
            for v in values {
                if !v.is_empty() && !tidy.contains(&v) {
                    tidy.push(v);
                }
            }
            Some(FilterValue::Values(tidy))
        }
        FilterValue::Single(_) if filter_type == FilterType::SingleSelect => Some(value),
        FilterValue::Toggle(_) if filter_type == FilterType::Toggle => Some(value),
        FilterValue::Range(range)
            if filter_type == FilterType::RangeSlider && range.min.is_finite() && range.max.is_finite() =>
        {
            Some(value)
        }
        _ => None,
    }
}


#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::filter_state::RangeValue;
    use crate::location::MemoryLocation;
    use crate::test_support::scenario_config;

    fn controller(search: &str) -> FilterController<MemoryLocation> {
        FilterController::new(
            scenario_config(),
            MemoryLocation::new("/retailers", search),
            ControllerOptions::for_path("/retailers"),
        )
    }

    fn navigations(c: &FilterController<MemoryLocation>) -> usize {
        c.location().navigation_count()
    }

    #[test]
    fn rapid_changes_coalesce_into_one_write() {
        let mut c = controller("");
        let first = c.toggle_filter("brand", "bosch").expect("known filter");
        let second = c.toggle_filter("brand", "miele").expect("known filter");
        let last = c.set_filter("verified", FilterValue::Toggle(true)).expect("known filter");

        assert!(!c.flush(first));
        assert!(!c.flush(second));
        assert_eq!(navigations(&c), 0);

        assert!(c.flush(last));
        assert_eq!(navigations(&c), 1);
        assert_eq!(c.location().current().to_string(), "/retailers?brand=bosch,miele&verified=1");
        assert!(!c.flush(last));
    }

    #[test]
    fn pending_state_is_visible_before_the_write() {
        let mut c = controller("brand=bosch");
        c.toggle_filter("brand", "miele");
        assert!(c.is_option_selected("brand", "miele"));
        assert_eq!(c.url_state().get("brand"), Some(&FilterValue::values(["bosch"])));
        assert_eq!(c.active_filter_count(), 2);
    }

    #[test]
    fn filter_changes_reset_the_page() {
        let mut c = controller("brand=bosch&page=4");
        let ticket = c.set_filter("price", FilterValue::Range(RangeValue::new(50.0, 200.0))).expect("known filter");
        c.flush(ticket);
        assert_eq!(c.location().search(), "brand=bosch&price=50_200");

        c.set_page(3);
        let ticket = c.set_sort("price_desc").expect("known sort");
        c.flush(ticket);
        assert_eq!(c.location().search(), "brand=bosch&price=50_200&sort=price_desc");

        c.set_page(2);
        let ticket = c.clear_filter("brand");
        c.flush(ticket);
        assert_eq!(c.location().search(), "price=50_200&sort=price_desc");
        assert_eq!(c.page(), 1);
    }

    #[test]
    fn toggling_an_option_resets_the_page() {
        let mut c = controller("brand=bosch&page=4");
        let ticket = c.toggle_filter("brand", "miele").expect("known filter");
        assert_eq!(c.page(), 1);
        c.flush(ticket);
        assert_eq!(c.location().search(), "brand=bosch,miele");
    }

    #[test]
    fn removing_a_tag_resets_the_page() {
        let mut c = controller("brand=bosch,miele&verified=1&page=4");
        let miele = c.active_filter_tags().into_iter().find(|t| t.value == "miele").expect("tag");
        let ticket = c.remove_tag(&miele).expect("known filter");
        c.flush(ticket);
        assert_eq!(c.location().search(), "brand=bosch&verified=1");

        c.set_page(3);
        let verified = c.active_filter_tags().into_iter().find(|t| t.filter_id == "verified").expect("tag");
        let ticket = c.remove_tag(&verified).expect("known filter");
        c.flush(ticket);
        assert_eq!(c.location().search(), "brand=bosch");
    }

    #[test]
    fn quick_filters_reset_the_page() {
        let mut c = controller("page=4");
        let quick = c.config().quick_filters();
        let bosch = quick.iter().find(|q| q.token == "brand_bosch").expect("configured");
        let ticket = c.toggle_quick_filter(bosch).expect("known filter");
        c.flush(ticket);
        assert_eq!(c.location().search(), "brand=bosch");

        c.set_page(2);
        let verified = quick.iter().find(|q| q.token == "verified").expect("configured");
        let ticket = c.toggle_quick_filter(verified).expect("known filter");
        c.flush(ticket);
        assert_eq!(c.location().search(), "brand=bosch&verified=1");
    }

    #[test]
    fn clear_all_keeps_an_explicit_sort() {
        let mut c = controller("brand=bosch&sort=price_desc");
        let ticket = c.clear_all_filters();
        c.flush(ticket);
        assert_eq!(c.location().current().to_string(), "/retailers?sort=price_desc");
    }

    #[test]
    fn clear_all_with_default_sort_leaves_a_bare_path() {
        let mut c = controller("brand=bosch&sort=relevance&page=2");
        let ticket = c.clear_all_filters();
        c.flush(ticket);
        assert_eq!(c.location().current().to_string(), "/retailers");
    }

    #[test]
    fn set_page_is_immediate_and_includes_pending_changes() {
        let mut c = controller("");
        let ticket = c.toggle_filter("brand", "bosch").expect("known filter");
        c.set_page(2);
        assert_eq!(navigations(&c), 1);
        assert_eq!(c.location().search(), "brand=bosch&page=2");
        assert!(!c.has_pending_write());
        assert!(!c.flush(ticket));
        assert_eq!(navigations(&c), 1);
    }

    #[test]
    fn set_page_to_first_page_drops_the_param() {
        let mut c = controller("page=5");
        c.set_page(1);
        assert_eq!(c.location().current().to_string(), "/retailers");
        c.set_page(0);
        assert_eq!(navigations(&c), 1);
    }

    #[test]
    fn toggling_the_last_value_clears_the_key() {
        let mut c = controller("brand=bosch");
        let ticket = c.toggle_filter("brand", "bosch").expect("known filter");
        assert_eq!(c.state().get("brand"), None);
        c.flush(ticket);
        assert_eq!(c.location().search(), "");
    }

    #[test]
    fn rejected_changes_schedule_nothing() {
        let mut c = controller("");
        assert!(c.set_filter("colour", FilterValue::values(["red"])).is_none());
        assert!(c.set_filter("verified", FilterValue::values(["1"])).is_none());
        assert!(c.set_filter("price", FilterValue::Range(RangeValue::new(f64::NAN, 3.0))).is_none());
        assert!(c.toggle_filter("verified", "1").is_none());
        assert!(c.set_sort("cheapest").is_none());
        assert!(!c.has_pending_write());
    }

    #[test]
    fn default_sort_is_not_written() {
        let mut c = controller("sort=price_asc");
        let ticket = c.set_sort("relevance").expect("known sort");
        c.flush(ticket);
        assert_eq!(c.location().search(), "");
        assert_eq!(c.sort(), "relevance");
    }

    #[test]
    fn back_navigation_wins_over_a_pending_write() {
        let mut c = controller("");
        let ticket = c.toggle_filter("brand", "bosch").expect("known filter");
        c.flush(ticket);

        let ticket = c.toggle_filter("brand", "miele").expect("known filter");
        c.location_mut().back();
        assert_eq!(c.state(), FilterState::default());
        assert!(!c.flush(ticket));
        assert_eq!(c.location().search(), "");
        assert_eq!(navigations(&c), 1);
    }

    #[test]
    fn cancelled_writes_never_land() {
        let mut c = controller("");
        let ticket = c.set_filter("verified", FilterValue::Toggle(true)).expect("known filter");
        assert!(c.cancel_pending());
        assert!(!c.flush(ticket));
        assert_eq!(navigations(&c), 0);
    }

    #[test]
    fn removing_tags() {
        let mut c = controller("brand=bosch,miele&price=10_20&verified=1");
        let tags = c.active_filter_tags();
        assert_eq!(tags.len(), 4);
        for tag in &tags {
            c.remove_tag(tag);
        }
        assert!(!c.has_active_filters());
        c.flush_pending();
        assert_eq!(c.location().search(), "");
    }

    #[test]
    fn quick_filters_toggle_their_target() {
        let mut c = controller("");
        let quick = c.config().quick_filters();
        let verified = quick.iter().find(|q| q.token == "verified").expect("configured");
        let bosch = quick.iter().find(|q| q.token == "brand_bosch").expect("configured");

        c.toggle_quick_filter(verified);
        c.toggle_quick_filter(bosch);
        assert!(c.is_quick_filter_active(verified));
        assert!(c.is_quick_filter_active(bosch));
        c.flush_pending();
        assert_eq!(c.location().search(), "brand=bosch&verified=1");

        c.toggle_quick_filter(verified);
        c.flush_pending();
        assert_eq!(c.location().search(), "brand=bosch");
    }

    #[test]
    fn single_select_values_are_set_and_cleared() {
        let mut c = controller("");
        c.set_filter("region", FilterValue::Single("london".to_string()));
        assert_eq!(c.filter_value("region"), Some(FilterValue::Single("london".to_string())));
        c.set_filter("region", FilterValue::Single(String::new()));
        assert_eq!(c.filter_value("region"), None);
    }

    #[test]
    fn unchanged_writes_are_skipped() {
        let mut c = controller("brand=bosch");
        let ticket = c.set_filter("brand", FilterValue::values(["bosch", "bosch", ""])).expect("known filter");
        assert!(c.flush(ticket));
        assert_eq!(navigations(&c), 0);
    }
}
