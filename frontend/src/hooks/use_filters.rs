//! Binds a [`FilterController`] to the dioxus router.
//!
//! The controller lives in a signal owned by the page that calls
//! [`use_filters`]. Debounced writes are flushed by a coroutine in the same
//! scope, so leaving the page drops any write that has not landed yet.

use std::pin::pin;
use std::sync::Arc;

use dioxus::logger::tracing;
use dioxus::prelude::*;
use dioxus::router::Navigator;
use filters::{
    ActiveFilterTag, ControllerOptions, DebounceTicket, FilterConfig, FilterController, FilterHref, FilterState,
    FilterValue, Location, QuickFilter,
};
use futures_util::StreamExt;
use futures_util::future::{Either, select};
use gloo_timers::future::TimeoutFuture;

use crate::data_definitions::listing_query::ListingQuery;
use crate::routes::Route;

/// Reads the query segment of the current route and pushes new routes.
#[derive(Clone, Copy)]
pub struct RouterLocation {
    query: ReadSignal<ListingQuery>,
    navigator: Navigator,
}

impl Location for RouterLocation {
    fn search(&self) -> String {
        self.query.read().to_string()
    }

    fn navigate(&mut self, href: &FilterHref) {
        tracing::debug!("filters navigating to {href}");
        self.navigator.push(Route::retailers_from_search(&href.search));
    }
}

#[derive(Clone, Copy)]
pub struct UseFilters {
    controller: Signal<FilterController<RouterLocation>>,
    flusher: Coroutine<DebounceTicket>,
}

pub fn use_filters(config: Arc<FilterConfig>, query: ReadSignal<ListingQuery>, base_path: &str) -> UseFilters {
    let base_path = base_path.to_string();
    let controller = use_signal(move || {
        let location = RouterLocation { query, navigator: navigator() };
        FilterController::new(config, location, ControllerOptions::for_path(base_path))
    });

    let flusher = use_coroutine(move |mut tickets: UnboundedReceiver<DebounceTicket>| {
        let mut controller = controller;
        async move {
            let delay_ms = u32::try_from(controller.peek().debounce_delay().as_millis()).unwrap_or(u32::MAX);
            let mut armed: Option<DebounceTicket> = None;
            loop {
                let Some(ticket) = armed else {
                    armed = tickets.next().await;
                    if armed.is_none() {
                        break;
                    }
                    continue;
                };
                let timeout = pin!(TimeoutFuture::new(delay_ms));
                match select(timeout, tickets.next()).await {
                    Either::Left(_) => {
                        controller.write().flush(ticket);
                        armed = None;
                    }
                    Either::Right((Some(next), _)) => armed = Some(next),
                    Either::Right((None, _)) => break,
                }
            }
        }
    });

    UseFilters { controller, flusher }
}

impl UseFilters {
    pub fn config(&self) -> Arc<FilterConfig> {
        self.controller.read().shared_config()
    }

    /// Committed state merged with a pending write.
    pub fn state(&self) -> FilterState {
        self.controller.read().state()
    }

    /// State as it stands in the address bar.
    pub fn url_state(&self) -> FilterState {
        self.controller.read().url_state()
    }

    pub fn sort(&self) -> String {
        self.controller.read().sort()
    }

    pub fn page(&self) -> u64 {
        self.controller.read().page()
    }

    pub fn has_active_filters(&self) -> bool {
        self.controller.read().has_active_filters()
    }

    pub fn active_filter_count(&self) -> usize {
        self.controller.read().active_filter_count()
    }

    pub fn active_filter_tags(&self) -> Vec<ActiveFilterTag> {
        self.controller.read().active_filter_tags()
    }

    pub fn filter_value(&self, id: &str) -> Option<FilterValue> {
        self.controller.read().filter_value(id)
    }

    pub fn is_option_selected(&self, id: &str, value: &str) -> bool {
        self.controller.read().is_option_selected(id, value)
    }

    pub fn is_quick_filter_active(&self, quick_filter: &QuickFilter) -> bool {
        self.controller.read().is_quick_filter_active(quick_filter)
    }

    pub fn share_href(&self) -> FilterHref {
        self.controller.read().href()
    }

    pub fn set_filter(&self, id: &str, value: FilterValue) {
        let mut controller = self.controller;
        let ticket = controller.write().set_filter(id, value);
        self.arm(ticket);
    }

    pub fn toggle_filter(&self, id: &str, value: &str) {
        let mut controller = self.controller;
        let ticket = controller.write().toggle_filter(id, value);
        self.arm(ticket);
    }

    pub fn clear_filter(&self, id: &str) {
        let mut controller = self.controller;
        let ticket = controller.write().clear_filter(id);
        self.arm(Some(ticket));
    }

    pub fn clear_all_filters(&self) {
        let mut controller = self.controller;
        let ticket = controller.write().clear_all_filters();
        self.arm(Some(ticket));
    }

    pub fn set_sort(&self, value: &str) {
        let mut controller = self.controller;
        let ticket = controller.write().set_sort(value);
        self.arm(ticket);
    }

    pub fn remove_tag(&self, tag: &ActiveFilterTag) {
        let mut controller = self.controller;
        let ticket = controller.write().remove_tag(tag);
        self.arm(ticket);
    }

    pub fn toggle_quick_filter(&self, quick_filter: &QuickFilter) {
        let mut controller = self.controller;
        let ticket = controller.write().toggle_quick_filter(quick_filter);
        self.arm(ticket);
    }

    /// Pages are written at once; an armed ticket goes stale and flushes nothing.
    pub fn set_page(&self, page: u64) {
        let mut controller = self.controller;
        controller.write().set_page(page);
    }

    fn arm(&self, ticket: Option<DebounceTicket>) {
        if let Some(ticket) = ticket {
            self.flusher.send(ticket);
        }
    }
}
