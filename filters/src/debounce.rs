//! Tokio host for [`FilterController`]: one sleeping task per pending write.
//!
//! Every debounced mutation aborts the previous task and spawns a new one,
//! so at most one write is in flight. Must be used inside a tokio runtime.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tokio::task::AbortHandle;

use crate::active_filters::ActiveFilterTag;
use crate::controller::{DebounceTicket, FilterController};
use crate::filter_state::{FilterState, FilterValue};
use crate::location::Location;
use crate::quick_filters::QuickFilter;


pub struct DebouncedFilters<L: Location + Send + 'static> {
    controller: Arc<Mutex<FilterController<L>>>,
    timer: Mutex<Option<AbortHandle>>,
}

impl<L: Location + Send + 'static> DebouncedFilters<L> {
    pub fn new(controller: FilterController<L>) -> Self {
        Self { controller: Arc::new(Mutex::new(controller)), timer: Mutex::new(None) }
    }

    pub fn with_controller<R>(&self, f: impl FnOnce(&mut FilterController<L>) -> R) -> R {
        let mut controller = lock(&self.controller);
        f(&mut *controller)
    }

    pub fn state(&self) -> FilterState {
        self.with_controller(|c| c.state())
    }

    pub fn set_filter(&self, id: &str, value: FilterValue) {
        self.debounced(|c| c.set_filter(id, value));
    }

    pub fn toggle_filter(&self, id: &str, value: &str) {
        self.debounced(|c| c.toggle_filter(id, value));
    }

    pub fn clear_filter(&self, id: &str) {
        self.debounced(|c| Some(c.clear_filter(id)));
    }

    pub fn clear_all_filters(&self) {
        self.debounced(|c| Some(c.clear_all_filters()));
    }

    pub fn set_sort(&self, value: &str) {
        self.debounced(|c| c.set_sort(value));
    }

    pub fn remove_tag(&self, tag: &ActiveFilterTag) {
        self.debounced(|c| c.remove_tag(tag));
    }

    pub fn toggle_quick_filter(&self, quick_filter: &QuickFilter) {
        self.debounced(|c| c.toggle_quick_filter(quick_filter));
    }

    pub fn set_page(&self, page: u64) {
        let mut controller = lock(&self.controller);
        self.disarm();
        controller.set_page(page);
    }

    /// Apply `change` and arm its ticket under one controller lock, so the
    /// armed timer always belongs to the newest ticket.
    fn debounced(&self, change: impl FnOnce(&mut FilterController<L>) -> Option<DebounceTicket>) {
        let mut controller = lock(&self.controller);
        let Some(ticket) = change(&mut *controller) else { return };
        let delay = controller.debounce_delay();
        let shared = Arc::clone(&self.controller);
        let task = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            lock(&shared).flush(ticket);
        });
        if let Some(previous) = lock(&self.timer).replace(task.abort_handle()) {
            previous.abort();
        }
    }

    fn disarm(&self) {
        if let Some(previous) = lock(&self.timer).take() {
            previous.abort();
        }
    }
}

impl<L: Location + Send + 'static> Drop for DebouncedFilters<L> {
    fn drop(&mut self) {
        self.disarm();
        if lock(&self.controller).cancel_pending() {
            tracing::debug!("dropped a pending filter write on teardown");
        }
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}
