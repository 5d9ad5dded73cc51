//! The navigation capability the filter controller writes through.

use crate::url_codec::FilterHref;


/// Host-owned browsable location. The controller never caches what it reads
/// from here, so back/forward navigation is picked up on the next read.
pub trait Location {
    /// Query string of the current location, with or without the leading `?`.
    fn search(&self) -> String;

    fn navigate(&mut self, href: &FilterHref);
}

/// In-memory history, for hosts without a browser and for tests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemoryLocation {
    history: Vec<FilterHref>,
    index: usize,
    navigations: usize,
}

impl MemoryLocation {
    pub fn new(path: impl Into<String>, search: impl Into<String>) -> Self {
        let search: String = search.into();
        let search = search.strip_prefix('?').map(str::to_string).unwrap_or(search);
        Self { history: vec![FilterHref { path: path.into(), search }], index: 0, navigations: 0 }
    }

    pub fn current(&self) -> &FilterHref {
        &self.history[self.index]
    }

    pub fn history(&self) -> &[FilterHref] {
        &self.history
    }

    /// Navigations issued through `navigate` since creation.
    pub fn navigation_count(&self) -> usize {
        self.navigations
    }

    pub fn back(&mut self) -> bool {
        if self.index == 0 {
            return false;
        }
        self.index -= 1;
        true
    }

    pub fn forward(&mut self) -> bool {
        if self.index + 1 >= self.history.len() {
            return false;
        }
        self.index += 1;
        true
    }
}

impl Location for MemoryLocation {
    fn search(&self) -> String {
        self.current().search.clone()
    }

    fn navigate(&mut self, href: &FilterHref) {
        self.history.truncate(self.index + 1);
        self.history.push(href.clone());
        self.index = self.history.len() - 1;
        self.navigations += 1;
    }
}
