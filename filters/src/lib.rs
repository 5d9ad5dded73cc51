//! Listing filter state kept in the URL query string.
//!
//! [`filter_config`] describes the facets of one listing page,
//! [`url_codec`] maps [`FilterState`] to and from the query string,
//! [`active_filters`] derives chips and counts, and [`controller`] applies
//! user changes back to the URL with debounced writes.

pub mod active_filters;
pub mod controller;
#[cfg(feature = "tokio")]
pub mod debounce;
pub mod filter_config;
pub mod filter_counts;
pub mod filter_state;
pub mod location;
pub mod quick_filters;
pub mod url_codec;

#[cfg(test)]
mod test_support;

pub use active_filters::ActiveFilterTag;
pub use controller::{ControllerOptions, DebounceTicket, FilterController};
#[cfg(feature = "tokio")]
pub use debounce::DebouncedFilters;
pub use filter_config::{ConfigError, FilterConfig, FilterDefinition, FilterOption, FilterPriority, FilterType, SortOption};
pub use filter_counts::{FilterCounts, ResultSummary};
pub use filter_state::{FilterState, FilterValue, RangeValue};
pub use location::{Location, MemoryLocation};
pub use quick_filters::QuickFilter;
pub use url_codec::{FilterHref, build_filter_url, build_search_params, parse_filters_from_url};
