//! Filter configuration shipped with the retailers page.

use dioxus::logger::tracing;
use filters::{FilterConfig, SortOption};

const RETAILER_FILTERS: &str = include_str!("../../assets/retailer_filters.json");

pub const RETAILER_NOUN: &str = "retailers";

pub fn retailer_filter_config() -> FilterConfig {
    match FilterConfig::from_json(RETAILER_FILTERS) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("invalid retailer filter config: {e}");
            if cfg!(debug_assertions) {
                panic!("invalid retailer filter config: {e}");
            }
            // release builds keep the page usable without facets
            FilterConfig {
                filters: Vec::new(),
                sort_options: vec![SortOption::new("relevance", "Most relevant")],
                default_sort: "relevance".to_string(),
                quick_filters: Vec::new(),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shipped_config_loads() {
        let config = retailer_filter_config();
        assert!(config.definition("brand").is_some());
        assert_eq!(config.default_sort, "relevance");
    }
}
