//! In-memory retailer listings used until the directory API is wired up.
//!
//! Matching, facet counts, sorting and paging all run against the committed
//! URL state, the same inputs the remote query will take.

use std::cmp::Ordering;

use dioxus::logger::tracing;
use filters::{FilterConfig, FilterCounts, FilterState, FilterType, FilterValue, ResultSummary};
use serde::Deserialize;

const SAMPLE_LISTINGS: &str = include_str!("../../assets/sample_listings.json");

pub const PAGE_SIZE: u64 = 6;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Listing {
    pub id: String,
    pub name: String,
    pub location: String,
    pub appliances: Vec<String>,
    pub brands: Vec<String>,
    pub grades: Vec<String>,
    pub services: Vec<String>,
    pub price_from: f64,
    pub warranty_months: u32,
    pub verified: bool,
    pub open_weekends: bool,
    pub rating: f32,
}

impl Listing {
    fn option_values(&self, filter_id: &str) -> &[String] {
        match filter_id {
            "appliance" => &self.appliances,
            "brand" => &self.brands,
            "grade" => &self.grades,
            "service" => &self.services,
            _ => &[],
        }
    }

    fn matches(&self, filter_id: &str, value: &FilterValue) -> bool {
        match (filter_id, value) {
            ("price", FilterValue::Range(range)) => self.price_from >= range.min && self.price_from <= range.max,
            ("location", FilterValue::Single(location)) => self.location == *location,
            ("warranty", FilterValue::Single(months)) => {
                months.parse::<u32>().is_ok_and(|months| self.warranty_months >= months)
            }
            ("verified", FilterValue::Toggle(on)) => !on || self.verified,
            ("open_weekends", FilterValue::Toggle(on)) => !on || self.open_weekends,
            (id, FilterValue::Values(values)) => {
                let held = self.option_values(id);
                values.iter().any(|v| held.contains(v))
            }
            (id, other) => {
                tracing::warn!("no listing attribute for filter `{id}` = {other:?}");
                true
            }
        }
    }

    fn matches_all(&self, state: &FilterState, except: Option<&str>) -> bool {
        state
            .filters
            .iter()
            .filter(|(id, _)| Some(id.as_str()) != except)
            .all(|(id, value)| self.matches(id, value))
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ListingResults {
    pub listings: Vec<Listing>,
    pub summary: ResultSummary,
    pub counts: FilterCounts,
    pub page: u64,
    pub page_count: u64,
}

pub fn sample_listings() -> Vec<Listing> {
    match serde_json::from_str(SAMPLE_LISTINGS) {
        Ok(listings) => listings,
        Err(e) => {
            tracing::error!("failed to load sample listings: {e}");
            Vec::new()
        }
    }
}

pub fn query_listings(listings: &[Listing], state: &FilterState, config: &FilterConfig) -> ListingResults {
    let mut matching: Vec<&Listing> = listings.iter().filter(|l| l.matches_all(state, None)).collect();
    let sort = state.sort.as_deref().unwrap_or(&config.default_sort);
    sort_listings(&mut matching, sort);

    let summary = ResultSummary { total_count: listings.len() as u64, filtered_count: matching.len() as u64 };
    let page_count = summary.filtered_count.div_ceil(PAGE_SIZE);
    let page = state.page_or_first();
    let page_listings = matching
        .into_iter()
        .skip(((page - 1) * PAGE_SIZE) as usize)
        .take(PAGE_SIZE as usize)
        .cloned()
        .collect();

    ListingResults { listings: page_listings, summary, counts: facet_counts(listings, state, config), page, page_count }
}

/// Per-option counts with every other active filter applied, so a count says
/// how many results picking that option would give.
fn facet_counts(listings: &[Listing], state: &FilterState, config: &FilterConfig) -> FilterCounts {
    let mut counts = FilterCounts::default();
    for definition in config.filters.iter().filter(|f| f.filter_type.has_options()) {
        let id = definition.id.as_str();
        let candidates: Vec<&Listing> = listings.iter().filter(|l| l.matches_all(state, Some(id))).collect();
        for option in &definition.options {
            let value = match definition.filter_type {
                FilterType::SingleSelect => FilterValue::Single(option.value.clone()),
                _ => FilterValue::values([option.value.as_str()]),
            };
            let count = candidates.iter().filter(|l| l.matches(id, &value)).count();
            counts.insert(id, option.value.as_str(), count as u64);
        }
    }
    counts
}

fn sort_listings(listings: &mut [&Listing], sort: &str) {
    match sort {
        "rating_desc" => listings.sort_by(|a, b| b.rating.partial_cmp(&a.rating).unwrap_or(Ordering::Equal)),
        "price_asc" => listings.sort_by(|a, b| a.price_from.partial_cmp(&b.price_from).unwrap_or(Ordering::Equal)),
        "price_desc" => listings.sort_by(|a, b| b.price_from.partial_cmp(&a.price_from).unwrap_or(Ordering::Equal)),
        "name_asc" => listings.sort_by(|a, b| a.name.cmp(&b.name)),
        // relevance keeps the catalog order
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use filters::parse_filters_from_url;

    use super::*;
    use crate::data_definitions::listing_config::retailer_filter_config;

    #[test]
    fn unfiltered_query_pages_the_whole_catalog() {
        let listings = sample_listings();
        let config = retailer_filter_config();
        let results = query_listings(&listings, &FilterState::default(), &config);
        assert!(!results.summary.is_filtered());
        assert_eq!(results.summary.total_count, listings.len() as u64);
        assert_eq!(results.listings.len() as u64, PAGE_SIZE.min(listings.len() as u64));
        assert_eq!(results.page, 1);
    }

    #[test]
    fn counts_ignore_the_facets_own_selection() {
        let listings = sample_listings();
        let config = retailer_filter_config();
        let unfiltered = query_listings(&listings, &FilterState::default(), &config);
        let state = parse_filters_from_url("location=london", &config);
        let filtered = query_listings(&listings, &state, &config);

        assert!(filtered.summary.filtered_count <= unfiltered.summary.filtered_count);
        assert_eq!(filtered.counts.count("location", "leeds"), unfiltered.counts.count("location", "leeds"));
        assert!(filtered.listings.iter().all(|l| l.location == "london"));
    }

    #[test]
    fn price_sort_orders_ascending() {
        let listings = sample_listings();
        let config = retailer_filter_config();
        let state = parse_filters_from_url("sort=price_asc", &config);
        let results = query_listings(&listings, &state, &config);
        let prices: Vec<f64> = results.listings.iter().map(|l| l.price_from).collect();
        assert!(prices.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn pages_past_the_end_are_empty() {
        let listings = sample_listings();
        let config = retailer_filter_config();
        let state = parse_filters_from_url("page=99", &config);
        let results = query_listings(&listings, &state, &config);
        assert!(results.listings.is_empty());
        assert!(results.page_count < 99);
    }
}
