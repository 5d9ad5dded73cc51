use std::rc::Rc;
use std::sync::Arc;

use dioxus::prelude::*;

use crate::{
    api::sample_listings::{ListingResults, query_listings, sample_listings},
    components::{
        error_boundary::ComponentErrorBoundary,
        filter_components::{
            active_filter_chips::ActiveFilterChips, filter_bar::FilterBar, listing_card::ListingCard,
            pagination::PaginationControls, quick_filter_chips::QuickFilterChips, result_count::ResultCount,
        },
    },
    data_definitions::{listing_config::retailer_filter_config, listing_query::ListingQuery},
    hooks::use_filters::{UseFilters, use_filters},
    routes::RETAILERS_PATH,
};

/// Retailer directory page
#[component]
pub fn RetailersPage(query: ListingQuery) -> Element {
    rsx! {
        Title { "Graded Appliance Retailers" }
        RetailersPageRootComponent { query }
    }
}

/// Results for the committed URL state, shared with the widgets.
#[derive(Clone, Copy)]
pub struct ListingResultsState {
    pub results: Memo<ListingResults>,
}

#[component]
fn RetailersPageRootComponent(query: ReadSignal<ListingQuery>) -> Element {
    let config = use_hook(|| Arc::new(retailer_filter_config()));
    let listings = use_hook(|| Rc::new(sample_listings()));
    let filters = use_filters(Arc::clone(&config), query, RETAILERS_PATH);
    use_context_provider(|| filters);

    let results = use_memo(move || query_listings(&listings, &filters.url_state(), &config));
    use_context_provider(|| ListingResultsState { results });

    rsx! {
        div {
            id: "x-retailers-page-root-component",
            style: r#"
                height: 100%;
                width: 100%;
                display: flex;
                flex-direction: column;
                background-color: #F5F6F8;
            "#,
            div {
                id: "x-retailers-filter-top-bar",
                style: "
                    border-bottom: 1px solid rgb(164, 164, 164);
                    background-color: #F8FCFF;
                    flex-shrink: 0;
                    display: flex;
                    flex-direction: column;
                    gap: 8px;
                    padding: 12px 20px;
                    width: 100%;
                    box-sizing: border-box;
                ",
                QuickFilterChips {}
                FilterBar {}
                ActiveFilterChips {}
            }

            div {
                id: "x-retailers-results",
                style: "
                    flex-grow: 1;
                    overflow-y: auto;
                    padding: 12px 20px;
                ",
                ComponentErrorBoundary {
                    ResultListControls {}
                    ListingGrid {}
                }
            }
        }
    }
}

#[component]
fn ResultListControls() -> Element {
    rsx! {
        div {
            id: "x-retailers-result-controls",
            style: "
                display: flex;
                flex-direction: row;
                align-items: center;
                gap: 6px;
                padding: 7px;
                height: 56px;
                width: 100%;
                box-sizing: border-box;
            ",
            ResultCount {}
            div { style: "flex-grow: 1;" }
            PaginationControls {}
        }
    }
}

#[component]
fn ListingGrid() -> Element {
    let filters = use_context::<UseFilters>();
    let results = use_context::<ListingResultsState>().results;

    if results.read().listings.is_empty() {
        return rsx! {
            div {
                style: "
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    gap: 16px;
                    padding: 60px 20px;
                    color: rgb(75, 87, 112);
                    font-size: 20px;
                ",
                "No retailers match these filters."
                if filters.has_active_filters() {
                    button {
                        class: "x-link-button",
                        onclick: move |_| filters.clear_all_filters(),
                        "Clear all filters"
                    }
                }
            }
        };
    }

    rsx! {
        div {
            style: "
                display: grid;
                grid-template-columns: repeat(auto-fill, minmax(320px, 1fr));
                gap: 16px;
            ",
            for listing in results.read().listings.clone() {
                ListingCard { key: "{listing.id}", listing }
            }
        }
    }
}
