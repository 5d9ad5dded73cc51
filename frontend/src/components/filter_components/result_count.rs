use dioxus::prelude::*;

use crate::data_definitions::listing_config::RETAILER_NOUN;
use crate::hooks::use_filters::UseFilters;
use crate::pages::retailers_page::ListingResultsState;

#[component]
pub fn ResultCount() -> Element {
    let filters = use_context::<UseFilters>();
    let results = use_context::<ListingResultsState>().results;
    let summary_text = results.read().summary.display_text(RETAILER_NOUN);
    let active_count = filters.active_filter_count();

    rsx! {
        h1 {
            style: "font-size: 20px; font-weight: 300; color:rgb(75, 87, 112); border-bottom: 1px solid rgb(75, 87, 112);",
            "{summary_text}"
        }
        if active_count > 0 {
            span {
                style: "font-size: 14px; color: rgba(28, 33, 45, 0.7); margin-left: 8px;",
                if active_count == 1 { "1 filter applied" } else { "{active_count} filters applied" }
            }
        }
    }
}
