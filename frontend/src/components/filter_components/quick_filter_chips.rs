use dioxus::prelude::*;
use filters::QuickFilter;

use crate::hooks::use_filters::UseFilters;

#[component]
pub fn QuickFilterChips() -> Element {
    let filters = use_context::<UseFilters>();
    let quick_filters = filters.config().quick_filters();
    if quick_filters.is_empty() {
        return rsx! {};
    }

    rsx! {
        div {
            id: "x-quick-filter-chips",
            style: "
                display: flex;
                flex-direction: row;
                gap: 8px;
                overflow-x: auto;
            ",
            for quick_filter in quick_filters {
                QuickFilterChip { key: "{quick_filter.token}", quick_filter }
            }
        }
    }
}

#[component]
fn QuickFilterChip(quick_filter: ReadSignal<QuickFilter>) -> Element {
    let filters = use_context::<UseFilters>();
    let is_active = filters.is_quick_filter_active(&quick_filter.read());
    let class = if is_active { "x-chip x-chip-active" } else { "x-chip" };

    rsx! {
        button {
            class: "{class}",
            aria_pressed: "{is_active}",
            onclick: move |_| filters.toggle_quick_filter(&quick_filter.read()),
            "{quick_filter.read().label}"
        }
    }
}
