use dioxus::prelude::*;
use dioxus_free_icons::{Icon, icons::md_navigation_icons::MdClose};
use filters::ActiveFilterTag;

use crate::hooks::use_filters::UseFilters;

/// One removable chip per applied constraint, plus "Clear all".
#[component]
pub fn ActiveFilterChips() -> Element {
    let filters = use_context::<UseFilters>();
    let tags = filters.active_filter_tags();
    if tags.is_empty() {
        return rsx! {};
    }

    rsx! {
        div {
            id: "x-active-filter-chips",
            style: "
                display: flex;
                flex-direction: row;
                flex-wrap: wrap;
                gap: 8px;
                align-items: center;
            ",
            for tag in tags {
                ActiveFilterChip { key: "{tag.filter_id}-{tag.value}", tag }
            }
            button {
                class: "x-link-button",
                onclick: move |_| filters.clear_all_filters(),
                "Clear all"
            }
        }
    }
}

#[component]
fn ActiveFilterChip(tag: ReadSignal<ActiveFilterTag>) -> Element {
    let filters = use_context::<UseFilters>();
    let filter_label = filters
        .config()
        .definition(&tag.read().filter_id)
        .map(|definition| definition.label.clone())
        .unwrap_or_default();

    rsx! {
        span {
            class: "x-chip x-chip-active",
            title: "{filter_label}",
            "{tag.read().label}"
            button {
                class: "x-icon-button",
                title: "Remove {tag.read().label}",
                onclick: move |_| filters.remove_tag(&tag.read()),
                Icon { icon: MdClose, style: "width: 16px; height: 16px;" }
            }
        }
    }
}
