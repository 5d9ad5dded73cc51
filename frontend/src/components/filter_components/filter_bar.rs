//! Inline filter buttons, the "More filters" modal and the sort select.

use dioxus::prelude::*;
use dioxus_free_icons::{Icon, icons::{md_image_icons::MdTune, md_navigation_icons::{MdArrowDropDown, MdClose}}};
use filters::{FilterDefinition, FilterPriority, FilterType};

use crate::components::filter_components::{
    option_list::OptionList, range_filter::RangeFilter, sort_select::SortSelect, toggle_filter::ToggleFilter,
};
use crate::hooks::use_filters::UseFilters;

#[derive(Clone, Copy)]
struct FilterBarContext {
    expanded_filter: Signal<String>,
}

#[component]
pub fn FilterBar() -> Element {
    let filters = use_context::<UseFilters>();
    let expanded_filter = use_signal(String::new);
    use_context_provider(|| FilterBarContext { expanded_filter });
    let mut show_more = use_signal(|| false);

    let config = filters.config();
    let inline: Vec<FilterDefinition> = config.filters_with_priority(FilterPriority::High).cloned().collect();
    let more: Vec<FilterDefinition> =
        config.filters.iter().filter(|f| f.priority != FilterPriority::High).cloned().collect();
    let state = filters.state();
    let more_active: usize =
        more.iter().filter_map(|f| state.get(&f.id)).map(|value| value.active_count()).sum();

    rsx! {
        div {
            id: "x-filter-bar",
            style: "
                width: 100%;
                display: flex;
                flex-direction: row;
                flex-wrap: wrap;
                gap: 12px;
                align-items: center;
            ",

            for definition in inline {
                FilterControl { key: "{definition.id}", definition }
            }

            if !more.is_empty() {
                button {
                    class: "x-pill-button",
                    onclick: move |_| show_more.set(true),
                    Icon { icon: MdTune, style: "width: 20px; height: 20px;" }
                    "More filters"
                    if more_active > 0 {
                        span { class: "x-count-badge", "{more_active}" }
                    }
                }
            }

            div { style: "flex-grow: 1;" }
            SortSelect {}
        }

        if show_more() {
            MoreFiltersModal { definitions: more, on_close: move |_| show_more.set(false) }
        }
    }
}

#[component]
fn FilterControl(definition: FilterDefinition) -> Element {
    match definition.filter_type {
        FilterType::Toggle => rsx! { ToggleFilter { definition } },
        _ => rsx! { FilterDropdown { definition } },
    }
}

/// Body of one filter, shared by the dropdowns and the modal.
#[component]
fn FilterPanel(definition: FilterDefinition) -> Element {
    match definition.filter_type {
        FilterType::Toggle => rsx! { ToggleFilter { definition } },
        FilterType::RangeSlider => rsx! { RangeFilter { definition } },
        _ => rsx! { OptionList { definition } },
    }
}

#[component]
fn FilterDropdown(definition: ReadSignal<FilterDefinition>) -> Element {
    let filters = use_context::<UseFilters>();
    let mut expanded_filter = use_context::<FilterBarContext>().expanded_filter;

    let is_expanded = use_memo(move || *expanded_filter.read() == definition.read().id);
    let button_z_level = use_memo(move || if is_expanded() { 1000 } else { 888 });
    let active_count = filters.filter_value(&definition.read().id).map_or(0, |value| value.active_count());
    let border_color = if active_count > 0 { "rgba(0,0,255,0.9)" } else { "rgba(0,0,0,0.5)" };

    rsx! {
        if is_expanded() {
            div {
                style: "position: relative; width: 0px; height: 0px; top: 0px; left: 0px;",
                div {
                    style: "
                        position: absolute;
                        top: 30px;
                        left: 0px;
                        min-width: 280px;
                        max-width: 420px;
                        max-height: calc(100vh - 200px);
                        overflow-y: auto;
                        border: 1px solid rgba(0,0,0,0.5);
                        border-radius: 10px;
                        padding: 10px;
                        background-color: white;
                        box-shadow: 0 0 10px 0 rgba(0, 0, 0, 0.1);
                        z-index: 1000;
                    ",
                    FilterPanel { definition: definition.read().clone() }
                }
            }
            div {
                style: "
                    position: fixed;
                    top: 0px;
                    left: 0px;
                    z-index: 999;
                    background-color: rgba(0,0,0,0.1);
                    width: 100%;
                    height: 100%;
                ",
                onclick: move |_| expanded_filter.set(String::new()),
            }
        }

        button {
            class: "x-pill-button",
            style: "border-color: {border_color}; z-index: {button_z_level()};",
            onclick: move |_| {
                let id = definition.read().id.clone();
                if *expanded_filter.read() == id {
                    expanded_filter.set(String::new());
                } else {
                    expanded_filter.set(id);
                }
            },
            "{definition.read().label}"
            if active_count > 0 {
                span { class: "x-count-badge", "{active_count}" }
            }
            Icon { icon: MdArrowDropDown, style: "width: 20px; height: 20px;" }
        }
    }
}

#[component]
fn MoreFiltersModal(definitions: Vec<FilterDefinition>, on_close: Callback<()>) -> Element {
    let filters = use_context::<UseFilters>();
    let ids: Vec<String> = definitions.iter().map(|d| d.id.clone()).collect();
    let any_active = ids.iter().any(|id| filters.filter_value(id).is_some());

    rsx! {
        div {
            style: "
                position: fixed;
                top: 0px;
                left: 0px;
                width: 100%;
                height: 100%;
                z-index: 1100;
                background-color: rgba(0,0,0,0.3);
            ",
            onclick: move |_| on_close(()),
        }
        div {
            id: "x-more-filters-modal",
            style: "
                position: fixed;
                top: 60px;
                left: 50%;
                transform: translateX(-50%);
                width: min(560px, calc(100% - 40px));
                max-height: calc(100vh - 120px);
                display: flex;
                flex-direction: column;
                border-radius: 16px;
                background-color: white;
                box-shadow: 0 8px 24px rgba(0,0,0,0.12);
                z-index: 1101;
            ",
            div {
                style: "
                    display: flex;
                    flex-direction: row;
                    align-items: center;
                    padding: 14px 18px;
                    border-bottom: 1px solid #E5E7EB;
                    font-size: 20px;
                    font-weight: 500;
                ",
                "More filters"
                div { style: "flex-grow: 1;" }
                button {
                    class: "x-icon-button",
                    title: "Close",
                    onclick: move |_| on_close(()),
                    Icon { icon: MdClose, style: "width: 22px; height: 22px;" }
                }
            }
            div {
                style: "overflow-y: auto; padding: 6px 18px;",
                for definition in definitions {
                    div {
                        key: "{definition.id}",
                        style: "padding: 12px 0px; border-bottom: 1px solid #F1F2F4;",
                        if definition.filter_type != FilterType::Toggle {
                            div {
                                style: "font-size: 16px; font-weight: 500; margin-bottom: 6px;",
                                "{definition.label}"
                            }
                        }
                        FilterPanel { definition }
                    }
                }
            }
            div {
                style: "
                    display: flex;
                    flex-direction: row;
                    gap: 12px;
                    padding: 12px 18px;
                    border-top: 1px solid #E5E7EB;
                ",
                button {
                    class: "x-link-button",
                    disabled: !any_active,
                    onclick: move |_| {
                        for id in &ids {
                            filters.clear_filter(id);
                        }
                    },
                    "Reset"
                }
                div { style: "flex-grow: 1;" }
                button {
                    class: "x-primary-button",
                    onclick: move |_| on_close(()),
                    "Done"
                }
            }
        }
    }
}
