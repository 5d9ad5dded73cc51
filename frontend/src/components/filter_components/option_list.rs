use dioxus::prelude::*;
use dioxus_free_icons::{Icon, icons::{md_action_icons::MdSearch, md_toggle_icons::{MdCheckBox, MdCheckBoxOutlineBlank, MdRadioButtonChecked, MdRadioButtonUnchecked}}};
use filters::{FilterDefinition, FilterOption, FilterType, FilterValue};

use crate::hooks::use_filters::UseFilters;
use crate::pages::retailers_page::ListingResultsState;

/// Options of a select, search-select or checkbox-group filter.
#[component]
pub fn OptionList(definition: ReadSignal<FilterDefinition>) -> Element {
    let mut search_text = use_signal(String::new);
    let is_searchable = definition.read().filter_type == FilterType::SearchSelect;
    let visible_options = use_memo(move || {
        let needle = search_text.read().to_lowercase();
        definition
            .read()
            .options
            .iter()
            .filter(|option| needle.is_empty() || option.label.to_lowercase().contains(&needle))
            .cloned()
            .collect::<Vec<_>>()
    });
    let placeholder = definition.read().placeholder.clone().unwrap_or_else(|| "Search".to_string());

    rsx! {
        if is_searchable {
            div {
                class: "x-search-box",
                Icon { icon: MdSearch, style: "width: 20px; height: 20px; color:#6B7280;" }
                input {
                    r#type: "text",
                    placeholder: "{placeholder}",
                    value: "{search_text}",
                    oninput: move |e| search_text.set(e.value()),
                }
            }
        }
        ul {
            style: "list-style: none; padding: 0px; margin: 0px;",
            for option in visible_options() {
                li {
                    key: "{option.value}",
                    OptionRow {
                        filter_id: definition.read().id.clone(),
                        single: definition.read().filter_type == FilterType::SingleSelect,
                        show_counts: definition.read().show_counts,
                        option,
                    }
                }
            }
            if visible_options.read().is_empty() {
                li { style: "padding: 8px; color: rgba(28, 33, 45, 0.7);", "No matches" }
            }
        }
    }
}

#[component]
fn OptionRow(filter_id: ReadSignal<String>, single: bool, show_counts: bool, option: ReadSignal<FilterOption>) -> Element {
    let filters = use_context::<UseFilters>();
    let results = use_context::<ListingResultsState>().results;

    let is_checked = filters.is_option_selected(&filter_id.read(), &option.read().value);
    let count = results.read().counts.count(&filter_id.read(), &option.read().value);
    let exhausted = results.read().counts.is_exhausted(&filter_id.read(), &option.read().value);
    // a selected option stays clickable so it can be turned off
    let disabled = option.read().disabled || (exhausted && !is_checked);
    let text_color = if disabled { "rgba(0, 0, 0, 0.35)" } else { "rgb(0, 0, 0)" };
    let cursor = if disabled { "not-allowed" } else { "pointer" };

    rsx! {
        div {
            class: "x-facet-list-item",
            style: "
                display: flex;
                flex-direction: row;
                gap: 10px;
                cursor: {cursor};
                padding: 4px;
                margin: 4px;
                align-items: center;
                color: {text_color};
            ",
            onclick: move |_| {
                if disabled {
                    return;
                }
                let id = filter_id.read().clone();
                let value = option.read().value.clone();
                if !single {
                    filters.toggle_filter(&id, &value);
                } else if is_checked {
                    filters.clear_filter(&id);
                } else {
                    filters.set_filter(&id, FilterValue::Single(value));
                }
            },

            match (single, is_checked) {
                (true, true) => rsx! { Icon { icon: MdRadioButtonChecked, style: "width: 24px; height: 24px; color: rgb(28, 33, 45); flex-shrink: 0;" } },
                (true, false) => rsx! { Icon { icon: MdRadioButtonUnchecked, style: "width: 24px; height: 24px; flex-shrink: 0;" } },
                (false, true) => rsx! { Icon { icon: MdCheckBox, style: "width: 24px; height: 24px; color: rgb(28, 33, 45); flex-shrink: 0;" } },
                (false, false) => rsx! { Icon { icon: MdCheckBoxOutlineBlank, style: "width: 24px; height: 24px; flex-shrink: 0;" } },
            }

            div {
                style: "
                    display: flex;
                    flex-direction: column;
                    min-width: 0;
                ",
                div {
                    style: "
                        font-size: 16px;
                        line-height: 24px;
                        overflow: hidden;
                        text-overflow: ellipsis;
                        white-space: nowrap;
                    ",
                    "{option.read().label}"
                }
                if let Some(description) = option.read().description.clone() {
                    div { style: "font-size: 13px; color: rgba(28, 33, 45, 0.7);", "{description}" }
                }
            }

            div { style: "flex: 1 1 auto;" }

            if show_counts {
                if let Some(count) = count {
                    div {
                        style: "
                            font-size: 16px;
                            line-height: 24px;
                            color: rgba(28, 33, 45, 0.7);
                            flex-shrink: 0;
                        ",
                        "{count}"
                    }
                }
            }
        }
    }
}
