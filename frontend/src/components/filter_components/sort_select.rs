use dioxus::prelude::*;

use crate::hooks::use_filters::UseFilters;

#[component]
pub fn SortSelect() -> Element {
    let filters = use_context::<UseFilters>();
    let config = filters.config();
    let current = filters.sort();

    rsx! {
        label {
            style: "
                display: flex;
                flex-direction: row;
                align-items: center;
                gap: 8px;
                font-size: 15px;
                color: rgb(75, 87, 112);
            ",
            "Sort by"
            select {
                class: "x-sort-select",
                onchange: move |e| filters.set_sort(&e.value()),
                for sort_option in config.sort_options.iter() {
                    option {
                        key: "{sort_option.value}",
                        value: "{sort_option.value}",
                        selected: sort_option.value == current,
                        "{sort_option.label}"
                    }
                }
            }
        }
    }
}
