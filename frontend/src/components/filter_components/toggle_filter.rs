use dioxus::prelude::*;
use dioxus_free_icons::{Icon, icons::md_toggle_icons::{MdToggleOff, MdToggleOn}};
use filters::{FilterDefinition, FilterValue};

use crate::hooks::use_filters::UseFilters;

#[component]
pub fn ToggleFilter(definition: ReadSignal<FilterDefinition>) -> Element {
    let filters = use_context::<UseFilters>();
    let is_on = matches!(filters.filter_value(&definition.read().id), Some(FilterValue::Toggle(true)));
    let border_color = if is_on { "rgba(0,0,255,0.9)" } else { "rgba(0,0,0,0.5)" };

    rsx! {
        button {
            class: "x-pill-button",
            style: "border-color: {border_color};",
            role: "switch",
            aria_checked: "{is_on}",
            onclick: move |_| {
                let id = definition.read().id.clone();
                filters.set_filter(&id, FilterValue::Toggle(!is_on));
            },
            if is_on {
                Icon { icon: MdToggleOn, style: "width: 26px; height: 26px; color: rgb(37, 99, 235);" }
            } else {
                Icon { icon: MdToggleOff, style: "width: 26px; height: 26px; color: rgba(0,0,0,0.5);" }
            }
            "{definition.read().label}"
        }
    }
}
