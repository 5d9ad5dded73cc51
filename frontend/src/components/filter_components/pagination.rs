//! Previous/next page controls. Page changes skip the filter debounce.

use dioxus::prelude::*;
use dioxus_free_icons::{Icon, icons::md_navigation_icons::{MdArrowBack, MdArrowForward}};

use crate::hooks::use_filters::UseFilters;
use crate::pages::retailers_page::ListingResultsState;

#[component]
pub fn PaginationControls() -> Element {
    let filters = use_context::<UseFilters>();
    let results = use_context::<ListingResultsState>().results;

    let page_count = results.read().page_count;
    let current_page = filters.page();
    let shown_page = current_page.min(page_count);

    rsx! {
        div {
            style: "
                display: flex;
                flex-direction: row;
                align-items: center;
                justify-content: center;
                gap: 16px;
            ",
            NavigationButton {
                icon: MdArrowBack,
                label: "Previous Page",
                disabled: current_page <= 1,
                onclick: move |_| filters.set_page(current_page.saturating_sub(1).min(page_count.max(1))),
            }
            div {
                style: "
                    font-size: 16px;
                    line-height: 21px;
                    font-weight: 400;
                    background-color: white;
                    border-radius: 2px;
                    border-left: 1px solid rgba(0,0,0,0.1);
                    border-right: 1px solid rgba(0,0,0,0.1);
                    padding: 4px 26px;
                    margin-left: -28px;
                    margin-right: -28px;
                ",
                "{shown_page}"
                span {
                    style: "color: rgba(0,0,0,0.5);",
                    "/{page_count}"
                }
            }
            NavigationButton {
                icon: MdArrowForward,
                label: "Next Page",
                disabled: current_page >= page_count,
                onclick: move |_| filters.set_page(current_page + 1),
            }
        }
    }
}

#[component]
pub fn NavigationButton<I: dioxus_free_icons::IconShape + Clone + PartialEq + 'static>(icon: I, label: String, disabled: ReadSignal<bool>, onclick: Callback<()>) -> Element {
    let btn_color = use_memo(move || if *disabled.read() { "rgba(0,0,0,0.3)" } else { "rgba(0,0,0,1)" });
    let btn_cursor = use_memo(move || if *disabled.read() { "not-allowed" } else { "pointer" });
    rsx! {
        button {
            disabled: *disabled.read(),
            title: "{label}",
            aria_label: "{label}",
            style: "
                width: 32px;
                height: 32px;
                background: white;
                border: none;
                border-radius: 8px;
                padding: 4px;
                box-shadow: 0 2px 4px 0 rgba(0, 0, 0, 0.16);
                cursor: {btn_cursor};
            ",
            onclick: move |_| {
                if !*disabled.read() {
                    onclick(());
                }
            },
            Icon { icon: icon, style: "width: 24px; height: 24px; color: {btn_color};" }
        }
    }
}
