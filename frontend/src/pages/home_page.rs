use std::sync::Arc;

use dioxus::prelude::*;
use dioxus_free_icons::icons::md_action_icons::MdSearch;
use dioxus_free_icons::Icon;

use filters::{ControllerOptions, FilterConfig, FilterController, MemoryLocation};

use crate::data_definitions::listing_config::retailer_filter_config;
use crate::routes::{RETAILERS_PATH, Route};


/// Home page
#[component]
pub fn HomePage() -> Element {
    rsx! {
        Title { "Graded Appliance Directory - Home" }
        div {
            id: "x-home-container",
            style: "
                display:flex;
                flex-direction: column;
                gap: 20px;
                width: 100%;
                height: 100%;
                padding: 36px 40px;
                background: #F5F6F8;
                box-sizing: border-box;
                overflow: auto;
            ",

            MainTitle {}
            SubText {}

            div {
                style: "
                    display:flex;
                    flex-direction: row;
                    gap: 20px;
                    flex-wrap: wrap;
                    align-items: stretch;
                    margin-top: 10px;
                ",
                FindRetailerCard {}
                PopularSearchesCard {}
            }
        }
    }
}


#[component]
fn MainTitle() -> Element {
    rsx! {
        div {
            style: "
                display:flex;
                align-items: center;
                gap: 8px;
                color: #0F172A;
                font-size: 46px;
                font-weight: 500;
                letter-spacing: -0.02em;
            ",
            span { "Graded appliances," }
            span { style: "color:#4F46E5;", "near you." }
        }
    }
}

#[component]
fn SubText() -> Element {
    rsx! {
        div {
            style: "
                color: #111827;
                font-size: 30px;
                line-height: 1.6;
                max-width: 620px;
                font-weight: 500;
            ",
            "Compare UK retailers selling ex-display, graded and refurbished white goods."
        }
    }
}

#[component]
fn FindRetailerCard() -> Element {
    let n2 = navigator();
    let config = use_hook(|| Arc::new(retailer_filter_config()));
    let mut search_brand = use_signal(|| "".to_string());
    rsx! {
        div {
            id: "x-card-find-retailer",
            style: "
                display:flex;
                flex-direction: column;
                gap: 14px;
                width: 520px;
                min-height: 220px;
                border-radius: 22px;
                padding: 22px 22px 26px 22px;
                background: linear-gradient(135deg, #2D208A 0%, #5B3DF5 100%);
                color: white;
                box-shadow: 0 8px 24px rgba(0,0,0,0.12);
            ",
            div { style: "font-size: 30px; font-weight: 500;", "Find a retailer" }
            div {
                style: "
                    font-size: 16px;
                    color: rgba(255,255,255,0.9);
                    width: 100%;
                ",
                "*Type a brand and hit Enter to browse retailers stocking it."
            }
            div {
                style: "
                    display:flex;
                    align-items:center;
                    gap: 10px;
                    background-color: white;
                    border-radius: 9999px;
                    padding: 10px 14px;
                    height: 42px;
                    color: #111827;
                ",
                Icon { icon: MdSearch, style: "width: 20px; height: 20px; color:#6B7280;" }
                input {
                    r#type: "text",
                    placeholder: "e.g. Bosch",
                    style: "
                        flex:1;
                        border: none;
                        outline: none;
                        background: transparent;
                        color: #111827;
                        font-size: 14px;
                    ",
                    oninput: move |e| {
                        *search_brand.write() = e.value();
                    },
                    onkeypress: move |e| {
                        if e.key() == Key::Enter {
                            e.prevent_default();
                            n2.push(Route::retailers_from_search(&brand_search(&config, &search_brand.read())));
                        }
                    },
                }
            }
        }
    }
}

#[component]
fn PopularSearchesCard() -> Element {
    let config = use_hook(|| Arc::new(retailer_filter_config()));
    let quick_links: Vec<(String, String, String)> = config
        .quick_filters()
        .iter()
        .map(|quick_filter| {
            let search = search_after(&config, |controller| {
                controller.toggle_quick_filter(quick_filter);
            });
            (quick_filter.token.clone(), quick_filter.label.clone(), search)
        })
        .collect();
    rsx! {
        div {
            id: "x-card-popular",
            style: "
                display:flex;
                flex-direction: column;
                gap: 12px;
                width: 520px;
                min-height: 220px;
                border-radius: 22px;
                padding: 22px 22px 26px 22px;
                background: white;
                color: #111827;
                border: 1px solid #E5E7EB;
                box-shadow: 0 6px 16px rgba(0,0,0,0.06);
            ",
            div { style: "font-size: 26px; font-weight: 500;", "Popular searches" }
            div {
                style: "display: flex; flex-direction: row; flex-wrap: wrap; gap: 8px;",
                for (token, label, search) in quick_links {
                    Link {
                        key: "{token}",
                        class: "x-chip",
                        to: Route::retailers_from_search(&search),
                        "{label}"
                    }
                }
            }
        }
    }
}

/// Query string a fresh retailers page would have after `change`.
fn search_after(config: &Arc<FilterConfig>, change: impl FnOnce(&mut FilterController<MemoryLocation>)) -> String {
    let location = MemoryLocation::new(RETAILERS_PATH, "");
    let mut controller = FilterController::new(Arc::clone(config), location, ControllerOptions::for_path(RETAILERS_PATH));
    change(&mut controller);
    controller.flush_pending();
    controller.location().current().search.clone()
}

/// Typed brand names are matched against the brand filter's labels.
fn brand_search(config: &Arc<FilterConfig>, typed: &str) -> String {
    let typed = typed.trim().to_lowercase();
    let brand = config.definition("brand").and_then(|definition| {
        definition.options.iter().find(|option| option.label.to_lowercase() == typed || option.value == typed)
    });
    match brand {
        Some(option) => search_after(config, |controller| {
            controller.toggle_filter("brand", &option.value);
        }),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn brand_names_become_brand_filters() {
        let config = Arc::new(retailer_filter_config());
        assert_eq!(brand_search(&config, " Bosch "), "brand=bosch");
        assert_eq!(brand_search(&config, "unknown brand"), "");
    }

    #[test]
    fn quick_filters_link_to_their_state() {
        let config = Arc::new(retailer_filter_config());
        let searches: Vec<String> = config
            .quick_filters()
            .iter()
            .map(|quick_filter| search_after(&config, |c| {
                c.toggle_quick_filter(quick_filter);
            }))
            .collect();
        assert!(searches.contains(&"verified=1".to_string()));
        assert!(searches.contains(&"appliance=washing-machine".to_string()));
    }
}
