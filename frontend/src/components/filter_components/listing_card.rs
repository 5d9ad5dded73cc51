use dioxus::prelude::*;
use dioxus_free_icons::{Icon, icons::{md_action_icons::{MdVerifiedUser, MdEvent}, md_communication_icons::MdLocationOn, md_toggle_icons::MdStar}};

use crate::api::sample_listings::Listing;
use crate::hooks::use_filters::UseFilters;

#[component]
pub fn ListingCard(listing: ReadSignal<Listing>) -> Element {
    let filters = use_context::<UseFilters>();
    let config = filters.config();
    let listing = listing.read().clone();

    let label_of = |filter_id: &str, value: &str| {
        config
            .definition(filter_id)
            .map(|definition| definition.option_label(value).to_string())
            .unwrap_or_else(|| value.to_string())
    };
    let location = label_of("location", &listing.location);
    let appliances = listing.appliances.iter().map(|v| label_of("appliance", v)).collect::<Vec<_>>().join(", ");
    let brands = listing.brands.iter().map(|v| label_of("brand", v)).collect::<Vec<_>>().join(", ");
    let grades = listing.grades.iter().map(|v| label_of("grade", v)).collect::<Vec<_>>();

    rsx! {
        div {
            class: "x-listing-card",
            style: "
                display: flex;
                flex-direction: column;
                gap: 8px;
                padding: 16px;
                border-radius: 16px;
                background: white;
                border: 1px solid #E5E7EB;
                box-shadow: 0 6px 16px rgba(0,0,0,0.06);
            ",
            div {
                style: "display: flex; flex-direction: row; align-items: center; gap: 8px;",
                div { style: "font-size: 20px; font-weight: 500; color: #0F172A;", "{listing.name}" }
                if listing.verified {
                    span {
                        title: "Verified retailer",
                        Icon { icon: MdVerifiedUser, style: "width: 20px; height: 20px; color: #16A34A;" }
                    }
                }
                div { style: "flex-grow: 1;" }
                Icon { icon: MdStar, style: "width: 18px; height: 18px; color: #F59E0B;" }
                span { style: "font-size: 15px;", "{listing.rating:.1}" }
            }
            div {
                style: "display: flex; flex-direction: row; align-items: center; gap: 4px; color: rgb(75, 87, 112);",
                Icon { icon: MdLocationOn, style: "width: 18px; height: 18px;" }
                "{location}"
                if listing.open_weekends {
                    Icon { icon: MdEvent, style: "width: 18px; height: 18px; margin-left: 12px;" }
                    "Open weekends"
                }
            }
            div { style: "font-size: 15px;", "{appliances}" }
            div { style: "font-size: 14px; color: rgba(28, 33, 45, 0.7);", "Brands: {brands}" }
            div {
                style: "display: flex; flex-direction: row; flex-wrap: wrap; gap: 6px;",
                for grade in grades {
                    span { key: "{grade}", class: "x-chip", "{grade}" }
                }
            }
            div {
                style: "display: flex; flex-direction: row; align-items: baseline; gap: 6px; margin-top: 4px;",
                span { style: "font-size: 13px; color: rgba(28, 33, 45, 0.7);", "from" }
                span { style: "font-size: 22px; font-weight: 500;", "£{listing.price_from:.0}" }
                div { style: "flex-grow: 1;" }
                span { style: "font-size: 13px; color: rgba(28, 33, 45, 0.7);", "{listing.warranty_months} month warranty" }
            }
        }
    }
}
