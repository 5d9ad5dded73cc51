use crate::filter_config::{FilterConfig, FilterDefinition, FilterOption, FilterType, SortOption};

pub(crate) fn scenario_config() -> FilterConfig {
    FilterConfig {
        filters: vec![
            FilterDefinition::new("brand", FilterType::MultiSelect, "Brand").with_options(vec![
                FilterOption::new("bosch", "Bosch"),
                FilterOption::new("hotpoint", "Hotpoint"),
                FilterOption::new("samsung", "Samsung"),
                FilterOption::new("miele", "Miele"),
            ]),
            FilterDefinition::new("price", FilterType::RangeSlider, "Price").with_range(0.0, 2000.0, Some("£")),
            FilterDefinition::new("verified", FilterType::Toggle, "Verified sellers"),
            FilterDefinition::new("region", FilterType::SingleSelect, "Region").with_options(vec![
                FilterOption::new("london", "Greater London"),
                FilterOption::new("north west", "North West"),
            ]),
            FilterDefinition::new("category", FilterType::CheckboxGroup, "Category").with_options(vec![
                FilterOption::new("a", "Washing machines"),
                FilterOption::new("b", "Fridges"),
                FilterOption::new("c", "Dishwashers"),
            ]),
            FilterDefinition::new("inStock", FilterType::Toggle, "In stock"),
        ],
        sort_options: vec![
            SortOption::new("relevance", "Relevance"),
            SortOption::new("price_asc", "Price: low to high"),
            SortOption::new("price_desc", "Price: high to low"),
        ],
        default_sort: "relevance".to_string(),
        quick_filters: vec!["verified".to_string(), "brand_bosch".to_string()],
    }
}
