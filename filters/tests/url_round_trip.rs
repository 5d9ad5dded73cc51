use filters::url_codec::build_query_string;
use filters::{FilterConfig, FilterState, FilterValue, RangeValue, build_filter_url, parse_filters_from_url};
use pretty_assertions::assert_eq;
use rstest::{fixture, rstest};

const RETAILER_FILTERS: &str = include_str!("../../frontend/assets/retailer_filters.json");

#[fixture]
fn config() -> FilterConfig {
    FilterConfig::from_json(RETAILER_FILTERS).expect("shipped retailer config is valid")
}

#[rstest]
#[case("appliance=washing-machine,dishwasher")]
#[case("brand=bosch&price=100_500&verified=1")]
#[case("grade=a,refurbished&location=leeds&sort=price_asc&page=3")]
#[case("service=installation&warranty=12&open_weekends=1&sort=rating_desc")]
#[case("price=0_2000&page=2")]
#[case("brand=fisher+%26+paykel,miele")]
#[case("location=north%20east")]
fn decoded_states_survive_a_round_trip(config: FilterConfig, #[case] search: &str) {
    let state = parse_filters_from_url(search, &config);
    let encoded = build_query_string(&state, &config);
    assert_eq!(parse_filters_from_url(&encoded, &config), state);
}

#[rstest]
#[case("verified=0&sort=relevance&page=1")]
#[case("open_weekends=false&brand=,,&page=0")]
#[case("price=abc_def&page=-5&unknownParam=x")]
#[case("page=2&appliance=cooker&page=9&sort=name_asc")]
#[case("")]
fn encoding_is_idempotent(config: FilterConfig, #[case] search: &str) {
    let once = build_query_string(&parse_filters_from_url(search, &config), &config);
    let twice = build_query_string(&parse_filters_from_url(&once, &config), &config);
    assert_eq!(twice, once);
}

#[rstest]
fn false_toggles_and_defaults_collapse_to_absence(config: FilterConfig) {
    let state = parse_filters_from_url("verified=0&sort=relevance&page=1", &config);
    assert_eq!(state.get("verified"), Some(&FilterValue::Toggle(false)));
    assert_eq!(state.sort.as_deref(), Some("relevance"));
    assert_eq!(state.page, Some(1));

    let encoded = build_query_string(&state, &config);
    assert_eq!(encoded, "");
    assert_eq!(parse_filters_from_url(&encoded, &config), FilterState::default());
}

#[rstest]
fn malformed_input_decodes_to_nothing(config: FilterConfig) {
    let state = parse_filters_from_url("?price=abc_def&page=-5&unknownParam=x", &config);
    assert_eq!(state, FilterState::default());
    assert_eq!(state.page_or_first(), 1);
}

#[rstest]
fn urls_follow_config_order(config: FilterConfig) {
    let state = FilterState::default()
        .with("verified", FilterValue::Toggle(true))
        .with("price", FilterValue::Range(RangeValue::new(50.0, 200.0)))
        .with("brand", FilterValue::values(["bosch", "samsung"]))
        .with_sort("price_desc")
        .with_page(2);
    assert_eq!(
        build_filter_url("/retailers", &state, &config),
        "/retailers?brand=bosch,samsung&price=50_200&verified=1&sort=price_desc&page=2"
    );
}

#[rstest]
fn quick_filters_in_the_shipped_config_resolve(config: FilterConfig) {
    let tokens: Vec<String> = config.quick_filters().into_iter().map(|q| q.token).collect();
    assert_eq!(tokens, config.quick_filters);
}
