pub mod listing_config;
pub mod listing_query;
