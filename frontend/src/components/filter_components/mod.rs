pub mod active_filter_chips;
pub mod filter_bar;
pub mod listing_card;
pub mod option_list;
pub mod pagination;
pub mod quick_filter_chips;
pub mod range_filter;
pub mod result_count;
pub mod sort_select;
pub mod toggle_filter;
