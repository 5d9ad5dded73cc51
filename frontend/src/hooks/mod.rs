pub mod use_filters;
