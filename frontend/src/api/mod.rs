pub mod sample_listings;
