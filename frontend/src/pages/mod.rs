pub mod home_page;
pub mod retailers_page;
