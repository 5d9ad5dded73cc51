use dioxus::prelude::*;

use crate::components::navbar::Navbar;
use crate::data_definitions::listing_query::ListingQuery;
use crate::pages::home_page::HomePage;
use crate::pages::retailers_page::RetailersPage;

pub const RETAILERS_PATH: &str = "/retailers";

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Navbar)]


    #[route("/")]
    HomePage {},


    #[route("/retailers?:..query")]
    RetailersPage { query: ListingQuery },

}

impl Route {
    pub fn retailers_from_search(search: &str) -> Self {
        Self::RetailersPage { query: ListingQuery::from(search) }
    }
}
