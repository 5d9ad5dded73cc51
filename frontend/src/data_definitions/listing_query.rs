//! Raw query segment of the retailers route.

use std::fmt::Display;

/// The router hands us everything after `?`; the filter codec owns the parsing.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListingQuery(pub String);

impl ListingQuery {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ListingQuery {
    fn from(query: &str) -> Self {
        Self(query.strip_prefix('?').unwrap_or(query).to_string())
    }
}

impl Display for ListingQuery {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
