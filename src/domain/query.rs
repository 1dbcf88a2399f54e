//! Query - Catalog Paging Types
//!
//! A [`Query`] asks for one page window; the catalog answers with a
//! [`RawPage`] of untyped records which becomes a [`PageResult`] once every
//! record has been validated.

use serde::Deserialize;
use serde_json::Value;

use crate::domain::product::Product;

/// One page window of a search
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Query {
    /// Search term, empty means "browse all"
    pub search_term: String,
    /// Index of the first requested item
    pub offset: usize,
    /// Number of items requested, always positive
    pub page_size: usize,
}

impl Query {
    /// Create a query, clamping the page size to at least one item
    pub fn new(search_term: impl Into<String>, offset: usize, page_size: usize) -> Self {
        Self {
            search_term: search_term.into(),
            offset,
            page_size: page_size.max(1),
        }
    }

    /// Whether this query goes to the search endpoint
    pub fn is_search(&self) -> bool {
        !self.search_term.is_empty()
    }
}

/// A page of validated products
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PageResult {
    /// Products in server order
    pub items: Vec<Product>,
    /// Total matches for the search term, independent of page size
    pub total: usize,
}

/// A page of records as returned by the catalog, before validation
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RawPage {
    pub records: Vec<Value>,
    pub total: usize,
}

/// Wire shape of a catalog listing/search response
#[derive(Debug, Default, Deserialize)]
pub struct CatalogResponse {
    #[serde(default)]
    pub products: Option<Vec<Value>>,
    #[serde(default)]
    pub total: Option<u64>,
    #[serde(default)]
    pub skip: Option<u64>,
    #[serde(default)]
    pub limit: Option<u64>,
}

impl From<CatalogResponse> for RawPage {
    /// A response without `products` is an empty page with no matches
    fn from(response: CatalogResponse) -> Self {
        match response.products {
            Some(records) => RawPage {
                records,
                total: response.total.unwrap_or(0) as usize,
            },
            None => RawPage::default(),
        }
    }
}
