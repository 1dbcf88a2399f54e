//! Config - Catalog Connection Settings

use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::constants::{
    DEFAULT_CATALOG_URL, DEFAULT_PAGE_SIZE, PREFETCH_THRESHOLD, REQUEST_TIMEOUT_SECS,
    SEARCH_DEBOUNCE_MS,
};
use crate::error::{Error, Result};

/// Settings for talking to the product catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogSettings {
    /// Catalog base URL, e.g. "https://dummyjson.com"
    pub base_url: String,
    /// Items requested per page
    pub page_size: usize,
    /// Search input idle window in milliseconds
    pub debounce_ms: u64,
    /// HTTP request timeout in seconds
    pub timeout_secs: u64,
    /// Rows past the visible range that trigger loading the next page
    pub prefetch_threshold: usize,
}

impl Default for CatalogSettings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_CATALOG_URL.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
            debounce_ms: SEARCH_DEBOUNCE_MS,
            timeout_secs: REQUEST_TIMEOUT_SECS,
            prefetch_threshold: PREFETCH_THRESHOLD,
        }
    }
}

impl CatalogSettings {
    /// Reject settings the loader cannot work with
    pub fn validate(&self) -> Result<()> {
        if self.page_size == 0 {
            return Err(Error::Invalid {
                message: "page_size must be at least 1".to_string(),
            });
        }
        if self.timeout_secs == 0 {
            return Err(Error::Invalid {
                message: "timeout_secs must be at least 1".to_string(),
            });
        }
        reqwest::Url::parse(&self.base_url).map_err(|e| Error::Invalid {
            message: format!("base_url {:?}: {e}", self.base_url),
        })?;
        Ok(())
    }

    pub fn debounce_window(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}
