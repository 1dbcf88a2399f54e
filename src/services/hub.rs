//! Service Hub
//!
//! Central handle on the catalog backend. Holds the configured
//! [`CatalogSource`] and provides a unified API for the state layer.

use std::sync::Arc;
use std::time::Duration;

use crate::domain::{CatalogSettings, PageResult, Query};
use crate::error::Result;
use crate::services::{fetch_products, CatalogSource, HttpCatalog};

/// Central hub for all backend services
#[derive(Clone)]
pub struct ServiceHub {
    /// Product catalog
    catalog: Arc<dyn CatalogSource>,
    /// Settings the hub was created with
    settings: CatalogSettings,
}

impl ServiceHub {
    /// Create a hub talking to the HTTP catalog described by `settings`
    pub fn new(settings: CatalogSettings) -> Result<Self> {
        let catalog = HttpCatalog::new(&settings)?;
        tracing::info!(base_url = %catalog.base_url(), "Catalog client ready");
        Ok(Self::with_source(Arc::new(catalog), settings))
    }

    /// Create a hub with default settings (dummyjson.com)
    pub fn with_defaults() -> Result<Self> {
        Self::new(CatalogSettings::default())
    }

    /// Create a hub over an arbitrary catalog source
    pub fn with_source(catalog: Arc<dyn CatalogSource>, settings: CatalogSettings) -> Self {
        Self { catalog, settings }
    }

    // ==================== Catalog Operations ====================

    /// Fetch and validate one page of products
    ///
    /// The returned future is `'static` and must run on the tokio runtime
    /// (see [`crate::services::run_in_tokio`]).
    pub fn fetch_page(&self, query: Query) -> impl std::future::Future<Output = Result<PageResult>> + Send + 'static {
        fetch_products(self.catalog.clone(), query)
    }

    // ==================== Settings ====================

    pub fn page_size(&self) -> usize {
        self.settings.page_size
    }

    pub fn debounce_window(&self) -> Duration {
        self.settings.debounce_window()
    }

    pub fn prefetch_threshold(&self) -> usize {
        self.settings.prefetch_threshold
    }
}

impl std::fmt::Debug for ServiceHub {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceHub")
            .field("catalog", &self.catalog.describe())
            .field("settings", &self.settings)
            .finish()
    }
}
