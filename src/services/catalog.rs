//! Catalog Source
//!
//! Abstraction over the remote product catalog plus the page pipeline that
//! validates every record of a fetched page.

use futures::future::BoxFuture;
use std::sync::Arc;

use crate::domain::{decode_product, PageResult, Query, RawPage};
use crate::error::{Error, Result};

/// A paginated product catalog
///
/// Implementations return `'static` futures so a fetch can be moved onto
/// the tokio runtime.
pub trait CatalogSource: Send + Sync + 'static {
    /// Fetch one page window of untyped records
    fn fetch(&self, query: &Query) -> BoxFuture<'static, Result<RawPage>>;

    /// Short description for logs
    fn describe(&self) -> String {
        std::any::type_name::<Self>().to_string()
    }
}

/// Validate every record of a raw page
///
/// A single invalid record fails the whole page.
pub fn validate_page(raw: RawPage) -> Result<PageResult> {
    let items = raw
        .records
        .iter()
        .enumerate()
        .map(|(index, record)| {
            decode_product(record).map_err(|source| Error::Validation { index, source })
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(PageResult {
        items,
        total: raw.total,
    })
}

/// Fetch and validate one page
pub async fn fetch_products(source: Arc<dyn CatalogSource>, query: Query) -> Result<PageResult> {
    tracing::debug!(
        search_term = %query.search_term,
        offset = query.offset,
        page_size = query.page_size,
        "Fetching catalog page"
    );

    let raw = source.fetch(&query).await.map_err(|e| {
        tracing::warn!(error = %e, offset = query.offset, "Catalog request failed");
        e
    })?;

    let page = validate_page(raw).map_err(|e| {
        tracing::warn!(error = %e, offset = query.offset, "Catalog page rejected");
        e
    })?;

    tracing::debug!(
        items = page.items.len(),
        total = page.total,
        offset = query.offset,
        "Catalog page received"
    );
    Ok(page)
}


#[cfg(test)]
mod tests {
    use super::testing::*;
    use super::*;
    use crate::domain::ValidationError;

    #[test]
    fn test_validate_page_keeps_server_order() {
        let raw = RawPage {
            records: vec![record(3, "c"), record(1, "a")],
            total: 2,
        };
        let page = validate_page(raw).expect("valid page");
        let titles: Vec<&str> = page.items.iter().map(|p| &*p.title).collect();
        assert_eq!(titles, vec!["c", "a"]);
        assert_eq!(page.total, 2);
    }

    #[test]
    fn test_one_invalid_record_fails_whole_page() {
        let mut broken = record(2, "b");
        broken.as_object_mut().expect("object").remove("price");
        let raw = RawPage {
            records: vec![record(1, "a"), broken, record(3, "c")],
            total: 3,
        };
        match validate_page(raw) {
            Err(Error::Validation { index, source }) => {
                assert_eq!(index, 1);
                assert_eq!(source, ValidationError::MissingField { field: "price" });
            }
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_fetch_products_uses_query_window() {
        let catalog = Arc::new(FakeCatalog::numbered(25));
        let page = fetch_products(catalog.clone(), Query::new("", 20, 10))
            .await
            .expect("page");
        assert_eq!(page.items.len(), 5);
        assert_eq!(page.total, 25);
        assert_eq!(catalog.call_count(), 1);
    }

    #[tokio::test]
    async fn test_fetch_products_propagates_network_errors() {
        let mut catalog = FakeCatalog::numbered(3);
        catalog.fail_with_status = Some(503);
        let result = fetch_products(Arc::new(catalog), Query::new("", 0, 10)).await;
        assert!(matches!(result, Err(Error::HttpStatus { status: 503 })));
    }
}
