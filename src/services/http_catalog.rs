//! HTTP Catalog
//!
//! `reqwest` implementation of [`CatalogSource`] for dummyjson-style product
//! APIs: `GET {base}/products` for browsing and `GET {base}/products/search`
//! when a search term is present.

use futures::future::BoxFuture;
use futures::FutureExt;
use reqwest::{Client, Url};

use crate::domain::{CatalogResponse, CatalogSettings, Query, RawPage};
use crate::error::{Error, Result};
use crate::services::CatalogSource;

/// Catalog reached over HTTP
#[derive(Clone)]
pub struct HttpCatalog {
    client: Client,
    base_url: Url,
}

impl HttpCatalog {
    /// Create a client for the configured catalog
    pub fn new(settings: &CatalogSettings) -> Result<Self> {
        settings.validate()?;
        let base_url = parse_base_url(&settings.base_url)?;
        let client = Client::builder()
            .timeout(settings.timeout())
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self { client, base_url })
    }

    /// Base URL all endpoints hang off
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }
}

/// Parse a base URL so that relative joins keep its path
fn parse_base_url(raw: &str) -> Result<Url> {
    let normalized = if raw.ends_with('/') {
        raw.to_string()
    } else {
        format!("{raw}/")
    };
    Url::parse(&normalized).map_err(|e| Error::Invalid {
        message: format!("catalog URL {raw:?}: {e}"),
    })
}

/// Build the request URL for a query
pub fn endpoint_url(base: &Url, query: &Query) -> Result<Url> {
    let path = if query.is_search() {
        "products/search"
    } else {
        "products"
    };
    let mut url = base.join(path).map_err(|e| Error::Invalid {
        message: format!("catalog endpoint {path}: {e}"),
    })?;

    {
        let mut pairs = url.query_pairs_mut();
        pairs
            .append_pair("limit", &query.page_size.to_string())
            .append_pair("skip", &query.offset.to_string());
        if query.is_search() {
            pairs.append_pair("q", &query.search_term);
        }
    }

    Ok(url)
}

impl CatalogSource for HttpCatalog {
    fn fetch(&self, query: &Query) -> BoxFuture<'static, Result<RawPage>> {
        let client = self.client.clone();
        let url = endpoint_url(&self.base_url, query);

        async move {
            let url = url?;
            tracing::debug!(url = %url, "GET catalog");

            let response = client.get(url).send().await?;
            let status = response.status();
            if !status.is_success() {
                return Err(Error::HttpStatus {
                    status: status.as_u16(),
                });
            }

            let body: CatalogResponse = response.json().await?;
            Ok(RawPage::from(body))
        }
        .boxed()
    }

    fn describe(&self) -> String {
        format!("http catalog at {}", self.base_url)
    }
}

impl std::fmt::Debug for HttpCatalog {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpCatalog")
            .field("base_url", &self.base_url.as_str())
            .finish()
    }
}
