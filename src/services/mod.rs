//! Service Layer
//!
//! The service layer provides abstraction over the remote product catalog
//! and bridges its async requests into the UI.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                      ServiceHub                              │
//! │  ┌──────────────────┐  ┌────────────────┐  ┌────────────┐   │
//! │  │  CatalogSource   │  │ validate_page  │  │  runtime   │   │
//! │  │  (HttpCatalog)   │  │ (records→typed)│  │  (tokio)   │   │
//! │  └──────────────────┘  └────────────────┘  └────────────┘   │
//! └─────────────────────────────────────────────────────────────┘
//!                            │
//!                            ▼ PageResult
//! ┌─────────────────────────────────────────────────────────────┐
//! │                      State Layer                             │
//! │                (WindowedList, ProductSearchState)            │
//! └─────────────────────────────────────────────────────────────┘
//! ```

pub(crate) mod catalog;
mod http_catalog;
mod hub;
mod runtime;

pub use catalog::{fetch_products, validate_page, CatalogSource};
pub use http_catalog::*;
pub use hub::*;
pub use runtime::*;
