//! View Components
//!
//! UI components for the Catalog-GUI application.
//!
//! ## Layout Structure
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        TitleBar                              │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Greeting / prompt                                           │
//! │  [ Search products                                      ]    │
//! ├─────────────────────────────────────────────────────────────┤
//! │  ProductRow                                                  │
//! │  ProductRow          (uniform_list, virtualized)             │
//! │  Placeholder row                                             │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Error notice (when a load failed)                           │
//! ├─────────────────────────────────────────────────────────────┤
//! │  N of TOTAL products                      Loading more...    │
//! └─────────────────────────────────────────────────────────────┘
//! ```

mod product_row;
mod search_view;
mod title_bar;

pub use product_row::*;
pub use search_view::*;
pub use title_bar::*;
