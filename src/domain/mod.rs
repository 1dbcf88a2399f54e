//! Domain - Pure Data Structures and Protocol Types
//!
//! These types don't depend on GPUI and represent the business domain.

mod config;
mod product;
mod query;

pub use config::*;
pub use product::*;
pub use query::*;
