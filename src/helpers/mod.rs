//! Helper Utilities
//!
//! Common utilities used across the application.

#[cfg(feature = "gui")]
mod action;
mod debounce;
mod fs;

#[cfg(feature = "gui")]
pub use action::*;
pub use debounce::*;
pub use fs::*;
