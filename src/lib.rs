//! Catalog GUI Library
//!
//! A native client for searching and browsing a remote product catalog.
//! Typing in the search field runs a debounced query; the result list is
//! virtualized and loads further pages as the user scrolls.
//!
//! The loading core (`domain`, `services`, `states::WindowedList`) has no GUI
//! dependency; the GPUI front end is behind the default `gui` feature.

#[cfg(feature = "gui")]
rust_i18n::i18n!("locales", fallback = "en");

#[cfg(feature = "gui")]
pub mod app;
#[cfg(feature = "gui")]
pub mod assets;
pub mod constants;
pub mod domain;
pub mod error;
pub mod helpers;
pub mod services;
pub mod states;
#[cfg(feature = "gui")]
pub mod views;
