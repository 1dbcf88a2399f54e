//! Internationalization Helpers
//!
//! Convenient functions for translating strings based on the current locale.

use super::CatalogGlobalStore;
use gpui::{App, SharedString};
use rust_i18n::t;

/// Current locale from the global store
pub fn current_locale(cx: &App) -> String {
    cx.global::<CatalogGlobalStore>().read(cx).locale().to_string()
}

/// Get translated string from "common" namespace
pub fn i18n_common(cx: &App, key: &str) -> SharedString {
    let locale = current_locale(cx);
    t!(format!("common.{key}"), locale = &locale).into()
}

/// Get translated string from "products" namespace
pub fn i18n_products(cx: &App, key: &str) -> SharedString {
    let locale = current_locale(cx);
    t!(format!("products.{key}"), locale = &locale).into()
}
