//! Application Constants
//!
//! Centralized defaults for layout, paging and timing.

/// Default window dimensions
pub const DEFAULT_WINDOW_WIDTH: f32 = 960.0;
pub const DEFAULT_WINDOW_HEIGHT: f32 = 820.0;
pub const MIN_WINDOW_WIDTH: f32 = 520.0;
pub const MIN_WINDOW_HEIGHT: f32 = 480.0;

/// Height of a single product row in pixels
pub const PRODUCT_ROW_HEIGHT: f32 = 161.0;

/// Side length of the thumbnail tile in a product row
pub const THUMBNAIL_SIZE: f32 = 128.0;

/// Catalog defaults
pub const DEFAULT_CATALOG_URL: &str = "https://dummyjson.com";
pub const DEFAULT_PAGE_SIZE: usize = 20;
pub const REQUEST_TIMEOUT_SECS: u64 = 15;

/// Idle window before a typed search term is committed
pub const SEARCH_DEBOUNCE_MS: u64 = 300;

/// Rows past the visible range that still count as "about to render"
pub const PREFETCH_THRESHOLD: usize = 15;

/// Config file name inside the platform config directory
pub const CONFIG_FILE_NAME: &str = "catalog-gui.toml";

/// Log file prefix inside the platform data directory
pub const LOG_FILE_PREFIX: &str = "catalog-gui.log";
