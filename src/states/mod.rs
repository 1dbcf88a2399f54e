//! State Management Layer
//!
//! The loading core ([`WindowedList`], [`ViewportAdapter`]) is plain Rust and
//! performs no I/O. The GPUI entities wrap it and drive the network calls.
//! Data flows one way:
//!
//! ```text
//! UI Action → State Method → LoadTicket → spawn Service Call → complete → notify → UI Refresh
//! ```

mod viewport;
mod windowed_list;

#[cfg(feature = "gui")]
mod app;
#[cfg(feature = "gui")]
mod i18n;
#[cfg(feature = "gui")]
mod search;
#[cfg(feature = "gui")]
mod ui_event;

pub use viewport::*;
pub use windowed_list::*;

#[cfg(feature = "gui")]
pub use app::*;
#[cfg(feature = "gui")]
pub use i18n::*;
#[cfg(feature = "gui")]
pub use search::*;
#[cfg(feature = "gui")]
pub use ui_event::*;
