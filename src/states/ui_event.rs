//! UI Events
//!
//! Events emitted from the state layer to views for user-facing feedback.

use std::sync::Arc;

/// UI events for user feedback
#[derive(Clone, Debug, PartialEq)]
pub enum UIEvent {
    /// A new search session started; the list is empty again
    SearchStarted {
        /// Committed search term (empty when browsing)
        term: Arc<str>,
    },
}
