//! Keyboard Actions and Shortcuts
//!
//! Defines global keyboard shortcuts and action dispatching.

use gpui::{Action, KeyBinding};
use schemars::JsonSchema;
use serde::Deserialize;

/// Key context set by the product search view
pub const SEARCH_KEY_CONTEXT: &str = "ProductSearch";

/// Keystroke that focuses the search field
pub const FOCUS_SEARCH_KEYSTROKE: &str = "secondary-f";

/// Menu actions (application-level)
#[derive(Clone, Copy, PartialEq, Debug, Deserialize, JsonSchema, Action)]
pub enum MenuAction {
    /// Quit the application
    Quit,
}

/// Search field actions
#[derive(Clone, Copy, PartialEq, Debug, Deserialize, JsonSchema, Action)]
pub enum SearchAction {
    /// Move keyboard focus to the search field
    Focus,
    /// Clear the search term and go back to browsing
    Clear,
}

/// Convert a keystroke string to human-readable format
///
/// Platform-specific formatting:
/// - macOS: ⌘ for cmd, ⌥ for alt, ⌃ for ctrl, ⇧ for shift
/// - Others: Ctrl+, Alt+, Shift+
pub fn humanize_keystroke(keystroke: &str) -> String {
    #[cfg(target_os = "macos")]
    let separator = "";
    #[cfg(not(target_os = "macos"))]
    let separator = "+";

    keystroke
        .split('-')
        .map(|part| match part {
            "secondary" | "cmd" => modifier("⌘", "Ctrl"),
            "ctrl" => modifier("⌃", "Ctrl"),
            "alt" => modifier("⌥", "Alt"),
            "shift" => modifier("⇧", "Shift"),
            "enter" => "Enter".to_string(),
            "escape" => "Esc".to_string(),
            key => key.to_uppercase(),
        })
        .collect::<Vec<_>>()
        .join(separator)
}

fn modifier(mac: &str, other: &str) -> String {
    if cfg!(target_os = "macos") { mac } else { other }.to_string()
}

/// Create global keyboard bindings
pub fn new_key_bindings() -> Vec<KeyBinding> {
    vec![
        // Application
        KeyBinding::new("secondary-q", MenuAction::Quit, None),
        // Search
        KeyBinding::new(FOCUS_SEARCH_KEYSTROKE, SearchAction::Focus, Some(SEARCH_KEY_CONTEXT)),
        KeyBinding::new("escape", SearchAction::Clear, Some(SEARCH_KEY_CONTEXT)),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[cfg(not(target_os = "macos"))]
    fn test_humanize_keystroke() {
        assert_eq!(humanize_keystroke("secondary-f"), "Ctrl+F");
        assert_eq!(humanize_keystroke("shift-alt-enter"), "Shift+Alt+Enter");
        assert_eq!(humanize_keystroke("escape"), "Esc");
    }

    #[test]
    #[cfg(target_os = "macos")]
    fn test_humanize_keystroke() {
        assert_eq!(humanize_keystroke("secondary-f"), "⌘F");
        assert_eq!(humanize_keystroke("escape"), "Esc");
    }
}
