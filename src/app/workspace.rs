//! Workspace - Main Window Shell
//!
//! Root view of the main window: title bar on top, product search below.

use crate::states::ProductSearchState;
use crate::views::{CatalogTitleBar, SearchView};
use gpui::{Context, Entity, Window, prelude::*};
use gpui_component::{ActiveTheme, v_flex};

/// Main workspace containing the application layout
pub struct Workspace {
    title_bar: Entity<CatalogTitleBar>,
    search_view: Entity<SearchView>,
}

impl Workspace {
    pub fn new(search_state: Entity<ProductSearchState>, window: &mut Window, cx: &mut Context<Self>) -> Self {
        let title_bar = cx.new(|cx| CatalogTitleBar::new(window, cx));
        let search_view = cx.new(|cx| SearchView::new(search_state, window, cx));
        Self { title_bar, search_view }
    }
}

impl Render for Workspace {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        v_flex()
            .size_full()
            .bg(cx.theme().background)
            .text_color(cx.theme().foreground)
            .child(self.title_bar.clone())
            .child(self.search_view.clone())
    }
}
