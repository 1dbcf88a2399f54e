//! Viewport Adapter
//!
//! Connects a virtualized list renderer to the [`WindowedList`]. The renderer
//! reports which rows it is about to draw; the adapter widens that range by
//! the prefetch threshold and asks the list to load the first missing row.
//!
//! Only rows in (or near) the viewport are ever materialized. Each row slot is
//! either a loaded product or a placeholder, rendered by an injected
//! [`RowRenderer`].

use std::ops::Range;

use super::windowed_list::{LoadTicket, WindowedList};
use crate::domain::Product;

/// Content of one row slot
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum RowSlot<'a> {
    Product(&'a Product),
    /// Not loaded yet
    Placeholder,
}

/// Renders a single row slot
pub trait RowRenderer {
    type Row;

    fn render_row(&self, index: usize, slot: RowSlot<'_>) -> Self::Row;
}

/// Range-driven load trigger for a [`WindowedList`]
#[derive(Clone, Debug)]
pub struct ViewportAdapter {
    threshold: usize,
    /// Offset whose last load failed, scoped to a list generation
    blocked: Option<(u64, usize)>,
}

impl ViewportAdapter {
    pub fn new(threshold: usize) -> Self {
        Self {
            threshold,
            blocked: None,
        }
    }

    /// `range` extended by the prefetch threshold, clamped to the list's item count
    pub fn watched_range(&self, list: &WindowedList, range: Range<usize>) -> Range<usize> {
        let count = list.item_count();
        let end = range.end.saturating_add(self.threshold).min(count);
        range.start.min(end)..end
    }

    /// First index in the watched range that is not loaded
    pub fn first_unloaded(&self, list: &WindowedList, range: Range<usize>) -> Option<usize> {
        self.watched_range(list, range).find(|&index| !list.is_loaded(index))
    }

    /// React to the renderer drawing `range`
    ///
    /// Returns the ticket of the load started, if any.
    pub fn on_range_rendered(&mut self, list: &mut WindowedList, range: Range<usize>) -> Option<LoadTicket> {
        let index = self.first_unloaded(list, range)?;
        if self.blocked == Some((list.generation(), index)) {
            return None;
        }
        list.request_load(index)
    }

    /// Stop re-requesting the offset of a failed load
    ///
    /// The block lifts when the list is reset or [`Self::unblock`] is called.
    pub fn block(&mut self, ticket: &LoadTicket) {
        self.blocked = Some((ticket.generation(), ticket.offset()));
    }

    pub fn unblock(&mut self) {
        self.blocked = None;
    }

    pub fn is_blocked(&self, list: &WindowedList) -> bool {
        self.blocked.is_some_and(|(generation, _)| generation == list.generation())
    }

    /// Slot content for `index`
    pub fn slot(list: &WindowedList, index: usize) -> RowSlot<'_> {
        match list.item(index) {
            Some(product) => RowSlot::Product(product),
            None => RowSlot::Placeholder,
        }
    }

    /// Render the rows of `range` that exist in the list
    pub fn render_rows<R: RowRenderer>(list: &WindowedList, range: Range<usize>, renderer: &R) -> Vec<R::Row> {
        let end = range.end.min(list.item_count());
        (range.start.min(end)..end)
            .map(|index| renderer.render_row(index, Self::slot(list, index)))
            .collect()
    }
}

impl Default for ViewportAdapter {
    fn default() -> Self {
        Self::new(crate::constants::PREFETCH_THRESHOLD)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{PageResult, ProductId};
    use crate::error::Error;
    use std::sync::Arc;

    fn product(id: usize) -> Product {
        Product {
            id: ProductId::from(id as u64),
            title: Arc::from(format!("Product {id}")),
            description: Arc::from(""),
            price: 0.0,
            thumbnail: Arc::from(""),
        }
    }

    fn serve(list: &mut WindowedList, ticket: LoadTicket, total: usize) {
        let start = ticket.offset();
        let end = (start + list.page_size()).min(total);
        list.complete(
            ticket,
            Ok(PageResult {
                items: (start..end).map(product).collect(),
                total,
            }),
        );
    }

    fn loaded_list(total: usize) -> WindowedList {
        let mut list = WindowedList::new(20);
        let ticket = list.mount().expect("ticket");
        serve(&mut list, ticket, total);
        list
    }

    struct Labels;

    impl RowRenderer for Labels {
        type Row = String;

        fn render_row(&self, index: usize, slot: RowSlot<'_>) -> String {
            match slot {
                RowSlot::Product(p) => format!("{index}:{}", p.title),
                RowSlot::Placeholder => format!("{index}:loading"),
            }
        }
    }

    #[test]
    fn test_no_load_while_far_from_end() {
        let mut list = loaded_list(100);
        let mut viewport = ViewportAdapter::new(3);
        assert!(viewport.on_range_rendered(&mut list, 0..5).is_none());
        assert!(!list.is_loading());
    }

    #[test]
    fn test_threshold_triggers_load_of_next_page() {
        let mut list = loaded_list(100);
        let mut viewport = ViewportAdapter::new(15);
        let ticket = viewport.on_range_rendered(&mut list, 0..6).expect("prefetch");
        assert_eq!(ticket.offset(), 20);

        // In flight: scrolling further does not start another load
        assert!(viewport.on_range_rendered(&mut list, 10..21).is_none());
    }

    #[test]
    fn test_watched_range_is_clamped() {
        let list = loaded_list(10);
        let viewport = ViewportAdapter::new(15);
        assert_eq!(viewport.watched_range(&list, 0..8), 0..10);
        assert_eq!(viewport.first_unloaded(&list, 0..8), None);
    }

    #[test]
    fn test_exhausted_list_never_requests() {
        let mut list = loaded_list(10);
        let mut viewport = ViewportAdapter::new(15);
        assert!(viewport.on_range_rendered(&mut list, 0..10).is_none());
    }

    #[test]
    fn test_failed_offset_is_not_retried_until_unblocked() {
        let mut list = loaded_list(100);
        let mut viewport = ViewportAdapter::new(15);
        let ticket = viewport.on_range_rendered(&mut list, 10..21).expect("ticket");
        viewport.block(&ticket);
        list.complete(ticket, Err(Error::HttpStatus { status: 500 }));

        assert!(viewport.is_blocked(&list));
        assert!(viewport.on_range_rendered(&mut list, 10..21).is_none());

        viewport.unblock();
        assert!(viewport.on_range_rendered(&mut list, 10..21).is_some());
    }

    #[test]
    fn test_block_lifts_after_reset() {
        let mut list = loaded_list(100);
        let mut viewport = ViewportAdapter::new(15);
        let ticket = viewport.on_range_rendered(&mut list, 10..21).expect("ticket");
        viewport.block(&ticket);
        list.complete(ticket, Err(Error::HttpStatus { status: 500 }));

        let reset = list.set_search_term("new").expect("reset");
        serve(&mut list, reset, 100);
        assert!(!viewport.is_blocked(&list));
        assert!(viewport.on_range_rendered(&mut list, 10..21).is_some());
    }

    #[test]
    fn test_render_rows_mixes_products_and_placeholder() {
        let list = loaded_list(100);
        let rows = ViewportAdapter::render_rows(&list, 18..25, &Labels);
        assert_eq!(rows, vec!["18:Product 18", "19:Product 19", "20:loading"]);
    }
}
