//! Windowed List
//!
//! The authoritative in-memory list behind the product view. It owns the
//! current [`ListSession`] (search term, loaded products, total, in-flight
//! offsets) and decides which loads may start and which responses may be
//! merged.
//!
//! The list performs no I/O. Starting a load hands out a [`LoadTicket`]; the
//! owner runs the query and gives the ticket back to [`WindowedList::complete`]
//! together with the result:
//!
//! ```text
//! set_search_term / request_load ──► LoadTicket ──► fetch ──► complete ──► LoadOutcome
//! ```
//!
//! Rules:
//! - single flight: at most one load per session is outstanding;
//! - a term change resets the session before the page-1 ticket is issued, and
//!   tickets from an older session are discarded on completion;
//! - a page is appended only if the list has not grown past its offset.

use std::collections::BTreeSet;

use crate::domain::{PageResult, Product, Query};
use crate::error::Error;

/// Why a load was started
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoadKind {
    /// First page after mount or a search term change
    Reset,
    /// A following page requested by the viewport
    Page,
}

/// Handle for one outstanding load
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoadTicket {
    generation: u64,
    search_term: String,
    offset: usize,
    page_size: usize,
    kind: LoadKind,
}

impl LoadTicket {
    /// The catalog query this ticket stands for
    pub fn query(&self) -> Query {
        Query::new(self.search_term.clone(), self.offset, self.page_size)
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn kind(&self) -> LoadKind {
        self.kind
    }
}

/// What happened when a ticket was completed
#[derive(Debug)]
pub enum LoadOutcome {
    /// The page was appended
    Merged { appended: usize },
    /// The page arrived but the list already covers its offset
    Skipped,
    /// The ticket belongs to an older session (or was already completed)
    Discarded,
    /// The load failed; the list is unchanged
    Failed(Error),
}

/// Status line shown under the list
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ListStatus {
    /// Nothing in flight, more pages may exist
    Idle,
    /// First browse page in flight
    Loading,
    /// First page of a search in flight
    Searching,
    /// A following page in flight
    LoadingMore,
    /// Every page has been loaded
    ///
    /// Only reported once the session has accepted a page, so a failed first
    /// load stays [`ListStatus::Idle`].
    Exhausted,
}

/// State of the live search
#[derive(Clone, Debug, Default)]
pub struct ListSession {
    search_term: String,
    items: Vec<Product>,
    total: usize,
    pending: BTreeSet<usize>,
    in_flight: Option<LoadKind>,
    /// A page has been merged or skipped in this session
    answered: bool,
}

impl ListSession {
    fn new(search_term: String) -> Self {
        Self {
            search_term,
            ..Default::default()
        }
    }
}

/// Windowed, incrementally loaded product list
#[derive(Clone, Debug)]
pub struct WindowedList {
    page_size: usize,
    generation: u64,
    mounted: bool,
    session: ListSession,
}

impl WindowedList {
    /// Create an unmounted list loading `page_size` items per request
    pub fn new(page_size: usize) -> Self {
        Self {
            page_size: page_size.max(1),
            generation: 0,
            mounted: false,
            session: ListSession::default(),
        }
    }

    // ==================== Getters ====================

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Session counter, bumped on every reset
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn search_term(&self) -> &str {
        &self.session.search_term
    }

    /// Number of loaded products
    pub fn len(&self) -> usize {
        self.session.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.session.items.is_empty()
    }

    /// Product at `index`, if loaded
    pub fn item(&self, index: usize) -> Option<&Product> {
        self.session.items.get(index)
    }

    /// Total matches reported by the catalog (0 until the first page lands)
    pub fn total(&self) -> usize {
        self.session.total
    }

    /// Whether a load is outstanding
    pub fn is_loading(&self) -> bool {
        !self.session.pending.is_empty()
    }

    /// Offsets currently in flight
    pub fn pending_offsets(&self) -> impl Iterator<Item = usize> + '_ {
        self.session.pending.iter().copied()
    }

    /// Whether more pages exist
    ///
    /// Requires a one-item margin: `total` may be approximate.
    pub fn has_more(&self) -> bool {
        self.len() + 1 < self.session.total
    }

    /// Loaded, or known not to exist
    pub fn is_loaded(&self, index: usize) -> bool {
        !self.has_more() || index < self.len()
    }

    /// Rows to show, including one placeholder slot while more pages exist
    pub fn item_count(&self) -> usize {
        if self.has_more() {
            self.len() + 1
        } else {
            self.len()
        }
    }

    /// Status line for the current session
    pub fn status(&self) -> ListStatus {
        match self.session.in_flight {
            Some(LoadKind::Reset) if self.session.search_term.is_empty() => ListStatus::Loading,
            Some(LoadKind::Reset) => ListStatus::Searching,
            Some(LoadKind::Page) => ListStatus::LoadingMore,
            None if self.session.answered && !self.has_more() => ListStatus::Exhausted,
            None => ListStatus::Idle,
        }
    }

    // ==================== Operations ====================

    /// Start the first session with the current search term
    ///
    /// Does nothing once the list is mounted.
    pub fn mount(&mut self) -> Option<LoadTicket> {
        if self.mounted {
            return None;
        }
        let term = std::mem::take(&mut self.session.search_term);
        Some(self.restart(term))
    }

    /// Switch to a new search term
    ///
    /// A different term discards the loaded items, total and in-flight
    /// offsets, then issues the first page. The same term is a no-op.
    pub fn set_search_term(&mut self, term: impl Into<String>) -> Option<LoadTicket> {
        let term = term.into();
        if self.mounted && term == self.session.search_term {
            return None;
        }
        Some(self.restart(term))
    }

    /// Restart the current search from the first page
    pub fn reload(&mut self) -> Option<LoadTicket> {
        if !self.mounted {
            return None;
        }
        let term = std::mem::take(&mut self.session.search_term);
        Some(self.restart(term))
    }

    /// Request the page starting at `start`
    ///
    /// Returns `None` when another load is in flight, `start` is already
    /// pending, or the list is not mounted.
    pub fn request_load(&mut self, start: usize) -> Option<LoadTicket> {
        if !self.mounted {
            return None;
        }
        if self.is_loading() || self.session.pending.contains(&start) {
            tracing::trace!(offset = start, "Load already in flight, skipping");
            return None;
        }
        Some(self.issue(start, LoadKind::Page))
    }

    /// Apply the result of a ticket's load
    pub fn complete(&mut self, ticket: LoadTicket, result: Result<PageResult, Error>) -> LoadOutcome {
        if ticket.generation != self.generation || ticket.search_term != self.session.search_term {
            tracing::debug!(
                term = %ticket.search_term,
                offset = ticket.offset,
                "Discarding response for a previous search"
            );
            return LoadOutcome::Discarded;
        }
        if !self.session.pending.remove(&ticket.offset) {
            return LoadOutcome::Discarded;
        }
        if self.session.pending.is_empty() {
            self.session.in_flight = None;
        }

        let page = match result {
            Ok(page) => page,
            Err(error) => return LoadOutcome::Failed(error),
        };
        self.session.answered = true;

        if self.len() > ticket.offset {
            tracing::debug!(
                offset = ticket.offset,
                loaded = self.len(),
                "List already covers this page, skipping merge"
            );
            return LoadOutcome::Skipped;
        }

        let appended = page.items.len();
        self.session.items.extend(page.items);
        self.session.total = page.total.max(self.session.items.len());
        LoadOutcome::Merged { appended }
    }

    fn restart(&mut self, term: String) -> LoadTicket {
        self.generation += 1;
        self.mounted = true;
        self.session = ListSession::new(term);
        tracing::debug!(
            generation = self.generation,
            term = %self.session.search_term,
            "List session reset"
        );
        self.issue(0, LoadKind::Reset)
    }

    fn issue(&mut self, offset: usize, kind: LoadKind) -> LoadTicket {
        self.session.pending.insert(offset);
        self.session.in_flight = Some(kind);
        LoadTicket {
            generation: self.generation,
            search_term: self.session.search_term.clone(),
            offset,
            page_size: self.page_size,
            kind,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Product, ProductId, ValidationError};
    use std::sync::Arc;

    fn product(id: usize) -> Product {
        Product {
            id: ProductId::from(id as u64),
            title: Arc::from(format!("Product {id}")),
            description: Arc::from("desc"),
            price: 1.0,
            thumbnail: Arc::from("https://cdn.example.com/t.png"),
        }
    }

    fn page(range: std::ops::Range<usize>, total: usize) -> PageResult {
        PageResult {
            items: range.map(product).collect(),
            total,
        }
    }

    /// Serve `ticket` from a catalog of `total` items
    fn serve(list: &mut WindowedList, ticket: LoadTicket, total: usize) -> LoadOutcome {
        let start = ticket.offset().min(total);
        let end = (ticket.offset() + ticket.query().page_size).min(total);
        list.complete(ticket, Ok(page(start..end, total)))
    }

    fn mounted(total: usize, page_size: usize) -> WindowedList {
        let mut list = WindowedList::new(page_size);
        let ticket = list.mount().expect("mount ticket");
        serve(&mut list, ticket, total);
        list
    }

    #[test]
    fn test_mount_issues_first_browse_page() {
        let mut list = WindowedList::new(20);
        let ticket = list.mount().expect("ticket");
        assert_eq!(ticket.query(), Query::new("", 0, 20));
        assert_eq!(ticket.kind(), LoadKind::Reset);
        assert_eq!(list.status(), ListStatus::Loading);
        assert!(list.mount().is_none());
    }

    #[test]
    fn test_search_change_resets_before_first_page_lands() {
        let mut list = mounted(100, 20);
        assert_eq!(list.len(), 20);

        let ticket = list.set_search_term("phone").expect("ticket");
        assert!(list.is_empty());
        assert_eq!(list.total(), 0);
        assert_eq!(list.pending_offsets().collect::<Vec<_>>(), vec![0]);
        assert_eq!(ticket.query(), Query::new("phone", 0, 20));
        assert_eq!(list.status(), ListStatus::Searching);
    }

    #[test]
    fn test_same_search_term_is_noop() {
        let mut list = mounted(100, 20);
        assert!(list.set_search_term("").is_none());
        let generation = list.generation();
        list.set_search_term("a").expect("ticket");
        assert!(list.set_search_term("a").is_none());
        assert_eq!(list.generation(), generation + 1);
    }

    #[test]
    fn test_single_flight() {
        let mut list = mounted(100, 20);
        let first = list.request_load(20).expect("first load");
        assert!(list.request_load(20).is_none());
        assert!(list.request_load(40).is_none());
        assert_eq!(list.pending_offsets().count(), 1);
        assert_eq!(list.status(), ListStatus::LoadingMore);

        serve(&mut list, first, 100);
        assert!(!list.is_loading());
        assert!(list.request_load(40).is_some());
    }

    #[test]
    fn test_request_before_mount_is_ignored() {
        let mut list = WindowedList::new(20);
        assert!(list.request_load(0).is_none());
    }

    #[test]
    fn test_stale_search_response_is_discarded() {
        let mut list = mounted(100, 20);
        let old = list.set_search_term("lamp").expect("lamp ticket");
        let new = list.set_search_term("desk").expect("desk ticket");

        // The old term's page arrives first
        assert!(matches!(serve(&mut list, old, 100), LoadOutcome::Discarded));
        assert!(list.is_empty());
        assert!(list.is_loading());

        assert!(matches!(serve(&mut list, new, 30), LoadOutcome::Merged { appended: 20 }));
        assert_eq!(list.search_term(), "desk");
        assert_eq!(list.total(), 30);
    }

    #[test]
    fn test_stale_page_load_after_reset_is_discarded() {
        let mut list = mounted(100, 20);
        let page_two = list.request_load(20).expect("page two");
        let reset = list.set_search_term("x").expect("reset");

        // Search change is not blocked by the old in-flight page
        assert_eq!(reset.offset(), 0);
        assert!(matches!(serve(&mut list, page_two, 100), LoadOutcome::Discarded));
        assert_eq!(list.pending_offsets().collect::<Vec<_>>(), vec![0]);
    }

    #[test]
    fn test_same_term_after_round_trip_still_discards_old_ticket() {
        let mut list = mounted(100, 20);
        let first = list.set_search_term("a").expect("a");
        list.set_search_term("b").expect("b");
        let second = list.set_search_term("a").expect("a again");
        assert!(matches!(serve(&mut list, first, 100), LoadOutcome::Discarded));
        assert!(matches!(serve(&mut list, second, 100), LoadOutcome::Merged { .. }));
    }

    #[test]
    fn test_item_count_reserves_placeholder_only_while_more() {
        let mut list = mounted(45, 20);
        assert!(list.has_more());
        assert_eq!(list.item_count(), list.len() + 1);
        assert!(list.is_loaded(19));
        assert!(!list.is_loaded(20));

        while list.has_more() {
            let ticket = list.request_load(list.len()).expect("ticket");
            serve(&mut list, ticket, 45);
            if list.has_more() {
                assert_eq!(list.item_count(), list.len() + 1);
            }
        }
        assert_eq!(list.len(), 45);
        assert_eq!(list.item_count(), list.len());
        assert!(list.is_loaded(1000));
        assert_eq!(list.status(), ListStatus::Exhausted);
    }

    #[test]
    fn test_has_more_boundary_with_one_item_margin() {
        let mut list = WindowedList::new(10);
        let ticket = list.mount().expect("ticket");
        list.complete(ticket, Ok(page(0..10, 25)));
        let ticket = list.request_load(10).expect("ticket");
        list.complete(ticket, Ok(page(10..20, 25)));
        assert!(list.has_more());

        // 23 loaded: 24 < 25, still more
        let ticket = list.request_load(20).expect("ticket");
        list.complete(ticket, Ok(page(20..23, 25)));
        assert_eq!(list.len(), 23);
        assert!(list.has_more());

        // 24 loaded: 25 < 25 is false
        let ticket = list.request_load(23).expect("ticket");
        list.complete(ticket, Ok(page(23..24, 25)));
        assert_eq!(list.len(), 24);
        assert!(!list.has_more());
        assert_eq!(list.item_count(), 24);
    }

    #[test]
    fn test_three_pages_of_twenty_five_exhaust_list() {
        let mut list = mounted(25, 10);
        for offset in [10, 20] {
            let ticket = list.request_load(offset).expect("ticket");
            serve(&mut list, ticket, 25);
        }
        assert_eq!(list.len(), 25);
        assert!(!list.has_more());
        assert!(list.request_load(25).is_some_and(|t| t.offset() == 25));
    }

    #[test]
    fn test_failed_page_leaves_list_unchanged() {
        let mut list = mounted(100, 20);
        let ticket = list.request_load(20).expect("ticket");
        let error = Error::Validation {
            index: 3,
            source: ValidationError::MissingField { field: "price" },
        };
        match list.complete(ticket, Err(error)) {
            LoadOutcome::Failed(Error::Validation { index, .. }) => assert_eq!(index, 3),
            other => panic!("expected failure, got {other:?}"),
        }
        assert_eq!(list.len(), 20);
        assert!(!list.is_loading());
        assert_eq!(list.status(), ListStatus::Idle);
    }

    #[test]
    fn test_page_is_not_appended_past_its_offset() {
        let mut list = mounted(100, 20);
        let ticket = list.request_load(10).expect("ticket");
        assert!(matches!(
            list.complete(ticket, Ok(page(10..30, 100))),
            LoadOutcome::Skipped
        ));
        assert_eq!(list.len(), 20);
        assert!(!list.is_loading());
    }

    #[test]
    fn test_completing_twice_is_discarded() {
        let mut list = mounted(100, 20);
        let ticket = list.request_load(20).expect("ticket");
        serve(&mut list, ticket.clone(), 100);
        assert!(matches!(serve(&mut list, ticket, 100), LoadOutcome::Discarded));
        assert_eq!(list.len(), 40);
    }

    #[test]
    fn test_loaded_never_exceeds_total() {
        let mut list = WindowedList::new(20);
        let ticket = list.mount().expect("ticket");
        // Server under-reports its total
        list.complete(ticket, Ok(page(0..20, 5)));
        assert!(list.len() <= list.total());
        assert!(!list.has_more());
    }

    #[test]
    fn test_reload_restarts_same_term_and_discards_old_tickets() {
        let mut list = mounted(100, 20);
        let ticket = list.set_search_term("lamp").expect("ticket");
        list.complete(ticket, Err(Error::HttpStatus { status: 502 }));
        assert!(list.is_empty());
        // A failed first page says nothing about the catalog being empty
        assert_eq!(list.status(), ListStatus::Idle);

        let stale = list.request_load(0);
        assert!(stale.is_some());
        let retry = list.reload().expect("reload");
        assert_eq!(retry.query(), Query::new("lamp", 0, 20));
        assert!(matches!(serve(&mut list, stale.expect("stale"), 100), LoadOutcome::Discarded));
        assert!(matches!(serve(&mut list, retry, 100), LoadOutcome::Merged { .. }));
    }

    #[test]
    fn test_failed_first_page_is_not_reported_as_exhausted() {
        let mut list = WindowedList::new(20);
        let ticket = list.mount().expect("ticket");
        list.complete(ticket, Err(Error::HttpStatus { status: 500 }));
        assert_eq!(list.item_count(), 0);
        assert_eq!(list.status(), ListStatus::Idle);

        let retry = list.reload().expect("reload");
        serve(&mut list, retry, 0);
        assert_eq!(list.status(), ListStatus::Exhausted);
    }

    #[test]
    fn test_empty_catalog_is_exhausted_immediately() {
        let list = mounted(0, 20);
        assert_eq!(list.item_count(), 0);
        assert_eq!(list.status(), ListStatus::Exhausted);
    }
}
