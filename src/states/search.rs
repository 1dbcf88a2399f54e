//! Product Search State
//!
//! GPUI entity owning the live [`WindowedList`]. Keystrokes go through the
//! debouncer, committed terms reset the list, and the viewport asks for more
//! pages as the user scrolls. Every load is fetched on the tokio runtime and
//! handed back to the list on the foreground thread.

use crate::domain::PageResult;
use crate::error::Error;
use crate::helpers::Debouncer;
use crate::services::{ServiceHub, run_in_tokio};
use crate::states::{ListStatus, LoadOutcome, LoadTicket, UIEvent, ViewportAdapter, WindowedList};
use gpui::{Context, EventEmitter, Task};
use std::ops::Range;
use std::sync::Arc;
use std::time::Instant;

/// State behind the product search view
pub struct ProductSearchState {
    services: ServiceHub,
    list: WindowedList,
    viewport: ViewportAdapter,
    debouncer: Debouncer<String>,
    /// Timer for the pending keystroke; replacing it cancels the old one
    debounce_task: Option<Task<()>>,
    /// Last load error, shown until dismissed or the search changes
    notice: Option<Arc<str>>,
}

impl EventEmitter<UIEvent> for ProductSearchState {}

impl ProductSearchState {
    pub fn new(services: ServiceHub) -> Self {
        let list = WindowedList::new(services.page_size());
        let viewport = ViewportAdapter::new(services.prefetch_threshold());
        let debouncer = Debouncer::new(services.debounce_window());
        Self {
            services,
            list,
            viewport,
            debouncer,
            debounce_task: None,
            notice: None,
        }
    }

    // ==================== Getters ====================

    pub fn list(&self) -> &WindowedList {
        &self.list
    }

    pub fn status(&self) -> ListStatus {
        self.list.status()
    }

    pub fn notice(&self) -> Option<&Arc<str>> {
        self.notice.as_ref()
    }

    // ==================== Operations ====================

    /// Load the first browse page
    pub fn mount(&mut self, cx: &mut Context<Self>) {
        if let Some(ticket) = self.list.mount() {
            self.spawn_load(ticket, cx);
            cx.notify();
        }
    }

    /// Raw text change from the search field
    pub fn on_input(&mut self, text: String, cx: &mut Context<Self>) {
        self.debouncer.push(text, Instant::now());

        self.debounce_task = Some(cx.spawn(async move |this, cx| {
            loop {
                let Ok(Some(deadline)) = this.read_with(cx, |this, _| this.debouncer.deadline()) else {
                    return;
                };
                cx.background_executor()
                    .timer(deadline.saturating_duration_since(Instant::now()))
                    .await;
                let done = this.update(cx, |this, cx| match this.debouncer.poll(Instant::now()) {
                    Some(term) => {
                        this.set_search_term(term, cx);
                        true
                    }
                    None => !this.debouncer.is_pending(),
                });
                if done.unwrap_or(true) {
                    return;
                }
            }
        }));
    }

    /// Drop any pending keystroke and go back to browsing
    pub fn clear_search(&mut self, cx: &mut Context<Self>) {
        self.debouncer.cancel();
        self.debounce_task = None;
        self.set_search_term(String::new(), cx);
    }

    /// Commit a search term
    pub fn set_search_term(&mut self, term: String, cx: &mut Context<Self>) {
        let Some(ticket) = self.list.set_search_term(term) else {
            return;
        };
        self.notice = None;
        cx.emit(UIEvent::SearchStarted {
            term: ticket.search_term().into(),
        });
        self.spawn_load(ticket, cx);
        cx.notify();
    }

    /// The list is about to draw `range`
    pub fn on_range_rendered(&mut self, range: Range<usize>, cx: &mut Context<Self>) {
        if let Some(ticket) = self.viewport.on_range_rendered(&mut self.list, range) {
            self.spawn_load(ticket, cx);
            cx.notify();
        }
    }

    /// Try the failed load again
    pub fn retry(&mut self, cx: &mut Context<Self>) {
        self.notice = None;
        self.viewport.unblock();
        if self.list.is_empty() && !self.list.is_loading() {
            if let Some(ticket) = self.list.reload() {
                self.spawn_load(ticket, cx);
            }
        }
        cx.notify();
    }

    pub fn dismiss_notice(&mut self, cx: &mut Context<Self>) {
        if self.notice.take().is_some() {
            cx.notify();
        }
    }

    fn spawn_load(&mut self, ticket: LoadTicket, cx: &mut Context<Self>) {
        tracing::debug!(
            term = %ticket.search_term(),
            offset = ticket.offset(),
            kind = ?ticket.kind(),
            "Loading products"
        );
        let fetch = self.services.fetch_page(ticket.query());

        cx.spawn(async move |this, cx| {
            let result = run_in_tokio(fetch).await;
            let _ = this.update(cx, |this, cx| this.finish_load(ticket, result, cx));
        })
        .detach();
    }

    fn finish_load(
        &mut self,
        ticket: LoadTicket,
        result: Result<PageResult, Error>,
        cx: &mut Context<Self>,
    ) {
        let offset = ticket.offset();
        match self.list.complete(ticket.clone(), result) {
            LoadOutcome::Merged { appended } => {
                tracing::debug!(offset, appended, total = self.list.total(), "Page merged");
            }
            LoadOutcome::Skipped | LoadOutcome::Discarded => {}
            LoadOutcome::Failed(error) => {
                tracing::warn!(offset, error = %error, network = error.is_network(), "Page load failed");
                self.viewport.block(&ticket);
                self.notice = Some(error.to_string().into());
            }
        }
        cx.notify();
    }
}
