//! Product Search View
//!
//! Search field on top, a virtualized product list below and a status bar at
//! the bottom:
//! - Header: greeting, prompt and search input
//! - List: `uniform_list` rows fed through the viewport adapter
//! - Footer: result counter, load status and error notice

use crate::assets::CustomIconName;
use crate::helpers::{FOCUS_SEARCH_KEYSTROKE, SEARCH_KEY_CONTEXT, SearchAction, humanize_keystroke};
use crate::states::{
    CatalogGlobalStore, ListStatus, ProductSearchState, UIEvent, ViewportAdapter, current_locale, i18n_common,
    i18n_products,
};
use crate::views::ProductRowRenderer;
use gpui::{
    App, Context, Entity, ScrollStrategy, SharedString, Subscription, UniformListScrollHandle, Window,
    div, prelude::*, uniform_list,
};
use gpui_component::{
    ActiveTheme, Icon, IconName, Sizable,
    button::{Button, ButtonVariants},
    h_flex,
    input::{Input, InputEvent, InputState},
    label::Label,
    v_flex,
};
use rust_i18n::t;
use std::ops::Range;

/// Product search and browsing view
pub struct SearchView {
    search_state: Entity<ProductSearchState>,
    input_state: Entity<InputState>,
    scroll_handle: UniformListScrollHandle,
    _subscriptions: Vec<Subscription>,
}

impl SearchView {
    pub fn new(search_state: Entity<ProductSearchState>, window: &mut Window, cx: &mut Context<Self>) -> Self {
        let mut subscriptions = Vec::new();

        subscriptions.push(cx.observe(&search_state, |_this, _model, cx| {
            cx.notify();
        }));

        // Back to the top whenever a new search starts
        subscriptions.push(cx.subscribe(&search_state, |this, _state, event, cx| match event {
            UIEvent::SearchStarted { term } => {
                tracing::debug!(term = %term, "Search started");
                this.scroll_handle.scroll_to_item(0, ScrollStrategy::Top);
                cx.notify();
            }
        }));

        let placeholder = search_placeholder(cx);
        let input_state = cx.new(|cx| InputState::new(window, cx).placeholder(placeholder));

        // Follow locale changes
        let app_state = cx.global::<CatalogGlobalStore>().app_state();
        subscriptions.push(cx.observe_in(&app_state, window, |this, _model, window, cx| {
            let placeholder = search_placeholder(cx);
            this.input_state.update(cx, |input, cx| input.set_placeholder(placeholder, window, cx));
        }));

        // Every keystroke goes to the debouncer
        let state = search_state.clone();
        subscriptions.push(cx.subscribe(&input_state, move |_this, input, event, cx| {
            if matches!(event, InputEvent::Change) {
                let text = input.read(cx).value().to_string();
                state.update(cx, |state, cx| state.on_input(text, cx));
            }
        }));

        input_state.update(cx, |input, cx| input.focus(window, cx));
        search_state.update(cx, |state, cx| state.mount(cx));

        Self {
            search_state,
            input_state,
            scroll_handle: UniformListScrollHandle::new(),
            _subscriptions: subscriptions,
        }
    }

    fn on_search_action(&mut self, action: &SearchAction, window: &mut Window, cx: &mut Context<Self>) {
        match action {
            SearchAction::Focus => {
                self.input_state.update(cx, |input, cx| input.focus(window, cx));
            }
            SearchAction::Clear => {
                self.input_state.update(cx, |input, cx| input.set_value("", window, cx));
                self.search_state.update(cx, |state, cx| state.clear_search(cx));
            }
        }
    }

    fn render_header(&self, cx: &mut Context<Self>) -> impl IntoElement {
        v_flex()
            .w_full()
            .p_4()
            .gap_2()
            .border_b_1()
            .border_color(cx.theme().border)
            .child(
                div()
                    .text_xl()
                    .text_color(cx.theme().foreground)
                    .child(i18n_products(cx, "greeting")),
            )
            .child(
                Label::new(i18n_products(cx, "prompt"))
                    .text_sm()
                    .text_color(cx.theme().muted_foreground),
            )
            .child(
                Input::new(&self.input_state)
                    .w_full()
                    .prefix(Icon::new(IconName::Search).small())
                    .cleanable(true),
            )
    }

    fn render_list(&self, cx: &mut Context<Self>) -> impl IntoElement {
        let state = self.search_state.read(cx);
        let list = state.list();
        let item_count = list.item_count();

        if item_count == 0 {
            let empty = match state.status() {
                _ if state.notice().is_some() => None,
                ListStatus::Exhausted if list.search_term().is_empty() => {
                    Some((CustomIconName::Package, i18n_products(cx, "empty")))
                }
                ListStatus::Exhausted => {
                    let locale = current_locale(cx);
                    let message = t!("products.empty_for", term = list.search_term(), locale = &locale);
                    Some((CustomIconName::PackageSearch, SharedString::from(message.to_string())))
                }
                _ => None,
            };
            let muted = cx.theme().muted_foreground;
            return v_flex()
                .flex_1()
                .gap_2()
                .items_center()
                .justify_center()
                .when_some(empty, |this, (icon, message)| {
                    this.child(Icon::from(icon).large().text_color(muted))
                        .child(Label::new(message).text_sm().text_color(muted))
                })
                .into_any_element();
        }

        uniform_list(
            "product-list",
            item_count,
            cx.processor(|this, range: Range<usize>, _window, cx| {
                // Loads are started after layout, never while rows are being built
                let state = this.search_state.clone();
                let requested = range.clone();
                cx.defer(move |cx| {
                    state.update(cx, |state, cx| state.on_range_rendered(requested, cx));
                });

                let renderer = ProductRowRenderer::new(cx);
                ViewportAdapter::render_rows(this.search_state.read(cx).list(), range, &renderer)
            }),
        )
        .track_scroll(self.scroll_handle.clone())
        .flex_1()
        .w_full()
        .into_any_element()
    }

    fn render_notice(&self, cx: &mut Context<Self>) -> Option<impl IntoElement> {
        let notice = self.search_state.read(cx).notice()?.clone();
        let danger = cx.theme().danger;

        Some(
            h_flex()
                .w_full()
                .px_4()
                .py_2()
                .gap_2()
                .items_center()
                .bg(danger.opacity(0.1))
                .border_t_1()
                .border_color(danger.opacity(0.4))
                .child(Icon::new(IconName::Info).small().text_color(danger))
                .child(
                    Label::new(format!("{}: {notice}", i18n_products(cx, "load_failed")))
                        .text_sm()
                        .text_color(danger),
                )
                .child(div().flex_1())
                .child(
                    Button::new("notice-retry")
                        .ghost()
                        .small()
                        .label(i18n_common(cx, "retry"))
                        .on_click(cx.listener(|this, _, _, cx| {
                            this.search_state.update(cx, |state, cx| state.retry(cx));
                        })),
                )
                .child(
                    Button::new("notice-dismiss")
                        .ghost()
                        .small()
                        .icon(IconName::Close)
                        .tooltip(i18n_common(cx, "dismiss"))
                        .on_click(cx.listener(|this, _, _, cx| {
                            this.search_state.update(cx, |state, cx| state.dismiss_notice(cx));
                        })),
                ),
        )
    }

    fn render_status_bar(&self, cx: &mut Context<Self>) -> impl IntoElement {
        let state = self.search_state.read(cx);
        let list = state.list();
        let (shown, total) = (list.len(), list.total());

        let status = match state.status() {
            ListStatus::Loading => Some(i18n_products(cx, "loading")),
            ListStatus::Searching => Some(i18n_products(cx, "searching")),
            ListStatus::LoadingMore => Some(i18n_products(cx, "loading_more")),
            ListStatus::Exhausted if total > 0 => Some(i18n_products(cx, "no_more")),
            ListStatus::Exhausted | ListStatus::Idle => None,
        };
        let is_loading = list.is_loading();
        let counter = (total > 0).then(|| {
            let locale = current_locale(cx);
            SharedString::from(t!("products.count", shown = shown, total = total, locale = &locale).to_string())
        });
        let muted = cx.theme().muted_foreground;

        h_flex()
            .w_full()
            .h_8()
            .px_4()
            .gap_2()
            .items_center()
            .border_t_1()
            .border_color(cx.theme().border)
            .when_some(counter, |this, counter| {
                this.child(Label::new(counter).text_xs().text_color(muted))
            })
            .child(div().flex_1())
            .when(is_loading, |this| {
                this.child(Icon::new(IconName::Loader).xsmall().text_color(muted))
            })
            .when_some(status, |this, status| {
                this.child(Label::new(status).text_xs().text_color(muted))
            })
    }
}

fn search_placeholder(cx: &App) -> String {
    format!(
        "{} ({})",
        i18n_products(cx, "search_placeholder"),
        humanize_keystroke(FOCUS_SEARCH_KEYSTROKE)
    )
}

impl Render for SearchView {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        v_flex()
            .key_context(SEARCH_KEY_CONTEXT)
            .on_action(cx.listener(Self::on_search_action))
            .size_full()
            .bg(cx.theme().background)
            .child(self.render_header(cx))
            .child(self.render_list(cx))
            .children(self.render_notice(cx))
            .child(self.render_status_bar(cx))
    }
}
