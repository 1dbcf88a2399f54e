//! Product Row
//!
//! Fixed-height row used by the virtualized product list. Loaded products show
//! a letter tile (hover shows the thumbnail URI), title, description and
//! price; unloaded slots show a loader.

use crate::constants::{PRODUCT_ROW_HEIGHT, THUMBNAIL_SIZE};
use crate::domain::Product;
use crate::states::{RowRenderer, RowSlot, i18n_products};
use gpui::{AnyElement, App, FontWeight, Hsla, SharedString, div, prelude::*, px};
use gpui_component::{ActiveTheme, Icon, IconName, Sizable, h_flex, label::Label, tooltip::Tooltip, v_flex};

/// Renders list rows with colors captured from the active theme
pub struct ProductRowRenderer {
    foreground: Hsla,
    muted_foreground: Hsla,
    border: Hsla,
    tile_background: Hsla,
    tile_foreground: Hsla,
    price: Hsla,
    loading_label: SharedString,
}

impl ProductRowRenderer {
    pub fn new(cx: &App) -> Self {
        let theme = cx.theme();
        Self {
            foreground: theme.foreground,
            muted_foreground: theme.muted_foreground,
            border: theme.border,
            tile_background: theme.secondary,
            tile_foreground: theme.secondary_foreground,
            price: theme.success,
            loading_label: i18n_products(cx, "loading_row"),
        }
    }

    fn render_product(&self, index: usize, product: &Product) -> AnyElement {
        let thumbnail = SharedString::from(product.thumbnail.to_string());
        let tile = div()
            .id(("product-thumbnail", index))
            .tooltip(move |window, cx| Tooltip::new(thumbnail.clone()).build(window, cx))
            .flex_none()
            .size(px(THUMBNAIL_SIZE))
            .rounded_md()
            .bg(self.tile_background)
            .flex()
            .items_center()
            .justify_center()
            .text_3xl()
            .text_color(self.tile_foreground)
            .child(product.initial());

        let details = v_flex()
            .flex_1()
            .gap_1()
            .overflow_hidden()
            .child(
                div()
                    .text_base()
                    .font_weight(FontWeight::SEMIBOLD)
                    .text_color(self.foreground)
                    .child(SharedString::from(product.title.to_string())),
            )
            .child(
                div()
                    .text_sm()
                    .line_clamp(3)
                    .text_color(self.muted_foreground)
                    .child(SharedString::from(product.description.to_string())),
            )
            .child(
                Label::new(product.display_price())
                    .text_sm()
                    .text_color(self.price),
            );

        self.row().gap_4().child(tile).child(details).into_any_element()
    }

    fn render_placeholder(&self) -> AnyElement {
        self.row()
            .justify_center()
            .gap_2()
            .child(
                Icon::new(IconName::Loader)
                    .small()
                    .text_color(self.muted_foreground),
            )
            .child(
                Label::new(self.loading_label.clone())
                    .text_sm()
                    .text_color(self.muted_foreground),
            )
            .into_any_element()
    }

    fn row(&self) -> gpui::Div {
        h_flex()
            .w_full()
            .h(px(PRODUCT_ROW_HEIGHT))
            .px_4()
            .items_center()
            .border_b_1()
            .border_color(self.border)
    }
}

impl RowRenderer for ProductRowRenderer {
    type Row = AnyElement;

    fn render_row(&self, index: usize, slot: RowSlot<'_>) -> AnyElement {
        match slot {
            RowSlot::Product(product) => self.render_product(index, product),
            RowSlot::Placeholder => self.render_placeholder(),
        }
    }
}
