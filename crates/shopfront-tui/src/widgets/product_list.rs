//! Product list: status line, error line and a window of product cards

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Widget,
};

use shopfront_app::home::HomeState;
use shopfront_app::product_view::ProductViewState;

use super::ProductCard;
use crate::theme::{palette, styles};

pub struct ProductList<'a> {
    home: &'a HomeState,
    currency: &'a str,
}

impl<'a> ProductList<'a> {
    pub fn new(home: &'a HomeState, currency: &'a str) -> Self {
        Self { home, currency }
    }

    /// Rows above the cards: page status and error message
    fn header_rows(&self) -> u16 {
        u16::from(self.home.navigation.is_some()) + u16::from(self.home.error.is_some())
    }

    /// Rows available for cards when rendered into `area`
    pub fn card_rows(&self, area: Rect) -> u16 {
        styles::glass_block(false)
            .inner(area)
            .height
            .saturating_sub(self.header_rows())
    }
}

/// First card to draw so the selected card fits in `rows`
pub fn scroll_for_selection(
    views: &[ProductViewState],
    selected: usize,
    scroll: usize,
    rows: u16,
) -> usize {
    if views.is_empty() {
        return 0;
    }
    let selected = selected.min(views.len() - 1);
    let mut scroll = scroll.min(selected);
    while scroll < selected {
        let used: u32 = views[scroll..=selected]
            .iter()
            .map(|v| u32::from(ProductCard::height(v)))
            .sum();
        if used <= u32::from(rows) {
            break;
        }
        scroll += 1;
    }
    scroll
}

impl Widget for ProductList<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(false)
            .title(" Products ")
            .style(Style::default().bg(palette::CARD_BG));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let home = self.home;
        let mut y = inner.y;
        let bottom = inner.y + inner.height;

        if let Some(navigation) = &home.navigation {
            let status = Line::from(Span::styled(
                navigation.display_status(),
                styles::text_secondary(),
            ));
            buf.set_line(inner.x + 1, y, &status, inner.width.saturating_sub(1));
            y += 1;
        }

        if let Some(error) = &home.error {
            if y < bottom {
                let line = Line::from(Span::styled(error.as_str(), styles::status_red()));
                buf.set_line(inner.x + 1, y, &line, inner.width.saturating_sub(1));
                y += 1;
            }
        }

        if home.products.is_empty() {
            let text = if home.loading {
                "Loading products..."
            } else if home.navigation.is_some() {
                "No products found."
            } else {
                ""
            };
            if y < bottom {
                let line = Line::from(Span::styled(text, styles::text_muted()));
                buf.set_line(inner.x + 1, y, &line, inner.width.saturating_sub(1));
            }
            return;
        }

        let cards = home.products.iter().zip(&home.views).enumerate();
        for (index, (item, view)) in cards.skip(home.scroll) {
            if y >= bottom {
                break;
            }
            let height = ProductCard::height(view).min(bottom - y);
            let card_area = Rect::new(inner.x + 1, y, inner.width.saturating_sub(1), height);
            ProductCard::new(item, view, self.currency)
                .selected(index == home.selected)
                .render(card_area, buf);
            y += height;
        }
    }
}
