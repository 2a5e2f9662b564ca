//! One product in the list
//!
//! Collapsed cards hide brand, description and image behind an ellipsis.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use shopfront_app::product_view::ProductViewState;
use shopfront_core::{format_price, ProductWithImage};

use crate::theme::styles;

pub struct ProductCard<'a> {
    item: &'a ProductWithImage,
    view: &'a ProductViewState,
    currency: &'a str,
    selected: bool,
}

impl<'a> ProductCard<'a> {
    pub fn new(item: &'a ProductWithImage, view: &'a ProductViewState, currency: &'a str) -> Self {
        Self {
            item,
            view,
            currency,
            selected: false,
        }
    }

    pub fn selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }

    /// Rows the card occupies, including the trailing blank row
    pub fn height(view: &ProductViewState) -> u16 {
        if view.expanded {
            8
        } else {
            5
        }
    }

    fn lines(&self) -> Vec<Line<'a>> {
        let item: &'a ProductWithImage = self.item;
        let product = &item.product;
        let marker = if self.view.expanded { "▾ " } else { "▸ " };
        let title_style = if self.selected {
            styles::focused_selected()
        } else {
            styles::text_bright_bold()
        };

        let mut title = vec![
            Span::styled(marker, styles::accent()),
            Span::styled(product.name.as_str(), title_style),
        ];
        if !self.view.expanded {
            title.push(Span::styled(" ...", styles::text_muted()));
        }

        let mut lines = vec![
            Line::from(title),
            field_line("Category: ", &product.category),
        ];
        if self.view.expanded {
            lines.push(field_line("Brand: ", &product.brand));
            lines.push(Line::from(Span::styled(
                format!("  {}", product.description),
                styles::text_secondary(),
            )));
            lines.push(field_line("Image: ", &item.image));
        }

        lines.push(Line::from(vec![
            Span::styled("  Price: ", styles::text_muted()),
            Span::styled(format_price(product.price, self.currency), styles::price()),
        ]));

        let quantity = &self.view.quantity;
        lines.push(Line::from(vec![
            Span::styled("  Quantity: ", styles::text_muted()),
            Span::styled(format!("◂ {} ▸", quantity.value), styles::text_primary()),
            Span::styled(
                format!(" ({} available)", product.quantity),
                styles::text_muted(),
            ),
        ]));
        lines
    }
}

fn field_line<'a>(label: &'static str, value: &'a str) -> Line<'a> {
    Line::from(vec![
        Span::styled(format!("  {label}"), styles::text_muted()),
        Span::styled(value, Style::default()),
    ])
}

impl Widget for ProductCard<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Paragraph::new(self.lines()).render(area, buf);
    }
}
