//! Search panel: basic query field plus optional advanced filters

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Widget,
};

use shopfront_app::search::{RangeFilter, SearchField, SearchPanelState};

use crate::theme::{palette, styles};

pub struct SearchPanel<'a> {
    state: &'a SearchPanelState,
}

impl<'a> SearchPanel<'a> {
    pub fn new(state: &'a SearchPanelState) -> Self {
        Self { state }
    }

    fn is_focused(&self, field: SearchField) -> bool {
        self.state.focused && self.state.focus == field
    }

    fn text_field(&self, field: SearchField, value: &'a str) -> Vec<Span<'a>> {
        let focused = self.is_focused(field);
        let value_style = if focused {
            styles::focused_selected()
        } else {
            styles::text_primary()
        };
        let mut spans = vec![
            Span::styled(format!("{}: ", field.label()), styles::text_muted()),
            Span::styled(value, value_style),
        ];
        if focused {
            spans.push(Span::styled("█", styles::accent()));
        }
        spans
    }

    fn range_line(
        &self,
        range: &RangeFilter,
        toggle: SearchField,
        low: SearchField,
        high: SearchField,
        label: &'static str,
    ) -> Line<'a> {
        let pick = |field: SearchField, base: Style| {
            if self.is_focused(field) {
                styles::focused_selected()
            } else {
                base
            }
        };
        let value_style = if range.enabled {
            styles::text_primary()
        } else {
            styles::disabled()
        };
        let checkbox = if range.enabled { "[x]" } else { "[ ]" };

        Line::from(vec![
            Span::styled(checkbox, pick(toggle, styles::accent())),
            Span::styled(format!(" {label:<9}"), styles::text_secondary()),
            Span::styled(format!("{:>6}", range.low), pick(low, value_style)),
            Span::styled(" ─── ", styles::text_muted()),
            Span::styled(format!("{:<6}", range.high), pick(high, value_style)),
            Span::styled(
                format!("  ({}–{}, step {})", range.min, range.max, range.step),
                styles::text_muted(),
            ),
        ])
    }
}

impl Widget for SearchPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let state = self.state;
        let title = if state.advanced {
            " Search (advanced) "
        } else {
            " Search "
        };
        let block = styles::glass_block(state.focused)
            .title(title)
            .style(Style::default().bg(palette::CARD_BG));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let mut lines = vec![Line::from(
            self.text_field(SearchField::Basic, &state.basic_query),
        )];

        if state.advanced {
            let mut filters = self.text_field(SearchField::Name, &state.name);
            filters.push(Span::raw("   "));
            filters.extend(self.text_field(SearchField::Brand, &state.brand));
            filters.push(Span::raw("   "));
            filters.extend(self.text_field(SearchField::Category, &state.category));
            lines.push(Line::from(filters));
            lines.push(self.range_line(
                &state.price,
                SearchField::PriceToggle,
                SearchField::PriceLow,
                SearchField::PriceHigh,
                "Price",
            ));
            lines.push(self.range_line(
                &state.quantity,
                SearchField::QuantityToggle,
                SearchField::QuantityLow,
                SearchField::QuantityHigh,
                "Quantity",
            ));
        }

        for (i, line) in lines.iter().enumerate() {
            let y = inner.y + i as u16;
            if y >= inner.y + inner.height {
                break;
            }
            buf.set_line(inner.x + 1, y, line, inner.width.saturating_sub(1));
        }
    }
}
