//! Previous / page indicator / next, plus fetch status

use chrono::{DateTime, Local};
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use shopfront_core::Navigation;

use crate::theme::{palette, styles};

pub struct PaginationBar<'a> {
    navigation: Option<&'a Navigation>,
    loading: bool,
    last_fetched: Option<DateTime<Local>>,
}

impl<'a> PaginationBar<'a> {
    pub fn new(navigation: Option<&'a Navigation>) -> Self {
        Self {
            navigation,
            loading: false,
            last_fetched: None,
        }
    }

    pub fn loading(mut self, loading: bool) -> Self {
        self.loading = loading;
        self
    }

    pub fn last_fetched(mut self, at: Option<DateTime<Local>>) -> Self {
        self.last_fetched = at;
        self
    }
}

fn button(label: &'static str, enabled: bool) -> Span<'static> {
    if enabled {
        Span::styled(label, styles::accent_bold())
    } else {
        Span::styled(label, styles::disabled())
    }
}

impl Widget for PaginationBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(false).style(Style::default().bg(palette::CARD_BG));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        if let Some(navigation) = self.navigation {
            let line = Line::from(vec![
                button("◀ Previous", navigation.has_prev()),
                Span::raw("   "),
                Span::styled(
                    format!("Page {} of {}", navigation.current, navigation.pages),
                    styles::text_primary(),
                ),
                Span::raw("   "),
                button("Next ▶", navigation.has_next()),
            ]);
            Paragraph::new(line)
                .alignment(Alignment::Center)
                .render(inner, buf);
        }

        let status = if self.loading {
            Some(Span::styled("Loading…", styles::status_yellow()))
        } else {
            self.last_fetched.map(|at| {
                Span::styled(
                    format!("Updated {}", at.format("%H:%M:%S")),
                    styles::text_muted(),
                )
            })
        };
        if let Some(status) = status {
            let width = status.width() as u16;
            if width + 1 < inner.width {
                let line = Line::from(status);
                buf.set_line(inner.x + inner.width - width - 1, inner.y, &line, width);
            }
        }
    }
}
