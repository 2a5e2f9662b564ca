//! Header bar: app title, context and key hints

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Widget,
};

use crate::theme::{palette, styles};

/// Main header showing the app name, a context label and key hints
pub struct MainHeader<'a> {
    context: Option<&'a str>,
    hints: &'a [(&'a str, &'a str)],
}

impl<'a> MainHeader<'a> {
    pub fn new() -> Self {
        Self {
            context: None,
            hints: &[],
        }
    }

    /// Text shown after the title, e.g. the API base URL
    pub fn context(mut self, context: &'a str) -> Self {
        self.context = Some(context);
        self
    }

    /// `(key, action)` pairs shown right-aligned
    pub fn hints(mut self, hints: &'a [(&'a str, &'a str)]) -> Self {
        self.hints = hints;
        self
    }
}

impl Default for MainHeader<'_> {
    fn default() -> Self {
        Self::new()
    }
}

impl Widget for MainHeader<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(false).style(Style::default().bg(palette::CARD_BG));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let mut title = vec![Span::styled(" SHOPFRONT", styles::accent_bold())];
        if let Some(context) = self.context {
            title.push(Span::styled("  │  ", styles::text_muted()));
            title.push(Span::styled(context, styles::text_secondary()));
        }
        let title = Line::from(title);
        let title_width = title.width() as u16;
        buf.set_line(inner.x, inner.y, &title, inner.width);

        let mut hint_spans = Vec::new();
        for (i, (key, action)) in self.hints.iter().enumerate() {
            if i > 0 {
                hint_spans.push(Span::styled("  ", styles::text_muted()));
            }
            hint_spans.push(Span::styled(*key, styles::keybinding()));
            hint_spans.push(Span::styled(format!(" {action}"), styles::text_muted()));
        }
        hint_spans.push(Span::raw(" "));
        let hints = Line::from(hint_spans);
        let hints_width = hints.width() as u16;

        // Hints only when they fit beside the title
        if title_width + hints_width + 2 <= inner.width {
            let x = inner.x + inner.width - hints_width;
            buf.set_line(x, inner.y, &hints, hints_width);
        }
    }
}
