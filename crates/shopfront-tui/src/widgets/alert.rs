//! Success / error banner for the edit page

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

use crate::theme::styles;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertKind {
    Success,
    Error,
}

pub struct Alert<'a> {
    kind: AlertKind,
    message: &'a str,
}

impl<'a> Alert<'a> {
    pub fn new(kind: AlertKind, message: &'a str) -> Self {
        Self { kind, message }
    }
}

impl Widget for Alert<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let (icon, style) = match self.kind {
            AlertKind::Success => ("✓ ", styles::status_green()),
            AlertKind::Error => ("✗ ", styles::status_red()),
        };
        let block = styles::glass_block(false).border_style(style);
        let line = Line::from(vec![
            Span::styled(icon, style),
            Span::styled(self.message, style),
            Span::styled("  (Enter/Esc to dismiss)", styles::text_muted()),
        ]);
        Paragraph::new(line)
            .block(block)
            .wrap(Wrap { trim: true })
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;

    #[test]
    fn test_success_alert() {
        let mut term = TestTerminal::with_size(80, 3);
        term.render_widget(
            Alert::new(AlertKind::Success, "Product updated successfully."),
            term.area(),
        );
        assert!(term.buffer_contains("✓ Product updated successfully."));
    }

    #[test]
    fn test_error_alert() {
        let mut term = TestTerminal::with_size(80, 3);
        term.render_widget(
            Alert::new(AlertKind::Error, "Server returned status code 500."),
            term.area(),
        );
        assert!(term.buffer_contains("✗ Server returned status code 500."));
        assert!(term.buffer_contains("dismiss"));
    }
}
