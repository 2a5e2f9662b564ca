//! Edit page body: load status or the editable product form

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Widget,
};

use shopfront_app::edit::{EditField, EditPhase, EditState};

use crate::theme::{palette, styles};

/// Width of the label column
const LABEL_WIDTH: usize = 13;

pub struct EditForm<'a> {
    state: &'a EditState,
}

impl<'a> EditForm<'a> {
    pub fn new(state: &'a EditState) -> Self {
        Self { state }
    }

    fn status_lines(&self) -> Vec<Line<'a>> {
        let state: &'a EditState = self.state;
        match &state.phase {
            EditPhase::Loading => vec![Line::from(Span::styled(
                format!("Loading product {}...", state.id),
                styles::text_muted(),
            ))],
            EditPhase::LoadFailed { message } => vec![
                Line::from(Span::styled(message.as_str(), styles::status_red())),
                Line::default(),
                Line::from(vec![
                    Span::styled("Press ", styles::text_muted()),
                    Span::styled("r", styles::keybinding()),
                    Span::styled(" to retry, ", styles::text_muted()),
                    Span::styled("Esc", styles::keybinding()),
                    Span::styled(" to go back", styles::text_muted()),
                ]),
            ],
            _ => Vec::new(),
        }
    }

    fn form_lines(&self) -> Vec<Line<'a>> {
        let state: &'a EditState = self.state;
        let Some(form) = &state.form else {
            return Vec::new();
        };
        let saving = state.phase == EditPhase::Saving;

        let mut lines = Vec::with_capacity(EditField::ORDER.len() + 3);
        let mut heading = vec![Span::styled(
            format!("Product {}", state.id),
            styles::text_bright_bold(),
        )];
        if form.is_dirty() {
            heading.push(Span::styled("  (unsaved changes)", styles::status_yellow()));
        }
        lines.push(Line::from(heading));
        lines.push(Line::default());

        for field in EditField::ORDER {
            let focused = form.focus == field;
            let marker = if focused { "▸ " } else { "  " };

            if field == EditField::Save {
                lines.push(Line::default());
                let label = if saving { "[ Saving... ]" } else { "[ Save ]" };
                let style = if saving {
                    styles::disabled()
                } else if focused {
                    styles::focused_selected()
                } else {
                    styles::accent_bold()
                };
                lines.push(Line::from(vec![
                    Span::styled(marker, styles::accent()),
                    Span::styled(label, style),
                ]));
                continue;
            }

            let label = Span::styled(
                format!("{marker}{:<LABEL_WIDTH$}", field.label()),
                if focused {
                    styles::accent_bold()
                } else {
                    styles::text_secondary()
                },
            );
            let value_style = if focused {
                styles::focused_selected()
            } else {
                styles::text_primary()
            };

            let mut spans = vec![label];
            match field {
                EditField::Category => {
                    spans.push(Span::styled("◀ ", styles::text_muted()));
                    spans.push(Span::styled(form.category.as_str(), value_style));
                    spans.push(Span::styled(" ▶", styles::text_muted()));
                }
                _ => {
                    let value = form.text(field).unwrap_or_default();
                    spans.push(Span::styled(value, value_style));
                    if focused {
                        spans.push(Span::styled("█", styles::accent()));
                    }
                }
            }
            lines.push(Line::from(spans));
        }

        lines
    }
}

impl Widget for EditForm<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(true)
            .title(" Edit product ")
            .style(Style::default().bg(palette::CARD_BG));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let mut lines = self.status_lines();
        lines.extend(self.form_lines());

        for (i, line) in lines.iter().enumerate() {
            let y = inner.y + i as u16;
            if y >= inner.y + inner.height {
                break;
            }
            buf.set_line(inner.x + 1, y, line, inner.width.saturating_sub(1));
        }
    }
}
