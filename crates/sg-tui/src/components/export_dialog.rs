//! Export dialog overlay.

use camino::Utf8Path;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Widget};
use sg_core::WeekAnchor;

use crate::app::{ExportDialog, ExportField};
use crate::theme::Theme;

/// The export dialog widget.
pub struct ExportDialogView<'a> {
    dialog: &'a ExportDialog,
    anchor: WeekAnchor,
    output_dir: &'a Utf8Path,
    theme: &'a Theme,
}

impl<'a> ExportDialogView<'a> {
    /// Creates an export dialog view.
    #[must_use]
    pub const fn new(
        dialog: &'a ExportDialog,
        anchor: WeekAnchor,
        output_dir: &'a Utf8Path,
        theme: &'a Theme,
    ) -> Self {
        Self {
            dialog,
            anchor,
            output_dir,
            theme,
        }
    }

    fn build_lines(&self) -> Vec<Line<'a>> {
        let mut lines: Vec<Line<'a>> = ExportField::ALL
            .into_iter()
            .map(|field| {
                let selected = field == self.dialog.field;
                let marker = if selected { "▸ " } else { "  " };
                let style = if selected {
                    Style::default()
                        .bg(self.theme.focused_bg)
                        .add_modifier(Modifier::BOLD)
                } else {
                    self.theme.base_style()
                };
                Line::from(vec![
                    Span::styled(marker, self.theme.accent_style()),
                    Span::styled(format!("{:<16}", field.label()), style),
                    Span::styled(self.dialog.value(field), style),
                ])
            })
            .collect();

        let dir = if self.output_dir.as_str().is_empty() {
            "."
        } else {
            self.output_dir.as_str()
        };
        lines.push(Line::default());
        lines.push(Line::from(Span::styled(
            format!("Writes {dir}/schedule-{}.csv", self.anchor),
            self.theme.dimmed_style(),
        )));
        lines
    }
}

impl Widget for &ExportDialogView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Clear.render(area, buf);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.focused_border_style)
            .title(Span::styled(
                format!(" Export week of {} ", self.anchor.label()),
                self.theme.accent_style().add_modifier(Modifier::BOLD),
            ))
            .title_bottom(Span::styled(
                " Enter export · Space change · Esc close ",
                self.theme.dimmed_style(),
            ));

        Paragraph::new(self.build_lines())
            .block(block)
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use sg_core::ExportOptions;

    use super::*;

    fn text_of(lines: &[Line<'_>]) -> Vec<String> {
        lines
            .iter()
            .map(|line| line.spans.iter().map(|s| s.content.as_ref()).collect())
            .collect()
    }

    #[test]
    fn test_lines_show_options_and_target() {
        let dialog = ExportDialog::new(ExportOptions::default());
        let anchor = WeekAnchor::containing(NaiveDate::from_ymd_opt(2024, 1, 13).unwrap()).unwrap();
        let theme = Theme::dark();
        let view = ExportDialogView::new(&dialog, anchor, Utf8Path::new(""), &theme);

        let lines = text_of(&view.build_lines());
        assert!(lines[0].starts_with("▸ Format"));
        assert!(lines[0].ends_with("CSV"));
        assert!(lines[1].ends_with("yes"));
        assert_eq!(lines.last().map(String::as_str), Some("Writes ./schedule-2024-01-13.csv"));
    }
}
