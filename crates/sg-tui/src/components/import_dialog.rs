//! Import dialog overlay.
//!
//! Renders whichever step the [`ImportFlow`] is in: the path prompt with the
//! errors of the last attempt, the prompt under a reading notice, or the
//! preview table of a validated file. Preview rows for names outside the roster are dimmed,
//! since they will be skipped on import.

use ratatui::buffer::Buffer;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::Modifier;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Cell, Clear, Paragraph, Row, Table, Widget, Wrap};
use sg_core::{DayIndex, Roster};
use sg_csv::{ImportFlow, ImportState, StagedImport};

use super::fit_width;
use crate::theme::Theme;

const PREVIEW_CELL_WIDTH: usize = 10;

/// The import dialog widget.
pub struct ImportDialog<'a> {
    flow: &'a ImportFlow,
    path: &'a str,
    roster: &'a Roster,
    theme: &'a Theme,
}

impl<'a> ImportDialog<'a> {
    /// Creates an import dialog.
    #[must_use]
    pub const fn new(
        flow: &'a ImportFlow,
        path: &'a str,
        roster: &'a Roster,
        theme: &'a Theme,
    ) -> Self {
        Self {
            flow,
            path,
            roster,
            theme,
        }
    }

    fn prompt_lines(&self) -> Vec<Line<'a>> {
        let mut lines = vec![
            Line::from(vec![
                Span::styled("File: ", self.theme.accent_style()),
                Span::styled(self.path, self.theme.base_style()),
                Span::styled("▌", self.theme.accent_style()),
            ]),
            Line::from(Span::styled(
                format!("Accepted: {}", self.flow.config().extensions.join(", ")),
                self.theme.dimmed_style(),
            )),
            Line::default(),
        ];

        for error in self.flow.errors() {
            lines.push(Line::from(Span::styled(
                format!("✗ {}", error.message),
                self.theme.error_style(),
            )));
        }
        lines
    }

    fn preview_table(&self, staged: &'a StagedImport) -> Table<'a> {
        let header = Row::new(
            staged
                .header()
                .iter()
                .take(1 + DayIndex::COUNT)
                .map(|cell| Cell::from(fit_width(cell, PREVIEW_CELL_WIDTH))),
        )
        .style(self.theme.column_header_style);

        let rows = staged.rows().iter().map(|row| {
            let known = row
                .first()
                .is_some_and(|name| self.roster.by_name(name).is_some());
            let style = if known {
                self.theme.base_style()
            } else {
                self.theme.dimmed_style().add_modifier(Modifier::CROSSED_OUT)
            };
            Row::new(
                row.iter()
                    .take(1 + DayIndex::COUNT)
                    .map(|cell| Cell::from(fit_width(cell, PREVIEW_CELL_WIDTH))),
            )
            .style(style)
        });

        let widths = std::iter::repeat_n(Constraint::Fill(1), 1 + DayIndex::COUNT);
        Table::new(rows, widths).header(header).column_spacing(1)
    }

    fn hint(&self) -> &'static str {
        match self.flow.state() {
            ImportState::AwaitingFile { .. } => "Enter read file · Esc close",
            ImportState::Reading { .. } => "Enter read another file · Esc cancel",
            ImportState::Preview(_) => "Enter/y import · b back · Esc cancel",
        }
    }
}

impl Widget for &ImportDialog<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Clear.render(area, buf);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.focused_border_style)
            .title(Span::styled(
                " Import CSV ",
                self.theme.accent_style().add_modifier(Modifier::BOLD),
            ))
            .title_bottom(Span::styled(
                format!(" {} ", self.hint()),
                self.theme.dimmed_style(),
            ));
        let inner = block.inner(area);
        block.render(area, buf);

        match self.flow.state() {
            ImportState::AwaitingFile { .. } => {
                Paragraph::new(self.prompt_lines())
                    .wrap(Wrap { trim: false })
                    .render(inner, buf);
            }
            ImportState::Reading { path, .. } => {
                let mut lines = vec![
                    Line::from(Span::styled(
                        format!("Reading {path}…"),
                        self.theme.base_style(),
                    )),
                    Line::default(),
                ];
                lines.extend(self.prompt_lines());
                Paragraph::new(lines)
                    .wrap(Wrap { trim: false })
                    .render(inner, buf);
            }
            ImportState::Preview(staged) => {
                let [summary_area, table_area] =
                    Layout::vertical([Constraint::Length(2), Constraint::Min(1)]).areas(inner);
                let matched = staged
                    .rows()
                    .iter()
                    .filter(|row| row.first().is_some_and(|n| self.roster.by_name(n).is_some()))
                    .count();
                Paragraph::new(Line::from(Span::styled(
                    format!(
                        "{}: {} rows, {matched} match the roster",
                        staged.file_name(),
                        staged.rows().len()
                    ),
                    self.theme.base_style(),
                )))
                .render(summary_area, buf);
                self.preview_table(staged).render(table_area, buf);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use sg_core::ImportConfig;

    use super::*;

    fn screen(dialog: &ImportDialog<'_>) -> String {
        let area = Rect::new(0, 0, 100, 16);
        let mut buf = Buffer::empty(area);
        dialog.render(area, &mut buf);
        (0..area.height)
            .map(|y| {
                (0..area.width)
                    .map(|x| buf[(x, y)].symbol().to_owned())
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_prompt_lists_errors() {
        let mut flow = ImportFlow::new(ImportConfig::default());
        flow.select_file("week.xlsx".into());
        let roster = Roster::default();
        let theme = Theme::dark();

        let text = screen(&ImportDialog::new(&flow, "week.xlsx", &roster, &theme));
        assert!(text.contains("File: week.xlsx"));
        assert!(text.contains("Accepted: .csv"));
        assert!(text.contains("✗"));
    }

    #[test]
    fn test_preview_counts_matches() {
        let config = ImportConfig {
            required_employees: Vec::new(),
            ..ImportConfig::default()
        };
        let mut flow = ImportFlow::new(config);
        let ticket = flow.select_file("week.csv".into()).unwrap();
        let text = "Name,Sat,Sun,Mon,Tue,Wed,Thu,Fri\nLisa Chen,OFF\nGhost,OFF".to_owned();
        flow.complete_read(ticket, Ok(text));

        let roster = Roster::default();
        let theme = Theme::dark();
        let text = screen(&ImportDialog::new(&flow, "week.csv", &roster, &theme));
        assert!(text.contains("week.csv: 2 rows, 1 match the roster"));
        assert!(text.contains("Lisa Chen"));
    }

    #[test]
    fn test_reading_keeps_prompt_open() {
        let mut flow = ImportFlow::new(ImportConfig::default());
        flow.select_file("old.csv".into());
        let roster = Roster::default();
        let theme = Theme::dark();

        let text = screen(&ImportDialog::new(&flow, "new.c", &roster, &theme));
        assert!(text.contains("Reading old.csv…"));
        assert!(text.contains("File: new.c"));
        assert!(text.contains("Enter read another file"));
    }
}
