//! One-line description of the focused cell.
//!
//! Shows the cell tooltip (`Name - Day MM/DD: value`) and, while editing,
//! the key hints and how much of the character limit the draft uses.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Widget};
use sg_grid::GridSession;

use crate::theme::Theme;

/// The focused-cell detail line.
pub struct CellDetail<'a> {
    grid: &'a GridSession,
    theme: &'a Theme,
}

impl<'a> CellDetail<'a> {
    /// Creates a detail line for the session's focused cell.
    #[must_use]
    pub const fn new(grid: &'a GridSession, theme: &'a Theme) -> Self {
        Self { grid, theme }
    }

    fn build_line(&self) -> Line<'a> {
        let focus = self.grid.focus();
        let (Some(employee), Some(view)) =
            (self.grid.focused_employee(), self.grid.cell_view(focus))
        else {
            return Line::from(Span::styled(" No employees", self.theme.dimmed_style()));
        };

        let mut spans = vec![Span::styled(
            format!(" {}", view.tooltip(employee, self.grid.anchor())),
            self.theme.base_style(),
        )];

        if view.is_editing() {
            let used = view.text().chars().count();
            spans.push(Span::styled(
                format!(
                    "  [{used}/{}]  Enter save · Tab save and move · Esc cancel",
                    self.grid.edit().max_chars()
                ),
                self.theme.dimmed_style(),
            ));
        } else if view.committed.is_empty() {
            spans.push(Span::styled(
                "  e to edit, e.g. 7AM-3PM or OFF",
                self.theme.dimmed_style(),
            ));
        }
        Line::from(spans)
    }
}

impl Widget for &CellDetail<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Paragraph::new(self.build_line()).render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use sg_core::{Roster, WeekAnchor};

    use super::*;

    fn text_of(line: &Line<'_>) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_detail_shows_tooltip_and_limit() {
        let anchor = WeekAnchor::containing(NaiveDate::from_ymd_opt(2024, 1, 13).unwrap()).unwrap();
        let mut grid = GridSession::new(Roster::default(), anchor);
        let theme = Theme::dark();

        let idle = text_of(&CellDetail::new(&grid, &theme).build_line());
        assert!(idle.starts_with(" Frank Gmelin - Saturday 01/13"));
        assert!(idle.contains("e to edit"));

        grid.start_edit();
        grid.set_draft("OFF");
        let editing = text_of(&CellDetail::new(&grid, &theme).build_line());
        assert!(editing.contains("Frank Gmelin - Saturday 01/13: OFF"));
        assert!(editing.contains("[3/50]"));
    }

    #[test]
    fn test_detail_with_empty_roster() {
        let anchor = WeekAnchor::containing(NaiveDate::from_ymd_opt(2024, 1, 13).unwrap()).unwrap();
        let grid = GridSession::new(Roster::new(Vec::new()).unwrap(), anchor);
        let theme = Theme::dark();
        let line = text_of(&CellDetail::new(&grid, &theme).build_line());
        assert_eq!(line, " No employees");
    }
}
