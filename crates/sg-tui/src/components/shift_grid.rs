//! The weekly schedule table.
//!
//! One row per roster employee, one column per day starting Saturday. Cell
//! text is colored by its category; the focused cell is highlighted and the
//! cell under edit shows its draft with a cursor. Rosters taller than the
//! area scroll so the focused row stays in view.

use ratatui::buffer::Buffer;
use ratatui::layout::{Constraint, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{
    Block, Borders, Cell, HighlightSpacing, Row, StatefulWidget, Table, TableState,
};
use sg_core::DayIndex;
use sg_grid::{CellFocus, CellView, GridSession};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::app::GridViewState;
use crate::theme::Theme;

/// Width of the employee name column.
const NAME_WIDTH: u16 = 20;

/// Shown in place of an empty cell.
const EMPTY_MARK: &str = "·";

/// Cursor drawn after the draft.
const CURSOR: &str = "▌";

/// Truncates `text` to at most `width` terminal columns, marking the cut with `…`.
///
/// # Examples
///
/// ```
/// use sg_tui::components::fit_width;
///
/// assert_eq!(fit_width("7AM-3PM", 10), "7AM-3PM");
/// assert_eq!(fit_width("Frank Gmelin", 6), "Frank…");
/// ```
#[must_use]
pub fn fit_width(text: &str, width: usize) -> String {
    if text.width() <= width {
        return text.to_owned();
    }
    let Some(budget) = width.checked_sub(1) else {
        return String::new();
    };

    let mut out = String::with_capacity(width + 2);
    let mut used = 0;
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    out
}

/// The schedule grid widget.
pub struct ShiftGridView<'a> {
    grid: &'a GridSession,
    theme: &'a Theme,
}

impl<'a> ShiftGridView<'a> {
    /// Creates a grid view.
    #[must_use]
    pub const fn new(grid: &'a GridSession, theme: &'a Theme) -> Self {
        Self { grid, theme }
    }

    fn header_row(&self) -> Row<'a> {
        let anchor = self.grid.anchor();
        let focused_day = self.grid.focus().day;

        let cells = std::iter::once(Cell::from("Employee")).chain(DayIndex::ALL.into_iter().map(
            |day| {
                let label = format!("{} {}", day.short_name(), anchor.short_date(day));
                let style = if day == focused_day {
                    self.theme.accent_style().add_modifier(Modifier::BOLD)
                } else {
                    self.theme.column_header_style
                };
                Cell::from(Span::styled(label, style))
            },
        ));

        Row::new(cells).style(self.theme.column_header_style)
    }

    fn employee_row(&self, index: usize, cell_width: usize) -> Row<'a> {
        let focus = self.grid.focus();
        let name = self
            .grid
            .roster()
            .get(index)
            .map(|e| format!("{} {}", e.initials(), e.name))
            .unwrap_or_default();
        let name_style = if focus.employee_index == index {
            self.theme.accent_style()
        } else {
            self.theme.base_style()
        };

        let cells = std::iter::once(Cell::from(Span::styled(
            fit_width(&name, usize::from(NAME_WIDTH)),
            name_style,
        )))
        .chain(DayIndex::ALL.into_iter().map(|day| {
            let here = CellFocus::new(index, day);
            match self.grid.cell_view(here) {
                Some(view) => self.cell(&view, here == focus, cell_width),
                None => Cell::from(""),
            }
        }));

        Row::new(cells)
    }

    fn cell(&self, view: &CellView, focused: bool, width: usize) -> Cell<'a> {
        let category_style = self.theme.category_style(view.category);

        if view.is_editing() {
            let mut spans = Vec::with_capacity(3);
            if view.dirty {
                spans.push(Span::styled("*", Style::default().fg(self.theme.dirty_fg)));
            }
            let room = width.saturating_sub(1 + usize::from(view.dirty));
            spans.push(Span::styled(tail_width(view.text(), room), category_style));
            spans.push(Span::styled(CURSOR, self.theme.accent_style()));
            let editing = Style::default().bg(self.theme.editing_bg);
            return Cell::from(Line::from(spans)).style(editing);
        }

        let text = if view.committed.trim().is_empty() {
            Span::styled(EMPTY_MARK, self.theme.dimmed_style())
        } else {
            Span::styled(fit_width(&view.committed, width), category_style)
        };
        let cell = Cell::from(text);
        if focused {
            cell.style(Style::default().bg(self.theme.focused_bg))
        } else {
            cell
        }
    }
}

/// Keeps the end of a draft visible while typing.
fn tail_width(text: &str, width: usize) -> String {
    if text.width() <= width {
        return text.to_owned();
    }
    let mut used = 0;
    let mut start = text.len();
    for (i, c) in text.char_indices().rev() {
        let w = c.width().unwrap_or(0);
        if used + w > width {
            break;
        }
        used += w;
        start = i;
    }
    text.get(start..).unwrap_or_default().to_owned()
}

impl StatefulWidget for &ShiftGridView<'_> {
    type State = GridViewState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        // Borders, header row, header margin
        state.visible_height = usize::from(area.height.saturating_sub(4));
        let focused_row = self.grid.focus().employee_index;
        state.ensure_visible(focused_row);

        let days = u16::try_from(DayIndex::COUNT).unwrap_or(7);
        // borders, name column, one space between columns
        let cell_width = area.width.saturating_sub(2 + NAME_WIDTH + days) / days;

        let rows: Vec<Row<'_>> = (0..self.grid.roster().len())
            .map(|index| self.employee_row(index, usize::from(cell_width)))
            .collect();

        let widths = std::iter::once(Constraint::Length(NAME_WIDTH))
            .chain(std::iter::repeat_n(Constraint::Fill(1), DayIndex::COUNT));

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.border_style)
            .title(" Schedule ");

        let table = Table::new(rows, widths)
            .header(self.header_row().bottom_margin(1))
            .column_spacing(1)
            .highlight_spacing(HighlightSpacing::Never)
            .block(block);

        let mut table_state = TableState::default();
        if !self.grid.roster().is_empty() {
            table_state.select(Some(focused_row));
        }
        *table_state.offset_mut() = state.scroll_offset;

        StatefulWidget::render(table, area, buf, &mut table_state);
    }
}
