//! Header bar component.
//!
//! Displays the application title, the visible week, and the roster size.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Widget};
use sg_core::WeekAnchor;

use crate::theme::Theme;

/// The header bar component.
pub struct HeaderBar<'a> {
    anchor: WeekAnchor,
    employee_count: usize,
    theme: &'a Theme,
}

impl<'a> HeaderBar<'a> {
    /// Creates a new header bar.
    #[must_use]
    pub const fn new(anchor: WeekAnchor, employee_count: usize, theme: &'a Theme) -> Self {
        Self {
            anchor,
            employee_count,
            theme,
        }
    }
}

impl Widget for &HeaderBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let week_style = Style::default()
            .fg(self.theme.fg)
            .add_modifier(Modifier::BOLD);

        let line = Line::from(vec![
            Span::styled("shiftgrid", self.theme.header_style),
            Span::raw(" │ "),
            Span::styled(format!("Week of {}", self.anchor.label()), week_style),
            Span::raw(" │ "),
            Span::styled(
                format!("{} employees", self.employee_count),
                self.theme.dimmed_style(),
            ),
            Span::raw(" │ "),
            Span::styled("? for help", Style::default().fg(Color::Yellow)),
        ]);

        let block = Block::default()
            .borders(Borders::BOTTOM)
            .border_style(self.theme.border_style);

        Paragraph::new(line).block(block).render(area, buf);
    }
}
