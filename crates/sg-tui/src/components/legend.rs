//! Category legend line.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Widget};
use sg_core::ShiftCategory;

use crate::theme::Theme;

/// Swatch and label for each cell category.
pub struct Legend<'a> {
    theme: &'a Theme,
}

impl<'a> Legend<'a> {
    /// Creates a legend.
    #[must_use]
    pub const fn new(theme: &'a Theme) -> Self {
        Self { theme }
    }
}

impl Widget for &Legend<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let spans: Vec<Span<'_>> = [ShiftCategory::Shift, ShiftCategory::Off, ShiftCategory::Empty]
            .into_iter()
            .flat_map(|category| {
                [
                    Span::raw(" "),
                    Span::styled(
                        Theme::category_swatch(category),
                        self.theme.category_style(category),
                    ),
                    Span::styled(format!(" {} ", category.label()), self.theme.dimmed_style()),
                ]
            })
            .collect();

        Paragraph::new(Line::from(spans)).render(area, buf);
    }
}
