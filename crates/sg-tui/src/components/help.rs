//! Help panel component.
//!
//! Displays a modal overlay with key bindings.

use ratatui::buffer::Buffer;
use ratatui::layout::{Constraint, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Span;
use ratatui::widgets::{Block, Borders, Cell, Clear, Row, Table, Widget};

use crate::theme::Theme;

struct KeyBinding {
    key: &'static str,
    description: &'static str,
    mode: &'static str,
}

const KEY_BINDINGS: &[KeyBinding] = &[
    KeyBinding {
        key: "←↑↓→",
        description: "Move between cells",
        mode: "Grid",
    },
    KeyBinding {
        key: "Tab",
        description: "Save and move right",
        mode: "Grid",
    },
    KeyBinding {
        key: "Enter",
        description: "Edit cell / save edit",
        mode: "Grid",
    },
    KeyBinding {
        key: "e / F2",
        description: "Edit cell",
        mode: "Grid",
    },
    KeyBinding {
        key: "Esc",
        description: "Discard edit / close dialog",
        mode: "Any",
    },
    KeyBinding {
        key: "[ / ]",
        description: "Previous / next week",
        mode: "Grid",
    },
    KeyBinding {
        key: "t",
        description: "Jump to this week",
        mode: "Grid",
    },
    KeyBinding {
        key: "n",
        description: "Start a new week",
        mode: "Grid",
    },
    KeyBinding {
        key: "i",
        description: "Import CSV",
        mode: "Grid",
    },
    KeyBinding {
        key: "Enter / y, b",
        description: "Import preview: confirm, back",
        mode: "Import",
    },
    KeyBinding {
        key: "x",
        description: "Export week",
        mode: "Grid",
    },
    KeyBinding {
        key: "↑↓ / Space",
        description: "Pick option / change it",
        mode: "Export",
    },
    KeyBinding {
        key: "?",
        description: "Toggle help panel",
        mode: "Grid",
    },
    KeyBinding {
        key: "q / Ctrl+c",
        description: "Quit",
        mode: "Any",
    },
];

/// A help panel overlay widget.
pub struct HelpPanel<'a> {
    theme: &'a Theme,
}

impl<'a> HelpPanel<'a> {
    /// Creates a new help panel.
    #[must_use]
    pub const fn new(theme: &'a Theme) -> Self {
        Self { theme }
    }

    fn build_rows(&self) -> Vec<Row<'static>> {
        KEY_BINDINGS
            .iter()
            .map(|binding| {
                Row::new(vec![
                    Cell::from(Span::styled(
                        binding.key,
                        Style::default()
                            .fg(Color::Yellow)
                            .add_modifier(Modifier::BOLD),
                    )),
                    Cell::from(Span::styled(binding.description, self.theme.base_style())),
                    Cell::from(Span::styled(binding.mode, self.theme.dimmed_style())),
                ])
            })
            .collect()
    }
}

impl Widget for &HelpPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Clear.render(area, buf);

        let heading = Style::default()
            .fg(self.theme.accent)
            .add_modifier(Modifier::BOLD | Modifier::UNDERLINED);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.focused_border_style)
            .title(Span::styled(
                " Help - Key Bindings ",
                self.theme.accent_style().add_modifier(Modifier::BOLD),
            ));

        let header = Row::new(vec![
            Cell::from(Span::styled("Key", heading)),
            Cell::from(Span::styled("Action", heading)),
            Cell::from(Span::styled("Mode", heading)),
        ])
        .bottom_margin(1);

        let widths = [
            Constraint::Length(14),
            Constraint::Min(25),
            Constraint::Length(8),
        ];

        Table::new(self.build_rows(), widths)
            .block(block)
            .header(header)
            .render(area, buf);
    }
}
