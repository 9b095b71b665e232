//! Main UI layout and rendering orchestration.
//!
//! ```text
//! +------------------------------------------------------------------+
//! | shiftgrid │ Week of Jan 13 — Jan 19, 2024 │ 6 employees │ ?      |
//! +------------------------------------------------------------------+
//! | Employee        Sat 01/13  Sun 01/14  ...  Fri 01/19             |
//! | FG Frank Gmelin OFF        7AM-3PM    ...  ·                     |
//! | ...                                                              |
//! +------------------------------------------------------------------+
//! | Frank Gmelin - Saturday 01/13: OFF                               |
//! | ■ Active shifts  ▣ OFF shifts  □ Empty                           |
//! | GRID  Started week Jan 20 — Jan 26, 2024 │ 12/42 cells           |
//! +------------------------------------------------------------------+
//! ```

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};

use crate::app::{App, AppMode};
use crate::components::{
    CellDetail, ExportDialogView, HeaderBar, HelpPanel, ImportDialog, Legend, ShiftGridView,
    StatusBar,
};
use crate::theme::Theme;

/// Renders the entire UI based on the current application state.
///
/// The grid's scroll position is written back into `app`.
pub fn render(app: &mut App, frame: &mut Frame, theme: &Theme) {
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Header
            Constraint::Min(6),    // Grid
            Constraint::Length(1), // Cell detail
            Constraint::Length(1), // Legend
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    let header = HeaderBar::new(app.grid.anchor(), app.grid.roster().len(), theme);
    frame.render_widget(&header, chunks[0]);

    let grid = ShiftGridView::new(&app.grid, theme);
    frame.render_stateful_widget(&grid, chunks[1], &mut app.grid_view);

    let detail = CellDetail::new(&app.grid, theme);
    frame.render_widget(&detail, chunks[2]);

    let legend = Legend::new(theme);
    frame.render_widget(&legend, chunks[3]);

    let status_bar = StatusBar::new(app, theme);
    frame.render_widget(&status_bar, chunks[4]);

    match app.mode {
        AppMode::Normal => {}
        AppMode::Help => {
            let help = HelpPanel::new(theme);
            frame.render_widget(&help, centered_rect(60, 70, area));
        }
        AppMode::Import => {
            let dialog = ImportDialog::new(&app.import, &app.import_path, app.grid.roster(), theme);
            frame.render_widget(&dialog, centered_rect(80, 70, area));
        }
        AppMode::Export => {
            let dialog = ExportDialogView::new(
                &app.export,
                app.grid.anchor(),
                &app.config.export.output_dir,
                theme,
            );
            frame.render_widget(&dialog, centered_rect(50, 40, area));
        }
    }
}

/// Creates a centered rectangle with the given percentage width and height.
pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;
    use sg_core::{Config, WeekAnchor};

    use super::*;
    use crate::action::Action;

    fn draw(app: &mut App) -> String {
        let theme = Theme::dark();
        let mut terminal = Terminal::new(TestBackend::new(140, 30)).unwrap();
        terminal.draw(|frame| render(app, frame, &theme)).unwrap();

        let buffer = terminal.backend().buffer();
        (0..buffer.area.height)
            .map(|y| {
                (0..buffer.area.width)
                    .map(|x| buffer[(x, y)].symbol().to_owned())
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn app() -> App {
        let anchor = WeekAnchor::containing(NaiveDate::from_ymd_opt(2024, 1, 13).unwrap()).unwrap();
        App::new(Config::default(), anchor).unwrap()
    }

    #[test]
    fn test_centered_rect() {
        let area = Rect::new(0, 0, 100, 100);
        let centered = centered_rect(50, 50, area);

        assert!(centered.x > 0);
        assert!(centered.y > 0);
        assert!(centered.width < area.width);
        assert!(centered.height < area.height);
    }

    #[test]
    fn test_main_screen() {
        let screen = draw(&mut app());
        assert!(screen.contains("Week of Jan 13"));
        assert!(screen.contains("Sarah Johnson"));
        assert!(screen.contains("Active shifts"));
        assert!(screen.contains(" GRID "));
        assert!(screen.contains("0/42 cells"));
    }

    #[test]
    fn test_overlays_follow_mode() {
        let mut app = app();
        app.update(Action::ToggleHelp);
        assert!(draw(&mut app).contains("Help - Key Bindings"));

        app.update(Action::ToggleHelp);
        app.update(Action::OpenImport);
        assert!(draw(&mut app).contains("Import CSV"));

        app.update(Action::CloseImport);
        app.update(Action::OpenExport);
        assert!(draw(&mut app).contains("Export week of"));
    }

    #[test]
    fn test_scroll_position_survives_frames() {
        let config = Config {
            roster: (1..=40)
                .map(|n| sg_core::Employee::new(n.to_string(), format!("Worker {n:02}"), n))
                .collect(),
            ..Config::default()
        };
        let anchor = WeekAnchor::containing(NaiveDate::from_ymd_opt(2024, 1, 13).unwrap()).unwrap();
        let mut app = App::new(config, anchor).unwrap();

        for _ in 0..39 {
            app.update(Action::Navigate(sg_grid::NavCommand::Down));
        }
        let screen = draw(&mut app);
        assert!(screen.contains("Worker 40"));
        let offset = app.grid_view.scroll_offset;
        assert!(offset > 0);

        app.update(Action::Navigate(sg_grid::NavCommand::Up));
        draw(&mut app);
        assert_eq!(app.grid_view.scroll_offset, offset);
    }
}
