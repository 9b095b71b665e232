//! Terminal schedule editor using Ratatui.
//!
//! The TUI shows one week of the roster as a grid, edits cells in place, and
//! drives the CSV import and export dialogs. It runs an async event loop on
//! tokio: terminal input, ticks, renders, and background file reads all
//! arrive as [`Event`]s on one channel.
//!
//! # Architecture
//!
//! ```text
//! crates/sg-tui/src/
//!   lib.rs           # run() and the event loop
//!   app.rs           # Application state, key handling, update
//!   event.rs         # Event types (Key, Paste, Resize, ImportLoaded, Tick, Render)
//!   tui.rs           # Terminal wrapper with async event streaming
//!   action.rs        # User actions (commands from key bindings)
//!   ui.rs            # Layout and overlays
//!   theme.rs         # Colors, including per-category cell colors
//!   error.rs         # TUI-specific error types
//!   components/      # Header, grid, detail line, legend, status bar, dialogs
//! ```

#![deny(clippy::all)]
#![warn(missing_docs)]

pub mod action;
pub mod app;
pub mod components;
pub mod error;
pub mod event;
pub mod theme;
pub mod tui;
pub mod ui;

use camino::Utf8PathBuf;
use sg_core::{Config, WeekAnchor};
use tokio::sync::mpsc;
use tracing::{debug, error, info};

pub use action::Action;
pub use app::{
    App, AppMode, ExportDialog, ExportField, GridViewState, StatusMessage, write_artifact,
};
pub use error::TuiError;
pub use event::Event;
pub use theme::Theme;
pub use tui::Tui;

/// Runs the TUI showing `anchor`'s week until the user quits.
///
/// If `initial_import` is given, the import dialog opens with that file
/// already being read.
///
/// # Errors
///
/// Returns an error if the roster is invalid or the terminal fails.
pub async fn run(
    config: Config,
    anchor: WeekAnchor,
    initial_import: Option<Utf8PathBuf>,
) -> Result<(), TuiError> {
    // tick_rate_ms and frame_rate are small UI timing values, precision loss is acceptable
    #[allow(clippy::cast_precision_loss)]
    let tick_rate = 1000.0 / config.tui.tick_rate_ms as f64;
    #[allow(clippy::cast_precision_loss)]
    let frame_rate = config.tui.frame_rate as f64;

    let theme = Theme::from_scheme(config.tui.color_scheme);
    let mut app = App::new(config, anchor)?;

    if let Some(path) = initial_import {
        app.update(Action::OpenImport);
        app.import_path = path.to_string();
        app.update(Action::SelectImportFile(path));
    }

    let mut tui = Tui::new(tick_rate)?.with_frame_rate(frame_rate);
    tui.enter()?;
    app.set_terminal_size(tui.size());

    info!(week = %anchor, employees = app.grid.roster().len(), "Entering main event loop");
    let result = run_event_loop(&mut tui, &mut app, &theme).await;

    tui.exit()?;
    result
}

async fn run_event_loop(tui: &mut Tui, app: &mut App, theme: &Theme) -> Result<(), TuiError> {
    let mut needs_draw = true;
    loop {
        if let Some((ticket, path)) = app.take_pending_read() {
            spawn_import_read(tui.event_sender(), ticket, path);
        }

        if needs_draw {
            tui.draw(|frame| ui::render(app, frame, theme))?;
        }

        let Some(event) = tui.next_event().await else {
            return Err(TuiError::ChannelClosed);
        };

        let action = match event {
            Event::Key(key) => app.handle_key(key),
            Event::Paste(text) => app.handle_paste(&text),
            Event::Resize { width, height } => {
                app.set_terminal_size(ratatui::layout::Rect::new(0, 0, width, height));
                Action::Render
            }
            Event::ImportLoaded { ticket, result } => app.handle_import_loaded(ticket, result),
            Event::Tick => Action::Tick,
            Event::Render => Action::Render,
            Event::Mouse(_) | Event::FocusGained | Event::FocusLost => Action::None,
        };
        needs_draw = action.needs_render();
        app.update(action);

        if app.should_quit {
            info!("Quit requested");
            return Ok(());
        }
    }
}

/// Reads an import file on a background task and reports back as an event.
fn spawn_import_read(tx: mpsc::Sender<Event>, ticket: sg_csv::ImportTicket, path: Utf8PathBuf) {
    debug!(path = %path, ticket = ticket.get(), "Spawning import read");
    tokio::spawn(async move {
        let result = tokio::fs::read_to_string(&path).await;
        if tx.send(Event::ImportLoaded { ticket, result }).await.is_err() {
            error!(path = %path, "Event channel closed before import read finished");
        }
    });
}
