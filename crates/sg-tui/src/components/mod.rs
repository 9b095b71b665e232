//! UI components for the TUI.
//!
//! - **Widgets**: `HeaderBar`, `ShiftGridView`, `CellDetail`, `Legend`, `StatusBar`
//! - **Overlays**: `HelpPanel`, `ImportDialog`, `ExportDialogView`

mod cell_detail;
mod export_dialog;
mod header;
mod help;
mod import_dialog;
mod legend;
mod shift_grid;
mod status_bar;

pub use cell_detail::CellDetail;
pub use export_dialog::ExportDialogView;
pub use header::HeaderBar;
pub use help::HelpPanel;
pub use import_dialog::ImportDialog;
pub use legend::Legend;
pub use shift_grid::{ShiftGridView, fit_width};
pub use status_bar::StatusBar;
