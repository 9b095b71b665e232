//! Keyboard navigation over the shift grid.
//!
//! Movement is a pure function of the current focus, a command, and the grid
//! bounds. The grid never wraps: commands at an edge leave that axis unchanged.

use sg_core::DayIndex;

/// The focused cell: a roster row and a day column.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct CellFocus {
    /// Row index into the roster.
    pub employee_index: usize,

    /// Day column.
    pub day: DayIndex,
}

impl CellFocus {
    /// Creates a focus at a row and day.
    #[inline]
    #[must_use]
    pub const fn new(employee_index: usize, day: DayIndex) -> Self {
        Self {
            employee_index,
            day,
        }
    }

    /// Pulls the row back inside the bounds.
    #[must_use]
    pub fn clamped(self, bounds: GridBounds) -> Self {
        Self {
            employee_index: self
                .employee_index
                .min(bounds.employee_count.saturating_sub(1)),
            day: self.day,
        }
    }
}

/// Navigation input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NavCommand {
    /// Previous employee row.
    Up,
    /// Next employee row.
    Down,
    /// Previous day.
    Left,
    /// Next day.
    Right,
    /// Next day after committing the current edit (Tab).
    Advance,
    /// Start or confirm an edit on the focused cell; focus is unchanged.
    Enter,
}

/// Size of the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GridBounds {
    /// Number of employee rows.
    pub employee_count: usize,
}

impl GridBounds {
    /// Creates bounds for a number of rows.
    #[inline]
    #[must_use]
    pub const fn new(employee_count: usize) -> Self {
        Self { employee_count }
    }

    /// Returns `true` if the focus lies inside the grid.
    #[must_use]
    pub const fn contains(self, focus: CellFocus) -> bool {
        focus.employee_index < self.employee_count
    }
}

/// Computes the focus after a navigation command.
///
/// An empty grid leaves the focus unchanged.
///
/// # Examples
///
/// ```
/// use sg_core::DayIndex;
/// use sg_grid::{CellFocus, GridBounds, NavCommand, next_focus};
///
/// let bounds = GridBounds::new(3);
/// let focus = CellFocus::new(0, DayIndex::LAST);
///
/// // Right at the last day stays put
/// assert_eq!(next_focus(focus, NavCommand::Right, bounds), focus);
///
/// let down = next_focus(focus, NavCommand::Down, bounds);
/// assert_eq!(down.employee_index, 1);
/// ```
#[must_use]
pub fn next_focus(current: CellFocus, command: NavCommand, bounds: GridBounds) -> CellFocus {
    if bounds.employee_count == 0 {
        return current;
    }

    let current = current.clamped(bounds);
    match command {
        NavCommand::Up => CellFocus {
            employee_index: current.employee_index.saturating_sub(1),
            ..current
        },
        NavCommand::Down => CellFocus {
            employee_index: (current.employee_index + 1).min(bounds.employee_count - 1),
            ..current
        },
        NavCommand::Left => CellFocus {
            day: current.day.saturating_prev(),
            ..current
        },
        NavCommand::Right | NavCommand::Advance => CellFocus {
            day: current.day.saturating_next(),
            ..current
        },
        NavCommand::Enter => current,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_COMMANDS: [NavCommand; 6] = [
        NavCommand::Up,
        NavCommand::Down,
        NavCommand::Left,
        NavCommand::Right,
        NavCommand::Advance,
        NavCommand::Enter,
    ];

    #[test]
    fn test_moves_in_interior() {
        let bounds = GridBounds::new(6);
        let focus = CellFocus::new(2, DayIndex::ALL[3]);

        assert_eq!(next_focus(focus, NavCommand::Up, bounds).employee_index, 1);
        assert_eq!(next_focus(focus, NavCommand::Down, bounds).employee_index, 3);
        assert_eq!(next_focus(focus, NavCommand::Left, bounds).day, DayIndex::ALL[2]);
        assert_eq!(next_focus(focus, NavCommand::Right, bounds).day, DayIndex::ALL[4]);
        assert_eq!(next_focus(focus, NavCommand::Advance, bounds).day, DayIndex::ALL[4]);
        assert_eq!(next_focus(focus, NavCommand::Enter, bounds), focus);
    }

    #[test]
    fn test_edges_clamp_without_wrapping() {
        let bounds = GridBounds::new(6);
        let top_left = CellFocus::new(0, DayIndex::FIRST);
        let bottom_right = CellFocus::new(5, DayIndex::LAST);

        assert_eq!(next_focus(top_left, NavCommand::Up, bounds), top_left);
        assert_eq!(next_focus(top_left, NavCommand::Left, bounds), top_left);
        assert_eq!(next_focus(bottom_right, NavCommand::Down, bounds), bottom_right);
        assert_eq!(next_focus(bottom_right, NavCommand::Right, bounds), bottom_right);
    }

    #[test]
    fn test_empty_grid_is_inert() {
        let bounds = GridBounds::new(0);
        let focus = CellFocus::default();
        for command in ALL_COMMANDS {
            assert_eq!(next_focus(focus, command, bounds), focus);
        }
    }

    #[test]
    fn test_out_of_range_focus_is_pulled_back() {
        let bounds = GridBounds::new(2);
        let stale = CellFocus::new(9, DayIndex::FIRST);
        assert_eq!(next_focus(stale, NavCommand::Enter, bounds).employee_index, 1);
    }
}
