//! Viewport model: cursor + scroll origin over a `TextBuffer`.
//!
//! The cursor row is relative to the origin row, so the buffer line under the
//! cursor is `origin.row + cursor.row`. The buffer is the single source of truth
//! for valid rows: a move either commits (lands on an existing line that fits the
//! visible height) or is rejected, and a rejected vertical move scrolls the
//! origin instead. There are no separate "am I at the edge" checks.
//!
//! Column policy: a candidate column past the end of the target line (or below
//! zero) snaps to column 0 of the same row. This is not a clamp to the last
//! valid column; the behavior is kept as-is and pinned by tests.
//!
//! Invariants (after every public call):
//! * A `Committed` move leaves the cursor on an existing buffer line with
//!   `cursor.col <= line_char_len`.
//! * A `Rejected` move never changes the cursor.
//! * The origin row only changes by one per rejected move and never goes below 0.

use core_text::TextBuffer;
mod layout;
pub use layout::{LayoutRegion, PaneLayout};

/// Column/row pair. Used for both the cursor (origin-relative) and the origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Cursor {
    pub col: usize,
    pub row: usize,
}

impl Cursor {
    pub fn new(col: usize, row: usize) -> Self {
        Self { col, row }
    }
    pub fn origin() -> Self {
        Self { col: 0, row: 0 }
    }
}

/// Result of an attempted cursor placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    Committed,
    Rejected,
}

impl MoveOutcome {
    pub fn is_committed(self) -> bool {
        matches!(self, MoveOutcome::Committed)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Viewport {
    cursor: Cursor,
    origin: Cursor,
    /// Visible rows, when known. `None` bounds rows by the buffer only.
    height: Option<usize>,
}

impl Viewport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_height(height: usize) -> Self {
        Self {
            height: Some(height),
            ..Self::default()
        }
    }

    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    pub fn origin(&self) -> Cursor {
        self.origin
    }

    pub fn height(&self) -> Option<usize> {
        self.height
    }

    /// Update the visible height (render adapter calls this on startup/resize).
    /// A zero height is stored as `None` so a degenerate terminal never traps the cursor.
    /// When the cursor row no longer fits, the overflow moves into the origin so
    /// `absolute_line()` is unchanged.
    pub fn set_height(&mut self, height: Option<usize>) {
        self.height = height.filter(|h| *h > 0);
        if let Some(h) = self.height
            && self.cursor.row >= h
        {
            let shift = self.cursor.row - (h - 1);
            self.origin.row += shift;
            self.cursor.row = h - 1;
            tracing::trace!(target: "model.viewport", shift, to = self.origin.row, "height_shrink_scroll");
        }
    }

    /// Buffer line index under the cursor.
    pub fn absolute_line(&self) -> usize {
        self.origin.row + self.cursor.row
    }

    /// Back to (0,0)/(0,0); height is kept.
    pub fn reset(&mut self) {
        self.cursor = Cursor::origin();
        self.origin = Cursor::origin();
    }

    /// Set the cursor directly. Commits only when `row` maps to an existing line
    /// and fits the visible height; otherwise nothing changes.
    pub fn try_move_cursor_to(&mut self, col: isize, row: isize, buffer: &TextBuffer) -> MoveOutcome {
        if col < 0 || row < 0 {
            return MoveOutcome::Rejected;
        }
        let (col, row) = (col as usize, row as usize);
        if let Some(h) = self.height
            && row >= h
        {
            return MoveOutcome::Rejected;
        }
        if self.origin.row + row >= buffer.line_count() {
            return MoveOutcome::Rejected;
        }
        self.cursor = Cursor { col, row };
        MoveOutcome::Committed
    }

    /// Composite navigation used by every motion (main pane and file picker).
    pub fn move_by(&mut self, dx: isize, dy: isize, buffer: &TextBuffer) -> MoveOutcome {
        let x = self.cursor.col as isize;
        let y = self.cursor.row as isize;
        let mut nx = x + dx;
        let ny = y + dy;
        let line_len = if ny < 0 {
            0
        } else {
            buffer.line_char_len(self.origin.row + ny as usize)
        };
        if nx > line_len as isize || nx < 0 {
            nx = 0;
        }
        let outcome = self.try_move_cursor_to(nx, ny, buffer);
        if !outcome.is_committed() {
            let before = self.origin.row;
            if ny > y {
                self.origin.row += 1;
            } else if ny < y && self.origin.row > 0 {
                self.origin.row -= 1;
            }
            if before != self.origin.row {
                tracing::trace!(target: "model.viewport", from = before, to = self.origin.row, "scroll");
            }
        }
        outcome
    }

    /// Place the cursor on absolute buffer line `line` at `col`, scrolling the
    /// origin just enough to keep it visible. Used after edits that move the
    /// cursor to a known-valid position (insert, newline, backspace join).
    pub fn reveal(&mut self, line: usize, col: usize) {
        if line < self.origin.row {
            self.origin.row = line;
        } else if let Some(h) = self.height
            && line - self.origin.row >= h
        {
            self.origin.row = line + 1 - h;
        }
        self.cursor = Cursor {
            col,
            row: line - self.origin.row,
        };
    }
}
