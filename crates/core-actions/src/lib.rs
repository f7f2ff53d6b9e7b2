//! Editor actions: key translation and dispatch against a `Session`.
//!
//! Input flows through two pure steps. `translate_key` maps
//! `(focus, mode, key)` to an optional `Action` using an explicit table, and
//! `dispatch` applies that action to the session. Neither step touches the
//! terminal; the only side effect is file IO for loading and persisting buffers
//! (see `io_ops`).

mod dispatcher;
pub mod io_ops;
mod key_translator;

pub use dispatcher::{DispatchResult, dispatch, select_file};
pub use io_ops::{LoadError, PersistError, load_buffer, persist};
pub use key_translator::translate_key;

/// Cursor motions available in the main pane.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MotionKind {
    Left,
    Right,
    Up,
    Down,
}

impl MotionKind {
    /// `(dx, dy)` handed to `Viewport::move_by`.
    pub fn delta(self) -> (isize, isize) {
        match self {
            MotionKind::Left => (-1, 0),
            MotionKind::Right => (1, 0),
            MotionKind::Up => (0, -1),
            MotionKind::Down => (0, 1),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModeChange {
    EnterInsert,
    /// Back to NORMAL; the cursor also steps one column left.
    LeaveInsert,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditKind {
    InsertChar(char),
    InsertNewline,
    /// Backspace in INSERT: removes the char before the cursor, joining lines at column 0.
    DeleteBefore,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Motion(MotionKind),
    ModeChange(ModeChange),
    Edit(EditKind),
    CommandStart,
    CommandChar(char),
    CommandBackspace,
    CommandCancel,
    /// Resolve the accumulated command line text.
    CommandExecute,
    PickerUp,
    PickerDown,
    PickerSelect,
    /// Swap focus between the file picker and the main pane.
    ToggleFocus,
    /// Persist the open buffer to its path.
    Write,
    Quit,
}
