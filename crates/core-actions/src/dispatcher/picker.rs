//! File picker navigation, selection, and focus toggling.

use super::DispatchResult;
use crate::io_ops::load_buffer;
use core_state::{Focus, Session};
use std::path::Path;

pub(crate) fn handle_picker_move(dy: isize, session: &mut Session) -> DispatchResult {
    let before = (session.picker.viewport.cursor(), session.picker.viewport.origin());
    session.picker.move_by(dy);
    if (session.picker.viewport.cursor(), session.picker.viewport.origin()) != before {
        DispatchResult::dirty()
    } else {
        DispatchResult::clean()
    }
}

pub(crate) fn handle_picker_select(session: &mut Session) -> DispatchResult {
    let path = session.picker.selected_path();
    select_file(session, &path)
}

pub(crate) fn handle_toggle_focus(session: &mut Session) -> DispatchResult {
    session.focus = match session.focus {
        Focus::Main => Focus::Picker,
        Focus::Picker => Focus::Main,
        Focus::Command => return DispatchResult::clean(),
    };
    tracing::debug!(target: "actions.dispatch", focus = ?session.focus, "focus_toggled");
    DispatchResult::dirty()
}

/// Load `path` and make it the open file: new buffer, viewport at origin, focus
/// on the main pane. Unsaved edits of the previous buffer are dropped. When the
/// file cannot be read the session is left as it was and the error is shown on
/// the command line.
pub fn select_file(session: &mut Session, path: &Path) -> DispatchResult {
    match load_buffer(path) {
        Ok(buffer) => {
            tracing::info!(target: "actions.dispatch", path = %path.display(), "file_selected");
            session.open_buffer(path, buffer);
            session.command_line.clear();
            DispatchResult::buffer_replaced()
        }
        Err(e) => {
            session.command_line.set_message(format!("Open failed: {e}"));
            DispatchResult::dirty()
        }
    }
}
