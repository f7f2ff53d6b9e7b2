//! Dispatcher applying `Action` to a mutable `Session`.
//!
//! Sub-modules by concern:
//! * `motion`  - cursor movement in the main pane
//! * `mode`    - NORMAL <-> INSERT transitions
//! * `edit`    - text mutation (insert, newline, backspace)
//! * `command` - command line editing and execution (`:w`)
//! * `picker`  - file picker navigation, selection, focus toggling

use crate::Action;
use core_config::Config;
use core_state::Session;

mod command;
mod command_parser;
mod edit;
mod mode;
mod motion;
mod picker;

pub use picker::select_file;

/// Result of dispatching a single `Action`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DispatchResult {
    pub dirty: bool,
    pub quit: bool,
    /// The open buffer was replaced (file selection); the whole screen must be redrawn.
    pub buffer_replaced: bool,
}

impl DispatchResult {
    pub fn dirty() -> Self {
        Self {
            dirty: true,
            quit: false,
            buffer_replaced: false,
        }
    }
    pub fn clean() -> Self {
        Self {
            dirty: false,
            quit: false,
            buffer_replaced: false,
        }
    }
    pub fn quit() -> Self {
        Self {
            dirty: true,
            quit: true,
            buffer_replaced: false,
        }
    }
    pub fn buffer_replaced() -> Self {
        Self {
            dirty: true,
            quit: false,
            buffer_replaced: true,
        }
    }
}

/// Apply an action to the session. Returns whether a render is needed
/// (`dirty`) or the editor should exit (`quit`).
pub fn dispatch(action: Action, session: &mut Session, config: &Config) -> DispatchResult {
    tracing::trace!(target: "actions.dispatch", ?action, focus = ?session.focus, mode = ?session.mode, "dispatch");
    match action {
        Action::Motion(kind) => motion::handle_motion(kind, session),
        Action::ModeChange(mc) => mode::handle_mode_change(mc, session),
        Action::Edit(kind) => edit::handle_edit(kind, session),
        Action::CommandStart
        | Action::CommandChar(_)
        | Action::CommandBackspace
        | Action::CommandCancel
        | Action::CommandExecute => command::handle_command_action(action, session, config),
        Action::Write => command::handle_write(session, config),
        Action::PickerUp => picker::handle_picker_move(-1, session),
        Action::PickerDown => picker::handle_picker_move(1, session),
        Action::PickerSelect => picker::handle_picker_select(session),
        Action::ToggleFocus => picker::handle_toggle_focus(session),
        Action::Quit => {
            tracing::info!(target: "actions.dispatch", "quit");
            DispatchResult::quit()
        }
    }
}
