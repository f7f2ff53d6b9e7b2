//! Editor session state: the open file, its buffer and viewport, mode, focus,
//! the file picker, and the command line.
//!
//! Everything here is plain owned data. Input interpretation lives in
//! `core-actions`; terminal output lives in `core-render`, which copies this
//! state to the screen every frame. Nothing in this crate performs IO.
//!
//! Focus and mode are orthogonal: `mode` only matters while the main pane has
//! focus, and opening the command line does not change it.

use core_model::Viewport;
use core_text::TextBuffer;
use std::path::{Path, PathBuf};

mod picker;
pub use picker::FilePicker;

/// Input interpretation mode of the main pane.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Navigation only.
    #[default]
    Normal,
    /// Text entry: printable keys are inserted at the cursor.
    Insert,
}

impl Mode {
    pub fn label(self) -> &'static str {
        match self {
            Mode::Normal => "NORMAL",
            Mode::Insert => "INSERT",
        }
    }
}

/// Which pane receives input. Exactly one at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Main,
    Picker,
    Command,
}

/// Cells reserved in front of the command text for the prompt.
pub const COMMAND_PROMPT: &str = " :> ";

/// Single-line command input.
///
/// `text` is what the user typed since activation. `message` is feedback from the
/// last dispatch (e.g. an unknown command); while set it is shown instead of the
/// text. Both are cleared on activation.
#[derive(Debug, Default, Clone)]
pub struct CommandLineState {
    text: String,
    message: Option<String>,
}

impl CommandLineState {
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Start a fresh command: clears typed text and any previous message.
    pub fn begin(&mut self) {
        self.text.clear();
        self.message = None;
    }

    pub fn push_char(&mut self, ch: char) {
        self.text.push(ch);
    }

    /// Delete the last char; no-op on empty input.
    pub fn backspace(&mut self) {
        self.text.pop();
    }

    /// Hand the typed text to the dispatcher, leaving the input empty.
    pub fn take(&mut self) -> String {
        std::mem::take(&mut self.text)
    }

    /// Replace the visible content with a feedback message.
    pub fn set_message<S: Into<String>>(&mut self, msg: S) {
        self.text.clear();
        self.message = Some(msg.into());
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.message = None;
    }

    /// Column (relative to the command pane) where the input cursor sits.
    pub fn cursor_col(&self) -> usize {
        COMMAND_PROMPT.chars().count() + self.text.chars().count()
    }
}

/// Top-level editor state. One file is open at a time.
pub struct Session {
    pub file_path: PathBuf,
    pub buffer: TextBuffer,
    pub viewport: Viewport,
    pub mode: Mode,
    pub focus: Focus,
    pub command_line: CommandLineState,
    pub picker: FilePicker,
    /// Buffer modified since it was loaded or last written.
    pub dirty: bool,
}

impl Session {
    pub fn new(file_path: impl Into<PathBuf>, buffer: TextBuffer, picker: FilePicker) -> Self {
        Self {
            file_path: file_path.into(),
            buffer,
            viewport: Viewport::new(),
            mode: Mode::Normal,
            focus: Focus::Main,
            command_line: CommandLineState::default(),
            picker,
            dirty: false,
        }
    }

    /// True while printable keys are inserted into the main buffer.
    pub fn insert_active(&self) -> bool {
        matches!(self.mode, Mode::Insert)
    }

    pub fn file_path(&self) -> &Path {
        &self.file_path
    }

    /// Replace the open file with an already loaded buffer. The previous buffer is
    /// discarded without prompting; the viewport returns to the origin and focus to
    /// the main pane.
    pub fn open_buffer(&mut self, path: impl Into<PathBuf>, buffer: TextBuffer) {
        let path = path.into();
        if self.dirty {
            tracing::warn!(
                target: "state",
                discarded = %self.file_path.display(),
                "unsaved_changes_discarded"
            );
        }
        self.file_path = path;
        self.buffer = buffer;
        self.viewport.reset();
        self.dirty = false;
        self.focus = Focus::Main;
    }

    /// Propagate the visible text height of the main and picker panes.
    pub fn set_pane_heights(&mut self, main: usize, picker: usize) {
        self.viewport.set_height(Some(main));
        self.picker.viewport.set_height(Some(picker));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_model::Cursor;

    fn session(text: &str) -> Session {
        Session::new(
            "a.txt",
            TextBuffer::new("a.txt", text),
            FilePicker::new(["a.txt", "b.txt"]),
        )
    }

    #[test]
    fn new_session_defaults() {
        let s = session("abc");
        assert_eq!(s.mode, Mode::Normal);
        assert_eq!(s.focus, Focus::Main);
        assert!(!s.insert_active());
        assert_eq!(s.viewport.cursor(), Cursor::origin());
    }

    #[test]
    fn open_buffer_resets_viewport_and_focus() {
        let mut s = session("a\nb\nc\nd");
        s.viewport.move_by(0, 1, &s.buffer);
        s.viewport.move_by(1, 0, &s.buffer);
        s.focus = Focus::Picker;
        s.dirty = true;
        s.open_buffer("b.txt", TextBuffer::new("b.txt", "fresh"));
        assert_eq!(s.viewport.cursor(), Cursor::origin());
        assert_eq!(s.viewport.origin(), Cursor::origin());
        assert_eq!(s.focus, Focus::Main);
        assert_eq!(s.file_path(), Path::new("b.txt"));
        assert_eq!(s.buffer.to_string(), "fresh");
        assert!(!s.dirty);
    }

    #[test]
    fn command_line_lifecycle() {
        let mut cl = CommandLineState::default();
        cl.set_message("Bad command: x");
        cl.begin();
        assert_eq!(cl.message(), None);
        cl.push_char('w');
        cl.push_char('q');
        cl.backspace();
        assert_eq!(cl.text(), "w");
        assert_eq!(cl.cursor_col(), COMMAND_PROMPT.len() + 1);
        assert_eq!(cl.take(), "w");
        assert_eq!(cl.text(), "");
    }

    #[test]
    fn command_line_backspace_on_empty_is_noop() {
        let mut cl = CommandLineState::default();
        cl.backspace();
        assert_eq!(cl.text(), "");
    }

    #[test]
    fn mode_labels() {
        assert_eq!(Mode::Normal.label(), "NORMAL");
        assert_eq!(Mode::Insert.label(), "INSERT");
    }
}
