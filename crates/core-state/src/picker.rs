//! File picker pane state.
//!
//! Entries are supplied by the caller (the binary scans a directory); they are
//! stored as a `TextBuffer` with one name per line so the picker navigates with
//! the same `Viewport::move_by` rules as the main pane.

use core_model::{MoveOutcome, Viewport};
use core_text::TextBuffer;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct FilePicker {
    /// Directory the entry names are relative to.
    root: PathBuf,
    pub entries: TextBuffer,
    pub viewport: Viewport,
}

impl FilePicker {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::with_root(PathBuf::new(), names)
    }

    pub fn with_root<I, S>(root: impl Into<PathBuf>, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            root: root.into(),
            entries: TextBuffer::from_lines("picker", names),
            viewport: Viewport::new(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Name under the cursor; empty when the cursor row has no entry.
    pub fn selected(&self) -> String {
        self.entries.line_or_empty(self.viewport.absolute_line())
    }

    /// Path of the selected entry, joined onto the picker root. Not validated.
    pub fn selected_path(&self) -> PathBuf {
        self.root.join(self.selected())
    }

    pub fn move_by(&mut self, dy: isize) -> MoveOutcome {
        self.viewport.move_by(0, dy, &self.entries)
    }
}
