//! Line-oriented text buffer backed by a `ropey::Rope`.
//!
//! Columns are char counts within a line (line terminator excluded). Multi-byte
//! aware column arithmetic (grapheme clusters, display width) is deliberately not
//! modeled here; callers only use char counts for right-edge clamping.
//!
//! A missing line is an explicit `None`, never a panic. Mutating helpers that
//! receive a line index past the end materialize empty lines first, matching how
//! the terminal view used to grow when written to.

use ropey::Rope;
use std::io::{self, Read};

/// Text content for a single pane.
#[derive(Clone, Debug, Default)]
pub struct TextBuffer {
    rope: Rope,
    pub name: String,
}

impl TextBuffer {
    /// Construct a buffer from an in-memory string slice.
    pub fn new(name: impl Into<String>, content: &str) -> Self {
        Self {
            rope: Rope::from_str(content),
            name: name.into(),
        }
    }

    /// Construct a buffer holding one line per item (no trailing newline).
    pub fn from_lines<I, S>(name: impl Into<String>, lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut content = String::new();
        for (i, line) in lines.into_iter().enumerate() {
            if i > 0 {
                content.push('\n');
            }
            content.push_str(line.as_ref());
        }
        Self::new(name, &content)
    }

    /// Total number of lines. An empty buffer still has one (empty) line.
    pub fn line_count(&self) -> usize {
        self.rope.len_lines()
    }

    /// Content of line `idx` without its terminator, `None` when out of range.
    pub fn line(&self, idx: usize) -> Option<String> {
        if idx >= self.rope.len_lines() {
            return None;
        }
        let mut s = self.rope.line(idx).to_string();
        if s.ends_with('\n') {
            s.pop();
            if s.ends_with('\r') {
                s.pop();
            }
        } else if s.ends_with('\r') {
            s.pop();
        }
        Some(s)
    }

    /// Missing lines read as the empty string.
    pub fn line_or_empty(&self, idx: usize) -> String {
        self.line(idx).unwrap_or_default()
    }

    /// Char count of line `idx` (0 when the line does not exist).
    pub fn line_char_len(&self, idx: usize) -> usize {
        self.line(idx).map(|l| l.chars().count()).unwrap_or(0)
    }

    pub fn len_bytes(&self) -> usize {
        self.rope.len_bytes()
    }

    pub fn is_empty(&self) -> bool {
        self.rope.len_bytes() == 0
    }

    /// Drop all content.
    pub fn clear(&mut self) {
        self.rope = Rope::new();
    }

    /// Append raw bytes at the end. Invalid UTF-8 sequences are replaced with U+FFFD.
    pub fn append_text(&mut self, bytes: &[u8]) {
        let text = String::from_utf8_lossy(bytes);
        let end = self.rope.len_chars();
        self.rope.insert(end, &text);
    }

    /// Insert `ch` at (`line`, `col`). Returns the column just after the inserted char.
    pub fn insert_char(&mut self, line: usize, col: usize, ch: char) -> usize {
        let col = self.prepare_position(line, col);
        let at = self.rope.line_to_char(line) + col;
        self.rope.insert_char(at, ch);
        col + 1
    }

    /// Split `line` at `col`. Returns the position of the start of the new line.
    pub fn insert_newline(&mut self, line: usize, col: usize) -> (usize, usize) {
        let col = self.prepare_position(line, col);
        let at = self.rope.line_to_char(line) + col;
        self.rope.insert_char(at, '\n');
        (line + 1, 0)
    }

    /// Delete the char before (`line`, `col`), joining with the previous line at
    /// column 0. Returns the new (line, col), or `None` when nothing was deleted.
    pub fn delete_char_before(&mut self, line: usize, col: usize) -> Option<(usize, usize)> {
        if line >= self.rope.len_lines() {
            return None;
        }
        let col = col.min(self.line_char_len(line));
        let line_start = self.rope.line_to_char(line);
        if col > 0 {
            let at = line_start + col;
            self.rope.remove(at - 1..at);
            return Some((line, col - 1));
        }
        if line == 0 {
            return None;
        }
        let prev = line - 1;
        let prev_len = self.line_char_len(prev);
        // terminator may be "\n" or "\r\n"
        let prev_start = self.rope.line_to_char(prev);
        let terminator = line_start - prev_start - prev_len;
        self.rope.remove(line_start - terminator..line_start);
        Some((prev, prev_len))
    }

    /// Rewindable byte stream over the whole content.
    pub fn reader(&self) -> BufferReader<'_> {
        BufferReader {
            rope: &self.rope,
            pos: 0,
        }
    }

    /// Grow the buffer with empty lines until `line` exists; clamp `col` to its length.
    fn prepare_position(&mut self, line: usize, col: usize) -> usize {
        while line >= self.rope.len_lines() {
            let end = self.rope.len_chars();
            self.rope.insert_char(end, '\n');
        }
        col.min(self.line_char_len(line))
    }
}

impl std::fmt::Display for TextBuffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for chunk in self.rope.chunks() {
            f.write_str(chunk)?;
        }
        Ok(())
    }
}

/// Sequential reader over a buffer's bytes.
///
/// Reads are finite (`Ok(0)` at the end) and `rewind` restarts from the first
/// byte, so repeated passes over an unmodified buffer yield identical output.
pub struct BufferReader<'a> {
    rope: &'a Rope,
    pos: usize,
}

impl BufferReader<'_> {
    pub fn rewind(&mut self) {
        self.pos = 0;
    }

    /// Bytes consumed so far.
    pub fn position(&self) -> usize {
        self.pos
    }
}

impl Read for BufferReader<'_> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        if buf.is_empty() || self.pos >= self.rope.len_bytes() {
            return Ok(0);
        }
        let mut n = 0;
        for (slot, byte) in buf.iter_mut().zip(self.rope.bytes_at(self.pos)) {
            *slot = byte;
            n += 1;
        }
        self.pos += n;
        Ok(n)
    }
}
