//! Text mutation at the cursor (INSERT mode).
//!
//! Each edit works on the absolute buffer line under the cursor and then
//! re-places the cursor with `Viewport::reveal`, which scrolls when a newline
//! pushes the cursor below the pane or a join pulls it above the origin.

use super::DispatchResult;
use crate::EditKind;
use core_state::Session;

pub(crate) fn handle_edit(kind: EditKind, session: &mut Session) -> DispatchResult {
    let line = session.viewport.absolute_line();
    let col = session.viewport.cursor().col;
    let target = match kind {
        EditKind::InsertChar(ch) => Some((line, session.buffer.insert_char(line, col, ch))),
        EditKind::InsertNewline => Some(session.buffer.insert_newline(line, col)),
        EditKind::DeleteBefore => session.buffer.delete_char_before(line, col),
    };
    match target {
        Some((line, col)) => {
            session.viewport.reveal(line, col);
            session.dirty = true;
            DispatchResult::dirty()
        }
        None => DispatchResult::clean(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_model::{Cursor, Viewport};
    use core_state::FilePicker;
    use core_text::TextBuffer;

    fn session(text: &str) -> Session {
        Session::new("t", TextBuffer::new("t", text), FilePicker::new(["t"]))
    }

    #[test]
    fn insert_advances_cursor() {
        let mut s = session("bc");
        handle_edit(EditKind::InsertChar('a'), &mut s);
        assert_eq!(s.buffer.to_string(), "abc");
        assert_eq!(s.viewport.cursor(), Cursor::new(1, 0));
        assert!(s.dirty);
    }

    #[test]
    fn backspace_at_buffer_start_is_noop() {
        let mut s = session("abc");
        let r = handle_edit(EditKind::DeleteBefore, &mut s);
        assert!(!r.dirty);
        assert_eq!(s.buffer.to_string(), "abc");
        assert!(!s.dirty);
    }

    #[test]
    fn backspace_at_col_zero_joins_lines() {
        let mut s = session("ab\ncd");
        s.viewport.move_by(0, 1, &s.buffer);
        handle_edit(EditKind::DeleteBefore, &mut s);
        assert_eq!(s.buffer.to_string(), "abcd");
        assert_eq!(s.viewport.cursor(), Cursor::new(2, 0));
    }

    #[test]
    fn newline_splits_and_scrolls_at_pane_bottom() {
        let mut s = session("one\ntwo");
        s.viewport = Viewport::with_height(2);
        s.viewport.move_by(0, 1, &s.buffer);
        s.viewport.move_by(1, 0, &s.buffer);
        handle_edit(EditKind::InsertNewline, &mut s);
        assert_eq!(s.buffer.to_string(), "one\nt\nwo");
        assert_eq!(s.viewport.origin().row, 1);
        assert_eq!(s.viewport.cursor(), Cursor::new(0, 1));
        assert_eq!(s.viewport.absolute_line(), 2);
    }

    #[test]
    fn join_above_origin_scrolls_back() {
        let mut s = session("a\nb\nc");
        s.viewport = Viewport::with_height(1);
        s.viewport.move_by(0, 1, &s.buffer); // rejected: scrolls origin to 1
        assert_eq!(s.viewport.origin().row, 1);
        handle_edit(EditKind::DeleteBefore, &mut s);
        assert_eq!(s.buffer.to_string(), "ab\nc");
        assert_eq!(s.viewport.origin().row, 0);
        assert_eq!(s.viewport.cursor(), Cursor::new(1, 0));
    }
}
