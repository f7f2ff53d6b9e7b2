//! Status line composition.
//!
//! Format: `<MODE><separator>L<line>/C<col>` where `line` is the 1-based
//! absolute buffer line (`origin.row + cursor.row + 1`) and `col` the 0-based
//! cursor column. Two stages, as elsewhere in rendering:
//! 1. `compose_status` produces ordered `StatusSegment`s.
//! 2. `format_status` renders them into the final string.

use core_state::{Mode, Session};

/// What the status line needs, independent of the session layout.
pub struct StatusContext<'a> {
    pub mode: Mode,
    pub origin_row: usize,
    pub cursor_row: usize,
    pub col: usize,
    pub separator: &'a str,
}

impl<'a> StatusContext<'a> {
    pub fn from_session(session: &Session, separator: &'a str) -> Self {
        let cursor = session.viewport.cursor();
        Self {
            mode: session.mode,
            origin_row: session.viewport.origin().row,
            cursor_row: cursor.row,
            col: cursor.col,
            separator,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatusSegment<'a> {
    Mode(&'static str),
    Separator(&'a str),
    Position { line_1: usize, col: usize },
}

pub fn compose_status<'a>(ctx: &StatusContext<'a>) -> Vec<StatusSegment<'a>> {
    vec![
        StatusSegment::Mode(ctx.mode.label()),
        StatusSegment::Separator(ctx.separator),
        StatusSegment::Position {
            line_1: ctx.origin_row + ctx.cursor_row + 1,
            col: ctx.col,
        },
    ]
}

pub fn format_status(segments: &[StatusSegment<'_>]) -> String {
    let mut s = String::with_capacity(64);
    for seg in segments {
        match seg {
            StatusSegment::Mode(m) => s.push_str(m),
            StatusSegment::Separator(sep) => s.push_str(sep),
            StatusSegment::Position { line_1, col } => {
                use std::fmt::Write as _;
                let _ = write!(s, "L{}/C{}", line_1, col);
            }
        }
    }
    s
}

pub fn build_status(ctx: &StatusContext) -> String {
    format_status(&compose_status(ctx))
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_state::FilePicker;
    use core_text::TextBuffer;
    use pretty_assertions::assert_eq;

    #[test]
    fn normal_at_origin() {
        let ctx = StatusContext {
            mode: Mode::Normal,
            origin_row: 0,
            cursor_row: 0,
            col: 0,
            separator: "--",
        };
        assert_eq!(build_status(&ctx), "NORMAL--L1/C0");
    }

    #[test]
    fn line_includes_origin_offset() {
        let ctx = StatusContext {
            mode: Mode::Insert,
            origin_row: 10,
            cursor_row: 3,
            col: 7,
            separator: " ",
        };
        assert_eq!(build_status(&ctx), "INSERT L14/C7");
    }

    #[test]
    fn default_separator_from_session() {
        let mut s = Session::new("a", TextBuffer::new("a", "ab\ncd"), FilePicker::new(["a"]));
        s.viewport.move_by(0, 1, &s.buffer);
        s.viewport.move_by(1, 0, &s.buffer);
        let sep = "─".repeat(33);
        let status = build_status(&StatusContext::from_session(&s, &sep));
        assert_eq!(status, format!("NORMAL{sep}L2/C1"));
    }

    #[test]
    fn segments_in_order() {
        let ctx = StatusContext {
            mode: Mode::Normal,
            origin_row: 0,
            cursor_row: 1,
            col: 2,
            separator: "|",
        };
        assert_eq!(
            compose_status(&ctx),
            vec![
                StatusSegment::Mode("NORMAL"),
                StatusSegment::Separator("|"),
                StatusSegment::Position { line_1: 2, col: 2 },
            ]
        );
    }
}
