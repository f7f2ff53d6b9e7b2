//! Full-frame composition from a `Session`.

use crate::status::{StatusContext, build_status};
use crate::{CellFlags, Frame};
use core_config::Config;
use core_model::{LayoutRegion, PaneLayout};
use core_state::{COMMAND_PROMPT, Focus, Session};
use unicode_width::UnicodeWidthChar;

/// Vertical bar drawn between the picker and the main pane.
pub const SEPARATOR: &str = "│";

/// Write `text` starting at (x, y), stopping at `x + max_width`. Returns the
/// number of columns used. Control chars render as a single blank; zero-width
/// chars are dropped.
fn draw_text(frame: &mut Frame, x: u16, y: u16, max_width: u16, text: &str, flags: CellFlags) -> u16 {
    let mut used: u16 = 0;
    let mut buf = [0u8; 4];
    for ch in text.chars() {
        let (shown, w) = match ch.width() {
            Some(0) => continue,
            Some(w) => (&*ch.encode_utf8(&mut buf), w as u16),
            None => (" ", 1),
        };
        if used + w > max_width {
            break;
        }
        frame.set_cell(x + used, y, shown, w, flags);
        used += w;
    }
    used
}

/// Display width of the first `col` chars of `line`.
fn display_col(line: &str, col: usize) -> u16 {
    line.chars()
        .take(col)
        .map(|c| c.width().unwrap_or(1) as u16)
        .sum()
}

fn cursor_in(region: LayoutRegion, dx: u16, dy: u16) -> Option<(u16, u16)> {
    if region.width == 0 || region.height == 0 || dy >= region.height {
        return None;
    }
    Some((region.x + dx.min(region.width - 1), region.y + dy))
}

fn draw_picker(frame: &mut Frame, session: &Session, region: LayoutRegion) {
    let picker = &session.picker;
    let origin = picker.viewport.origin().row;
    let selected_row = picker.viewport.cursor().row as u16;
    for row in 0..region.height {
        if let Some(name) = picker.entries.line(origin + row as usize) {
            draw_text(frame, region.x, region.y + row, region.width, &name, CellFlags::empty());
        }
        if row == selected_row {
            frame.apply_flags_span(region.x, region.y + row, region.width, CellFlags::REVERSE);
        }
    }
}

fn draw_main(frame: &mut Frame, session: &Session, region: LayoutRegion) {
    let origin = session.viewport.origin().row;
    for row in 0..region.height {
        if let Some(line) = session.buffer.line(origin + row as usize) {
            draw_text(frame, region.x, region.y + row, region.width, &line, CellFlags::empty());
        }
    }
}

/// Compose the whole screen for `session` on a `width` x `height` terminal.
pub fn compose_frame(session: &Session, width: u16, height: u16, config: &Config) -> Frame {
    let mut frame = Frame::new(width, height);
    let layout = PaneLayout::compute(width, height, config.effective_picker_width);

    draw_picker(&mut frame, session, layout.picker);
    if layout.separator_x < width {
        for y in 0..height {
            frame.set_cell(layout.separator_x, y, SEPARATOR, 1, CellFlags::empty());
        }
    }
    draw_main(&mut frame, session, layout.main);

    let status = build_status(&StatusContext::from_session(session, config.status_separator()));
    if layout.status.height > 0 {
        draw_text(&mut frame, layout.status.x, layout.status.y, layout.status.width, &status, CellFlags::empty());
    }

    let command_text = match session.command_line.message() {
        Some(msg) => msg.to_string(),
        None if session.focus == Focus::Command => {
            format!("{COMMAND_PROMPT}{}", session.command_line.text())
        }
        None => String::new(),
    };
    if layout.command.height > 0 {
        draw_text(&mut frame, layout.command.x, layout.command.y, layout.command.width, &command_text, CellFlags::empty());
    }

    frame.cursor = match session.focus {
        Focus::Main => {
            let cursor = session.viewport.cursor();
            let line = session.buffer.line_or_empty(session.viewport.absolute_line());
            cursor_in(layout.main, display_col(&line, cursor.col), cursor.row as u16)
        }
        Focus::Picker => cursor_in(layout.picker, 0, session.picker.viewport.cursor().row as u16),
        Focus::Command => {
            let col = display_col(COMMAND_PROMPT, usize::MAX)
                + display_col(session.command_line.text(), usize::MAX);
            cursor_in(layout.command, col, 0)
        }
    };
    tracing::trace!(target: "render", width, height, cursor = ?frame.cursor, "frame_composed");
    frame
}
