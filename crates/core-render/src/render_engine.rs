//! RenderEngine: emits a composed `Frame` to the terminal, repainting only
//! rows that differ from the previously emitted frame.
//!
//! The cache is the last frame itself. It is dropped (forcing a full repaint)
//! on `invalidate`, which the runtime calls after a resize or when the open
//! buffer is replaced, and whenever the frame size changes.

use crate::writer::Writer;
use crate::{CellFlags, Frame};
use anyhow::Result;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RenderStats {
    pub full_frames: u64,
    pub partial_frames: u64,
    /// Rows written by the last frame.
    pub last_rows_repainted: u16,
}

#[derive(Default)]
pub struct RenderEngine {
    prev: Option<Frame>,
    stats: RenderStats,
}

impl RenderEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn invalidate(&mut self) {
        self.prev = None;
    }

    pub fn stats(&self) -> RenderStats {
        self.stats
    }

    /// Translate `frame` into writer commands against the cached frame and
    /// remember it. The writer is returned unflushed so callers choose the sink.
    pub fn prepare(&mut self, frame: Frame) -> Writer {
        let mut w = Writer::new();
        w.hide_cursor();
        let full = match &self.prev {
            Some(prev) => prev.width != frame.width || prev.height != frame.height,
            None => true,
        };
        let mut repainted = 0u16;
        for y in 0..frame.height {
            let unchanged = !full
                && self
                    .prev
                    .as_ref()
                    .is_some_and(|prev| prev.row(y) == frame.row(y));
            if unchanged {
                continue;
            }
            paint_row(&mut w, &frame, y);
            repainted += 1;
        }
        if let Some((x, y)) = frame.cursor {
            w.show_cursor(x, y);
        }
        if full {
            self.stats.full_frames += 1;
        } else {
            self.stats.partial_frames += 1;
        }
        self.stats.last_rows_repainted = repainted;
        tracing::trace!(target: "render", full, repainted, "frame_prepared");
        self.prev = Some(frame);
        w
    }

    /// Prepare and flush to stdout.
    pub fn render(&mut self, frame: Frame) -> Result<()> {
        self.prepare(frame).flush()
    }
}

/// Row-major repaint: MoveTo start of row, clear, then print runs of equal flags.
fn paint_row(w: &mut Writer, frame: &Frame, y: u16) {
    w.move_to(0, y);
    w.clear_line();
    let mut run = String::new();
    let mut run_flags = CellFlags::empty();
    for (text, flags) in frame.row_leaders(y) {
        if flags != run_flags {
            flush_run(w, &mut run, run_flags);
            run_flags = flags;
        }
        run.push_str(text);
    }
    flush_run(w, &mut run, run_flags);
}

fn flush_run(w: &mut Writer, run: &mut String, flags: CellFlags) {
    if run.is_empty() {
        return;
    }
    let reverse = flags.contains(CellFlags::REVERSE);
    if reverse {
        w.reverse(true);
    }
    w.print(std::mem::take(run));
    if reverse {
        w.reverse(false);
    }
}
