//! Rendering: session -> `Frame` -> terminal commands.
//!
//! `compose::compose_frame` copies the session onto a cell grid (picker,
//! separator, main pane, status row, command row) and records where the
//! hardware cursor belongs. `RenderEngine` diffs that grid row by row against
//! the previous frame and emits only changed rows through a `Writer`.
//!
//! Cells follow a leader/continuation scheme so wide characters occupy their
//! full visual width:
//! - Leader: width >= 1, `text` non-empty.
//! - Continuation: width == 0, `text` empty; immediately follows its leader.
//!
//! Lines longer than their pane are truncated at the pane edge, never wrapped.

use bitflags::bitflags;

pub mod compose;
pub mod render_engine;
pub mod status;
pub mod writer;

pub use compose::compose_frame;
pub use render_engine::RenderEngine;

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct CellFlags: u8 {
        const REVERSE = 0b0000_0001; // highlighted picker entry
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    /// Printed text (leader cells only). Empty for continuation cells.
    pub text: String,
    /// Visual width in terminal columns. `0` designates a continuation cell.
    pub width: u8,
    pub flags: CellFlags,
}

impl Cell {
    #[inline]
    pub fn leader(text: &str, width: u16, flags: CellFlags) -> Self {
        Self {
            text: text.to_string(),
            width: width.max(1) as u8,
            flags,
        }
    }
    #[inline]
    pub fn continuation(flags: CellFlags) -> Self {
        Self {
            text: String::new(),
            width: 0,
            flags,
        }
    }
    #[inline]
    pub fn is_leader(&self) -> bool {
        self.width > 0
    }
}

impl Default for Cell {
    fn default() -> Self {
        Cell {
            text: " ".to_string(),
            width: 1,
            flags: CellFlags::empty(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    pub width: u16,
    pub height: u16,
    pub cells: Vec<Cell>,
    /// Hardware cursor position (x, y), if it should be shown.
    pub cursor: Option<(u16, u16)>,
}

impl Frame {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            cells: vec![Cell::default(); (width as usize) * (height as usize)],
            cursor: None,
        }
    }

    #[inline]
    fn index(&self, x: u16, y: u16) -> Option<usize> {
        if x < self.width && y < self.height {
            Some(y as usize * self.width as usize + x as usize)
        } else {
            None
        }
    }

    /// Set `text` at (x,y) and populate continuation cells for its width.
    pub fn set_cell(&mut self, x: u16, y: u16, text: &str, width: u16, flags: CellFlags) {
        if x >= self.width || y >= self.height {
            return;
        }
        let w = width.max(1).min(self.width - x);
        if let Some(idx) = self.index(x, y) {
            self.cells[idx] = Cell::leader(text, w, flags);
        }
        for dx in 1..w {
            if let Some(c_idx) = self.index(x + dx, y) {
                self.cells[c_idx] = Cell::continuation(flags);
            }
        }
    }

    /// Apply additional flags over a span of cells.
    pub fn apply_flags_span(&mut self, x: u16, y: u16, span_width: u16, flags: CellFlags) {
        let span = span_width.min(self.width.saturating_sub(x));
        for dx in 0..span {
            if let Some(idx) = self.index(x + dx, y) {
                self.cells[idx].flags |= flags;
            }
        }
    }

    /// Cells of row `y` (empty slice when out of range).
    pub fn row(&self, y: u16) -> &[Cell] {
        if y >= self.height {
            return &[];
        }
        let start = y as usize * self.width as usize;
        &self.cells[start..start + self.width as usize]
    }

    /// Iterate leader cells of a row, yielding (&str, flags).
    pub fn row_leaders(&self, y: u16) -> impl Iterator<Item = (&str, CellFlags)> + '_ {
        self.row(y)
            .iter()
            .filter(|c| c.is_leader())
            .map(|c| (c.text.as_str(), c.flags))
    }

    /// Printed content of row `y` (testing / diagnostics only).
    pub fn row_text(&self, y: u16) -> String {
        self.row_leaders(y).map(|(t, _)| t).collect()
    }
}
