//! Pane geometry.
//!
//! The screen is split into four regions, in terminal cells:
//! * the file picker on the left (full height),
//! * a one-column separator,
//! * the main text pane on the right (all rows but the last two),
//! * the status title row and the command line row below the main pane.
//!
//! Degenerate terminals (fewer than 3 rows, or too narrow for the picker) still
//! produce a valid layout; regions simply collapse to zero width or height.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutRegion {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

impl LayoutRegion {
    pub fn new(x: u16, y: u16, width: u16, height: u16) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}

/// Rows reserved below the main pane (status title + command line).
pub const FOOTER_ROWS: u16 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaneLayout {
    pub picker: LayoutRegion,
    pub separator_x: u16,
    pub main: LayoutRegion,
    pub status: LayoutRegion,
    pub command: LayoutRegion,
}

impl PaneLayout {
    pub fn compute(width: u16, height: u16, picker_width: u16) -> Self {
        let picker_w = picker_width.min(width);
        let right_x = picker_w.saturating_add(1).min(width);
        let right_w = width.saturating_sub(right_x);
        let main_h = height.saturating_sub(FOOTER_ROWS);
        let status_y = main_h;
        let command_y = height.saturating_sub(1);
        let footer_h = if height >= FOOTER_ROWS { 1 } else { 0 };
        Self {
            picker: LayoutRegion::new(0, 0, picker_w, height),
            separator_x: picker_w,
            main: LayoutRegion::new(right_x, 0, right_w, main_h),
            status: LayoutRegion::new(right_x, status_y, right_w, footer_h),
            command: LayoutRegion::new(right_x, command_y, right_w, footer_h),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_terminal_layout() {
        let l = PaneLayout::compute(80, 24, 27);
        assert_eq!(l.picker, LayoutRegion::new(0, 0, 27, 24));
        assert_eq!(l.separator_x, 27);
        assert_eq!(l.main, LayoutRegion::new(28, 0, 52, 22));
        assert_eq!(l.status, LayoutRegion::new(28, 22, 52, 1));
        assert_eq!(l.command, LayoutRegion::new(28, 23, 52, 1));
    }

    #[test]
    fn tiny_terminal_collapses_regions() {
        let l = PaneLayout::compute(10, 1, 27);
        assert_eq!(l.picker.width, 10);
        assert_eq!(l.main.width, 0);
        assert_eq!(l.main.height, 0);
        assert_eq!(l.status.height, 0);
    }
}
