//! Property-based tests for frame composition over arbitrary sessions and sizes.

use core_config::Config;
use core_render::compose_frame;
use core_state::{FilePicker, Focus, Session};
use core_text::TextBuffer;
use proptest::prelude::*;

fn arb_lines() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[a-z 你]{0,40}", 1..20)
}

fn arb_focus() -> impl Strategy<Value = Focus> {
    prop_oneof![Just(Focus::Main), Just(Focus::Picker), Just(Focus::Command)]
}

proptest! {
    // The cursor, when shown, always lies inside the frame.
    #[test]
    fn cursor_stays_on_screen(
        lines in arb_lines(),
        moves in prop::collection::vec((-1isize..=1, -1isize..=1), 0..40),
        width in 0u16..60,
        height in 0u16..30,
        focus in arb_focus(),
    ) {
        let mut s = Session::new("f", TextBuffer::from_lines("f", &lines), FilePicker::new(["f", "g"]));
        let mut cfg = Config::default();
        cfg.apply_context(width);
        s.set_pane_heights(height.saturating_sub(2) as usize, height as usize);
        for (dx, dy) in moves {
            s.viewport.move_by(dx, dy, &s.buffer);
        }
        s.focus = focus;
        let f = compose_frame(&s, width, height, &cfg);
        prop_assert_eq!(f.cells.len(), width as usize * height as usize);
        if let Some((x, y)) = f.cursor {
            prop_assert!(x < width && y < height);
        }
    }

    // Every row's cells account for exactly the frame width.
    #[test]
    fn rows_fill_frame_width(lines in arb_lines(), width in 1u16..50, height in 3u16..20) {
        let s = Session::new("f", TextBuffer::from_lines("f", &lines), FilePicker::new(["f"]));
        let mut cfg = Config::default();
        cfg.apply_context(width);
        let f = compose_frame(&s, width, height, &cfg);
        for y in 0..height {
            let covered: usize = f.row(y).iter().filter(|c| c.is_leader()).map(|c| c.width as usize).sum();
            prop_assert_eq!(covered, width as usize);
        }
    }
}
