//! Cursor motion in the main pane.

use super::DispatchResult;
use crate::MotionKind;
use core_state::Session;

pub(crate) fn handle_motion(kind: MotionKind, session: &mut Session) -> DispatchResult {
    let before = (session.viewport.cursor(), session.viewport.origin());
    let (dx, dy) = kind.delta();
    session.viewport.move_by(dx, dy, &session.buffer);
    if (session.viewport.cursor(), session.viewport.origin()) != before {
        DispatchResult::dirty()
    } else {
        DispatchResult::clean()
    }
}
