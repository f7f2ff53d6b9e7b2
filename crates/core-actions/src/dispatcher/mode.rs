//! Mode transitions (NORMAL <-> INSERT).

use super::DispatchResult;
use crate::{ModeChange, MotionKind};
use core_state::{Mode, Session};

pub(crate) fn handle_mode_change(mc: ModeChange, session: &mut Session) -> DispatchResult {
    match mc {
        ModeChange::EnterInsert => {
            session.mode = Mode::Insert;
        }
        ModeChange::LeaveInsert => {
            session.mode = Mode::Normal;
            let (dx, dy) = MotionKind::Left.delta();
            session.viewport.move_by(dx, dy, &session.buffer);
        }
    }
    tracing::debug!(target: "actions.dispatch", mode = session.mode.label(), "mode_change");
    DispatchResult::dirty()
}
