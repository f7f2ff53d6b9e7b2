//! Async input service: crossterm `EventStream` -> `core_events::Event`.
//!
//! Mapping is a pure function (`map_key_event`) so it can be tested without a
//! terminal; the task in `async_service` only pumps the stream into the channel.

mod async_service;
pub use async_service::AsyncInputShutdown;

use async_service::spawn_async_event_task;

use core_events::{Event, KeyCode, KeyEvent, KeyModifiers};
use crossterm::event::{
    KeyCode as CKeyCode, KeyEvent as CKeyEvent, KeyEventKind as CKind, KeyModifiers as CMods,
};
use tokio::task::JoinHandle;

/// Spawn the async input service backed by `crossterm::EventStream`.
///
/// Returns the `JoinHandle` for the background task alongside a shutdown handle
/// that can be used to request immediate termination.
pub fn spawn_async_input(
    sender: tokio::sync::mpsc::Sender<Event>,
) -> (JoinHandle<()>, AsyncInputShutdown) {
    spawn_async_event_task(sender)
}

pub(crate) fn map_mods(m: CMods) -> KeyModifiers {
    let mut out = KeyModifiers::empty();
    if m.contains(CMods::CONTROL) {
        out |= KeyModifiers::CTRL;
    }
    if m.contains(CMods::ALT) {
        out |= KeyModifiers::ALT;
    }
    if m.contains(CMods::SHIFT) {
        out |= KeyModifiers::SHIFT;
    }
    out
}

/// Map a crossterm key event. Releases and unsupported keys yield `None`.
///
/// Terminals report Ctrl-Space either as `Char(' ')` with CONTROL or as a NUL
/// byte (`Null`); both become `KeyEvent::ctrl(' ')`.
pub fn map_key_event(event: &CKeyEvent) -> Option<KeyEvent> {
    if !matches!(event.kind, CKind::Press | CKind::Repeat) {
        return None;
    }
    let code = match event.code {
        CKeyCode::Null => return Some(KeyEvent::ctrl(' ')),
        CKeyCode::Char(c) => KeyCode::Char(c),
        CKeyCode::Enter => KeyCode::Enter,
        CKeyCode::Esc => KeyCode::Esc,
        CKeyCode::Backspace => KeyCode::Backspace,
        CKeyCode::Tab => KeyCode::Tab,
        CKeyCode::Up => KeyCode::Up,
        CKeyCode::Down => KeyCode::Down,
        CKeyCode::Left => KeyCode::Left,
        CKeyCode::Right => KeyCode::Right,
        _ => return None,
    };
    Some(KeyEvent::new(code, map_mods(event.modifiers)))
}

/// Ctrl-C is surfaced as its own event so it ends the loop from any focus.
pub(crate) fn is_interrupt(event: &CKeyEvent) -> bool {
    matches!(event.code, CKeyCode::Char('c')) && event.modifiers.contains(CMods::CONTROL)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_plain_char() {
        let ev = CKeyEvent::new(CKeyCode::Char('a'), CMods::NONE);
        assert_eq!(map_key_event(&ev), Some(KeyEvent::char('a')));
    }

    #[test]
    fn maps_ctrl_space_variants() {
        let spaced = CKeyEvent::new(CKeyCode::Char(' '), CMods::CONTROL);
        let nul = CKeyEvent::new(CKeyCode::Null, CMods::NONE);
        assert_eq!(map_key_event(&spaced), Some(KeyEvent::ctrl(' ')));
        assert_eq!(map_key_event(&nul), Some(KeyEvent::ctrl(' ')));
    }

    #[test]
    fn ignores_release_and_unsupported() {
        let mut release = CKeyEvent::new(CKeyCode::Char('a'), CMods::NONE);
        release.kind = CKind::Release;
        assert_eq!(map_key_event(&release), None);
        let f1 = CKeyEvent::new(CKeyCode::F(1), CMods::NONE);
        assert_eq!(map_key_event(&f1), None);
    }

    #[test]
    fn maps_modifiers() {
        let ev = CKeyEvent::new(CKeyCode::Char('x'), CMods::ALT | CMods::SHIFT);
        let mapped = map_key_event(&ev).unwrap();
        assert!(mapped.mods.contains(KeyModifiers::ALT));
        assert!(mapped.mods.contains(KeyModifiers::SHIFT));
        assert!(!mapped.mods.contains(KeyModifiers::CTRL));
    }

    #[test]
    fn interrupt_detection() {
        assert!(is_interrupt(&CKeyEvent::new(CKeyCode::Char('c'), CMods::CONTROL)));
        assert!(!is_interrupt(&CKeyEvent::new(CKeyCode::Char('c'), CMods::NONE)));
    }
}
