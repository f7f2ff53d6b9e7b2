//! Key -> Action translation.
//!
//! A flat table keyed on focus, then mode, then key. Global chords are checked
//! first so they work regardless of the focused pane:
//!
//! | focus   | mode   | key                 | action                 |
//! |---------|--------|---------------------|------------------------|
//! | any     | any    | Ctrl-C              | `Quit`                 |
//! | main    | any    | Ctrl-Space          | `ToggleFocus`          |
//! | picker  | -      | Ctrl-Space          | `ToggleFocus`          |
//! | main    | any    | Ctrl-S              | `Write`                |
//! | main    | NORMAL | h j k l / arrows    | `Motion`               |
//! | main    | NORMAL | Backspace, Esc      | `Motion(Left)`         |
//! | main    | NORMAL | `i`                 | enter INSERT           |
//! | main    | NORMAL | `:`                 | `CommandStart`         |
//! | main    | INSERT | arrows              | `Motion`               |
//! | main    | INSERT | Esc                 | leave INSERT           |
//! | main    | INSERT | Backspace / Enter   | delete before / split  |
//! | main    | INSERT | printable           | insert char            |
//! | picker  | -      | Up / Down / Enter   | picker navigation      |
//! | command | -      | printable           | `CommandChar`          |
//! | command | -      | Backspace/Enter/Esc | edit / execute / cancel|
//!
//! Anything else yields `None` and is ignored by the caller.

use crate::{Action, EditKind, ModeChange, MotionKind};
use core_events::{KeyCode, KeyEvent, KeyModifiers};
use core_state::{Focus, Mode};

pub fn translate_key(focus: Focus, mode: Mode, key: &KeyEvent) -> Option<Action> {
    if key.mods.contains(KeyModifiers::CTRL) {
        return translate_chord(focus, key.code);
    }
    match focus {
        Focus::Main => match mode {
            Mode::Normal => translate_normal(key),
            Mode::Insert => translate_insert(key),
        },
        Focus::Picker => translate_picker(key),
        Focus::Command => translate_command(key),
    }
}

fn translate_chord(focus: Focus, code: KeyCode) -> Option<Action> {
    match (focus, code) {
        (_, KeyCode::Char('c')) => Some(Action::Quit),
        (Focus::Main | Focus::Picker, KeyCode::Char(' ')) => Some(Action::ToggleFocus),
        (Focus::Main, KeyCode::Char('s')) => Some(Action::Write),
        _ => None,
    }
}

fn arrow_motion(code: KeyCode) -> Option<MotionKind> {
    match code {
        KeyCode::Left => Some(MotionKind::Left),
        KeyCode::Right => Some(MotionKind::Right),
        KeyCode::Up => Some(MotionKind::Up),
        KeyCode::Down => Some(MotionKind::Down),
        _ => None,
    }
}

fn translate_normal(key: &KeyEvent) -> Option<Action> {
    if key.mods.contains(KeyModifiers::ALT) {
        return None;
    }
    if let Some(m) = arrow_motion(key.code) {
        return Some(Action::Motion(m));
    }
    match key.code {
        KeyCode::Char('h') | KeyCode::Backspace | KeyCode::Esc => {
            Some(Action::Motion(MotionKind::Left))
        }
        KeyCode::Char('j') => Some(Action::Motion(MotionKind::Down)),
        KeyCode::Char('k') => Some(Action::Motion(MotionKind::Up)),
        KeyCode::Char('l') => Some(Action::Motion(MotionKind::Right)),
        KeyCode::Char('i') => Some(Action::ModeChange(ModeChange::EnterInsert)),
        KeyCode::Char(':') => Some(Action::CommandStart),
        _ => None,
    }
}

fn translate_insert(key: &KeyEvent) -> Option<Action> {
    if let Some(m) = arrow_motion(key.code) {
        return Some(Action::Motion(m));
    }
    match key.code {
        KeyCode::Esc => Some(Action::ModeChange(ModeChange::LeaveInsert)),
        KeyCode::Backspace => Some(Action::Edit(EditKind::DeleteBefore)),
        KeyCode::Enter => Some(Action::Edit(EditKind::InsertNewline)),
        _ => key.printable().map(|c| Action::Edit(EditKind::InsertChar(c))),
    }
}

fn translate_picker(key: &KeyEvent) -> Option<Action> {
    match key.code {
        KeyCode::Up => Some(Action::PickerUp),
        KeyCode::Down => Some(Action::PickerDown),
        KeyCode::Enter => Some(Action::PickerSelect),
        _ => None,
    }
}

fn translate_command(key: &KeyEvent) -> Option<Action> {
    match key.code {
        KeyCode::Enter => Some(Action::CommandExecute),
        KeyCode::Backspace => Some(Action::CommandBackspace),
        KeyCode::Esc => Some(Action::CommandCancel),
        _ => key.printable().map(Action::CommandChar),
    }
}
