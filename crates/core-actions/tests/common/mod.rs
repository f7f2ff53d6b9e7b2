#![allow(dead_code)] // Shared across integration tests; each test binary uses a subset of helpers.

use core_actions::{DispatchResult, dispatch, translate_key};
use core_config::Config;
use core_events::{KeyCode, KeyEvent};
use core_state::{FilePicker, Session};
use std::path::Path;

/// Session over a real file on disk, picker listing `names` under `dir`.
pub fn session_for(path: &Path, dir: &Path, names: &[&str]) -> Session {
    let buffer = core_actions::load_buffer(path).expect("load test file");
    Session::new(path, buffer, FilePicker::with_root(dir, names))
}

/// Translate and dispatch one key. Returns `None` when the key maps to nothing.
pub fn press(session: &mut Session, cfg: &Config, key: KeyEvent) -> Option<DispatchResult> {
    let action = translate_key(session.focus, session.mode, &key)?;
    Some(dispatch(action, session, cfg))
}

pub fn type_str(session: &mut Session, cfg: &Config, text: &str) {
    for ch in text.chars() {
        press(session, cfg, KeyEvent::char(ch));
    }
}

pub fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::plain(code)
}
