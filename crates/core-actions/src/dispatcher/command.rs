//! Command line editing and execution.
//!
//! Activation moves focus to the command line and clears it. Enter hands the
//! typed text to `CommandParser`; the result (success or error) is written
//! back to the command line as a message and focus returns to the main pane.

use super::DispatchResult;
use super::command_parser::{CommandParser, ParsedCommand};
use crate::Action;
use crate::io_ops::persist;
use core_config::Config;
use core_state::{Focus, Session};

pub(crate) fn handle_command_action(
    action: Action,
    session: &mut Session,
    config: &Config,
) -> DispatchResult {
    match action {
        Action::CommandStart => {
            session.command_line.begin();
            session.focus = Focus::Command;
            DispatchResult::dirty()
        }
        Action::CommandChar(ch) => {
            session.command_line.push_char(ch);
            DispatchResult::dirty()
        }
        Action::CommandBackspace => {
            session.command_line.backspace();
            DispatchResult::dirty()
        }
        Action::CommandCancel => {
            session.command_line.clear();
            session.focus = Focus::Main;
            DispatchResult::dirty()
        }
        Action::CommandExecute => execute_command(session, config),
        _ => unreachable!("non-command action routed to command handler"),
    }
}

fn execute_command(session: &mut Session, config: &Config) -> DispatchResult {
    let raw = session.command_line.take();
    let result = match CommandParser::parse(&raw) {
        ParsedCommand::Write => handle_write(session, config),
        ParsedCommand::Unknown(text) => {
            tracing::warn!(target: "actions.command", command = %text, "unknown_command");
            session.command_line.set_message(format!("Bad command: {text}"));
            DispatchResult::dirty()
        }
    };
    session.focus = Focus::Main;
    result
}

/// Persist the open buffer to its path, reporting the outcome on the command line.
pub(crate) fn handle_write(session: &mut Session, config: &Config) -> DispatchResult {
    match persist(&session.buffer, &session.file_path, config.chunk_size()) {
        Ok(bytes) => {
            tracing::info!(target: "actions.command", path = %session.file_path.display(), bytes, "write_ok");
            session.dirty = false;
            let msg = format!("\"{}\" {}B written", session.file_path.display(), bytes);
            session.command_line.set_message(msg);
        }
        Err(e) => {
            tracing::error!(target: "actions.command", path = %session.file_path.display(), error = %e, "write_failed");
            session
                .command_line
                .set_message(format!("Write failed: {e}"));
        }
    }
    DispatchResult::dirty()
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_state::FilePicker;
    use core_text::TextBuffer;

    #[test]
    fn begin_clears_previous_message_and_focuses() {
        let mut s = Session::new("t", TextBuffer::new("t", ""), FilePicker::new(["t"]));
        s.command_line.set_message("old");
        handle_command_action(Action::CommandStart, &mut s, &Config::default());
        assert_eq!(s.focus, Focus::Command);
        assert_eq!(s.command_line.message(), None);
        assert_eq!(s.command_line.text(), "");
    }

    #[test]
    fn cancel_returns_focus_without_message() {
        let mut s = Session::new("t", TextBuffer::new("t", ""), FilePicker::new(["t"]));
        let cfg = Config::default();
        handle_command_action(Action::CommandStart, &mut s, &cfg);
        handle_command_action(Action::CommandChar('w'), &mut s, &cfg);
        handle_command_action(Action::CommandCancel, &mut s, &cfg);
        assert_eq!(s.focus, Focus::Main);
        assert_eq!(s.command_line.text(), "");
        assert_eq!(s.command_line.message(), None);
    }

    #[test]
    fn write_failure_is_reported_not_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.txt");
        let mut s = Session::new(&path, TextBuffer::new("m", "x"), FilePicker::new(["m"]));
        s.dirty = true;
        let r = handle_write(&mut s, &Config::default());
        assert!(!r.quit);
        assert!(s.command_line.message().unwrap().starts_with("Write failed:"));
        assert!(s.dirty);
        assert!(!path.exists());
    }

    mod logging {
        use super::*;
        use std::sync::{Arc, Mutex};
        use tracing::field::{Field, Visit};
        use tracing::{Level, Subscriber, subscriber::Interest};
        use tracing_subscriber::layer::{Context, Layer, SubscriberExt};
        use tracing_subscriber::registry::Registry;

        type Captured = Vec<(String, Level, Vec<(String, String)>)>;

        #[derive(Clone, Default)]
        struct LogCapture {
            events: Arc<Mutex<Captured>>,
        }

        #[derive(Default)]
        struct FieldVisitor {
            fields: Vec<(String, String)>,
        }

        impl Visit for FieldVisitor {
            fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
                self.fields
                    .push((field.name().to_string(), format!("{:?}", value)));
            }
        }

        impl<S: Subscriber> Layer<S> for LogCapture {
            fn register_callsite(&self, _metadata: &'static tracing::Metadata<'static>) -> Interest {
                Interest::always()
            }

            fn on_event(&self, event: &tracing::Event<'_>, _ctx: Context<'_, S>) {
                let mut visitor = FieldVisitor::default();
                event.record(&mut visitor);
                let meta = event.metadata();
                self.events.lock().unwrap().push((
                    meta.target().to_string(),
                    *meta.level(),
                    visitor.fields,
                ));
            }
        }

        fn capture<F: FnOnce()>(f: F) -> Captured {
            let layer = LogCapture::default();
            let events = layer.events.clone();
            let subscriber = Registry::default().with(layer);
            tracing::subscriber::with_default(subscriber, f);
            let out = events.lock().unwrap().clone();
            out
        }

        fn find<'a>(logged: &'a Captured, message: &str) -> Option<&'a (String, Level, Vec<(String, String)>)> {
            logged.iter().find(|(target, _, fields)| {
                target == "actions.command"
                    && fields.iter().any(|(k, v)| k == "message" && v == message)
            })
        }

        #[test]
        fn unknown_command_logs_warning_with_text() {
            let mut s = Session::new("t", TextBuffer::new("t", ""), FilePicker::new(["t"]));
            let cfg = Config::default();
            let logged = capture(|| {
                handle_command_action(Action::CommandStart, &mut s, &cfg);
                for ch in "xyz".chars() {
                    handle_command_action(Action::CommandChar(ch), &mut s, &cfg);
                }
                handle_command_action(Action::CommandExecute, &mut s, &cfg);
            });
            let (_, level, fields) = find(&logged, "unknown_command")
                .unwrap_or_else(|| panic!("no unknown_command log: {logged:?}"));
            assert_eq!(*level, Level::WARN);
            assert!(fields.iter().any(|(k, v)| k == "command" && v == "xyz"));
        }

        #[test]
        fn failed_write_logs_error() {
            let dir = tempfile::tempdir().unwrap();
            let path = dir.path().join("gone.txt");
            let mut s = Session::new(&path, TextBuffer::new("g", "x"), FilePicker::new(["g"]));
            let logged = capture(|| {
                handle_write(&mut s, &Config::default());
            });
            let (_, level, _) = find(&logged, "write_failed")
                .unwrap_or_else(|| panic!("no write_failed log: {logged:?}"));
            assert_eq!(*level, Level::ERROR);
            assert!(find(&logged, "write_ok").is_none());
        }
    }
}
