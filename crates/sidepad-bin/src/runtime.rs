//! Event loop: one event is dispatched and rendered before the next is received.

use anyhow::Result;
use core_actions::{DispatchResult, dispatch, translate_key};
use core_config::Config;
use core_events::{Event, InputEvent, KeyEvent};
use core_model::PaneLayout;
use core_render::{Frame, RenderEngine, compose_frame};
use core_state::Session;
use std::fmt;
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::{error, info, trace, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ShutdownReason {
    CtrlC,
    ActionQuit,
    ShutdownEvent,
    ChannelClosed,
}

impl ShutdownReason {
    fn as_str(&self) -> &'static str {
        match self {
            ShutdownReason::CtrlC => "ctrl_c",
            ShutdownReason::ActionQuit => "action_quit",
            ShutdownReason::ShutdownEvent => "shutdown_event",
            ShutdownReason::ChannelClosed => "channel_closed",
        }
    }
}

impl fmt::Display for ShutdownReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LoopControl {
    Continue { render: bool },
    Break { reason: ShutdownReason },
}

/// Editor state plus the render cache; knows nothing about the terminal guard.
pub(crate) struct EditorRuntime {
    session: Session,
    config: Config,
    engine: RenderEngine,
    size: (u16, u16),
}

impl EditorRuntime {
    pub(crate) fn new(session: Session, config: Config, size: (u16, u16)) -> Self {
        let mut runtime = Self {
            session,
            config,
            engine: RenderEngine::new(),
            size,
        };
        runtime.apply_size(size.0, size.1);
        runtime
    }

    pub(crate) fn session(&self) -> &Session {
        &self.session
    }

    fn apply_size(&mut self, width: u16, height: u16) {
        self.size = (width, height);
        self.config.apply_context(width);
        let layout = PaneLayout::compute(width, height, self.config.effective_picker_width);
        self.session
            .set_pane_heights(layout.main.height as usize, layout.picker.height as usize);
    }

    pub(crate) fn handle_event(&mut self, event: &Event) -> LoopControl {
        match event {
            Event::Input(InputEvent::Key(key)) => self.handle_key(key),
            Event::Input(InputEvent::Resize(w, h)) => {
                trace!(target: "runtime", w, h, "resize");
                self.apply_size(*w, *h);
                self.engine.invalidate();
                LoopControl::Continue { render: true }
            }
            Event::Input(InputEvent::CtrlC) => LoopControl::Break {
                reason: ShutdownReason::CtrlC,
            },
            Event::Shutdown => LoopControl::Break {
                reason: ShutdownReason::ShutdownEvent,
            },
        }
    }

    fn handle_key(&mut self, key: &KeyEvent) -> LoopControl {
        let Some(action) = translate_key(self.session.focus, self.session.mode, key) else {
            trace!(target: "runtime", %key, "unmapped_key");
            return LoopControl::Continue { render: false };
        };
        let span = tracing::trace_span!(target: "actions.dispatch", "process_action", action = ?action);
        let result: DispatchResult =
            span.in_scope(|| dispatch(action, &mut self.session, &self.config));
        if result.quit {
            return LoopControl::Break {
                reason: ShutdownReason::ActionQuit,
            };
        }
        if result.buffer_replaced {
            self.engine.invalidate();
        }
        LoopControl::Continue {
            render: result.dirty,
        }
    }

    pub(crate) fn frame(&self) -> Frame {
        compose_frame(&self.session, self.size.0, self.size.1, &self.config)
    }

    pub(crate) fn render(&mut self) -> Result<()> {
        let frame = self.frame();
        self.engine.render(frame)
    }
}

fn log_shutdown_stage(reason: ShutdownReason, stage: &'static str) {
    info!(
        target: "runtime.shutdown",
        reason = reason.as_str(),
        stage = stage,
        "shutdown_stage"
    );
}

/// Drive the runtime until a break condition, then stop the input task.
pub(crate) async fn run_event_loop(
    runtime: &mut EditorRuntime,
    mut rx: mpsc::Receiver<Event>,
    input_task: tokio::task::JoinHandle<()>,
    input_shutdown: core_input::AsyncInputShutdown,
) -> Result<()> {
    runtime.render()?;

    let span = tracing::debug_span!(target: "runtime", "event_loop");
    let _enter = span.enter();

    let mut reason = ShutdownReason::ChannelClosed;
    while let Some(event) = rx.recv().await {
        match runtime.handle_event(&event) {
            LoopControl::Break { reason: r } => {
                reason = r;
                break;
            }
            LoopControl::Continue { render: true } => {
                if let Err(e) = runtime.render() {
                    error!(target: "render", ?e, "render_error");
                }
            }
            LoopControl::Continue { render: false } => {}
        }
    }

    log_shutdown_stage(reason, "begin");
    rx.close();
    input_shutdown.signal();
    match tokio::time::timeout(Duration::from_millis(200), input_task).await {
        Ok(Ok(())) => trace!(target: "runtime.shutdown", "input_task_joined"),
        Ok(Err(err)) if err.is_cancelled() => {
            trace!(target: "runtime.shutdown", "input_task_cancelled")
        }
        Ok(Err(err)) => error!(target: "runtime.shutdown", ?err, "input_task_join_failed"),
        Err(_) => warn!(target: "runtime.shutdown", "input_task_timeout"),
    }
    log_shutdown_stage(reason, "complete");
    Ok(())
}
