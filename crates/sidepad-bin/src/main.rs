//! Sidepad entrypoint.
use anyhow::{Context, Result};
use clap::Parser;
use core_config::load_from;
use core_events::{EVENT_CHANNEL_CAP, Event};
use core_state::{FilePicker, Session};
use core_terminal::{CrosstermBackend, TerminalBackend};
use std::path::{Path, PathBuf};
use std::sync::Once;
use tokio::sync::mpsc;
use tracing::info;
use tracing_appender::non_blocking::WorkerGuard;

mod entries;
mod runtime;

use entries::scan_entries;
use runtime::{EditorRuntime, run_event_loop};

const LOG_FILE: &str = "sidepad.log";

/// CLI arguments.
#[derive(Parser, Debug)]
#[command(name = "sidepad", version, about = "Modal text editor with a file picker")]
struct Args {
    /// File to open at startup. Must exist and be readable.
    pub path: PathBuf,
    /// Configuration file path (overrides discovery of `sidepad.toml`).
    #[arg(long = "config")]
    pub config: Option<PathBuf>,
    /// Directory listed in the picker.
    #[arg(long = "dir", default_value = ".")]
    pub dir: PathBuf,
}

struct AppStartup {
    backend: CrosstermBackend,
    log_guard: Option<WorkerGuard>,
}

impl AppStartup {
    fn new() -> Self {
        Self {
            backend: CrosstermBackend::new(),
            log_guard: None,
        }
    }

    fn configure_logging(&mut self) -> Result<()> {
        let log_dir = Path::new(".");
        let log_path = log_dir.join(LOG_FILE);
        if log_path.exists() {
            let _ = std::fs::remove_file(&log_path);
        }

        let file_appender = tracing_appender::rolling::never(log_dir, LOG_FILE);
        let (nb_writer, guard) = tracing_appender::non_blocking(file_appender);
        if tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_writer(nb_writer)
            .with_ansi(false)
            .try_init()
            .is_ok()
        {
            self.log_guard = Some(guard);
        }
        Ok(())
    }

    fn install_panic_hook() {
        static HOOK: Once = Once::new();
        HOOK.call_once(|| {
            let default_panic = std::panic::take_hook();
            std::panic::set_hook(Box::new(move |info| {
                tracing::error!(target: "runtime.panic", ?info, "panic");
                default_panic(info);
            }));
        });
    }

    /// Everything that can fail before the terminal is touched: config, the
    /// initial file, and the picker listing.
    fn load_session(args: &Args) -> Result<(Session, core_config::Config)> {
        let config = load_from(args.config.clone())?;
        let buffer = core_actions::load_buffer(&args.path)
            .with_context(|| format!("opening {}", args.path.display()))?;
        let names = scan_entries(&args.dir)?;
        let entry_count = names.len();
        let picker = FilePicker::with_root(args.dir.clone(), names);
        info!(
            target: "runtime.startup",
            path = %args.path.display(),
            dir = %args.dir.display(),
            entries = entry_count,
            config_override = args.config.is_some(),
            picker_width = config.file.layout.picker_width,
            "bootstrap_complete"
        );
        Ok((Session::new(args.path.clone(), buffer, picker), config))
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let args = Args::parse();
    let mut startup = AppStartup::new();
    startup.configure_logging()?;
    AppStartup::install_panic_hook();
    info!(target: "runtime", "startup");

    let (session, config) = AppStartup::load_session(&args)?;

    startup.backend.set_title("sidepad")?;
    let size = startup.backend.size()?;
    let _terminal = startup.backend.enter_guard()?;

    let (tx, rx) = mpsc::channel::<Event>(EVENT_CHANNEL_CAP);
    let (input_task, input_shutdown) = core_input::spawn_async_input(tx);

    let mut runtime = EditorRuntime::new(session, config, size);
    run_event_loop(&mut runtime, rx, input_task, input_shutdown).await
}
