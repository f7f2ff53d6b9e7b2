//! Configuration loading and parsing.
//!
//! Parses `sidepad.toml` (or an override path provided by the binary):
//!
//! ```toml
//! [layout]
//! picker_width = 27
//! [persist]
//! chunk_size = 4096
//! [status]
//! separator = "─────"
//! ```
//!
//! Every field has a default. A missing file or a parse error falls back to the
//! defaults; unknown fields are ignored. The picker width is clamped against the
//! terminal width at application time (`Config::apply_context`); the raw value is
//! retained so a later resize can re-clamp.

use anyhow::Result;
use serde::Deserialize;
use std::{fs, path::PathBuf};
use tracing::{info, warn};

pub const CONFIG_FILE_NAME: &str = "sidepad.toml";

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct LayoutConfig {
    #[serde(default = "LayoutConfig::default_picker_width")]
    pub picker_width: u16,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            picker_width: Self::default_picker_width(),
        }
    }
}

impl LayoutConfig {
    const fn default_picker_width() -> u16 {
        27
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct PersistConfig {
    #[serde(default = "PersistConfig::default_chunk_size")]
    pub chunk_size: usize,
}

impl Default for PersistConfig {
    fn default() -> Self {
        Self {
            chunk_size: Self::default_chunk_size(),
        }
    }
}

impl PersistConfig {
    const fn default_chunk_size() -> usize {
        4096
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct StatusConfig {
    #[serde(default = "StatusConfig::default_separator")]
    pub separator: String,
}

impl Default for StatusConfig {
    fn default() -> Self {
        Self {
            separator: Self::default_separator(),
        }
    }
}

impl StatusConfig {
    fn default_separator() -> String {
        "─".repeat(33)
    }
}

#[derive(Debug, Deserialize, Default, Clone, PartialEq, Eq)]
pub struct ConfigFile {
    #[serde(default)]
    pub layout: LayoutConfig,
    #[serde(default)]
    pub persist: PersistConfig,
    #[serde(default)]
    pub status: StatusConfig,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub raw: Option<String>, // original file string (optional)
    pub file: ConfigFile,    // parsed (or default) data
    pub effective_picker_width: u16,
}

impl Default for Config {
    fn default() -> Self {
        Self::from_file(None, ConfigFile::default())
    }
}

/// Config path: `./sidepad.toml` if present, else the platform config dir.
pub fn discover() -> PathBuf {
    let local = PathBuf::from(CONFIG_FILE_NAME);
    if local.exists() {
        return local;
    }
    if let Some(dir) = dirs::config_dir() {
        return dir.join("sidepad").join(CONFIG_FILE_NAME);
    }
    local
}

pub fn load_from(path: Option<PathBuf>) -> Result<Config> {
    let path = path.unwrap_or_else(discover);
    let Ok(content) = fs::read_to_string(&path) else {
        return Ok(Config::default());
    };
    match toml::from_str::<ConfigFile>(&content) {
        Ok(file) => {
            info!(target: "config", path = %path.display(), "config_loaded");
            Ok(Config::from_file(Some(content), file))
        }
        Err(e) => {
            warn!(target: "config", path = %path.display(), error = %e, "config_parse_failed_using_defaults");
            Ok(Config::default())
        }
    }
}

impl Config {
    fn from_file(raw: Option<String>, file: ConfigFile) -> Self {
        let effective_picker_width = file.layout.picker_width;
        Self {
            raw,
            file,
            effective_picker_width,
        }
    }

    /// Bytes per write during persistence (never zero).
    pub fn chunk_size(&self) -> usize {
        self.file.persist.chunk_size.max(1)
    }

    pub fn status_separator(&self) -> &str {
        &self.file.status.separator
    }

    /// Clamp the picker width to at most half of the terminal width. Returns the
    /// effective value.
    pub fn apply_context(&mut self, columns: u16) -> u16 {
        let raw = self.file.layout.picker_width;
        let max = columns / 2;
        let clamped = raw.min(max);
        if clamped != raw {
            info!(
                target: "config",
                raw,
                clamped,
                max,
                columns,
                "picker_width_clamped"
            );
        }
        self.effective_picker_width = clamped;
        clamped
    }

    /// Re-apply after a resize. Returns `Some(new_width)` when the effective value changed.
    pub fn recompute_after_resize(&mut self, columns: u16) -> Option<u16> {
        let prev = self.effective_picker_width;
        let current = self.apply_context(columns);
        if current != prev { Some(current) } else { None }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::path::PathBuf;
    use std::sync::{Arc, Mutex, MutexGuard};
    use tracing::Level;
    use tracing::subscriber::with_default;
    use tracing_subscriber::fmt::MakeWriter;

    #[derive(Clone)]
    struct BufferWriter {
        inner: Arc<Mutex<Vec<u8>>>,
    }

    impl BufferWriter {
        fn new() -> (Self, Arc<Mutex<Vec<u8>>>) {
            let buf = Arc::new(Mutex::new(Vec::new()));
            (Self { inner: buf.clone() }, buf)
        }
    }

    struct LockedWriter<'a> {
        guard: MutexGuard<'a, Vec<u8>>,
    }

    impl Write for LockedWriter<'_> {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.guard.extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    impl<'a> MakeWriter<'a> for BufferWriter {
        type Writer = LockedWriter<'a>;

        fn make_writer(&'a self) -> Self::Writer {
            LockedWriter {
                guard: self.inner.lock().expect("log buffer poisoned"),
            }
        }
    }

    #[test]
    fn default_config_when_missing_file() {
        let cfg = load_from(Some(PathBuf::from("__nonexistent_hopefully__.toml"))).unwrap();
        assert_eq!(cfg.file.layout.picker_width, 27);
        assert_eq!(cfg.chunk_size(), 4096);
        assert_eq!(cfg.status_separator().chars().count(), 33);
        assert!(cfg.raw.is_none());
    }

    #[test]
    fn parses_all_sections() {
        let tmp = tempfile::NamedTempFile::new().unwrap();
        std::fs::write(
            tmp.path(),
            "[layout]\npicker_width = 20\n[persist]\nchunk_size = 5\n[status]\nseparator = \" | \"\n",
        )
        .unwrap();
        let cfg = load_from(Some(tmp.path().to_path_buf())).unwrap();
        assert_eq!(cfg.file.layout.picker_width, 20);
        assert_eq!(cfg.effective_picker_width, 20);
        assert_eq!(cfg.chunk_size(), 5);
        assert_eq!(cfg.status_separator(), " | ");
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let tmp = tempfile::NamedTempFile::new().unwrap();
        std::fs::write(tmp.path(), "[persist]\nchunk_size = 64\n").unwrap();
        let cfg = load_from(Some(tmp.path().to_path_buf())).unwrap();
        assert_eq!(cfg.chunk_size(), 64);
        assert_eq!(cfg.file.layout.picker_width, 27);
    }

    #[test]
    fn parse_error_falls_back_to_defaults() {
        let tmp = tempfile::NamedTempFile::new().unwrap();
        std::fs::write(tmp.path(), "[layout\npicker_width = ").unwrap();
        let cfg = load_from(Some(tmp.path().to_path_buf())).unwrap();
        assert_eq!(cfg.file, ConfigFile::default());
    }

    #[test]
    fn zero_chunk_size_reads_as_one() {
        let tmp = tempfile::NamedTempFile::new().unwrap();
        std::fs::write(tmp.path(), "[persist]\nchunk_size = 0\n").unwrap();
        let cfg = load_from(Some(tmp.path().to_path_buf())).unwrap();
        assert_eq!(cfg.chunk_size(), 1);
    }

    #[test]
    fn picker_width_clamped_to_half_terminal() {
        let mut cfg = Config::default();
        assert_eq!(cfg.apply_context(40), 20);
        assert_eq!(cfg.recompute_after_resize(100), Some(27));
        assert_eq!(cfg.recompute_after_resize(120), None);
    }

    #[test]
    fn clamp_logging_uses_config_target() {
        let mut cfg = Config::default();
        let (writer, buffer) = BufferWriter::new();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(Level::INFO)
            .with_target(true)
            .with_ansi(false)
            .without_time()
            .with_writer(writer)
            .finish();

        with_default(subscriber, || {
            cfg.apply_context(30);
        });

        let log_output = String::from_utf8(buffer.lock().unwrap().clone()).unwrap();
        assert!(log_output.contains("INFO config:"));
        assert!(log_output.contains("picker_width_clamped"));
        assert_eq!(cfg.effective_picker_width, 15);
    }
}
