//! Directory scan feeding the file picker.

use anyhow::{Context, Result};
use std::path::Path;

/// Names of every entry in `dir` (files and directories), sorted. Names that
/// are not valid UTF-8 are converted lossily.
pub(crate) fn scan_entries(dir: &Path) -> Result<Vec<String>> {
    let mut names = Vec::new();
    for entry in std::fs::read_dir(dir).with_context(|| format!("listing {}", dir.display()))? {
        let entry = entry.with_context(|| format!("reading entry in {}", dir.display()))?;
        names.push(entry.file_name().to_string_lossy().into_owned());
    }
    names.sort();
    tracing::debug!(target: "runtime.startup", dir = %dir.display(), entries = names.len(), "picker_scan");
    Ok(names)
}
