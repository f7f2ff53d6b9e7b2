//! File IO helpers used by the dispatcher and the binary.
//!
//! Synchronous and blocking. `load_buffer` reads a whole file into a fresh
//! `TextBuffer`; `persist` streams a buffer back out over an existing file.

use core_text::TextBuffer;
use std::fs::OpenOptions;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("cannot read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

#[derive(Debug, Error)]
pub enum PersistError {
    /// The target could not be opened for writing (missing, directory, permissions).
    #[error("cannot open {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("write error: {0}")]
    Write(#[source] io::Error),
    #[error("buffer read error: {0}")]
    Read(#[source] io::Error),
}

/// Read `path` into a new buffer named after the file. Invalid UTF-8 is replaced lossily.
pub fn load_buffer(path: &Path) -> Result<TextBuffer, LoadError> {
    let bytes = std::fs::read(path).map_err(|source| {
        tracing::error!(target: "io", path = %path.display(), error = %source, "file_open_error");
        LoadError::Read {
            path: path.to_path_buf(),
            source,
        }
    })?;
    let name = path
        .file_name()
        .and_then(|s| s.to_str())
        .unwrap_or("file");
    let mut buffer = TextBuffer::new(name, "");
    buffer.append_text(&bytes);
    tracing::debug!(target: "io", path = %path.display(), bytes = bytes.len(), "file_loaded");
    Ok(buffer)
}

/// Write the full content of `buffer` over the existing file at `path`.
///
/// The file is never created. Content is copied in `chunk_size` pieces, each
/// written before the next is read, starting from offset 0; the file is then
/// truncated to the written length. Returns the number of bytes written. The
/// handle is dropped on every return path.
pub fn persist(buffer: &TextBuffer, path: &Path, chunk_size: usize) -> Result<u64, PersistError> {
    let mut file = OpenOptions::new()
        .write(true)
        .open(path)
        .map_err(|source| PersistError::Open {
            path: path.to_path_buf(),
            source,
        })?;
    let mut reader = buffer.reader();
    reader.rewind();
    let mut chunk = vec![0u8; chunk_size.max(1)];
    let mut written: u64 = 0;
    loop {
        let n = match reader.read(&mut chunk) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(PersistError::Read(e)),
        };
        file.write_all(&chunk[..n]).map_err(PersistError::Write)?;
        written += n as u64;
    }
    file.set_len(written).map_err(PersistError::Write)?;
    file.flush().map_err(PersistError::Write)?;
    tracing::debug!(target: "io", path = %path.display(), bytes = written, chunk_size, "persist_complete");
    Ok(written)
}
