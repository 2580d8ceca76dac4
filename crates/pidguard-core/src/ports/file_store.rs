//! File store port: whole-file read/write/delete by path.

use std::io;
use std::path::{Path, PathBuf};

/// Durable storage for lock records.
#[cfg_attr(test, mockall::automock)]
pub trait FileStore: Send + Sync {
    /// Whether anything exists at `path`.
    fn exists(&self, path: &Path) -> io::Result<bool>;

    /// Read the whole file.
    fn read(&self, path: &Path) -> io::Result<Vec<u8>>;

    /// Replace the file at `path` with `contents`, creating it with `mode`.
    fn write(&self, path: &Path, contents: &[u8], mode: u32) -> io::Result<()>;

    /// Create the file at `path` only if nothing is there yet.
    ///
    /// Must fail with `io::ErrorKind::AlreadyExists` when the path is taken,
    /// and must never expose a partially written file.
    fn create_new(&self, path: &Path, contents: &[u8], mode: u32) -> io::Result<()>;

    /// Remove the file at `path`.
    fn delete(&self, path: &Path) -> io::Result<()>;

    /// Atomically move `from` to `to`, replacing `to` if it exists.
    fn rename(&self, from: &Path, to: &Path) -> io::Result<()>;

    /// List lock record files directly inside `dir`.
    fn list(&self, dir: &Path) -> io::Result<Vec<PathBuf>>;
}
