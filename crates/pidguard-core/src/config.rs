//! Lock manager configuration.

use std::path::PathBuf;

use crate::paths::resolve_lock_dir;

/// Permissions for newly written records (`rw-r--r--`).
pub const DEFAULT_FILE_MODE: u32 = 0o644;

/// How the final record write claims the path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WriteMode {
    /// Exclusive create. A record appearing between the stale check and the
    /// write means another process won the race; the attempt reports
    /// `AlreadyRunning` with the winner's pid. Stale records are moved aside
    /// and checked before deletion, so a slower reclaimer never deletes a
    /// record a faster one has just written.
    #[default]
    CreateNew,
    /// Plain atomic replace after the liveness check. Two processes racing on
    /// the same name can both succeed.
    Overwrite,
}

/// Configuration for a `LockManager`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LockConfig {
    /// Directory holding `<name>.pid` records.
    pub lock_dir: PathBuf,
    /// Unix permission bits for new records.
    pub file_mode: u32,
    /// Write strategy for claiming a record.
    pub write_mode: WriteMode,
}

impl LockConfig {
    /// Configuration rooted at an explicit directory.
    pub fn new(lock_dir: impl Into<PathBuf>) -> Self {
        Self {
            lock_dir: lock_dir.into(),
            file_mode: DEFAULT_FILE_MODE,
            write_mode: WriteMode::default(),
        }
    }

    /// Configuration rooted at the directory from `resolve_lock_dir`.
    pub fn from_env() -> Self {
        Self::new(resolve_lock_dir())
    }

    #[must_use]
    pub const fn with_file_mode(mut self, mode: u32) -> Self {
        self.file_mode = mode;
        self
    }

    #[must_use]
    pub const fn with_write_mode(mut self, write_mode: WriteMode) -> Self {
        self.write_mode = write_mode;
        self
    }
}

impl Default for LockConfig {
    fn default() -> Self {
        Self::from_env()
    }
}
