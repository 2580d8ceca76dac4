//! Error taxonomy for lock acquisition.
//!
//! Every variant except `AlreadyRunning` means the attempt hit an
//! inconsistency it cannot resolve on its own. None of them are retried
//! internally; the caller decides whether to try again or exit.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors returned by `LockManager` operations.
#[derive(Debug, Error)]
pub enum LockError {
    /// The host cannot verify pid liveness with the file convention.
    #[error("Platform {platform} is not supported for PID locks")]
    UnsupportedPlatform { platform: String },

    /// The lock name would not map to a file inside the lock directory.
    #[error("Invalid lock name {name:?}: {reason}")]
    InvalidName { name: String, reason: &'static str },

    /// Checking for or reading an existing record failed.
    #[error("Failed to inspect lock record {path}: {source}")]
    Inspect {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The existing record does not contain a pid.
    #[error("Value in {path} is not a pid: {content:?}")]
    CorruptRecord { path: PathBuf, content: String },

    /// The process-existence query itself failed.
    #[error("Failed to check whether pid {pid} exists: {source}")]
    Oracle {
        pid: u32,
        #[source]
        source: io::Error,
    },

    /// A live process already owns the lock.
    #[error("Already running with pid {pid}")]
    AlreadyRunning { pid: u32 },

    /// A confirmed-stale record could not be removed.
    #[error("Failed to remove stale lock record {path}: {source}")]
    StaleCleanup {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The new record could not be written.
    #[error("Failed to write lock record {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The lock directory could not be listed.
    #[error("Failed to list lock directory {dir}: {source}")]
    Sweep {
        dir: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl LockError {
    /// True for the expected "another instance is running" outcome.
    pub const fn is_already_running(&self) -> bool {
        matches!(self, Self::AlreadyRunning { .. })
    }

    /// Pid of the process known to hold the lock, if any.
    pub const fn running_pid(&self) -> Option<u32> {
        match self {
            Self::AlreadyRunning { pid } => Some(*pid),
            _ => None,
        }
    }
}

/// Result alias for lock operations.
pub type LockResult<T> = Result<T, LockError>;
