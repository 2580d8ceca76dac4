//! CLI-specific error types and mappings.

use pidguard_core::LockError;
use thiserror::Error;

/// CLI-specific error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// A live process holds the requested lock.
    #[error("Already running with pid {pid}")]
    AlreadyRunning { pid: u32 },

    /// Any other lock failure.
    #[error(transparent)]
    Lock(LockError),

    /// Argument parsing error.
    #[error("Invalid arguments: {0}")]
    Arguments(String),

    /// The guarded command could not be started.
    #[error("Process error: {0}")]
    Process(String),

    /// Output could not be rendered.
    #[error("Output error: {0}")]
    Output(String),
}

impl CliError {
    /// Map error to an exit code (see sysexits.h).
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::AlreadyRunning { .. } => 75, // EX_TEMPFAIL
            Self::Arguments(_) => 2,
            Self::Process(_) => 71, // EX_OSERR
            Self::Output(_) => 74,  // EX_IOERR
            Self::Lock(err) => match err {
                LockError::InvalidName { .. } => 2,
                LockError::UnsupportedPlatform { .. } => 69, // EX_UNAVAILABLE
                LockError::CorruptRecord { .. } => 65,       // EX_DATAERR
                LockError::Oracle { .. } => 71,              // EX_OSERR
                LockError::AlreadyRunning { .. } => 75,
                LockError::Inspect { .. }
                | LockError::StaleCleanup { .. }
                | LockError::Write { .. }
                | LockError::Sweep { .. } => 74,
            },
        }
    }
}

impl From<LockError> for CliError {
    fn from(err: LockError) -> Self {
        match err {
            LockError::AlreadyRunning { pid } => Self::AlreadyRunning { pid },
            other => Self::Lock(other),
        }
    }
}

impl From<serde_json::Error> for CliError {
    fn from(err: serde_json::Error) -> Self {
        Self::Output(err.to_string())
    }
}
