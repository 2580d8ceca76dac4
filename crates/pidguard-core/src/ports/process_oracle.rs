//! Process-existence oracle port.

use std::io;

/// Answers "is process P alive?" for the local process table.
#[cfg_attr(test, mockall::automock)]
pub trait ProcessOracle: Send + Sync {
    /// Whether a process with `pid` currently exists.
    ///
    /// An `Err` means the answer is unknown, not that the process is gone.
    fn exists(&self, pid: u32) -> io::Result<bool>;

    /// Pid of the calling process.
    fn current_pid(&self) -> u32;
}
