//! Process-table probe for lock owners.

use std::io;

use pidguard_core::ProcessOracle;

/// `ProcessOracle` that asks the kernel with a null signal.
#[derive(Debug, Clone, Copy, Default)]
pub struct NixProcessOracle;

impl ProcessOracle for NixProcessOracle {
    fn exists(&self, pid: u32) -> io::Result<bool> {
        pid_exists(pid)
    }

    fn current_pid(&self) -> u32 {
        std::process::id()
    }
}

/// Check if a PID exists (without verifying what it runs).
///
/// Uses `kill` with the null signal, which performs the permission and
/// existence checks without delivering anything.
/// - `ESRCH`: no such process
/// - `EPERM`: the process exists but belongs to another user
#[cfg(unix)]
pub fn pid_exists(pid: u32) -> io::Result<bool> {
    use nix::errno::Errno;
    use nix::sys::signal;
    use nix::unistd::Pid;

    // 0 and negative values address process groups, not a single process
    let Ok(raw) = i32::try_from(pid) else {
        return Ok(false);
    };
    if raw == 0 {
        return Ok(false);
    }

    match signal::kill(Pid::from_raw(raw), None) {
        Ok(()) => Ok(true),
        Err(Errno::ESRCH) => Ok(false),
        Err(Errno::EPERM) => Ok(true),
        Err(e) => Err(io::Error::from(e)),
    }
}

#[cfg(not(unix))]
pub fn pid_exists(_pid: u32) -> io::Result<bool> {
    Err(io::Error::new(
        io::ErrorKind::Unsupported,
        "process liveness checks are not implemented on this platform",
    ))
}
