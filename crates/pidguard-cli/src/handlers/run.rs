//! `pidguard run NAME -- CMD...`

use std::process::{Command, ExitStatus};

use pidguard_core::LockManager;
use tracing::{debug, info};

use crate::error::CliError;

/// Hold `name` for the lifetime of `command`.
///
/// The lock is released whether or not the command could be started. The
/// command's own exit code becomes ours.
pub fn execute(manager: &LockManager, name: &str, command: &[String]) -> Result<u8, CliError> {
    let (program, args) = command
        .split_first()
        .ok_or_else(|| CliError::Arguments("missing command to run".to_string()))?;

    let mut handle = manager.acquire(name)?;
    debug!(lock = name, program = %program, "Starting guarded command");

    let status = Command::new(program).args(args).status();
    handle.release();

    let status = status.map_err(|e| CliError::Process(format!("failed to run {program}: {e}")))?;
    info!(lock = name, %status, "Guarded command exited");

    Ok(exit_code(status))
}

/// Exit code for a finished child, using the shell's `128 + signal`
/// convention for signal deaths.
fn exit_code(status: ExitStatus) -> u8 {
    if let Some(code) = status.code() {
        return u8::try_from(code & 0xff).unwrap_or(1);
    }

    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return u8::try_from(128 + signal).unwrap_or(1);
        }
    }

    1
}
