//! OS adapters for pidguard and the default composition of a `LockManager`.
//!
//! ```no_run
//! # fn main() -> Result<(), pidguard_core::LockError> {
//! let mut handle = pidguard_runtime::acquire("worker")?;
//! // ... run the single instance ...
//! handle.release();
//! # Ok(())
//! # }
//! ```

#![deny(unsafe_code)]

pub mod pidfile;
mod platform;

use std::sync::Arc;

use pidguard_core::{LockConfig, LockHandle, LockManager, LockResult};

pub use pidfile::{NixProcessOracle, StdFileStore, pid_exists};
pub use platform::HostPlatform;

/// Lock manager wired to the real filesystem and process table.
pub fn default_lock_manager(config: LockConfig) -> LockManager {
    LockManager::new(
        Arc::new(StdFileStore),
        Arc::new(NixProcessOracle),
        Arc::new(HostPlatform),
        config,
    )
}

/// Acquire `name` in the lock directory resolved from the environment.
pub fn acquire(name: &str) -> LockResult<LockHandle> {
    default_lock_manager(LockConfig::from_env()).acquire(name)
}
