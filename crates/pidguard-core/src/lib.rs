//! Core domain for pidguard: single-instance process guarding via PID files.
//!
//! This crate holds the lock state machine and the ports it is composed
//! from. It performs no filesystem or process-table calls itself; adapters
//! live in `pidguard-runtime`.

#![deny(unused_crate_dependencies)]

pub mod config;
pub mod domain;
pub mod error;
pub mod paths;
pub mod ports;
pub mod services;

pub use config::{DEFAULT_FILE_MODE, LockConfig, WriteMode};
pub use domain::{LOCK_FILE_EXTENSION, LockName, LockRecord, LockStatus};
pub use error::{LockError, LockResult};
pub use paths::{LOCK_DIR_ENV, resolve_lock_dir};
pub use ports::{FileStore, Platform, PlatformProbe, ProcessOracle};
pub use services::{LockHandle, LockManager, SweepReport};

#[cfg(test)]
use serde_json as _;
