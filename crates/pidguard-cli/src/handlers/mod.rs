//! Command handlers. Each takes the wired `LockManager` and returns the
//! process exit code on success.

pub mod run;
pub mod status;
pub mod sweep;
