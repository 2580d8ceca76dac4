//! Lock directory resolution.
//!
//! The directory is configuration, not a constant: callers and tests pass
//! their own through `LockConfig::new`, and `resolve_lock_dir` provides the
//! process-wide default.

mod lock_dir;

#[cfg(test)]
mod test_utils;

pub use lock_dir::{LOCK_DIR_ENV, resolve_lock_dir};
