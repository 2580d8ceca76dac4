//! Scoped ownership of an acquired lock.

use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::{debug, warn};

use super::removal::{Removal, remove_if_owned};
use crate::domain::LockName;
use crate::ports::FileStore;

/// Token for a successfully acquired lock.
///
/// The record is deleted by `release`, or on drop if `release` was never
/// called. Release never fails from the caller's point of view: a process
/// that is shutting down must not crash because cleanup did. A record that
/// no longer names this handle's pid is left in place.
pub struct LockHandle {
    name: LockName,
    pid: u32,
    path: PathBuf,
    mode: u32,
    store: Arc<dyn FileStore>,
    released: bool,
}

impl LockHandle {
    pub(crate) fn new(
        name: LockName,
        pid: u32,
        path: PathBuf,
        mode: u32,
        store: Arc<dyn FileStore>,
    ) -> Self {
        Self {
            name,
            pid,
            path,
            mode,
            store,
            released: false,
        }
    }

    /// Lock name this handle was acquired for.
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Pid written into the record.
    pub const fn pid(&self) -> u32 {
        self.pid
    }

    /// Location of the record.
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub const fn is_released(&self) -> bool {
        self.released
    }

    /// Delete the record. Only the first call touches the store.
    pub fn release(&mut self) {
        if self.released {
            debug!(lock = %self.name, "Lock already released");
            return;
        }
        self.released = true;

        match remove_if_owned(
            self.store.as_ref(),
            &self.path,
            self.pid,
            self.pid,
            self.mode,
        ) {
            Ok(Removal::Removed) => {
                debug!(lock = %self.name, path = %self.path.display(), "Released lock");
            }
            Ok(Removal::Missing) => warn!(
                lock = %self.name,
                path = %self.path.display(),
                "Lock record already gone at release"
            ),
            Ok(Removal::Replaced(_)) => warn!(
                lock = %self.name,
                path = %self.path.display(),
                "Lock record now belongs to another process, leaving it in place"
            ),
            Err(e) => warn!(
                lock = %self.name,
                path = %self.path.display(),
                error = %e,
                "Failed to remove lock record"
            ),
        }
    }
}

impl Drop for LockHandle {
    fn drop(&mut self) {
        self.release();
    }
}

impl fmt::Debug for LockHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LockHandle")
            .field("name", &self.name)
            .field("pid", &self.pid)
            .field("path", &self.path)
            .field("released", &self.released)
            .finish_non_exhaustive()
    }
}
