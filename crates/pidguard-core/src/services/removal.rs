//! Owner-checked removal of lock records.
//!
//! A plain read-then-delete can remove a record that another process wrote
//! after the read. Instead the record is first renamed to a tombstone only
//! this process uses, then checked. The rename is atomic, so whatever the
//! tombstone holds is exactly what was taken off the record path.

use std::io;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::domain::LockRecord;
use crate::ports::FileStore;

/// Result of an owner-checked removal.
#[derive(Debug, PartialEq, Eq)]
pub(super) enum Removal {
    /// The record held the expected owner and is gone.
    Removed,
    /// No record was there.
    Missing,
    /// The record had been replaced; it was put back untouched.
    Replaced(Vec<u8>),
}

/// `<file>.<claimant>.stale` next to the record.
pub(super) fn tombstone_path(path: &Path, claimant: u32) -> PathBuf {
    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    path.with_file_name(format!("{file_name}.{claimant}.stale"))
}

/// Remove `path` only if it still names `expected_owner`.
///
/// `claimant` is the pid of the calling process and keeps tombstones of
/// concurrent callers apart. A replaced record is restored with an exclusive
/// create, so a record written in the meantime by a third process wins.
pub(super) fn remove_if_owned(
    store: &dyn FileStore,
    path: &Path,
    expected_owner: u32,
    claimant: u32,
    mode: u32,
) -> io::Result<Removal> {
    let tombstone = tombstone_path(path, claimant);
    match store.rename(path, &tombstone) {
        Ok(()) => {}
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Removal::Missing),
        Err(e) => return Err(e),
    }

    let content = store.read(&tombstone)?;
    let owner = LockRecord::parse(&content).map(|record| record.owner_pid);

    if owner == Some(expected_owner) {
        discard(store, &tombstone);
        return Ok(Removal::Removed);
    }

    debug!(path = %path.display(), ?owner, expected_owner, "Lock record changed, restoring");
    match store.create_new(path, &content, mode) {
        Ok(()) => {}
        Err(e) if e.kind() == io::ErrorKind::AlreadyExists => {
            warn!(path = %path.display(), "Lock record claimed again before restore");
        }
        Err(e) => {
            warn!(path = %path.display(), error = %e, "Failed to restore lock record");
            return Err(e);
        }
    }
    discard(store, &tombstone);

    Ok(Removal::Replaced(content))
}

fn discard(store: &dyn FileStore, tombstone: &Path) {
    if let Err(e) = store.delete(tombstone) {
        warn!(path = %tombstone.display(), error = %e, "Failed to remove lock tombstone");
    }
}
