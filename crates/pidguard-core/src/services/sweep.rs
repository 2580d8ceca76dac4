//! Bulk removal of stale lock records, e.g. at host startup after a crash.

use std::io;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{debug, info, warn};

use super::removal::{Removal, remove_if_owned};
use crate::domain::LockRecord;
use crate::error::{LockError, LockResult};
use crate::ports::{FileStore, ProcessOracle};

/// Outcome of a sweep over the lock directory.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SweepReport {
    /// Records deleted because their owner was dead.
    pub removed: Vec<PathBuf>,
    /// Records left in place because their owner is alive, including records
    /// another process claimed while the sweep was running.
    pub live: usize,
    /// Records left in place because they do not contain a pid.
    pub corrupt: usize,
    /// Records that could not be read, probed or deleted.
    pub failed: usize,
}

/// Delete every record in `dir` whose owner no longer exists.
///
/// # Strategy
/// 1. List `*.pid` files in the lock directory
/// 2. For each record:
///    - Unparsable content is counted and kept for an operator to look at
///    - A live owner is left alone
///    - A dead owner's record is moved aside, confirmed unchanged, then
///      deleted; a record claimed in the meantime is restored
/// 3. Per-record failures are logged and counted; only a failure to list the
///    directory aborts the sweep
pub(super) fn sweep_stale(
    store: &dyn FileStore,
    oracle: &dyn ProcessOracle,
    dir: &Path,
    mode: u32,
) -> LockResult<SweepReport> {
    let claimant = oracle.current_pid();
    let records = store.list(dir).map_err(|source| LockError::Sweep {
        dir: dir.to_path_buf(),
        source,
    })?;

    let mut report = SweepReport::default();
    if records.is_empty() {
        debug!(dir = %dir.display(), "No lock records found");
        return Ok(report);
    }

    for path in records {
        let content = match store.read(&path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => continue,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "Failed to read lock record");
                report.failed += 1;
                continue;
            }
        };

        let Some(record) = LockRecord::parse(&content) else {
            warn!(path = %path.display(), "Skipping corrupt lock record");
            report.corrupt += 1;
            continue;
        };

        match oracle.exists(record.owner_pid) {
            Ok(true) => {
                debug!(path = %path.display(), pid = record.owner_pid, "Lock owner alive");
                report.live += 1;
            }
            Ok(false) => match remove_if_owned(store, &path, record.owner_pid, claimant, mode) {
                Ok(Removal::Removed | Removal::Missing) => report.removed.push(path),
                Ok(Removal::Replaced(_)) => {
                    debug!(path = %path.display(), "Lock record reclaimed during sweep");
                    report.live += 1;
                }
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "Failed to remove stale lock record");
                    report.failed += 1;
                }
            },
            Err(e) => {
                warn!(
                    path = %path.display(),
                    pid = record.owner_pid,
                    error = %e,
                    "Failed to check lock owner"
                );
                report.failed += 1;
            }
        }
    }

    if !report.removed.is_empty() {
        info!(
            "Sweep complete: {} stale records removed, {} live, {} corrupt",
            report.removed.len(),
            report.live,
            report.corrupt
        );
    }

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::{MockFileStore, MockProcessOracle};

    const SWEEPER: u32 = 9;

    fn listing() -> Vec<PathBuf> {
        ["alive", "dead", "junk", "locked-out"]
            .iter()
            .map(|name| PathBuf::from(format!("/locks/{name}.pid")))
            .collect()
    }

    fn stem(path: &Path) -> &str {
        path.file_stem().and_then(|s| s.to_str()).unwrap_or_default()
    }

    fn oracle(alive: fn(u32) -> io::Result<bool>) -> MockProcessOracle {
        let mut oracle = MockProcessOracle::new();
        oracle.expect_current_pid().return_const(SWEEPER);
        oracle.expect_exists().returning(alive);
        oracle
    }

    #[test]
    fn removes_only_dead_owners() {
        let mut store = MockFileStore::new();
        store.expect_list().returning(|_| Ok(listing()));
        store.expect_read().returning(|path| match stem(path) {
            "alive" => Ok(b"10".to_vec()),
            "dead" | "dead.pid.9" => Ok(b"20".to_vec()),
            "junk" => Ok(b"??".to_vec()),
            _ => Err(io::Error::from(io::ErrorKind::PermissionDenied)),
        });
        store
            .expect_rename()
            .withf(|from, to| {
                from == Path::new("/locks/dead.pid") && to == Path::new("/locks/dead.pid.9.stale")
            })
            .times(1)
            .returning(|_, _| Ok(()));
        store
            .expect_delete()
            .withf(|path| path == Path::new("/locks/dead.pid.9.stale"))
            .times(1)
            .returning(|_| Ok(()));
        store.expect_create_new().never();

        let oracle = oracle(|pid| Ok(pid == 10));

        let report = sweep_stale(&store, &oracle, Path::new("/locks"), 0o644).unwrap();
        assert_eq!(report.removed, vec![PathBuf::from("/locks/dead.pid")]);
        assert_eq!(report.live, 1);
        assert_eq!(report.corrupt, 1);
        assert_eq!(report.failed, 1);
    }

    #[test]
    fn record_claimed_during_sweep_is_restored() {
        let mut store = MockFileStore::new();
        store
            .expect_list()
            .returning(|_| Ok(vec![PathBuf::from("/locks/worker.pid")]));
        store
            .expect_read()
            .withf(|path| path == Path::new("/locks/worker.pid"))
            .returning(|_| Ok(b"20".to_vec()));
        store.expect_rename().times(1).returning(|_, _| Ok(()));
        store
            .expect_read()
            .withf(|path| path == Path::new("/locks/worker.pid.9.stale"))
            .returning(|_| Ok(b"30".to_vec()));
        store
            .expect_create_new()
            .withf(|path, contents, _| {
                path == Path::new("/locks/worker.pid") && contents == b"30".as_slice()
            })
            .times(1)
            .returning(|_, _, _| Ok(()));
        store.expect_delete().times(1).returning(|_| Ok(()));

        let oracle = oracle(|_| Ok(false));

        let report = sweep_stale(&store, &oracle, Path::new("/locks"), 0o644).unwrap();
        assert!(report.removed.is_empty());
        assert_eq!(report.live, 1);
    }

    #[test]
    fn oracle_and_removal_failures_are_counted() {
        let mut store = MockFileStore::new();
        store.expect_list().returning(|_| {
            Ok(vec![
                PathBuf::from("/locks/a.pid"),
                PathBuf::from("/locks/b.pid"),
            ])
        });
        store.expect_read().returning(|path| match stem(path) {
            "a" => Ok(b"1".to_vec()),
            _ => Ok(b"2".to_vec()),
        });
        store
            .expect_rename()
            .returning(|_, _| Err(io::Error::from(io::ErrorKind::PermissionDenied)));
        store.expect_delete().never();

        let oracle = oracle(|pid| {
            if pid == 1 {
                Err(io::Error::other("probe failed"))
            } else {
                Ok(false)
            }
        });

        let report = sweep_stale(&store, &oracle, Path::new("/locks"), 0o644).unwrap();
        assert!(report.removed.is_empty());
        assert_eq!(report.failed, 2);
    }

    #[test]
    fn listing_failure_aborts() {
        let mut store = MockFileStore::new();
        store
            .expect_list()
            .returning(|_| Err(io::Error::from(io::ErrorKind::PermissionDenied)));

        let oracle = oracle(|_| Ok(false));
        let err = sweep_stale(&store, &oracle, Path::new("/locks"), 0o644).unwrap_err();
        assert!(matches!(err, LockError::Sweep { .. }));
    }

    #[test]
    fn empty_directory_is_a_noop() {
        let mut store = MockFileStore::new();
        store.expect_list().returning(|_| Ok(Vec::new()));

        let oracle = oracle(|_| Ok(false));
        let report = sweep_stale(&store, &oracle, Path::new("/locks"), 0o644).unwrap();
        assert_eq!(report, SweepReport::default());
    }
}
