//! Acquisition and reclamation of named PID locks.
//!
//! # State machine (per name)
//! ```text
//! Unlocked --acquire--> Locked --release--> Unlocked
//! Locked(dead owner) --acquire: reclaim + claim--> Locked(caller)
//! ```
//! `AlreadyRunning` and every fatal error leave the record untouched.

use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::{debug, info, warn};

use super::handle::LockHandle;
use super::removal::{Removal, remove_if_owned};
use super::sweep::{SweepReport, sweep_stale};
use crate::config::{LockConfig, WriteMode};
use crate::domain::{LockName, LockRecord, LockStatus};
use crate::error::{LockError, LockResult};
use crate::ports::{FileStore, PlatformProbe, ProcessOracle};

/// Guards single-instance execution through one record file per lock name.
///
/// Check-then-act across processes: with `WriteMode::Overwrite`, two
/// processes racing on a free name can both succeed. `WriteMode::CreateNew`
/// makes the final claim exclusive. Stale records are only removed after
/// they are moved aside and confirmed to still name the dead owner, so a
/// reclaimer that lost the race cannot delete the winner's fresh record.
pub struct LockManager {
    store: Arc<dyn FileStore>,
    oracle: Arc<dyn ProcessOracle>,
    platform: Arc<dyn PlatformProbe>,
    config: LockConfig,
}

impl LockManager {
    pub fn new(
        store: Arc<dyn FileStore>,
        oracle: Arc<dyn ProcessOracle>,
        platform: Arc<dyn PlatformProbe>,
        config: LockConfig,
    ) -> Self {
        Self {
            store,
            oracle,
            platform,
            config,
        }
    }

    pub const fn config(&self) -> &LockConfig {
        &self.config
    }

    /// Record path for `name` inside the configured lock directory.
    pub fn path_for(&self, name: &str) -> LockResult<PathBuf> {
        Ok(LockName::parse(name)?.record_path(&self.config.lock_dir))
    }

    /// Register the calling process as the single owner of `name`.
    ///
    /// Fails with `AlreadyRunning` when a live process holds the record.
    /// A record whose owner is dead is removed and replaced.
    pub fn acquire(&self, name: &str) -> LockResult<LockHandle> {
        self.ensure_supported()?;

        let name = LockName::parse(name)?;
        let path = name.record_path(&self.config.lock_dir);
        let pid = self.oracle.current_pid();
        debug!(lock = %name, pid, path = %path.display(), "Acquiring lock");

        if let Some(content) = self.read_existing(&path)? {
            let record = parse_record(&path, &content)?;
            if self.is_alive(record.owner_pid)? {
                debug!(lock = %name, pid = record.owner_pid, "Lock held by live process");
                return Err(LockError::AlreadyRunning {
                    pid: record.owner_pid,
                });
            }
            self.remove_stale(&path, record.owner_pid, pid)?;
        }

        self.claim(&path, pid)?;
        info!(lock = %name, pid, path = %path.display(), "Acquired lock");

        Ok(LockHandle::new(
            name,
            pid,
            path,
            self.config.file_mode,
            Arc::clone(&self.store),
        ))
    }

    /// Report the state of `name` without changing anything.
    pub fn inspect(&self, name: &str) -> LockResult<LockStatus> {
        self.ensure_supported()?;

        let path = self.path_for(name)?;
        let Some(content) = self.read_existing(&path)? else {
            return Ok(LockStatus::Unlocked);
        };
        let Some(record) = LockRecord::parse(&content) else {
            return Ok(LockStatus::Corrupt {
                content: String::from_utf8_lossy(&content).into_owned(),
            });
        };

        let pid = record.owner_pid;
        if self.is_alive(pid)? {
            Ok(LockStatus::Held { pid })
        } else {
            Ok(LockStatus::Stale { pid })
        }
    }

    /// Remove every stale record in the lock directory.
    pub fn sweep(&self) -> LockResult<SweepReport> {
        self.ensure_supported()?;
        sweep_stale(
            self.store.as_ref(),
            self.oracle.as_ref(),
            &self.config.lock_dir,
            self.config.file_mode,
        )
    }

    fn ensure_supported(&self) -> LockResult<()> {
        let platform = self.platform.platform();
        if platform.is_supported() {
            Ok(())
        } else {
            Err(LockError::UnsupportedPlatform {
                platform: platform.name().to_string(),
            })
        }
    }

    /// Raw record content, or `None` when no record exists.
    fn read_existing(&self, path: &Path) -> LockResult<Option<Vec<u8>>> {
        let exists = self.store.exists(path).map_err(|source| LockError::Inspect {
            path: path.to_path_buf(),
            source,
        })?;
        if !exists {
            return Ok(None);
        }

        match self.store.read(path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "Lock record vanished before read");
                Ok(None)
            }
            Err(source) => Err(LockError::Inspect {
                path: path.to_path_buf(),
                source,
            }),
        }
    }

    fn is_alive(&self, pid: u32) -> LockResult<bool> {
        self.oracle
            .exists(pid)
            .map_err(|source| LockError::Oracle { pid, source })
    }

    fn remove_stale(&self, path: &Path, stale_pid: u32, claimant: u32) -> LockResult<()> {
        info!(pid = stale_pid, path = %path.display(), "Removing stale lock record");
        let removal = remove_if_owned(
            self.store.as_ref(),
            path,
            stale_pid,
            claimant,
            self.config.file_mode,
        )
        .map_err(|source| LockError::StaleCleanup {
            path: path.to_path_buf(),
            source,
        })?;

        match removal {
            Removal::Removed => Ok(()),
            Removal::Missing => {
                debug!(path = %path.display(), "Stale lock record already removed");
                Ok(())
            }
            Removal::Replaced(content) => {
                let record = parse_record(path, &content)?;
                if self.is_alive(record.owner_pid)? {
                    return Err(LockError::AlreadyRunning {
                        pid: record.owner_pid,
                    });
                }
                Err(LockError::StaleCleanup {
                    path: path.to_path_buf(),
                    source: io::Error::other(format!(
                        "record changed to pid {} while reclaiming",
                        record.owner_pid
                    )),
                })
            }
        }
    }

    fn claim(&self, path: &Path, pid: u32) -> LockResult<()> {
        let contents = LockRecord::new(pid).encode();
        let mode = self.config.file_mode;

        let result = match self.config.write_mode {
            WriteMode::Overwrite => self.store.write(path, &contents, mode),
            WriteMode::CreateNew => self.store.create_new(path, &contents, mode),
        };

        match result {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::AlreadyExists => self.lost_race(path, e),
            Err(source) => Err(LockError::Write {
                path: path.to_path_buf(),
                source,
            }),
        }
    }

    /// Another process created the record between our check and our write.
    fn lost_race(&self, path: &Path, collision: io::Error) -> LockResult<()> {
        warn!(path = %path.display(), "Lock record appeared while claiming");
        match self.read_existing(path)? {
            Some(content) => {
                let record = parse_record(path, &content)?;
                Err(LockError::AlreadyRunning {
                    pid: record.owner_pid,
                })
            }
            None => Err(LockError::Write {
                path: path.to_path_buf(),
                source: collision,
            }),
        }
    }
}

fn parse_record(path: &Path, content: &[u8]) -> LockResult<LockRecord> {
    LockRecord::parse(content).ok_or_else(|| LockError::CorruptRecord {
        path: path.to_path_buf(),
        content: String::from_utf8_lossy(content).into_owned(),
    })
}
