//! Atomic PID file I/O on top of `std::fs`.

use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use pidguard_core::{FileStore, LOCK_FILE_EXTENSION};
use tracing::debug;

/// `FileStore` backed by the local filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdFileStore;

impl FileStore for StdFileStore {
    fn exists(&self, path: &Path) -> io::Result<bool> {
        path.try_exists()
    }

    fn read(&self, path: &Path) -> io::Result<Vec<u8>> {
        fs::read(path)
    }

    /// Write atomically using temp file + rename.
    fn write(&self, path: &Path, contents: &[u8], mode: u32) -> io::Result<()> {
        let temp = write_temp(path, contents, mode)?;
        fs::rename(&temp, path).inspect_err(|_| remove_temp(&temp))
    }

    /// Write the temp file, then hard-link it into place.
    ///
    /// `link(2)` refuses to replace an existing path, so the record appears
    /// complete or not at all. Filesystems without hard links report
    /// `EOPNOTSUPP` or, like vfat and exfat on Linux, `EPERM`; those fall back
    /// to an exclusive in-place create.
    fn create_new(&self, path: &Path, contents: &[u8], mode: u32) -> io::Result<()> {
        let temp = write_temp(path, contents, mode)?;
        let linked = fs::hard_link(&temp, path);
        remove_temp(&temp);

        match linked {
            Err(e) if links_unsupported(&e) => create_in_place(path, contents, mode),
            other => other,
        }
    }

    fn delete(&self, path: &Path) -> io::Result<()> {
        fs::remove_file(path)
    }

    fn rename(&self, from: &Path, to: &Path) -> io::Result<()> {
        fs::rename(from, to)
    }

    /// List `*.pid` regular files. A missing directory lists as empty.
    fn list(&self, dir: &Path) -> io::Result<Vec<PathBuf>> {
        let entries = match fs::read_dir(dir) {
            Ok(entries) => entries,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e),
        };

        let mut records = Vec::new();
        for entry in entries {
            let entry = entry?;
            let path = entry.path();

            if path.extension().and_then(|s| s.to_str()) != Some(LOCK_FILE_EXTENSION) {
                continue;
            }
            if !entry.file_type()?.is_file() {
                continue;
            }
            records.push(path);
        }
        records.sort();

        Ok(records)
    }
}

/// `<file>.<pid>.tmp` next to the target, unique per writing process.
fn temp_path(path: &Path) -> PathBuf {
    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    path.with_file_name(format!("{file_name}.{}.tmp", std::process::id()))
}

fn open_options(mode: u32) -> OpenOptions {
    let mut options = OpenOptions::new();
    options.write(true);

    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(mode);
    }
    #[cfg(not(unix))]
    let _ = mode;

    options
}

fn write_temp(path: &Path, contents: &[u8], mode: u32) -> io::Result<PathBuf> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let temp = temp_path(path);
    // A leftover from a crashed writer with our pid would keep its old mode
    remove_temp(&temp);

    let written = open_options(mode)
        .create_new(true)
        .open(&temp)
        .and_then(|mut file| {
            file.write_all(contents)?;
            file.sync_all()
        });

    match written {
        Ok(()) => Ok(temp),
        Err(e) => {
            remove_temp(&temp);
            Err(e)
        }
    }
}

fn links_unsupported(err: &io::Error) -> bool {
    matches!(
        err.kind(),
        io::ErrorKind::Unsupported | io::ErrorKind::PermissionDenied
    )
}

/// Fallback for filesystems without hard links.
fn create_in_place(path: &Path, contents: &[u8], mode: u32) -> io::Result<()> {
    debug!(path = %path.display(), "Hard links unsupported, creating record in place");
    let mut file = open_options(mode).create_new(true).open(path)?;
    file.write_all(contents)?;
    file.sync_all()
}

fn remove_temp(temp: &Path) {
    match fs::remove_file(temp) {
        Ok(()) => {}
        Err(e) if e.kind() == io::ErrorKind::NotFound => {}
        Err(e) => debug!(path = %temp.display(), error = %e, "Failed to remove temp file"),
    }
}
