//! Validated lock identifiers.

use std::fmt;
use std::path::{Path, PathBuf};

use crate::error::LockError;

/// Extension used for lock record files (`<name>.pid`).
pub const LOCK_FILE_EXTENSION: &str = "pid";

/// A lock identifier that is safe to turn into a file name.
///
/// Names may not be empty, may not contain path separators or NUL, and may
/// not be `.` or `..`. This keeps every record inside the lock directory.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LockName(String);

impl LockName {
    /// Validate a raw identifier.
    pub fn parse(raw: &str) -> Result<Self, LockError> {
        let reason = if raw.is_empty() {
            Some("name cannot be empty")
        } else if raw == "." || raw == ".." {
            Some("name cannot be a relative directory reference")
        } else if raw.contains(['/', '\\']) {
            Some("name cannot contain path separators")
        } else if raw.contains('\0') {
            Some("name cannot contain NUL bytes")
        } else {
            None
        };

        match reason {
            Some(reason) => Err(LockError::InvalidName {
                name: raw.to_string(),
                reason,
            }),
            None => Ok(Self(raw.to_string())),
        }
    }

    /// The identifier as given.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// File name of the record for this lock.
    pub fn file_name(&self) -> String {
        format!("{}.{LOCK_FILE_EXTENSION}", self.0)
    }

    /// Full record path inside `lock_dir`.
    pub fn record_path(&self, lock_dir: &Path) -> PathBuf {
        lock_dir.join(self.file_name())
    }
}

impl fmt::Display for LockName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_plain_names() {
        let name = LockName::parse("worker").unwrap();
        assert_eq!(name.as_str(), "worker");
        assert_eq!(name.file_name(), "worker.pid");
        assert_eq!(
            name.record_path(Path::new("/tmp")),
            PathBuf::from("/tmp/worker.pid")
        );
    }

    #[test]
    fn accepts_dotted_names() {
        assert!(LockName::parse("my.app-1").is_ok());
        assert!(LockName::parse(".hidden").is_ok());
    }

    #[test]
    fn rejects_escaping_names() {
        for raw in ["", ".", "..", "../etc/passwd", "a/b", "a\\b", "a\0b"] {
            let err = LockName::parse(raw).unwrap_err();
            assert!(
                matches!(err, LockError::InvalidName { .. }),
                "expected InvalidName for {raw:?}, got {err:?}"
            );
        }
    }
}
