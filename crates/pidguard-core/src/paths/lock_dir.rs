use std::env;
use std::path::PathBuf;

/// Environment variable overriding the lock directory.
pub const LOCK_DIR_ENV: &str = "PIDGUARD_LOCK_DIR";

/// Returns the directory where lock records are stored.
///
/// Resolution order:
/// 1. `PIDGUARD_LOCK_DIR` environment variable (if set and non-empty)
/// 2. The system temp directory (`$TMPDIR` or `/tmp` on unix)
pub fn resolve_lock_dir() -> PathBuf {
    match env::var_os(LOCK_DIR_ENV) {
        Some(dir) if !dir.is_empty() => PathBuf::from(dir),
        _ => env::temp_dir(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::paths::test_utils::{ENV_LOCK, EnvVarGuard};

    #[test]
    fn env_override_wins() {
        let _guard = ENV_LOCK.lock().unwrap();
        let _env = EnvVarGuard::set(LOCK_DIR_ENV, "/srv/locks");
        assert_eq!(resolve_lock_dir(), PathBuf::from("/srv/locks"));
    }

    #[test]
    fn empty_override_falls_back_to_temp_dir() {
        let _guard = ENV_LOCK.lock().unwrap();
        let _env = EnvVarGuard::set(LOCK_DIR_ENV, "");
        assert_eq!(resolve_lock_dir(), env::temp_dir());
    }

    #[test]
    fn unset_uses_temp_dir() {
        let _guard = ENV_LOCK.lock().unwrap();
        let _env = EnvVarGuard::unset(LOCK_DIR_ENV);
        assert_eq!(resolve_lock_dir(), env::temp_dir());
    }
}
