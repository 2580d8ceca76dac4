//! `pidguard sweep`

use std::fmt::Write as _;

use pidguard_core::{LockManager, SweepReport};

use crate::error::CliError;

pub fn execute(manager: &LockManager, json: bool) -> Result<u8, CliError> {
    let report = manager.sweep()?;
    print!("{}", render(&report, json)?);
    Ok(0)
}

fn render(report: &SweepReport, json: bool) -> Result<String, CliError> {
    if json {
        return Ok(serde_json::to_string_pretty(report)? + "\n");
    }

    let mut out = String::new();
    for path in &report.removed {
        let _ = writeln!(out, "removed {}", path.display());
    }
    let _ = writeln!(
        out,
        "{} stale removed, {} live, {} corrupt, {} failed",
        report.removed.len(),
        report.live,
        report.corrupt,
        report.failed
    );

    Ok(out)
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    fn report() -> SweepReport {
        SweepReport {
            removed: vec![PathBuf::from("/locks/a.pid"), PathBuf::from("/locks/b.pid")],
            live: 3,
            corrupt: 1,
            failed: 0,
        }
    }

    #[test]
    fn text_lists_removed_records_then_totals() {
        let out = render(&report(), false).unwrap();

        assert_eq!(
            out,
            "removed /locks/a.pid\n\
             removed /locks/b.pid\n\
             2 stale removed, 3 live, 1 corrupt, 0 failed\n"
        );
    }

    #[test]
    fn text_for_empty_directory_is_just_totals() {
        let out = render(&SweepReport::default(), false).unwrap();
        assert_eq!(out, "0 stale removed, 0 live, 0 corrupt, 0 failed\n");
    }

    #[test]
    fn json_carries_every_counter() {
        let out = render(&report(), true).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();

        assert_eq!(
            value,
            serde_json::json!({
                "removed": ["/locks/a.pid", "/locks/b.pid"],
                "live": 3,
                "corrupt": 1,
                "failed": 0,
            })
        );
    }

    #[cfg(unix)]
    #[test]
    fn execute_removes_dead_owner_records() {
        use pidguard_core::LockConfig;
        use pidguard_runtime::default_lock_manager;
        use std::process::Command;

        let mut child = Command::new("true").spawn().unwrap();
        let dead = child.id();
        child.wait().unwrap();

        let dir = tempfile::tempdir().unwrap();
        let stale = dir.path().join("old.pid");
        let held = dir.path().join("current.pid");
        std::fs::write(&stale, dead.to_string()).unwrap();
        std::fs::write(&held, std::process::id().to_string()).unwrap();
        let manager = default_lock_manager(LockConfig::new(dir.path()));

        assert_eq!(execute(&manager, false).unwrap(), 0);
        assert!(!stale.exists());
        assert!(held.exists());

        assert_eq!(execute(&manager, true).unwrap(), 0);
        assert!(held.exists());
    }
}
