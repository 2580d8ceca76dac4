//! `pidguard status NAME`

use std::path::Path;

use pidguard_core::{LockManager, LockStatus};
use serde::Serialize;

use crate::error::CliError;

#[derive(Serialize)]
struct StatusOutput<'a> {
    name: &'a str,
    path: &'a Path,
    #[serde(flatten)]
    status: &'a LockStatus,
}

pub fn execute(manager: &LockManager, name: &str, json: bool) -> Result<u8, CliError> {
    let path = manager.path_for(name)?;
    let status = manager.inspect(name)?;

    if json {
        let output = StatusOutput {
            name,
            path: &path,
            status: &status,
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        println!("{}", describe(name, &status));
    }

    Ok(0)
}

fn describe(name: &str, status: &LockStatus) -> String {
    match status {
        LockStatus::Unlocked => format!("{name}: not running"),
        LockStatus::Held { pid } => format!("{name}: running with pid {pid}"),
        LockStatus::Stale { pid } => format!("{name}: stale record for exited pid {pid}"),
        LockStatus::Corrupt { content } => format!("{name}: corrupt record {content:?}"),
    }
}
