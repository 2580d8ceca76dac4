//! Read-only view of a lock.

use serde::Serialize;

/// Observed state of a named lock, as reported by `LockManager::inspect`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum LockStatus {
    /// No record exists.
    Unlocked,
    /// A record exists and its owner is alive.
    Held { pid: u32 },
    /// A record exists but its owner is gone.
    Stale { pid: u32 },
    /// A record exists but does not contain a pid.
    Corrupt { content: String },
}

impl LockStatus {
    pub const fn is_held(&self) -> bool {
        matches!(self, Self::Held { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_with_state_tag() {
        let json = serde_json::to_value(LockStatus::Held { pid: 7 }).unwrap();
        assert_eq!(json, serde_json::json!({ "state": "held", "pid": 7 }));

        let json = serde_json::to_value(LockStatus::Unlocked).unwrap();
        assert_eq!(json, serde_json::json!({ "state": "unlocked" }));
    }
}
