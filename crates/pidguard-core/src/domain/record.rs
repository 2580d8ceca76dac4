//! On-disk lock record format.
//!
//! Format: the decimal ASCII digits of the owner pid, nothing else.
//! ```text
//! 4242
//! ```
//! Surrounding whitespace is tolerated on read so that records written by
//! hand (`echo 4242 > worker.pid`) still parse.

/// Parsed content of a lock record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LockRecord {
    pub owner_pid: u32,
}

impl LockRecord {
    pub const fn new(owner_pid: u32) -> Self {
        Self { owner_pid }
    }

    /// Parse record bytes. Returns `None` for anything that is not a
    /// positive decimal pid.
    pub fn parse(bytes: &[u8]) -> Option<Self> {
        let text = std::str::from_utf8(bytes).ok()?.trim_ascii();
        if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        // pid 0 addresses the caller's process group, never a single owner
        match text.parse::<u32>() {
            Ok(0) | Err(_) => None,
            Ok(owner_pid) => Some(Self { owner_pid }),
        }
    }

    /// Bytes to persist.
    pub fn encode(&self) -> Vec<u8> {
        self.owner_pid.to_string().into_bytes()
    }
}
