//! Domain types for named PID locks.

mod name;
mod record;
mod status;

pub use name::{LOCK_FILE_EXTENSION, LockName};
pub use record::LockRecord;
pub use status::LockStatus;
