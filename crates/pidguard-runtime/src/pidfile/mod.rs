//! PID file adapters.
//!
//! # Safety guarantees
//! - Writes go through a temp file, so readers never see a partial record
//! - Exclusive creation is a hard link, which fails if the record exists
//! - Liveness probes never send a real signal

mod io;
mod verify;

pub use io::StdFileStore;
pub use verify::{NixProcessOracle, pid_exists};
