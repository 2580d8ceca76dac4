//! Port definitions (trait abstractions) for the capabilities the lock
//! manager is composed from.
//!
//! # Design Rules
//!
//! - No OS-specific types in any signature
//! - Filesystem ports speak `std::io` so adapters can pass errors through
//! - Implementations live in `pidguard-runtime`; tests use `mockall` mocks

mod file_store;
mod platform;
mod process_oracle;

pub use file_store::FileStore;
pub use platform::{Platform, PlatformProbe};
pub use process_oracle::ProcessOracle;

#[cfg(test)]
pub use file_store::MockFileStore;
#[cfg(test)]
pub use platform::MockPlatformProbe;
#[cfg(test)]
pub use process_oracle::MockProcessOracle;
