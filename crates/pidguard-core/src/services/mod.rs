//! Services composed from the ports.

mod handle;
mod lock_manager;
mod removal;
mod sweep;

pub use handle::LockHandle;
pub use lock_manager::LockManager;
pub use sweep::SweepReport;
