//! Host capability for PID-file locks.

use pidguard_core::{Platform, PlatformProbe};

/// Declares support for the platforms `pidfile` has adapters for.
#[derive(Debug, Clone, Copy, Default)]
pub struct HostPlatform;

impl PlatformProbe for HostPlatform {
    fn platform(&self) -> Platform {
        let name = std::env::consts::OS.to_string();
        if cfg!(unix) {
            Platform::Supported { name }
        } else {
            Platform::Unsupported { name }
        }
    }
}
