//! Platform capability port.

use std::fmt;

/// Whether the host can use PID-file locks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Platform {
    Supported { name: String },
    Unsupported { name: String },
}

impl Platform {
    pub const fn is_supported(&self) -> bool {
        matches!(self, Self::Supported { .. })
    }

    pub fn name(&self) -> &str {
        match self {
            Self::Supported { name } | Self::Unsupported { name } => name,
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Reports whether the current host supports PID-file locks.
///
/// Support is declared by the adapter that implements the other ports, so a
/// new platform opts in by providing an implementation rather than by being
/// added to a name list.
#[cfg_attr(test, mockall::automock)]
pub trait PlatformProbe: Send + Sync {
    fn platform(&self) -> Platform;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn platform_reports_name_and_support() {
        let linux = Platform::Supported {
            name: "linux".to_string(),
        };
        let windows = Platform::Unsupported {
            name: "windows".to_string(),
        };

        assert!(linux.is_supported());
        assert!(!windows.is_supported());
        assert_eq!(windows.to_string(), "windows");
    }
}
