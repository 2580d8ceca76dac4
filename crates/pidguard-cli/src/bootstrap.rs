//! Composition root helpers: logging and lock manager wiring.

use pidguard_core::{LockConfig, LockManager, WriteMode};
use pidguard_runtime::default_lock_manager;
use tracing_subscriber::EnvFilter;

use crate::parser::Cli;

/// Install the global subscriber. `RUST_LOG` wins over `--verbose`.
pub fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Lock configuration from global flags.
pub fn config_from(cli: &Cli) -> LockConfig {
    let config = cli
        .lock_dir
        .as_ref()
        .filter(|dir| !dir.as_os_str().is_empty())
        .map_or_else(LockConfig::from_env, LockConfig::new);

    if cli.overwrite {
        config.with_write_mode(WriteMode::Overwrite)
    } else {
        config
    }
}

pub fn bootstrap(cli: &Cli) -> LockManager {
    default_lock_manager(config_from(cli))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::path::PathBuf;

    #[test]
    fn flags_shape_config() {
        let cli = Cli::parse_from([
            "pidguard",
            "--lock-dir",
            "/srv/locks",
            "--overwrite",
            "sweep",
        ]);
        let config = config_from(&cli);

        assert_eq!(config.lock_dir, PathBuf::from("/srv/locks"));
        assert_eq!(config.write_mode, WriteMode::Overwrite);
    }
}
