//! `pidguard` command-line adapter.
//!
//! `main.rs` is the composition root; everything testable lives here.

#![deny(unused_crate_dependencies)]

// Used by the binary's top level only
use anyhow as _;
#[cfg(test)]
use tempfile as _;

pub mod bootstrap;
pub mod commands;
pub mod error;
pub mod handlers;
pub mod parser;

pub use commands::Commands;
pub use error::CliError;
pub use parser::Cli;
