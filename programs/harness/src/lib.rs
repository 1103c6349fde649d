//! The `evm-harness` command line tool.
//!
//! Exposes the address, denomination and fee market derivations used by the
//! integration tests so they can be computed from a shell or a script.

#![deny(
    clippy::nursery,
    clippy::pedantic,
    warnings,
    missing_docs,
    unused_crate_dependencies
)]

pub mod cli;
pub mod commands;
pub mod config;
pub mod tracing;

// loaded by the binary before the config is resolved
use dotenv as _;

#[cfg(test)]
use tempfile as _;
