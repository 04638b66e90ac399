//! Shared helpers for the integration suites.
//!
//! - `cli_runner`: `CliRunner` runs the cargo-built `headsup` binary (or the
//!   library entry point) and captures exit code, stdout and stderr.

pub mod cli_runner;
