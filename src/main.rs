//! diagpage - A diagnostic status page for containerized applications
//!
//! Serves an HTML page and JSON API showing runtime information, MySQL and
//! Redis connectivity and masked configuration, and runs the same checks
//! from the command line.

// Deny all clippy warnings in this crate
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unused_import_braces,
    unused_qualifications
)]
// Allow some pedantic lints that are too noisy or not applicable
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::cargo_common_metadata
)]

use std::process::ExitCode;

mod cli;
mod server;

/// Main entry point for the diagpage CLI
fn main() -> anyhow::Result<ExitCode> {
    cli::run()
}
