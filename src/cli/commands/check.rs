//! Probe dependencies from the command line

use std::process::ExitCode;

use diagpage::adapters;
use diagpage::config::Settings;
use diagpage::core::services;
use diagpage::output::{HealthOutput, OutputMode};

use crate::cli::app::CheckTarget;

/// Probe the selected dependencies; exits non-zero if any probe failed
pub fn check(settings: &Settings, target: CheckTarget, mode: OutputMode) -> ExitCode {
    let mut results = Vec::new();

    if matches!(target, CheckTarget::All | CheckTarget::Database) {
        let probe = adapters::database_probe();
        results.push(services::check_database(probe.as_ref(), &settings.database));
    }
    if matches!(target, CheckTarget::All | CheckTarget::Cache) {
        let probe = adapters::cache_probe();
        results.push(services::check_cache(probe.as_ref(), &settings.cache));
    }

    let output = HealthOutput::new(results);
    output.render(mode);

    if output.healthy {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
