//! Validate and display the environment

use std::process::ExitCode;

use diagpage::adapters::env::ProcessEnv;
use diagpage::api::EnvironmentData;
use diagpage::config::Settings;
use diagpage::core::services;
use diagpage::output::OutputMode;

/// Validate required variables and print the environment table
///
/// Keys from the config file and from `--require` are both checked.
pub fn env(settings: &Settings, extra_required: &[String], mode: OutputMode) -> ExitCode {
    let env_config = &settings.page.environment;
    let required: Vec<&str> = env_config
        .required
        .iter()
        .chain(extra_required)
        .map(String::as_str)
        .collect();

    let output = EnvironmentData {
        validation: services::validate(&ProcessEnv, &required),
        variables: services::environment_table(&ProcessEnv, &env_config.display),
    };
    output.render(mode);

    if output.validation.valid {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
