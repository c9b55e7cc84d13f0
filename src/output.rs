//! Output formatting for human and JSON modes
//!
//! This module provides structured output that can be rendered either as
//! human-readable text or machine-parseable JSON.

use colored::Colorize;
use serde::Serialize;

use crate::api::{EnvironmentData, MaskData};
use crate::core::models::HealthCheckResult;

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

/// Result of a `check` command
#[derive(Debug, Serialize)]
pub struct HealthOutput {
    /// True when every probed dependency answered
    pub healthy: bool,
    /// Individual probe results
    pub results: Vec<HealthCheckResult>,
}

fn print_json<T: Serialize>(value: &T) {
    println!("{}", serde_json::to_string_pretty(value).unwrap_or_default());
}

impl HealthOutput {
    /// Collect results, deriving the overall verdict
    #[must_use]
    pub fn new(results: Vec<HealthCheckResult>) -> Self {
        Self {
            healthy: results.iter().all(HealthCheckResult::is_success),
            results,
        }
    }

    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => print!("{}", self.to_human()),
            OutputMode::Json => print_json(self),
        }
    }

    /// Human-readable text
    #[must_use]
    pub fn to_human(&self) -> String {
        let mut out = String::new();
        for result in &self.results {
            let name = result.dependency.display_name();
            if let Some(error) = result.error() {
                out.push_str(&format!("{} {name}: {}\n", "✗".red(), error));
                continue;
            }
            out.push_str(&format!("{} {name}: connection established\n", "✓".green()));
            for (key, value) in &result.details {
                out.push_str(&format!("    {key}: {value}\n"));
            }
        }
        if !self.healthy {
            out.push_str(&format!("\n{}\n", "One or more dependencies are unreachable.".bold()));
        }
        out
    }
}

// `env` and `mask` print the same views the JSON API returns.

impl EnvironmentData {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => print!("{}", self.to_human()),
            OutputMode::Json => print_json(self),
        }
    }

    /// Human-readable text
    #[must_use]
    pub fn to_human(&self) -> String {
        let mut out = String::from("Environment:\n\n");
        for entry in &self.variables {
            let value = entry.value.as_deref().unwrap_or("(not set)");
            out.push_str(&format!("  {:<20} {value}\n", entry.name));
        }

        if self.validation.valid {
            out.push_str(&format!("\n{} All required variables are set.\n", "✓".green()));
        } else {
            out.push_str(&format!("\n{} Missing required variables:\n", "✗".red()));
            for key in &self.validation.missing {
                out.push_str(&format!("  - {key}\n"));
            }
        }
        out
    }
}

impl MaskData {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => println!("{}", self.masked),
            OutputMode::Json => print_json(self),
        }
    }
}
