//! Domain models for diagpage
//!
//! Pure data structures with no I/O dependencies.
//!
//! - [`ValidationResult`] - Which required keys are missing or empty
//! - [`HealthCheckResult`] - Outcome of one dependency probe
//! - [`LogLevel`] - Severity of a probe log line
//! - [`EnvEntry`] - One row of the environment table

mod environment;
mod health;
mod level;
mod validation;

pub use environment::{ComponentInfo, EnvEntry, RuntimeInfo};
pub use health::{CheckStatus, Dependency, HealthCheckResult, HealthReport};
pub use level::LogLevel;
pub use validation::ValidationResult;
