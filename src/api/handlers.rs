//! API handlers
//!
//! These handlers contain the page logic and are HTTP-agnostic.
//! They take typed input and return `Result<T, ApiError>`.

use crate::adapters;
use crate::config::Settings;
use crate::core::models::{Dependency, HealthCheckResult, HealthReport};
use crate::core::ports::{CacheProbe, DatabaseProbe, EnvSource};
use crate::core::services::{self, masker};

use super::error::ApiError;
use super::types::{EnvironmentData, MaskData, MaskRequest, StatusData};

/// Largest visible window accepted by [`mask_value`]
pub const MAX_VISIBLE_CHARS: usize = 64;

/// Collaborators shared by every handler
#[derive(Clone, Copy)]
pub struct ApiContext<'a> {
    /// Configuration lookup
    pub env: &'a dyn EnvSource,
    /// Database probe
    pub database: &'a dyn DatabaseProbe,
    /// Cache probe
    pub cache: &'a dyn CacheProbe,
    /// Resolved settings
    pub settings: &'a Settings,
}

impl std::fmt::Debug for ApiContext<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiContext").field("settings", self.settings).finish_non_exhaustive()
    }
}

// =============================================================================
// STATUS
// =============================================================================

/// Get the full status page data
pub fn get_status(ctx: &ApiContext<'_>) -> Result<StatusData, ApiError> {
    Ok(StatusData {
        runtime: services::runtime_info(ctx.env),
        components: adapters::components(),
        health: get_health(ctx)?,
        environment: get_environment(ctx)?,
    })
}

// =============================================================================
// HEALTH
// =============================================================================

/// Probe every dependency
pub fn get_health(ctx: &ApiContext<'_>) -> Result<HealthReport, ApiError> {
    Ok(services::check_all(ctx.database, ctx.cache, ctx.settings))
}

/// Probe a single dependency by name (`database`/`mysql` or `cache`/`redis`)
pub fn get_dependency_health(
    ctx: &ApiContext<'_>,
    name: &str,
) -> Result<HealthCheckResult, ApiError> {
    match parse_dependency(name) {
        Some(Dependency::Database) => {
            Ok(services::check_database(ctx.database, &ctx.settings.database))
        },
        Some(Dependency::Cache) => Ok(services::check_cache(ctx.cache, &ctx.settings.cache)),
        None => Err(ApiError::not_found(format!("Unknown dependency '{name}'"))),
    }
}

fn parse_dependency(name: &str) -> Option<Dependency> {
    match name.to_lowercase().as_str() {
        "database" | "mysql" | "db" => Some(Dependency::Database),
        "cache" | "redis" => Some(Dependency::Cache),
        _ => None,
    }
}

// =============================================================================
// ENVIRONMENT
// =============================================================================

/// Validate required keys and build the masked environment table
pub fn get_environment(ctx: &ApiContext<'_>) -> Result<EnvironmentData, ApiError> {
    let env_config = &ctx.settings.page.environment;
    Ok(EnvironmentData {
        validation: services::validate(ctx.env, &env_config.required),
        variables: services::environment_table(ctx.env, &env_config.display),
    })
}

// =============================================================================
// MASKING
// =============================================================================

/// Mask an arbitrary value
pub fn mask_value(req: &MaskRequest) -> Result<MaskData, ApiError> {
    let visible = req.visible.unwrap_or(masker::DEFAULT_VISIBLE_CHARS);
    if visible > MAX_VISIBLE_CHARS {
        return Err(ApiError::bad_request(format!(
            "Visible window must be at most {MAX_VISIBLE_CHARS} characters"
        )));
    }

    Ok(MaskData {
        masked: masker::mask(&req.value, visible),
        visible,
    })
}
