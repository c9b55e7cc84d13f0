//! Start the status page server

use std::process::ExitCode;

use diagpage::adapters::{self, env::ProcessEnv};
use diagpage::api::ApiContext;
use diagpage::config::Settings;

use crate::server::tiny_http;

/// Serve the status page until the process is stopped
pub fn serve(
    mut settings: Settings,
    bind: Option<String>,
    port: Option<u16>,
) -> anyhow::Result<ExitCode> {
    if let Some(bind) = bind {
        settings.page.server.bind = bind;
    }
    if let Some(port) = port {
        settings.page.server.port = port;
    }

    let addr = format!("{}:{}", settings.page.server.bind, settings.page.server.port);
    let database = adapters::database_probe();
    let cache = adapters::cache_probe();
    let ctx = ApiContext {
        env: &ProcessEnv,
        database: database.as_ref(),
        cache: cache.as_ref(),
        settings: &settings,
    };

    println!("Starting diagpage...");
    println!("Open http://localhost:{} in your browser", settings.page.server.port);
    println!();
    println!("Press Ctrl+C to stop");

    tiny_http::serve(&addr, &ctx)?;
    Ok(ExitCode::SUCCESS)
}
