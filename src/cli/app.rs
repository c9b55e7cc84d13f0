//! CLI definitions and entry point

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand, ValueEnum};

use super::commands;
use diagpage::adapters::env::ProcessEnv;
use diagpage::config::{PageConfig, Settings};
use diagpage::core::services::masker::DEFAULT_VISIBLE_CHARS;
use diagpage::output::OutputMode;

/// Environment variable overriding the log filter
const LOG_ENV: &str = "DIAGPAGE_LOG";

/// diagpage - Runtime and dependency diagnostics
#[derive(Parser, Debug)]
#[command(
    name = "diagpage",
    version,
    about = "Runtime and dependency diagnostics",
    long_about = "Report runtime information, probe MySQL and Redis, and show configuration.\n\n\
                  Run `diagpage serve` for the status page, or use the `check`, `env` and\n\
                  `mask` commands directly from a shell or container health check."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long, global = true)]
    pub json: bool,

    /// Config file (defaults to ./diagpage.toml, then the user config dir)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Serve the status page and JSON API
    Serve {
        /// Address to bind (overrides the config file)
        #[arg(short, long)]
        bind: Option<String>,

        /// Port to listen on (overrides the config file)
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Probe dependencies and report their status
    Check {
        /// Which dependency to probe
        #[arg(value_enum, default_value_t = CheckTarget::All)]
        target: CheckTarget,
    },

    /// Validate required variables and show the environment table
    Env {
        /// Additional variable that must be set (repeatable)
        #[arg(short, long = "require")]
        require: Vec<String>,
    },

    /// Mask a sensitive value for display
    Mask {
        /// Value to mask
        value: String,

        /// Characters left visible at each end
        #[arg(long, default_value_t = DEFAULT_VISIBLE_CHARS)]
        visible: usize,
    },

    /// Show version
    Version,
}

/// Dependencies selectable by `check`
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckTarget {
    /// Database and cache
    All,
    /// MySQL only
    Database,
    /// Redis only
    Cache,
}

/// Run the CLI
pub fn run() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::new().filter_or(LOG_ENV, default_filter))
        .init();

    let output_mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    match cli.command {
        Some(Command::Serve { bind, port }) => {
            let settings = load_settings(cli.config.as_deref())?;
            commands::serve(settings, bind, port)
        },
        Some(Command::Check { target }) => {
            let settings = load_settings(cli.config.as_deref())?;
            Ok(commands::check(&settings, target, output_mode))
        },
        Some(Command::Env { require }) => {
            let settings = load_settings(cli.config.as_deref())?;
            Ok(commands::env(&settings, &require, output_mode))
        },
        Some(Command::Mask { value, visible }) => commands::mask(&value, visible, output_mode),
        Some(Command::Version) => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": diagpage::VERSION
                    })
                );
            } else {
                println!("diagpage v{}", diagpage::VERSION);
            }
            Ok(ExitCode::SUCCESS)
        },
        None => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": diagpage::VERSION,
                        "hint": "Use --help for usage"
                    })
                );
            } else {
                println!("diagpage v{}", diagpage::VERSION);
                println!("\nRun 'diagpage --help' for usage");
                println!("Run 'diagpage serve' to start the status page");
            }
            Ok(ExitCode::SUCCESS)
        },
    }
}

fn load_settings(config: Option<&Path>) -> anyhow::Result<Settings> {
    let page = PageConfig::discover(config)?;
    Ok(Settings::resolve(&ProcessEnv, page))
}
