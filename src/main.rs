//! casefile - portable test-failure causes
//!
//! Main entry point for the casefile CLI.

mod cli;
mod cmd_report;
mod register;

use clap::Parser;
use tracing::warn;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use casefile_config::{ConfigLoader, ConfigValidator, LogFormat, LoggingConfig};

use crate::cli::Cli;

/// Initialize tracing. `RUST_LOG` takes precedence over the configured level.
///
/// Logs go to stderr so command output on stdout stays clean.
fn init_tracing(logging: &LoggingConfig) -> Result<(), Box<dyn std::error::Error>> {
    let env_filter =
        EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(&logging.level))?;

    let registry = tracing_subscriber::registry().with(env_filter);
    match logging.format {
        LogFormat::Text => registry
            .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
            .try_init()?,
        LogFormat::Json => registry
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .try_init()?,
    }

    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config = ConfigLoader::load_or_default(&cli.config)?;
    let warnings = ConfigValidator::validate(&config).into_result()?;

    init_tracing(&config.logging)?;
    for warning in warnings {
        warn!("Config {}: {}", warning.path, warning.message);
    }

    let registry = register::build_registry(&config.registry)?;
    cmd_report::handle_command(cli.command, &registry)
}
