//! Breachscope command-line shell
//!
//! This is the thin application shell that parses arguments, loads
//! configuration and renders results. Lookup and normalization live in the
//! `crates/` directory.

pub mod cli;
pub mod commands;
pub mod error;
pub mod render;

use anyhow::Context;
use breachscope_core::AppConfig;
use cli::{Cli, Commands};
use commands::Outcome;
use render::Renderer;
use std::io::IsTerminal;

/// Initialize tracing subscriber for logging
///
/// Logs go to stderr so stdout only carries results. `RUST_LOG` wins over
/// the `-v` count.
pub fn init_tracing(verbosity: u8) {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(verbosity)));

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(true)
                .with_writer(std::io::stderr),
        )
        .with(filter)
        .init();
}

/// Filter used when `RUST_LOG` is unset. Each `-v` raises the level one step.
fn default_filter(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "warn,breachscope=info",
        _ => "info,breachscope=debug",
    }
}

/// Execute a parsed command line.
pub async fn run(cli: Cli) -> anyhow::Result<Outcome> {
    if let Commands::Config { action } = &cli.command {
        if let Some(outcome) = commands::config::run_without_config(action, cli.config.as_deref())? {
            return Ok(outcome);
        }
    }

    let mut config = AppConfig::load_with_env(cli.config.as_deref())
        .context("failed to load configuration")?;
    if cli.json {
        config.output.json = true;
    }
    if cli.no_color || !std::io::stdout().is_terminal() {
        config.output.color = false;
    }

    let renderer = |strict| Renderer {
        json: config.output.json,
        color: config.output.color,
        strict,
    };

    match &cli.command {
        Commands::Check { email, strict } => {
            commands::check::run(&config, renderer(*strict), email).await
        }
        Commands::Normalize { file, strict } => {
            commands::normalize::run(&config.normalize, renderer(*strict), file.as_deref())
        }
        Commands::Config { .. } => commands::config::show(&config),
    }
}
