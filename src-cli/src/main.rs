use breachscope_app::cli::Cli;
use breachscope_app::commands::EXIT_ERROR;
use clap::Parser;
use std::process::ExitCode;
use tracing::info;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    breachscope_app::init_tracing(cli.verbose);

    info!("Starting Breachscope v{}", env!("CARGO_PKG_VERSION"));

    match breachscope_app::run(cli).await {
        Ok(outcome) => {
            outcome.emit();
            ExitCode::from(outcome.code)
        }
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::from(EXIT_ERROR)
        }
    }
}
