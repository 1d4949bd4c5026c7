//! Command-line argument parsing.

use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

/// Breachscope CLI
#[derive(Parser, Debug)]
#[command(name = "breachscope", version)]
#[command(about = "Check if an email address has been exposed in data breaches", long_about = None)]
pub struct Cli {
    /// Path to a config file (defaults to the XDG config location)
    #[arg(long, global = true, env = "BREACHSCOPE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Output machine-readable JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Disable coloured output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Look up an email address
    Check {
        /// Email address to check
        email: String,

        /// Fail instead of reporting "safe" when the response cannot be read
        #[arg(long)]
        strict: bool,
    },

    /// Normalize a saved lookup response without touching the network
    Normalize {
        /// JSON file to read; stdin when omitted or "-"
        file: Option<PathBuf>,

        /// Fail instead of reporting "safe" when the payload cannot be read
        #[arg(long)]
        strict: bool,
    },

    /// Inspect or create the configuration file
    Config {
        #[command(subcommand)]
        action: ConfigCommands,
    },
}

/// Config subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Print the effective configuration as TOML
    Show,
    /// Print the config file path
    Path,
    /// Write a default config file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_check() {
        let cli = Cli::try_parse_from(["breachscope", "-vv", "check", "a@b.io", "--strict", "--json"])
            .expect("parse args");
        assert_eq!(cli.verbose, 2);
        assert!(cli.json);
        match cli.command {
            Commands::Check { email, strict } => {
                assert_eq!(email, "a@b.io");
                assert!(strict);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_normalize_stdin() {
        let cli = Cli::try_parse_from(["breachscope", "normalize"]).expect("parse args");
        assert!(matches!(
            cli.command,
            Commands::Normalize {
                file: None,
                strict: false
            }
        ));
    }
}
