use super::Outcome;
use crate::cli::ConfigCommands;
use anyhow::Context;
use breachscope_core::AppConfig;
use std::path::{Path, PathBuf};

/// Resolve the config file location: the explicit path if given, else XDG.
pub fn config_file(path_override: Option<&Path>) -> anyhow::Result<PathBuf> {
    match path_override {
        Some(path) => Ok(path.to_path_buf()),
        None => Ok(AppConfig::config_path()?),
    }
}

/// Print the effective configuration.
pub fn show(config: &AppConfig) -> anyhow::Result<Outcome> {
    let toml = toml::to_string_pretty(config).context("failed to serialize configuration")?;
    Ok(Outcome::stdout(toml))
}

/// Run the path-only actions, which must work without a loadable config.
pub fn run_without_config(
    action: &ConfigCommands,
    path_override: Option<&Path>,
) -> anyhow::Result<Option<Outcome>> {
    match action {
        ConfigCommands::Show => Ok(None),
        ConfigCommands::Path => {
            let path = config_file(path_override)?;
            Ok(Some(Outcome::stdout(format!("{}\n", path.display()))))
        }
        ConfigCommands::Init { force } => {
            let path = config_file(path_override)?;
            if path.exists() && !force {
                anyhow::bail!(
                    "config file already exists at {} (use --force to overwrite)",
                    path.display()
                );
            }
            AppConfig::default()
                .save_to(&path)
                .with_context(|| format!("failed to write {}", path.display()))?;
            tracing::info!("Wrote default config to {}", path.display());
            Ok(Some(Outcome::stdout(format!(
                "Wrote default config to {}\n",
                path.display()
            ))))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_init_then_refuse_overwrite() {
        let tmp = TempDir::new().expect("create temp dir");
        let path = tmp.path().join("config.toml");

        let outcome = run_without_config(&ConfigCommands::Init { force: false }, Some(&path))
            .expect("init config")
            .expect("init produces output");
        assert!(outcome.output.starts_with("Wrote default config"));
        assert!(AppConfig::load_from(&path).is_ok());

        let err = run_without_config(&ConfigCommands::Init { force: false }, Some(&path))
            .expect_err("second init should refuse");
        assert!(err.to_string().contains("already exists"));

        assert!(run_without_config(&ConfigCommands::Init { force: true }, Some(&path)).is_ok());
    }

    #[test]
    fn test_path_uses_override() {
        let outcome = run_without_config(&ConfigCommands::Path, Some(Path::new("/tmp/custom.toml")))
            .expect("path")
            .expect("path produces output");
        assert_eq!(outcome.output, "/tmp/custom.toml\n");
    }

    #[test]
    fn test_show_needs_config() {
        assert!(run_without_config(&ConfigCommands::Show, None)
            .expect("show defers")
            .is_none());

        let outcome = show(&AppConfig::default()).expect("show");
        assert!(outcome.output.contains("[lookup]"));
        assert!(outcome.output.contains("max_depth = 64"));
    }
}
