//! Init command

use std::path::{Path, PathBuf};

use clap::Args;
use tracing::info;

use datelog_core::config::defaults::{
    DEFAULT_CONFIG_TEMPLATE, DEFAULT_CONFIG_TOML, DEFAULT_CONFIG_TOML_TEMPLATE,
    DEFAULT_CONFIG_YAML,
};
use datelog_git::GitRepo;

use crate::cli::{output, Cli};

/// Write a default datelog configuration
#[derive(Debug, Args)]
pub struct InitCommand {
    /// Force overwrite existing configuration
    #[arg(short, long)]
    pub force: bool,

    /// Write TOML instead of YAML
    #[arg(long)]
    pub toml: bool,

    /// Output file path (defaults to the repository root)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

impl InitCommand {
    /// Execute the init command
    pub fn execute(&self, cli: &Cli) -> anyhow::Result<()> {
        info!(force = self.force, toml = self.toml, "executing init command");
        let cwd = std::env::current_dir()?;

        let config_path = match &self.output {
            Some(path) => path.clone(),
            None => {
                let name = if self.toml {
                    DEFAULT_CONFIG_TOML
                } else {
                    DEFAULT_CONFIG_YAML
                };
                repository_root(&cwd).join(name)
            }
        };

        if config_path.exists() && !self.force {
            anyhow::bail!(
                "Configuration file already exists at {}. Use --force to overwrite.",
                config_path.display()
            );
        }

        // The loader picks the format from the extension
        let toml = self.toml || config_path.extension().is_some_and(|e| e == "toml");
        let content = if toml {
            DEFAULT_CONFIG_TOML_TEMPLATE
        } else {
            DEFAULT_CONFIG_TEMPLATE
        };

        std::fs::write(&config_path, content)?;
        info!(path = %config_path.display(), "configuration written");

        if !cli.quiet {
            output::success(&format!(
                "Created configuration at {}",
                output::path(&config_path)
            ));
        }

        Ok(())
    }
}

/// Work tree root containing `dir`, or `dir` itself outside a repository
fn repository_root(dir: &Path) -> PathBuf {
    GitRepo::discover(dir)
        .ok()
        .and_then(|repo| repo.workdir().map(Path::to_path_buf))
        .unwrap_or_else(|| dir.to_path_buf())
}
