//! Generate command

use std::path::PathBuf;

use clap::builder::FalseyValueParser;
use clap::Args;
use tracing::{debug, info};

use datelog_changelog::{ChangelogGenerator, Taxonomy};
use datelog_core::config::{try_load_config, validate_changelog_file};
use datelog_core::error::ChangelogError;
use datelog_git::GitRepo;

use crate::cli::{output, Cli, OutputFormat};

/// Generate the changelog from the repository history
#[derive(Debug, Args)]
pub struct GenerateCommand {
    /// Repository to scan
    #[arg(short, long, env = "INPUT_PATH", default_value = ".")]
    pub path: PathBuf,

    /// Changelog file, relative to the repository (defaults to the configured file)
    ///
    /// An empty value, as sent for an unset action input, counts as absent.
    #[arg(short, long, env = "INPUT_FILENAME")]
    pub filename: Option<String>,

    /// Echo the generated changelog
    #[arg(short, long, env = "INPUT_DEBUG", value_parser = FalseyValueParser::new())]
    pub debug: bool,

    /// Do not write the changelog file
    #[arg(short = 'z', long, env = "INPUT_DRY_RUN", value_parser = FalseyValueParser::new())]
    pub dry_run: bool,
}

impl GenerateCommand {
    /// Execute the generate command
    pub fn execute(&self, cli: &Cli) -> anyhow::Result<()> {
        info!(
            path = %self.path.display(),
            dry_run = self.dry_run,
            debug = self.debug,
            "executing generate command"
        );

        let search_dir = self.path.canonicalize().unwrap_or_else(|_| self.path.clone());
        let (config, config_path) = try_load_config(&search_dir)?;
        if let Some(config_path) = &config_path {
            debug!(path = %config_path.display(), "using config file");
        }

        let filename = match self.filename.as_deref().filter(|f| !f.is_empty()) {
            Some(filename) => {
                let filename = PathBuf::from(filename);
                validate_changelog_file(&filename)?;
                filename
            }
            None => config.changelog.file.clone(),
        };

        if !cli.quiet {
            output::info(&format!(
                "Analyzing git repository at: {}",
                output::path(&self.path)
            ));
        }

        let repo = GitRepo::open(&self.path)?;
        let generator = ChangelogGenerator::new(Taxonomy::conventional())?;
        let changelog = generator.generate(&repo)?;

        if !self.dry_run {
            if changelog.is_empty() {
                if !cli.quiet {
                    output::warning("No matching commits found");
                }
            } else {
                let output_path = self.path.join(&filename);
                std::fs::write(&output_path, changelog.document.to_string()).map_err(
                    |source| ChangelogError::WriteFailed {
                        path: output_path.clone(),
                        source,
                    },
                )?;
                info!(path = %output_path.display(), matched = changelog.matched, "changelog written");

                if !cli.quiet {
                    output::success(&format!("{} written", output::path(&output_path)));
                }
            }
        }

        if self.debug && !changelog.is_empty() {
            match cli.format {
                OutputFormat::Json => {
                    println!("{}", serde_json::to_string_pretty(&changelog.grouped)?);
                }
                OutputFormat::Text => {
                    print!("{}", changelog.document);
                }
            }
        }

        Ok(())
    }
}
