//! Configuration validation

use std::path::Path;

use tracing::debug;

use crate::error::{ConfigError, Result};

use super::types::Config;

/// Validate configuration
pub fn validate_config(config: &Config) -> Result<()> {
    debug!("validating configuration");
    validate_changelog(config)?;
    debug!("configuration validation passed");
    Ok(())
}

fn validate_changelog(config: &Config) -> Result<()> {
    validate_changelog_file(&config.changelog.file)
}

/// Validate a changelog path, from the config file or the command line
pub fn validate_changelog_file(file: &Path) -> Result<()> {
    if file.as_os_str().is_empty() {
        return Err(ConfigError::InvalidValue {
            field: "changelog.file".to_string(),
            message: "file cannot be empty".to_string(),
        }
        .into());
    }

    if file.is_absolute() {
        return Err(ConfigError::InvalidValue {
            field: "changelog.file".to_string(),
            message: "must be relative to the repository".to_string(),
        }
        .into());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_validate_default_config() {
        let config = Config::default();
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_validate_empty_file() {
        let mut config = Config::default();
        config.changelog.file = PathBuf::new();
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_validate_changelog_file() {
        assert!(validate_changelog_file(Path::new("docs/HISTORY.md")).is_ok());
        assert!(validate_changelog_file(Path::new("")).is_err());

        let err = validate_changelog_file(&std::env::temp_dir().join("CHANGELOG.md")).unwrap_err();
        assert!(err.to_string().contains("changelog.file"));
    }

    #[test]
    fn test_validate_absolute_file() {
        let mut config = Config::default();
        config.changelog.file = std::env::temp_dir().join("CHANGELOG.md");
        assert!(validate_config(&config).is_err());
    }
}
