//! Error types for Datelog

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using DatelogError
pub type Result<T> = std::result::Result<T, DatelogError>;

/// Main error type for Datelog operations
#[derive(Debug, Error)]
pub enum DatelogError {
    /// Configuration-related errors
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Git-related errors
    #[error(transparent)]
    Git(#[from] GitError),

    /// Changelog-related errors
    #[error(transparent)]
    Changelog(#[from] ChangelogError),

}

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Invalid configuration value
    #[error("Invalid configuration: {field} - {message}")]
    InvalidValue { field: String, message: String },

    /// YAML parsing error
    #[error("YAML parsing error: {0}")]
    YamlError(#[from] serde_yaml::Error),

    /// TOML parsing error
    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    /// IO error
    #[error("IO error reading config: {0}")]
    Io(#[from] std::io::Error),
}

/// Git-related errors
#[derive(Debug, Error)]
pub enum GitError {
    /// Repository not found
    #[error("Git repository not found at {0}")]
    RepositoryNotFound(PathBuf),

    /// Not a git repository
    #[error("Not a git repository: {0}")]
    NotARepository(PathBuf),

    /// Repository has no working data
    #[error("Bare repository found at {0}")]
    BareRepository(PathBuf),

    /// Failed to open repository
    #[error("Failed to open repository: {0}")]
    OpenFailed(String),

    /// Commit time could not be represented
    #[error("Commit {hash} has an invalid timestamp ({seconds}s, offset {offset_minutes}m)")]
    InvalidTimestamp {
        hash: String,
        seconds: i64,
        offset_minutes: i32,
    },

    /// Hash could not be abbreviated
    #[error("Failed to abbreviate {hash}: {reason}")]
    AbbreviationFailed { hash: String, reason: String },

    /// Git2 library error
    #[error("Git error: {0}")]
    Git2(#[from] git2::Error),
}

impl GitError {
    /// Whether this error means the target is not a usable repository
    pub fn is_unavailable(&self) -> bool {
        matches!(
            self,
            Self::RepositoryNotFound(_)
                | Self::NotARepository(_)
                | Self::BareRepository(_)
                | Self::OpenFailed(_)
        )
    }
}

/// Changelog-related errors
#[derive(Debug, Error)]
pub enum ChangelogError {
    /// A commit matched a category prefix but its message could not be extracted
    #[error("Malformed commit {hash} ({category})")]
    MessageExtraction {
        hash: String,
        category: String,
        #[source]
        reason: ExtractionFailure,
    },

    /// The category table is unusable
    #[error("Invalid taxonomy: {0}")]
    InvalidTaxonomy(String),

    /// Failed to write changelog
    #[error("Failed to write changelog to {path}")]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Why the display message of a classified commit could not be extracted
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExtractionFailure {
    /// The first line does not start with the delimiter
    #[error("delimiter `{0}` not found at the start of the first line")]
    MissingDelimiter(String),

    /// The delimiter occurs more than once in the first line
    #[error("delimiter `{0}` appears more than once in the first line")]
    AmbiguousDelimiter(String),

}

impl DatelogError {
    /// Whether this error stems from malformed commit data
    pub fn is_malformed_commit(&self) -> bool {
        matches!(
            self,
            Self::Changelog(ChangelogError::MessageExtraction { .. })
        )
    }
}
