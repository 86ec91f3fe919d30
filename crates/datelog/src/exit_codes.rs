//! Exit codes for the CLI

use datelog_core::error::{ConfigError, DatelogError, GitError};

/// Success, including runs where no commit matched
pub const SUCCESS: i32 = 0;

/// General error
pub const ERROR: i32 = 1;

/// Configuration error
pub const CONFIG_ERROR: i32 = 2;

/// Repository unavailable or unreadable
pub const GIT_ERROR: i32 = 3;

/// A classified commit could not be rendered
pub const MALFORMED_COMMIT: i32 = 4;

/// Map an error to its exit code by looking through the cause chain
pub fn for_error(err: &anyhow::Error) -> i32 {
    for cause in err.chain() {
        if let Some(err) = cause.downcast_ref::<DatelogError>() {
            return match err {
                DatelogError::Config(_) => CONFIG_ERROR,
                DatelogError::Git(_) => GIT_ERROR,
                err if err.is_malformed_commit() => MALFORMED_COMMIT,
                _ => ERROR,
            };
        }
        if cause.is::<GitError>() {
            return GIT_ERROR;
        }
        if cause.is::<ConfigError>() {
            return CONFIG_ERROR;
        }
    }

    ERROR
}
