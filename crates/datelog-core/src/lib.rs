//! Datelog Core - Shared types for dated changelog generation
//!
//! This crate provides the error taxonomy, the commit record handed over by
//! repository backends, the [`CommitSource`] capability trait, and the
//! configuration system.

pub mod config;
pub mod error;
pub mod source;
pub mod types;

pub use error::{ChangelogError, ConfigError, DatelogError, ExtractionFailure, GitError, Result};
pub use source::{CommitSource, MemorySource};
pub use types::CommitInfo;
