//! Commit source capability
//!
//! Everything the changelog pipeline needs from a repository backend: the
//! commit list in traversal order and short-hash resolution.

use crate::error::{GitError, Result};
use crate::types::CommitInfo;

/// Read access to a repository's history
pub trait CommitSource {
    /// List commits in traversal order (newest first for git history)
    fn commits(&self) -> Result<Vec<CommitInfo>>;

    /// Resolve a full hash to its canonical short form of at least `width` characters
    fn abbreviate(&self, hash: &str, width: usize) -> Result<String>;
}

/// In-memory commit source backed by a fixed list of commits
///
/// Hashes are abbreviated by plain truncation to the requested width.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    commits: Vec<CommitInfo>,
}

impl MemorySource {
    /// Create a source over the given commits, in traversal order
    pub fn new(commits: Vec<CommitInfo>) -> Self {
        Self { commits }
    }

    /// Append a commit
    pub fn push(&mut self, commit: CommitInfo) {
        self.commits.push(commit);
    }
}

impl CommitSource for MemorySource {
    fn commits(&self) -> Result<Vec<CommitInfo>> {
        Ok(self.commits.clone())
    }

    fn abbreviate(&self, hash: &str, width: usize) -> Result<String> {
        if !self.commits.iter().any(|c| c.hash == hash) {
            return Err(GitError::AbbreviationFailed {
                hash: hash.to_string(),
                reason: "unknown commit".to_string(),
            }
            .into());
        }

        Ok(hash.chars().take(width).collect())
    }
}
