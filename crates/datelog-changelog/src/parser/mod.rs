//! Commit classification and normalization

mod prefix;

pub use prefix::PrefixParser;

use datelog_core::{CommitInfo, Result};

use crate::types::NormalizedCommit;

/// Trait for commit parsers
pub trait CommitParser: Send + Sync {
    /// Classify and normalize a commit
    ///
    /// Returns `Ok(None)` for commits outside the taxonomy and an error for
    /// commits that match a category but cannot be normalized.
    fn parse(&self, commit: &CommitInfo) -> Result<Option<NormalizedCommit>>;
}

/// Filter-map commits through a parser, keeping input order
///
/// Stops at the first malformed commit.
pub fn normalize(parser: &dyn CommitParser, commits: &[CommitInfo]) -> Result<Vec<NormalizedCommit>> {
    commits
        .iter()
        .filter_map(|commit| parser.parse(commit).transpose())
        .collect()
}
