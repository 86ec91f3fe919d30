//! Changelog formatters

mod markdown;

pub use markdown::MarkdownFormatter;

use datelog_core::{CommitSource, Result};

use crate::grouping::GroupedChangelog;
use crate::taxonomy::Taxonomy;
use crate::types::Document;

/// Trait for changelog formatters
pub trait ChangelogFormatter: Send + Sync {
    /// Render grouped commits, ordering sections by the taxonomy
    ///
    /// `source` resolves abbreviated hashes; any failure there aborts the
    /// whole document.
    fn format(
        &self,
        changelog: &GroupedChangelog,
        taxonomy: &Taxonomy,
        source: &dyn CommitSource,
    ) -> Result<Document>;
}
