//! Markdown changelog formatter

use tracing::{debug, instrument};

use datelog_core::{CommitSource, Result};

use super::ChangelogFormatter;
use crate::grouping::GroupedChangelog;
use crate::taxonomy::Taxonomy;
use crate::types::{Document, NormalizedCommit};

/// Default document title
pub const DEFAULT_TITLE: &str = "Changelog";

/// Default abbreviated hash width
pub const DEFAULT_HASH_WIDTH: usize = 8;

/// Default link base, relative to the rendered changelog on a forge
pub const DEFAULT_COMMIT_LINK_BASE: &str = "../../commit";

/// Markdown changelog formatter
pub struct MarkdownFormatter {
    /// Document title, rendered as `# <title>`
    pub title: String,
    /// Abbreviated hash width
    pub hash_width: usize,
    /// Commit links point to `<base>/<short hash>`
    pub commit_link_base: String,
}

impl MarkdownFormatter {
    /// Create a new markdown formatter
    pub fn new() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            hash_width: DEFAULT_HASH_WIDTH,
            commit_link_base: DEFAULT_COMMIT_LINK_BASE.to_string(),
        }
    }

    /// Set the document title
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Set the commit link base
    pub fn with_commit_link_base(mut self, base: impl Into<String>) -> Self {
        self.commit_link_base = base.into();
        self
    }

    fn commit_line(&self, commit: &NormalizedCommit, source: &dyn CommitSource) -> Result<String> {
        let short_hash = source.abbreviate(&commit.hash, self.hash_width)?;
        let link = format!("{}/{}", self.commit_link_base, short_hash);
        Ok(format!(
            "* {} by **@{}** in [{}]({})",
            commit.message, commit.author, short_hash, link
        ))
    }
}

impl Default for MarkdownFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ChangelogFormatter for MarkdownFormatter {
    #[instrument(skip_all, fields(dates = changelog.len()))]
    fn format(
        &self,
        changelog: &GroupedChangelog,
        taxonomy: &Taxonomy,
        source: &dyn CommitSource,
    ) -> Result<Document> {
        let mut document = Document::with_title(format!("# {}", self.title));

        for group in changelog.dates() {
            document.push(format!("## {}", group.date.format("%Y-%m-%d")));

            // Taxonomy order, not the order categories showed up on this day
            for category in taxonomy.iter() {
                let Some(commits) = group.commits(&category.id) else {
                    continue;
                };
                if commits.is_empty() {
                    continue;
                }

                document.push(format!("### {}", category.label));
                for commit in commits {
                    document.push(self.commit_line(commit, source)?);
                }
            }
        }

        debug!(lines = document.len(), "markdown changelog formatted");
        Ok(document)
    }
}
