//! Changelog generation

use tracing::{debug, info, instrument};

use datelog_core::{CommitSource, Result};

use crate::formatter::{ChangelogFormatter, MarkdownFormatter};
use crate::grouping::GroupedChangelog;
use crate::parser::{normalize, CommitParser, PrefixParser};
use crate::taxonomy::Taxonomy;
use crate::types::Changelog;

/// Changelog generator
///
/// Runs the whole pipeline in one pass: list commits, classify and
/// normalize them, group by date and category, render.
pub struct ChangelogGenerator {
    taxonomy: Taxonomy,
    parser: Box<dyn CommitParser>,
    formatter: Box<dyn ChangelogFormatter>,
}

impl ChangelogGenerator {
    /// Create a new generator with the prefix parser and markdown formatter
    pub fn new(taxonomy: Taxonomy) -> Result<Self> {
        let parser = PrefixParser::new(taxonomy.clone())?;
        Ok(Self {
            taxonomy,
            parser: Box::new(parser),
            formatter: Box::new(MarkdownFormatter::new()),
        })
    }

    /// Use a custom parser
    pub fn with_parser<P: CommitParser + 'static>(mut self, parser: P) -> Self {
        self.parser = Box::new(parser);
        self
    }

    /// Use a custom formatter
    pub fn with_formatter<F: ChangelogFormatter + 'static>(mut self, formatter: F) -> Self {
        self.formatter = Box::new(formatter);
        self
    }

    /// The taxonomy sections are ordered by
    pub fn taxonomy(&self) -> &Taxonomy {
        &self.taxonomy
    }

    /// Generate a changelog from a commit source
    #[instrument(skip_all)]
    pub fn generate(&self, source: &dyn CommitSource) -> Result<Changelog> {
        let commits = source.commits()?;
        info!(commit_count = commits.len(), "generating changelog");

        let normalized = normalize(self.parser.as_ref(), &commits)?;
        let matched = normalized.len();
        debug!(matched, skipped = commits.len() - matched, "commits classified");

        let grouped = GroupedChangelog::from_commits(normalized);
        let document = self.formatter.format(&grouped, &self.taxonomy, source)?;
        debug!(
            dates = grouped.len(),
            lines = document.len(),
            "changelog rendered"
        );

        Ok(Changelog {
            grouped,
            document,
            scanned: commits.len(),
            matched,
        })
    }
}
